//! Normalized response types

use std::collections::HashMap;

use texport_common::http::HttpResponseLike;

use crate::status::ResponseStatus;

/// Outcome of one request, constructed only by the client.
///
/// On transport failure `headers` and `payload` are present but empty, so
/// callers never have to null-check before reading them.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: ResponseStatus,
    pub headers: HashMap<String, String>,
    pub payload: Vec<u8>,
}

impl ApiResponse {
    /// Wrap a completed HTTP exchange.
    pub(crate) fn from_exchange(
        code: u16,
        headers: HashMap<String, String>,
        payload: Vec<u8>,
    ) -> Self {
        Self {
            status: ResponseStatus::for_exchange(code, &payload),
            headers,
            payload,
        }
    }

    /// Wrap a transport failure under its synthetic code.
    pub(crate) fn from_transport_failure(code: u16) -> Self {
        Self {
            status: ResponseStatus::new(code),
            headers: HashMap::new(),
            payload: Vec::new(),
        }
    }

    /// Body as display text (lossy UTF-8, matching what the status message
    /// diagnostics use).
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }

    /// Body parsed as JSON.
    pub fn json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_slice(&self.payload)
    }

    /// Body deserialized into a concrete type.
    pub fn json_as<T: serde::de::DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.payload)
    }
}

impl HttpResponseLike for ApiResponse {
    fn status_code(&self) -> u16 {
        self.status.code
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    fn body_bytes(&self) -> &[u8] {
        &self.payload
    }
}

/// Drain a reqwest response into an [`ApiResponse`]. Reading the body can
/// still fail at the transport level; the caller classifies that error.
pub(crate) async fn from_reqwest(response: reqwest::Response) -> Result<ApiResponse, reqwest::Error> {
    let code = response.status().as_u16();

    let mut headers = HashMap::new();
    for (name, value) in response.headers() {
        if let Ok(v) = value.to_str() {
            headers.insert(name.to_string(), v.to_string());
        }
    }

    let payload = response.bytes().await?.to_vec();

    Ok(ApiResponse::from_exchange(code, headers, payload))
}
