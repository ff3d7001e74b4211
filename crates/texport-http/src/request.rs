//! Outgoing request description

use std::collections::HashMap;
use std::time::Duration;

use texport_common::http::HttpMethod;

/// Payload of an outgoing request.
///
/// Opaque to this layer; [`PayloadEncoding`](crate::PayloadEncoding) in the
/// client configuration decides how a non-empty payload goes on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// No body.
    Empty,
    /// Anonymous binary blob.
    Bytes(Vec<u8>),
    /// A named file, e.g. the exported asset. Under multipart encoding the
    /// name travels as the part's file name.
    NamedFile { file_name: String, bytes: Vec<u8> },
}

impl Payload {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Immutable description of one outgoing call.
///
/// The endpoint is appended verbatim to the client's base address: no slash
/// insertion, no URL encoding. The header map stays the caller's; the client
/// merges `Authorization` into a copy at dispatch time (see
/// [`ApiClient::effective_headers`](crate::ApiClient::effective_headers)).
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub endpoint: String,
    pub headers: HashMap<String, String>,
    pub payload: Payload,
    /// Per-request deadline; overrides the client's per-verb timeout.
    pub timeout: Option<Duration>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            headers: HashMap::new(),
            payload: Payload::Empty,
            timeout: None,
        }
    }

    /// Add a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add multiple headers
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Set an anonymous binary payload
    pub fn bytes(mut self, bytes: Vec<u8>) -> Self {
        self.payload = Payload::Bytes(bytes);
        self
    }

    /// Set a named-file payload
    pub fn file(mut self, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.payload = Payload::NamedFile {
            file_name: file_name.into(),
            bytes,
        };
        self
    }

    /// Set a per-request deadline
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_request_is_bare() {
        let request = ApiRequest::new(HttpMethod::Get, "/ping");
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.endpoint, "/ping");
        assert!(request.headers.is_empty());
        assert!(request.payload.is_empty());
        assert!(request.timeout.is_none());
    }

    #[test]
    fn builder_accumulates_headers() {
        let request = ApiRequest::new(HttpMethod::Post, "/upload")
            .header("X-Export-Id", "42")
            .headers(HashMap::from([(
                "X-Source".to_string(),
                "layer".to_string(),
            )]));
        assert_eq!(request.headers.len(), 2);
        assert_eq!(request.headers["X-Export-Id"], "42");
        assert_eq!(request.headers["X-Source"], "layer");
    }

    #[test]
    fn file_payload_keeps_name() {
        let request = ApiRequest::new(HttpMethod::Post, "/upload").file("brick.png", vec![1, 2, 3]);
        match request.payload {
            Payload::NamedFile { file_name, bytes } => {
                assert_eq!(file_name, "brick.png");
                assert_eq!(bytes, vec![1, 2, 3]);
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn timeout_override() {
        let request =
            ApiRequest::new(HttpMethod::Get, "/ping").timeout(Duration::from_millis(250));
        assert_eq!(request.timeout, Some(Duration::from_millis(250)));
    }
}
