//! Export API client
//!
//! Owns the base address and credential, dispatches requests by verb and
//! turns every transport outcome into a classified [`ApiResponse`]. The
//! design decision callers rely on: [`ApiClient::do_request`] is infallible,
//! so export code branches on `response.status.code` and never wraps calls in
//! error handling.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use tracing::{debug, warn};
use url::Url;

use texport_common::http::HttpMethod;

use crate::config::{ClientConfig, PayloadEncoding};
use crate::credential::Credential;
use crate::error::{redact, ClientError, Result};
use crate::request::{ApiRequest, Payload};
use crate::response::{from_reqwest, ApiResponse};
use crate::status::{classify_transport_error, CONNECTED_STATUS_CEILING};

const AUTHORIZATION: &str = "Authorization";

/// What `check_connection` reports when any HTTP exchange completed, even an
/// error status: the server answered, so it is reachable.
pub const CONNECTED_MESSAGE: &str = "Connected successfully";

/// What `check_connection` reports for synthetic (transport-failure) codes.
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error";

/// Client for one export API deployment.
///
/// Stateless across calls beyond its immutable `(base address, credential,
/// config)`; every `do_request` is an independent transaction.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    credential: Credential,
}

impl ApiClient {
    /// Build a client. Fails fast on precondition violations: a base address
    /// that is not an http/https URL, or a transport that cannot be built.
    pub fn new(config: ClientConfig, credential: Credential) -> Result<Self> {
        let url = Url::parse(&config.base_url)
            .map_err(|_| ClientError::InvalidBaseUrl(config.base_url.clone()))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ClientError::InvalidBaseUrl(config.base_url.clone()));
        }

        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            http,
            config,
            credential,
        })
    }

    /// The configured base address.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Mutable access for the once-per-session authorization update.
    pub fn credential_mut(&mut self) -> &mut Credential {
        &mut self.credential
    }

    /// The headers `do_request` actually sends: the caller's map with the
    /// credential's `Authorization` merged in.
    ///
    /// The caller's map is copied, never mutated. Any caller-supplied
    /// authorization entry (any key casing) is dropped first; the credential
    /// is the single source of truth, so with no authorization set the
    /// request goes out without the header entirely.
    pub fn effective_headers(&self, request: &ApiRequest) -> HashMap<String, String> {
        let mut headers = request.headers.clone();
        headers.retain(|name, _| !name.eq_ignore_ascii_case(AUTHORIZATION));
        if let Some(authorization) = self.credential.authorization() {
            headers.insert(AUTHORIZATION.to_string(), authorization.to_string());
        }
        headers
    }

    /// Execute one request and classify its outcome.
    ///
    /// Never returns an error: connection failures, timeouts and anything
    /// else the transport throws come back as an [`ApiResponse`] whose status
    /// carries the matching synthetic code with empty headers and payload.
    pub async fn do_request(&self, request: &ApiRequest) -> ApiResponse {
        let url = format!("{}{}", self.config.base_url, request.endpoint);
        debug!(method = %request.method, %url, "dispatching export API request");

        match self.dispatch(request, &url).await {
            Ok(response) => response,
            Err(err) => {
                let code = classify_transport_error(&err);
                warn!(code, error = %redact(&err.to_string()), "transport failure");
                ApiResponse::from_transport_failure(code)
            }
        }
    }

    /// Probe the bare base address with an empty GET.
    ///
    /// Any classified code below [`CONNECTED_STATUS_CEILING`] means a
    /// completed exchange, so the host is reachable even when it answered
    /// with an HTTP error (a 404 here just means the path is wrong). Only
    /// synthetic codes report a connection error.
    pub async fn check_connection(&self) -> &'static str {
        let probe = ApiRequest::new(HttpMethod::Get, "");
        let response = self.do_request(&probe).await;
        if response.status.code < CONNECTED_STATUS_CEILING {
            CONNECTED_MESSAGE
        } else {
            CONNECTION_ERROR_MESSAGE
        }
    }

    async fn dispatch(
        &self,
        request: &ApiRequest,
        url: &str,
    ) -> std::result::Result<ApiResponse, reqwest::Error> {
        // Exhaustive verb match: adding a verb forces a decision here
        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(url),
            HttpMethod::Post => self.attach_payload(self.http.post(url), &request.payload),
            HttpMethod::Put => self.attach_payload(self.http.put(url), &request.payload),
            HttpMethod::Delete => self.http.delete(url),
        };

        for (name, value) in &self.effective_headers(request) {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = builder.timeout(self.timeout_for(request));

        let response = builder.send().await?;
        from_reqwest(response).await
    }

    /// Per-request override wins, otherwise the per-verb default: the short
    /// probe timeout for GET, the transfer timeout for mutating verbs.
    fn timeout_for(&self, request: &ApiRequest) -> Duration {
        request.timeout.unwrap_or(match request.method {
            HttpMethod::Get => self.config.probe_timeout,
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Delete => {
                self.config.transfer_timeout
            }
        })
    }

    fn attach_payload(
        &self,
        builder: reqwest::RequestBuilder,
        payload: &Payload,
    ) -> reqwest::RequestBuilder {
        match payload {
            Payload::Empty => builder,
            Payload::Bytes(bytes) => match &self.config.payload_encoding {
                PayloadEncoding::Raw => builder.body(bytes.clone()),
                PayloadEncoding::Multipart { field_name } => builder.multipart(
                    Form::new().part(field_name.clone(), Part::bytes(bytes.clone())),
                ),
            },
            Payload::NamedFile { file_name, bytes } => match &self.config.payload_encoding {
                PayloadEncoding::Raw => builder.body(bytes.clone()),
                PayloadEncoding::Multipart { field_name } => builder.multipart(
                    Form::new().part(
                        field_name.clone(),
                        Part::bytes(bytes.clone()).file_name(file_name.clone()),
                    ),
                ),
            },
        }
    }
}
