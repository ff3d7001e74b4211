//! Client configuration

use std::time::Duration;

/// How a non-empty request payload goes on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadEncoding {
    /// Payload bytes are sent verbatim as the request body.
    Raw,
    /// Payload is wrapped in a multipart form under `field_name`.
    Multipart { field_name: String },
}

impl PayloadEncoding {
    /// Multipart encoding under the given form field name.
    pub fn multipart(field_name: impl Into<String>) -> Self {
        Self::Multipart {
            field_name: field_name.into(),
        }
    }
}

impl Default for PayloadEncoding {
    fn default() -> Self {
        // The export API expects the asset as a multipart field
        Self::Multipart {
            field_name: "texture".to_string(),
        }
    }
}

/// Configuration for the export API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base address every endpoint is appended to (e.g. "https://api.example.com")
    pub base_url: String,

    /// Timeout for GET requests, which only probe or fetch small bodies
    pub probe_timeout: Duration,

    /// Timeout for payload-bearing verbs (POST, PUT, DELETE)
    pub transfer_timeout: Duration,

    /// Connection timeout
    pub connect_timeout: Duration,

    /// User-Agent header value
    pub user_agent: String,

    /// Wire encoding for non-empty payloads
    pub payload_encoding: PayloadEncoding,
}

impl ClientConfig {
    /// Create a config with default timeouts and multipart encoding.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            probe_timeout: Duration::from_secs(10),
            transfer_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("texport-http/{}", env!("CARGO_PKG_VERSION")),
            payload_encoding: PayloadEncoding::default(),
        }
    }

    /// Set the GET/probe timeout
    pub fn probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Set the timeout for payload-bearing verbs
    pub fn transfer_timeout(mut self, timeout: Duration) -> Self {
        self.transfer_timeout = timeout;
        self
    }

    /// Set the connection timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the payload encoding
    pub fn payload_encoding(mut self, encoding: PayloadEncoding) -> Self {
        self.payload_encoding = encoding;
        self
    }
}
