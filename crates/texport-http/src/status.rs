//! Status classification
//!
//! Maps every transport outcome to a `(code, message)` pair. Real HTTP codes
//! pass through unchanged; transport failures get reserved synthetic codes
//! (>= 1000, outside HTTP's 100-599 range) so callers can branch on numbers
//! without ever inspecting an error type.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Synthetic code: the transport never reached the server.
pub const CODE_CONNECTION_REFUSED: u16 = 1000;

/// Synthetic code: the server was reached but did not answer in time.
pub const CODE_READ_TIMEOUT: u16 = 2000;

/// Synthetic code: any transport failure not classified above.
pub const CODE_UNKNOWN: u16 = 3000;

/// Any code below this came from a completed HTTP exchange, so the server is
/// reachable. Everything at or above it is synthetic.
pub const CONNECTED_STATUS_CEILING: u16 = 600;

/// Frozen code -> message table, built once. Extend by adding entries only.
fn messages() -> &'static HashMap<u16, &'static str> {
    static MESSAGES: OnceLock<HashMap<u16, &'static str>> = OnceLock::new();
    MESSAGES.get_or_init(|| {
        HashMap::from([
            (200, "[200] OK"),
            (201, "[201] Created"),
            (400, "[400] Bad request"),
            (401, "[401] Unauthorized"),
            (403, "[403] Forbidden"),
            (404, "[404] Not found"),
            (504, "[504] Timeout"),
            (522, "[522] Timeout"),
            (CODE_CONNECTION_REFUSED, "Connection refused"),
            (CODE_READ_TIMEOUT, "ReadTimeout"),
            (CODE_UNKNOWN, "Unknown error"),
        ])
    })
}

/// A classified outcome: a real HTTP status code or a synthetic transport
/// code, with its human-readable message. Computed entirely at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseStatus {
    pub code: u16,
    pub message: String,
}

impl ResponseStatus {
    /// Look up the message for `code`; codes absent from the table get the
    /// generated `Status [<code>]` form instead of failing.
    pub fn new(code: u16) -> Self {
        let message = match messages().get(&code) {
            Some(message) => (*message).to_string(),
            None => format!("Status [{code}]"),
        };
        Self { code, message }
    }

    /// Classify a completed HTTP exchange. Outside the 2xx success range the
    /// response body is appended to the message once, for display in the
    /// caller's UI.
    pub fn for_exchange(code: u16, body: &[u8]) -> Self {
        let mut status = Self::new(code);
        if !(200..300).contains(&code) && !body.is_empty() {
            status.message = format!(
                "{}\nResponse Content:\n{}",
                status.message,
                String::from_utf8_lossy(body)
            );
        }
        status
    }

    /// True for reserved transport-failure codes, false for real HTTP codes.
    pub fn is_synthetic(&self) -> bool {
        self.code >= CONNECTED_STATUS_CEILING
    }

    /// True for the 2xx success range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }
}

/// Map a transport-level failure to its synthetic code.
///
/// A connect timeout is both a connect and a timeout error in reqwest; the
/// connect check comes first so it classifies as unreachable.
pub(crate) fn classify_transport_error(err: &reqwest::Error) -> u16 {
    if err.is_connect() {
        CODE_CONNECTION_REFUSED
    } else if err.is_timeout() {
        CODE_READ_TIMEOUT
    } else {
        CODE_UNKNOWN
    }
}
