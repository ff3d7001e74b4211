//! Caller identity and authorization

/// Identity of the exporting user plus the opaque authorization value sent
/// with every request.
///
/// Username and email are descriptive only; nothing in this layer validates
/// them. Authorization is unset after construction, which is a legal state:
/// requests still go out unauthenticated and the server's 401/403 is
/// classified like any other status. Callers conventionally set it exactly
/// once per session, when the user connects.
#[derive(Debug, Clone)]
pub struct Credential {
    username: String,
    email: String,
    authorization: Option<String>,
}

impl Credential {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            authorization: None,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Set the raw `Authorization` header value. No shape validation.
    pub fn set_authorization(&mut self, authorization: impl Into<String>) {
        self.authorization = Some(authorization.into());
    }

    /// Convenience for the common scheme: stores `Bearer <token>`.
    pub fn set_bearer_token(&mut self, token: &str) {
        self.authorization = Some(format!("Bearer {token}"));
    }

    /// The current authorization value, if any.
    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }
}
