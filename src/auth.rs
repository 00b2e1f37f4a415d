//! Credential context builder
//!
//! Turns a logical actor into a reusable authenticated-call descriptor.
//! Pure data transformation: no network I/O happens here, and building a
//! context never fails — bad credentials are rejected by the service on
//! the first authenticated call.

/// A logical actor's credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Build the per-request authenticated call descriptor
    pub fn context(&self) -> AuthContext {
        AuthContext {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

/// Per-request authenticated call descriptor
///
/// Every authenticated call attaches these as form-login credentials and
/// re-authenticates; no session outlives a single call.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub(crate) username: String,
    pub(crate) password: String,
}

impl AuthContext {
    /// Form-login parameter pairs, as the service's login form names them
    pub fn form_params(&self) -> [(&'static str, &str); 2] {
        [
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
        ]
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}
