//! Error types for the harness

use thiserror::Error;

/// Harness error
///
/// Three families, kept distinct on purpose: transport/decoding problems
/// and unexpected statuses are contract violations that abort the current
/// scenario; `Mismatch` is a cross-validation divergence carrying the
/// field that disagreed; expected rejections (e.g. commenting on an
/// inaccessible private post) never surface here at all — they map to an
/// absent value at the call site.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Operation completed with a status other than the one it expects
    /// (most operations expect 200; admin status changes expect 302)
    #[error("{operation}: expected status {expected}, got {actual}")]
    UnexpectedStatus {
        operation: &'static str,
        expected: u16,
        actual: u16,
    },

    /// Plain-text confirmation payload did not match its documented shape
    #[error("Malformed confirmation: {0}")]
    Confirmation(String),

    /// Entity absent where presence was required
    #[error("Not found: {0}")]
    NotFound(String),

    /// Two views of the same entity disagree on a field
    #[error("{entity}.{field} mismatch: expected {expected}, got {actual}")]
    Mismatch {
        entity: &'static str,
        field: &'static str,
        expected: String,
        actual: String,
    },

    /// Data-store escape hatch failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for harness operations
pub type Result<T> = std::result::Result<T, HarnessError>;
