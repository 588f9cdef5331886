use std::time::Duration;

/// Failure talking to the external character directory.
///
/// None of these reach the rendered page; the detail handler logs them and
/// substitutes a generic message.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Directory request failed: {0}")]
    Request(String),

    #[error("Directory returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed directory payload: {0}")]
    Parse(String),

    #[error("Directory did not answer within {0:?}")]
    Timeout(Duration),
}
