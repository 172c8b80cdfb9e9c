//! Error types for option settings handling.

/// Errors that can occur when moving option settings through JSON.
#[derive(Debug, thiserror::Error)]
pub enum PaintOpError {
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid settings format: {0}")]
    InvalidFormat(String),
}
