use thiserror::Error;

/// Top-level client error.
/// All variants carry a human-readable message for display/logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    // ── Transport errors ─────────────────────────────────────────────────────
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Server error: {status}")]
    ServerStatus { status: u16 },

    #[error("Parse error: {message}")]
    Decode { message: String },

    #[error("Serialize error: {message}")]
    Encode { message: String },

    // ── View binding errors ──────────────────────────────────────────────────
    #[error("Tab '{id}' is not registered")]
    UnknownTab { id: String },

    // ── Configuration errors ─────────────────────────────────────────────────
    #[error("Invalid client configuration: {message}")]
    InvalidConfig { message: String },
}

impl AppError {
    pub fn network(message: impl Into<String>) -> Self {
        AppError::Network { message: message.into() }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        AppError::Decode { message: message.into() }
    }
}
