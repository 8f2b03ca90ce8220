// Error types for fincrew

use thiserror::Error;

/// Result type alias using anyhow::Error
pub type Result<T> = anyhow::Result<T>;

/// Fincrew-specific error types
#[derive(Error, Debug)]
pub enum FincrewError {
    #[error("Receipt '{reference}' is not available")]
    ReceiptUnavailable { reference: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
