//! Error types for portal-provider

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProviderError>;

/// A rejected external call; the display text is what users get to see
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Refused by the platform, message passed through verbatim
    #[error("{0}")]
    Rejected(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid fixture: {0}")]
    Fixture(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProviderError {
    pub fn rejected(message: impl Into<String>) -> Self {
        ProviderError::Rejected(message.into())
    }

    /// Human-readable message for notifications
    pub fn message(&self) -> String {
        self.to_string()
    }
}
