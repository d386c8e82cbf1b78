use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Idea not found: {0}")]
    IdeaNotFound(String),

    #[error("Article not found: {0}")]
    ArticleNotFound(String),

    #[error("Please fill in all required fields")]
    MissingFields(Vec<&'static str>),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
