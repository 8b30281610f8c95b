use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// An enumerated constructor argument was outside its accepted values
    #[error("{0}")]
    Validation(String),

    /// A value of the wrong kind was handed to a typed setter
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No index name set for search command")]
    MissingIndex,

    #[error("Malformed search response: {0}")]
    ResponseFormat(String),

    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Builds the validation error raised for a value outside an enumerated set
    pub(crate) fn one_of(accepted: &[&str], got: &str) -> Self {
        let accepted = accepted
            .iter()
            .map(|v| format!("\"{}\"", v))
            .collect::<Vec<_>>()
            .join(", ");
        Error::Validation(format!("Expected one of: {}. Got: \"{}\"", accepted, got))
    }

    /// Wraps a collaborator failure raised while executing a request
    pub fn transport(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Transport(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
