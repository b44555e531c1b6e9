use greenlane_core::SearchUnavailable;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, VectorAiError>;

#[derive(Debug, Error)]
pub enum VectorAiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Client setup error: {0}")]
    Setup(String),
}

impl From<reqwest::Error> for VectorAiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            VectorAiError::Parse(err.to_string())
        } else {
            VectorAiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for VectorAiError {
    fn from(err: serde_json::Error) -> Self {
        VectorAiError::Parse(err.to_string())
    }
}

impl From<VectorAiError> for SearchUnavailable {
    fn from(err: VectorAiError) -> Self {
        SearchUnavailable::new(err.to_string())
    }
}
