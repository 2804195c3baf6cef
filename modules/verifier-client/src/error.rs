use thiserror::Error;

pub type Result<T> = std::result::Result<T, VerifierError>;

#[derive(Debug, Error)]
pub enum VerifierError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid response: {0}")]
    Invalid(String),
}

impl From<reqwest::Error> for VerifierError {
    fn from(err: reqwest::Error) -> Self {
        VerifierError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for VerifierError {
    fn from(err: serde_json::Error) -> Self {
        VerifierError::Parse(err.to_string())
    }
}
