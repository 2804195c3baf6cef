use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentinelError {
    #[error("Alert not found: {0}")]
    NotFound(String),

    #[error("Batch too large: {submitted} items submitted, maximum is {max}")]
    CapacityExceeded { submitted: usize, max: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SentinelError {
    /// Whether the failure was caused by the request rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::CapacityExceeded { .. })
    }
}
