use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Backend returned HTTP {0}: {1}")]
    Status(u16, String),
    #[error("Backend rejected credentials")]
    Unauthorized,
    #[error("Resource not found")]
    NotFound,
    #[error("Could not decode backend response: {0}")]
    Decode(String),
    #[error("Client configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Worth another attempt: the request may not have reached the backend,
    /// or the backend failed on its side.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Network(_) => true,
            ApiError::Status(code, _) => *code >= 500,
            _ => false,
        }
    }
}
