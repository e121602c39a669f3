// errors.rs
use crate::api::ApiError;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (backend API, cache DB).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Upstream Error: {0}")]
    Upstream(String),
    #[error("Database Error: {0}")]
    DbError(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status_code(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Unauthorized(_) => 401,
            ServerError::Forbidden(_) => 403,
            ServerError::Upstream(_) => 502,
            ServerError::DbError(_) | ServerError::InternalError => 500,
        }
    }
}

impl From<ApiError> for ServerError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized => ServerError::Unauthorized("backend rejected credentials".into()),
            ApiError::NotFound => ServerError::NotFound,
            other => ServerError::Upstream(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    Missing(&'static str),
    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}
