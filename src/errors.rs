use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

/// Error types for the pricing service.
/// Input and model errors are reported back to the user; the rest stop startup.
#[derive(Debug, thiserror::Error)]
pub enum PricerError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("model computation error: {0}")]
    Model(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(String),
}

impl PricerError {
    /// HTTP status a handler should answer with for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::Model(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Config(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error body for the API routes.
impl IntoResponse for PricerError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

impl From<std::io::Error> for PricerError {
    fn from(e: std::io::Error) -> Self {
        PricerError::Io(e.to_string())
    }
}

pub type PricerResult<T> = Result<T, PricerError>;
