use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Failure of a call to the prediction service
///
/// `Display` is the exact text shown to the user.
#[derive(thiserror::Error, Debug)]
pub enum PredictionError {
    /// Service answered with a non-200 status
    #[error("Error {status}: {body}")]
    Status { status: u16, body: String },

    /// Connection, timeout or body decoding failure
    #[error("Error: {}", error_chain(.0))]
    Transport(#[from] reqwest::Error),

    /// 200 response without a `predicted_category`
    #[error("Error: response missing predicted_category")]
    MissingCategory,
}

/// Joins an error with all of its sources.
///
/// reqwest only prints the outermost layer, which hides causes such as
/// "Connection refused" or "operation timed out".
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }

    message
}
