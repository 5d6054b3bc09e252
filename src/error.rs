use crate::dto::output::ErrorResponse;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

///
/// Errors returned to the client.
///
/// Store and provider failures are never reported through this type,
/// services put them in the outcome of the operation.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("validation error: unknown platform {0}")]
    UnknownPlatform(String),

    #[error("malformed body: {0}")]
    MalformedBody(#[from] JsonRejection),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        let status = match &self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::UnknownPlatform(_) => StatusCode::BAD_REQUEST,
            Error::MalformedBody(rejection) => match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
                _ => StatusCode::BAD_REQUEST,
            },
        };

        let body = ErrorResponse {
            status: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
