use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::storage::StorageError;

pub mod schema;

pub type AppResult<T, E = ApiError> = std::result::Result<T, E>;

const RETRY_MESSAGE: &str = "Something went wrong. Please try again.";

/// A common error type that can be used throughout the API.
///
/// Can be returned in a `Result` from an API handler function.
///
/// Maps validation failures to a 400 carrying the first failing field's
/// message and storage failures to a 500 with fixed retry guidance, both in
/// the `{success, message}` envelope. The underlying storage error is
/// logged, never sent to the caller.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(ref message) => {
                tracing::error!(detail = message.as_str(), "rejecting invalid submission");
                (
                    self.status_code(),
                    Json(schema::FailureBody {
                        success: false,
                        message: message.clone(),
                    }),
                )
                    .into_response()
            }
            Self::Storage(ref e) => {
                tracing::error!("{:?}", e);
                (
                    self.status_code(),
                    Json(schema::FailureBody {
                        success: false,
                        message: RETRY_MESSAGE.to_owned(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
