use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Body of every not-found response
pub const NOT_FOUND_MESSAGE: &str = "User not found";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    /// No record matches the requested id. `None` when the path id was not a number.
    #[error("User not found")]
    NotFound(Option<u64>),
}

pub type UserResult<T> = Result<T, UserError>;

/// Not-found is reported as plain text, not as a JSON error body
impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            UserError::NotFound(id) => {
                tracing::debug!(user_id = ?id, "User not found");
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response()
            }
        }
    }
}
