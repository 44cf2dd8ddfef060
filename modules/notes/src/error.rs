//! Error types for the note store and the HTTP boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use notes_types::ErrorBody;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NoteError {
    #[error("note {0} not found")]
    NotFound(u64),
    #[error("content missing")]
    ContentMissing,
}

/// Terminal outcome of a failed request
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("note not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("malformed JSON body: {0}")]
    MalformedBody(String),
    #[error("unknown endpoint")]
    UnknownEndpoint,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound | ApiError::UnknownEndpoint => StatusCode::NOT_FOUND,
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<NoteError> for ApiError {
    fn from(err: NoteError) -> Self {
        match err {
            NoteError::NotFound(_) => ApiError::NotFound,
            NoteError::ContentMissing => ApiError::Validation(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_error_mapping() {
        let err = ApiError::from(NoteError::NotFound(4));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "note not found");

        let err = ApiError::from(NoteError::ContentMissing);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "content missing");
    }

    #[test]
    fn test_unknown_endpoint_differs_from_not_found() {
        assert_eq!(ApiError::UnknownEndpoint.status(), StatusCode::NOT_FOUND);
        assert_ne!(
            ApiError::UnknownEndpoint.to_string(),
            ApiError::NotFound.to_string()
        );
    }
}
