use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::errors::ErrorKind;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn validation(message: &str) -> Json<Self> {
        Json(Self {
            name: ErrorKind::Validation.to_string(),
            message: message.to_string(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::UnprocessableContent => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Builds the response pair for a domain error from its kind and code.
pub fn error_response(kind: ErrorKind, message: String) -> (StatusCode, Json<ErrorResponse>) {
    (
        status_for(kind),
        Json(ErrorResponse {
            name: kind.to_string(),
            message,
        }),
    )
}
