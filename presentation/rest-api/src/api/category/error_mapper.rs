use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::category::errors::CategoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CategoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        if let CategoryError::Repository(inner) = &self {
            tracing::error!("Category repository failure: {inner}");
        }
        error_response(self.kind(), self.to_string())
    }
}
