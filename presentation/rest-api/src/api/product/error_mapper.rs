use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        if let ProductError::Repository(inner) = &self {
            tracing::error!("Product repository failure: {inner}");
        }
        error_response(self.kind(), self.to_string())
    }
}
