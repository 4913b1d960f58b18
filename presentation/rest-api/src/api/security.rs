use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::Request;
use poem::http::StatusCode;
use poem_openapi::{SecurityScheme, payload::Json};
use serde::Deserialize;

use business::domain::auth::errors::AuthError;
use business::domain::auth::model::{AuthenticatedUser, Role, authorize};
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    role: String,
}

/// Verifies HS256 bearer tokens signed with the shared secret.
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &str) -> Self {
        // `exp` is required and checked by default.
        let validation = Validation::new(Algorithm::HS256);
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn verify_token(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<Claims>(token, &self.key, &self.validation).map_err(|e| {
            tracing::warn!("Token rejected: {e}");
            AuthError::Unauthorized
        })?;

        let role = data.claims.role.parse::<Role>()?;
        Ok(AuthenticatedUser::new(UserId::new(data.claims.sub), role))
    }
}

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "jwt_bearer_checker")]
pub struct JwtBearer(pub AuthenticatedUser);

async fn jwt_bearer_checker(
    req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> Option<AuthenticatedUser> {
    let Some(verifier) = req.data::<Arc<JwtVerifier>>() else {
        tracing::error!("JwtVerifier missing from request data");
        return None;
    };

    verifier.verify_token(&bearer.token).ok()
}

/// Role guard for routes that need more than a valid identity.
pub fn require_role(auth: &JwtBearer, required: Role) -> Result<(), AuthError> {
    authorize(&auth.0, required).inspect_err(|_| {
        tracing::warn!(
            "User {} with role {} denied, {} required",
            auth.0.user_id,
            auth.0.role,
            required
        );
    })
}

impl IntoErrorResponse for AuthError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        error_response(self.kind(), self.to_string())
    }
}

/// Mints an HS256 token for route tests.
#[cfg(test)]
pub(crate) fn test_token(secret: &str, sub: &str, role: &str, exp_offset_secs: i64) -> String {
    use jsonwebtoken::{EncodingKey, Header, encode};

    let claims = serde_json::json!({
        "sub": sub,
        "role": role,
        "exp": chrono::Utc::now().timestamp() + exp_offset_secs,
    });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}
