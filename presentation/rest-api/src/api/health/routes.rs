use chrono::Utc;
use poem_openapi::{ApiResponse, Object, OpenApi, payload::Json};
use sqlx::PgPool;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Object)]
pub struct HealthCheckResponse {
    /// "healthy" when the database answers, "degraded" otherwise
    pub status: String,
    /// Whether the database answered a ping
    pub database: bool,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

impl HealthCheckResponse {
    fn new(database: bool) -> Self {
        Self {
            status: if database { "healthy" } else { "degraded" }.to_string(),
            database,
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(ApiResponse)]
pub enum HealthResponse {
    #[oai(status = 200)]
    Ok(Json<HealthCheckResponse>),
    #[oai(status = 503)]
    Unavailable(Json<HealthCheckResponse>),
}

/// Health API for liveness and readiness checks.
pub struct HealthApi {
    pool: PgPool,
}

impl HealthApi {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Public. Answers 503 when the database cannot be reached.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> HealthResponse {
        let body = HealthCheckResponse::new(persistence::db::ping(&self.pool).await);
        if body.database {
            HealthResponse::Ok(Json(body))
        } else {
            HealthResponse::Unavailable(Json(body))
        }
    }
}
