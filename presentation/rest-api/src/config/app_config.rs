use super::{
    cors_config, jwt_config::JwtConfig, server_config::ServerConfig,
    storage_config::StorageConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub jwt: JwtConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            jwt: JwtConfig::from_env(),
            storage: StorageConfig::from_env(),
        }
    }
}
