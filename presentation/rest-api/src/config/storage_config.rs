use std::env;

/// Where uploaded product images are written.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub upload_dir: String,
}

impl StorageConfig {
    /// Environment variables:
    /// - UPLOAD_DIR: Target directory for image uploads (default: "./uploads")
    pub fn from_env() -> Self {
        Self {
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string()),
        }
    }
}
