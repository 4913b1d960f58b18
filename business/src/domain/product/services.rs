use async_trait::async_trait;

use super::errors::ProductError;
use super::value_objects::ImageUpload;

/// Service port for persisting uploaded product images.
///
/// Implementations reject uploads whose format or size is not accepted
/// (`ProductError::InvalidImage`) and return the generated file name.
#[async_trait]
pub trait ImageStorageService: Send + Sync {
    async fn store(&self, image: ImageUpload) -> Result<String, ProductError>;
}
