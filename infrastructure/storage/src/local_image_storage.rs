use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::product::errors::ProductError;
use business::domain::product::services::ImageStorageService;
use business::domain::product::value_objects::ImageUpload;

/// Stores uploaded images on the local filesystem as `<uuid>.<ext>`.
pub struct LocalImageStorage {
    root: PathBuf,
}

impl LocalImageStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ImageStorageService for LocalImageStorage {
    async fn store(&self, image: ImageUpload) -> Result<String, ProductError> {
        let extension = image
            .accepted_extension()
            .ok_or(ProductError::InvalidImage)?;

        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            tracing::error!("Could not create upload directory {:?}: {e}", self.root);
            ProductError::ImageStorage
        })?;

        let file_name = format!("{}.{}", Uuid::new_v4(), extension);
        let target = self.root.join(&file_name);

        tokio::fs::write(&target, &image.data).await.map_err(|e| {
            tracing::error!("Could not write image {:?}: {e}", target);
            ProductError::ImageStorage
        })?;

        tracing::debug!("Stored image {file_name} ({} bytes)", image.data.len());
        Ok(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(size: usize) -> ImageUpload {
        ImageUpload {
            file_name: Some("hammer.png".to_string()),
            content_type: Some("image/png".to_string()),
            data: vec![7u8; size],
        }
    }

    #[tokio::test]
    async fn should_write_image_under_generated_name() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalImageStorage::new(dir.path());

        let name = storage.store(png(16)).await.unwrap();

        assert!(name.ends_with(".png"));
        let written = tokio::fs::read(dir.path().join(&name)).await.unwrap();
        assert_eq!(written, vec![7u8; 16]);
    }

    #[tokio::test]
    async fn should_generate_distinct_names_for_same_upload() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalImageStorage::new(dir.path());

        let first = storage.store(png(4)).await.unwrap();
        let second = storage.store(png(4)).await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn should_store_jpeg_with_jpg_extension() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalImageStorage::new(dir.path());
        let upload = ImageUpload {
            file_name: Some("photo.jpeg".to_string()),
            content_type: Some("image/jpeg".to_string()),
            data: vec![1u8; 8],
        };

        let name = storage.store(upload).await.unwrap();

        assert!(name.ends_with(".jpg"));
    }

    #[tokio::test]
    async fn should_create_missing_upload_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("uploads").join("products");
        let storage = LocalImageStorage::new(&nested);

        let name = storage.store(png(4)).await.unwrap();

        assert!(nested.join(name).exists());
    }

    #[tokio::test]
    async fn should_reject_unsupported_format_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalImageStorage::new(dir.path());
        let upload = ImageUpload {
            file_name: Some("anim.gif".to_string()),
            content_type: Some("image/gif".to_string()),
            data: vec![1u8; 8],
        };

        let result = storage.store(upload).await;

        assert!(matches!(result, Err(ProductError::InvalidImage)));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn should_reject_empty_upload() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalImageStorage::new(dir.path());

        let result = storage.store(png(0)).await;

        assert!(matches!(result, Err(ProductError::InvalidImage)));
    }

    #[tokio::test]
    async fn should_report_storage_failure_when_root_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();
        let storage = LocalImageStorage::new(&blocker);

        let result = storage.store(png(4)).await;

        assert!(matches!(result, Err(ProductError::ImageStorage)));
    }
}
