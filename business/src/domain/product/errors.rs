use crate::domain::errors::{ErrorKind, RepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_negative")]
    PriceNegative,
    #[error("product.price_out_of_range")]
    PriceOutOfRange,
    #[error("product.stock_negative")]
    StockNegative,
    #[error("product.not_found")]
    NotFound,
    #[error("category.not_found")]
    CategoryNotFound,
    #[error("product.invalid_image")]
    InvalidImage,
    #[error("product.image_storage_failed")]
    ImageStorage,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    /// A missing product and a missing category share the `NotFound` kind;
    /// only the message tells them apart.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProductError::NameEmpty
            | ProductError::PriceNegative
            | ProductError::PriceOutOfRange
            | ProductError::StockNegative => ErrorKind::Validation,
            ProductError::NotFound | ProductError::CategoryNotFound => ErrorKind::NotFound,
            ProductError::InvalidImage => ErrorKind::UnprocessableContent,
            ProductError::ImageStorage | ProductError::Repository(_) => ErrorKind::Internal,
        }
    }
}
