use crate::domain::errors::{ErrorKind, RepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("category.name_empty")]
    NameEmpty,
    #[error("category.not_found")]
    NotFound,
    #[error("category.already_exists")]
    AlreadyExists,
    #[error("category.in_use")]
    InUse,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl CategoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CategoryError::NameEmpty => ErrorKind::Validation,
            CategoryError::NotFound => ErrorKind::NotFound,
            CategoryError::AlreadyExists | CategoryError::InUse => ErrorKind::Conflict,
            CategoryError::Repository(_) => ErrorKind::Internal,
        }
    }
}
