/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
///
/// Adapters translate their driver errors into this closed set once, so
/// use cases never branch on vendor-specific codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.foreign_key_violation")]
    ForeignKeyViolation,
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
}

/// Stable category of a domain error.
///
/// The presentation layer maps each kind to a transport status; the domain
/// only decides which kind an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Unauthorized,
    Forbidden,
    UnprocessableContent,
    Internal,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Validation => write!(f, "ValidationError"),
            ErrorKind::NotFound => write!(f, "NotFound"),
            ErrorKind::Conflict => write!(f, "Conflict"),
            ErrorKind::Unauthorized => write!(f, "Unauthorized"),
            ErrorKind::Forbidden => write!(f, "Forbidden"),
            ErrorKind::UnprocessableContent => write!(f, "UnprocessableContent"),
            ErrorKind::Internal => write!(f, "InternalError"),
        }
    }
}
