#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("auth.unauthorized")]
    Unauthorized,
    #[error("auth.forbidden")]
    Forbidden,
}

impl AuthError {
    pub fn kind(&self) -> crate::domain::errors::ErrorKind {
        use crate::domain::errors::ErrorKind;
        match self {
            AuthError::Unauthorized => ErrorKind::Unauthorized,
            AuthError::Forbidden => ErrorKind::Forbidden,
        }
    }
}
