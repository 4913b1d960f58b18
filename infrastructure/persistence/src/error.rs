use business::domain::errors::RepositoryError;

/// Translates driver errors into the domain's closed repository error set.
///
/// This is the only place that inspects database error codes.
pub fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db_error) if db_error.is_foreign_key_violation() => {
            RepositoryError::ForeignKeyViolation
        }
        sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
            RepositoryError::Duplicated
        }
        _ => {
            tracing::error!("Unexpected database error: {error}");
            RepositoryError::DatabaseError
        }
    }
}
