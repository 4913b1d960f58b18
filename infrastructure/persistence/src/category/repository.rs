use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::category::model::{Category, NewCategory};
use business::domain::category::repository::CategoryRepository;
use business::domain::errors::RepositoryError;

use super::entity::CategoryEntity;
use crate::error::map_sqlx_error;

pub struct CategoryRepositoryPostgres {
    pool: PgPool,
}

impl CategoryRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let entities = sqlx::query_as::<_, CategoryEntity>(
            "SELECT id, name, description FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Category, RepositoryError> {
        let entity = sqlx::query_as::<_, CategoryEntity>(
            "SELECT id, name, description FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn create(&self, category: &NewCategory) -> Result<Category, RepositoryError> {
        let entity = sqlx::query_as::<_, CategoryEntity>(
            "INSERT INTO categories (name, description) VALUES ($1, $2) RETURNING id, name, description",
        )
        .bind(&category.name)
        .bind(&category.description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.into_domain())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
