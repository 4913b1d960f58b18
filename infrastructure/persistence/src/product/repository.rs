use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{LikeToggle, NewProduct, Product, ProductChanges};
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::{PageRequest, UserId};

use super::entity::{PRODUCT_COLUMNS, ProductEntity};
use crate::error::map_sqlx_error;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_active_products(
        &self,
        page: Option<PageRequest>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let entities = match page {
            Some(page) => {
                let sql = format!(
                    "SELECT {PRODUCT_COLUMNS} FROM products WHERE is_disabled = FALSE ORDER BY id LIMIT $1 OFFSET $2"
                );
                sqlx::query_as::<_, ProductEntity>(&sql)
                    .bind(i64::from(page.take))
                    .bind(i64::from(page.skip))
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let sql = format!(
                    "SELECT {PRODUCT_COLUMNS} FROM products WHERE is_disabled = FALSE ORDER BY id"
                );
                sqlx::query_as::<_, ProductEntity>(&sql)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_active_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE category_id = $1 AND is_disabled = FALSE ORDER BY id"
        );
        let entities = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Product, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        let entity = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let sql = format!(
            r#"INSERT INTO products (name, description, price, stock, image, category_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {PRODUCT_COLUMNS}"#
        );
        let entity = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(&product.name)
            .bind(&product.description)
            .bind(&product.price)
            .bind(product.stock)
            .bind(&product.image)
            .bind(product.category_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(entity.into_domain())
    }

    async fn update(&self, id: i32, changes: &ProductChanges) -> Result<Product, RepositoryError> {
        let sql = format!(
            r#"UPDATE products SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                stock = COALESCE($5, stock),
                category_id = COALESCE($6, category_id),
                image = COALESCE($7, image),
                is_disabled = COALESCE($8, is_disabled),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}"#
        );
        let entity = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(id)
            .bind(&changes.name)
            .bind(&changes.description)
            .bind(&changes.price)
            .bind(changes.stock)
            .bind(changes.category_id)
            .bind(&changes.image)
            .bind(changes.is_disabled)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn toggle_like(&self, id: i32, user_id: &UserId) -> Result<LikeToggle, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        // Row lock serializes concurrent toggles on the same product.
        sqlx::query_scalar::<_, i32>("SELECT id FROM products WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(RepositoryError::NotFound)?;

        let unliked = sqlx::query("DELETE FROM product_likes WHERE product_id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?
            .rows_affected()
            > 0;

        if !unliked {
            sqlx::query("INSERT INTO product_likes (product_id, user_id) VALUES ($1, $2)")
                .bind(id)
                .bind(user_id.as_str())
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;
        }

        let delta: i32 = if unliked { -1 } else { 1 };
        let likes = sqlx::query_scalar::<_, i32>(
            "UPDATE products SET likes = likes + $2, updated_at = NOW() WHERE id = $1 RETURNING likes",
        )
        .bind(id)
        .bind(delta)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(LikeToggle {
            liked: !unliked,
            likes,
        })
    }
}
