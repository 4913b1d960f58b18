use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::product::model::Product;

/// Column list matching `ProductEntity`, shared by every product query.
pub const PRODUCT_COLUMNS: &str =
    "id, name, description, price, stock, image, likes, is_disabled, category_id, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub stock: i32,
    pub image: Option<String>,
    pub likes: i32,
    pub is_disabled: bool,
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.description,
            self.price,
            self.stock,
            self.image,
            self.likes,
            self.is_disabled,
            self.category_id,
            self.created_at,
            self.updated_at,
        )
    }
}
