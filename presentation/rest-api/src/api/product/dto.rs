use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use poem_openapi::{Multipart, Object, types::multipart::Upload};

use business::domain::product::model::Product;
use business::domain::product::value_objects::ImageUpload;

/// Public listing projection of a product.
#[derive(Debug, Clone, Object)]
pub struct ProductSummaryResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    pub likes: i32,
    pub category_id: i32,
}

impl From<Product> for ProductSummaryResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: price_to_f64(&product.price),
            stock: product.stock,
            image: product.image,
            likes: product.likes,
            category_id: product.category_id,
        }
    }
}

/// Full product record, returned by single-item reads and writes.
#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    pub likes: i32,
    pub is_disabled: bool,
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: price_to_f64(&product.price),
            stock: product.stock,
            image: product.image,
            likes: product.likes,
            is_disabled: product.is_disabled,
            category_id: product.category_id,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Multipart)]
pub struct CreateProductForm {
    /// Product name (cannot be empty)
    pub name: String,
    pub description: String,
    /// Non-negative price
    pub price: f64,
    /// Non-negative stock
    pub stock: i32,
    pub category_id: i32,
    /// JPEG or PNG, at most 10 MB
    pub image: Upload,
}

#[derive(Debug, Multipart)]
pub struct ReplaceImageForm {
    /// JPEG or PNG, at most 10 MB
    pub image: Upload,
}

/// Partial update. Omitted fields keep their current value.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub stock: Option<i32>,
    #[oai(skip_serializing_if_is_none)]
    pub category_id: Option<i32>,
}

/// Converts a transport price into a decimal through its shortest
/// round-trip text, so `9.99` stays `9.99`. Non-finite values are rejected.
pub fn parse_price(price: f64) -> Option<BigDecimal> {
    if !price.is_finite() {
        return None;
    }
    BigDecimal::from_str(&price.to_string()).ok()
}

fn price_to_f64(price: &BigDecimal) -> f64 {
    price.to_f64().unwrap_or_default()
}

pub async fn into_image_upload(upload: Upload) -> std::io::Result<ImageUpload> {
    let file_name = upload.file_name().map(str::to_string);
    let content_type = upload.content_type().map(str::to_string);
    let data = upload.into_vec().await?;

    Ok(ImageUpload {
        file_name,
        content_type,
        data,
    })
}
