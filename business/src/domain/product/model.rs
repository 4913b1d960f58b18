use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;

use super::errors::ProductError;

/// Prices are stored as `NUMERIC(12, 2)`: two fractional digits and
/// strictly less than this bound.
const PRICE_SCALE: i64 = 2;
const PRICE_UPPER_BOUND: i64 = 10_000_000_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
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

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: i32,
        name: String,
        description: String,
        price: BigDecimal,
        stock: i32,
        image: Option<String>,
        likes: i32,
        is_disabled: bool,
        category_id: i32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            stock,
            image,
            likes,
            is_disabled,
            category_id,
            created_at,
            updated_at,
        }
    }

    /// Whether ordinary callers may see this product.
    pub fn is_visible(&self) -> bool {
        !self.is_disabled
    }
}

pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub stock: i32,
    pub category_id: i32,
    pub image: Option<String>,
}

/// A validated product that has not been stored yet. New products start
/// with no likes and enabled; the store assigns the id and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub stock: i32,
    pub category_id: i32,
    pub image: Option<String>,
}

impl NewProduct {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        validate_name(&props.name)?;
        validate_price(&props.price)?;
        validate_stock(props.stock)?;

        Ok(Self {
            name: props.name,
            description: props.description,
            price: props.price,
            stock: props.stock,
            category_id: props.category_id,
            image: props.image,
        })
    }
}

/// Partial update of a product. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
    pub stock: Option<i32>,
    pub category_id: Option<i32>,
    pub image: Option<String>,
    pub is_disabled: Option<bool>,
}

impl ProductChanges {
    pub fn disable() -> Self {
        Self {
            is_disabled: Some(true),
            ..Self::default()
        }
    }

    pub fn image(path: String) -> Self {
        Self {
            image: Some(path),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ProductError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(price) = &self.price {
            validate_price(price)?;
        }
        if let Some(stock) = self.stock {
            validate_stock(stock)?;
        }
        Ok(())
    }
}

/// Outcome of a like toggle: the new membership state and counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeToggle {
    pub liked: bool,
    pub likes: i32,
}

fn validate_name(name: &str) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }
    Ok(())
}

fn validate_price(price: &BigDecimal) -> Result<(), ProductError> {
    if *price < BigDecimal::zero() {
        return Err(ProductError::PriceNegative);
    }
    // Anything the column would round or overflow is rejected here.
    if price.with_scale(PRICE_SCALE) != *price || *price >= BigDecimal::from(PRICE_UPPER_BOUND) {
        return Err(ProductError::PriceOutOfRange);
    }
    Ok(())
}

fn validate_stock(stock: i32) -> Result<(), ProductError> {
    if stock < 0 {
        return Err(ProductError::StockNegative);
    }
    Ok(())
}
