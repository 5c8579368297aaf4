use thiserror::Error;

use crate::domain::product::models::ProductId;

/// Error for product name validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductNameError {
    #[error("Product name must not be empty")]
    Empty,
}

/// Error for quantity validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuantityError {
    #[error("Quantity must be positive, got {0}")]
    NotPositive(i64),

    #[error("Quantity too large: maximum {max}, got {actual}")]
    TooLarge { max: i64, actual: i64 },
}

/// Top-level error for inventory operations
#[derive(Debug, Clone, Error)]
pub enum ProductError {
    #[error("Invalid product name: {0}")]
    InvalidName(#[from] ProductNameError),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(#[from] QuantityError),

    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
