//! Cart error types.

use thiserror::Error;

/// Errors that can occur in cart operations.
#[derive(Error, Debug)]
pub enum CartError {
    /// Product id is empty.
    #[error("Product id must not be empty")]
    EmptyId,

    /// Product name is empty.
    #[error("Product name must not be empty")]
    EmptyName,

    /// Price is negative, NaN or infinite.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// Price text could not be parsed as a number.
    #[error("Unparseable price: {0:?}")]
    UnparseablePrice(String),

    /// Quantity does not fit a line item.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Price range text could not be parsed.
    #[error("Invalid price range: {0:?}")]
    InvalidPriceRange(String),

    /// Persistence failed.
    #[error("Storage error: {0}")]
    Storage(#[from] cart_cache::CacheError),
}
