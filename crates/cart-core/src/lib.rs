//! Cart store, catalog grid and checkout for the storefront cart.
//!
//! - **Cart**: validated products, line items and the [`CartStore`] that
//!   persists and re-renders on every mutation
//! - **Catalog**: product cards with filter, sort and search
//! - **Checkout**: summary of the cart, then an empty cart
//!
//! # Example
//!
//! ```rust,ignore
//! use cart_core::prelude::*;
//! use cart_cache::Cache;
//!
//! let mut store = CartStore::open(Cache::open_dir(".cart")?, NullView)?;
//! store.add_item(Product::new("ring", "Silver Ring", 120.0, "/ring.jpg")?)?;
//! store.add_item(Product::new("ring", "Silver Ring", 120.0, "/ring.jpg")?)?;
//!
//! assert_eq!(store.item_count(), 2);
//! println!("Total: {}", format_price(store.total(), "$"));
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ids;
pub mod price;

pub use cart::{CartStore, CartView, LineItem, Notice, Product};
pub use error::CartError;
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CartError;
    pub use crate::ids::ProductId;
    pub use crate::price::{format_price, parse_price};

    // Cart
    pub use crate::cart::{
        CartStore, CartView, LineItem, Notice, NullView, Product, DEFAULT_CART_KEY,
    };

    // Catalog
    pub use crate::catalog::{Catalog, PriceRange, ProductCard, ProductGrid, SortOption};

    // Checkout
    pub use crate::checkout::{CheckoutOutcome, CheckoutSummary, SummaryLine};
}
