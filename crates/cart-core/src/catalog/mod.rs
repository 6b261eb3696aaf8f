//! Catalog module.
//!
//! Product cards, and the grid that filters, sorts and searches them.

mod card;
mod filter;
mod grid;

pub use card::{Catalog, ProductCard};
pub use filter::{PriceRange, SortOption, ALL_CATEGORIES};
pub use grid::ProductGrid;
