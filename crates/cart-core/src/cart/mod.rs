//! Shopping cart module.
//!
//! Contains the line item types, the render seam and the store that ties
//! them to persistence.

mod item;
mod store;
mod view;

pub use item::{LineItem, Product};
pub use store::{CartStore, DEFAULT_CART_KEY};
pub use view::{CartView, Notice, NullView, RecordingView};
