//! Product cards shown in the storefront grid.

use crate::cart::Product;
use crate::error::CartError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product as listed in the storefront grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductCard {
    /// Product id, used when the card is added to the cart.
    pub id: ProductId,
    /// Card title.
    pub title: String,
    /// Optional blurb under the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category slug (e.g. "rings").
    pub category: String,
    /// Listed price.
    pub price: f64,
    /// Image URL.
    #[serde(default)]
    pub image: String,
}

impl ProductCard {
    /// Turn the card into a validated product for the cart.
    pub fn to_product(&self) -> Result<Product, CartError> {
        Product::new(
            self.id.clone(),
            self.title.clone(),
            self.price,
            self.image.clone(),
        )
    }

    /// Case-insensitive substring match on title or description.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}

/// A product catalog file: a list of cards in display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<ProductCard>,
}

impl Catalog {
    /// Find a card by product id.
    pub fn find(&self, id: &str) -> Option<&ProductCard> {
        self.products.iter().find(|card| card.id.as_str() == id)
    }
}
