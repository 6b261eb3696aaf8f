//! Product input and line item types.

use crate::error::CartError;
use crate::ids::ProductId;
use crate::price::{parse_price, validate_price};
use serde::{Deserialize, Serialize};

/// A validated product, ready to be added to the cart.
///
/// The only way to build one is through a checking constructor, so a
/// `Product` always has a non-blank id and name and a finite, non-negative
/// price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    image: String,
}

impl Product {
    /// Create a product with a caller-supplied id.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Result<Self, CartError> {
        let id = id.into();
        if id.is_blank() {
            return Err(CartError::EmptyId);
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CartError::EmptyName);
        }
        Ok(Self {
            id,
            name,
            price: validate_price(price)?,
            image: image.into(),
        })
    }

    /// Create a product with a freshly generated id.
    pub fn with_generated_id(
        name: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Result<Self, CartError> {
        Self::new(ProductId::generate(), name, price, image)
    }

    /// Build a product from loose text fields, as typed into a form.
    ///
    /// A missing or blank `id` gets a generated one.
    pub fn from_fields(
        name: &str,
        price: &str,
        image: &str,
        id: Option<&str>,
    ) -> Result<Self, CartError> {
        let price = parse_price(price)?;
        match id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => Self::new(id, name, price, image),
            None => Self::with_generated_id(name, price, image),
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn image(&self) -> &str {
        &self.image
    }
}

/// A line item in the cart.
///
/// This is also the persisted shape: the storage slot holds a JSON array of
/// these objects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product id; unique within a cart.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Quantity, at least 1 while the item is in the cart.
    pub quantity: u32,
}

impl LineItem {
    /// Start a line item for a product with quantity 1.
    pub fn from_product(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image: product.image,
            quantity: 1,
        }
    }

    /// `price * quantity`.
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// Check the same rules a [`Product`] enforces, plus a positive quantity.
    ///
    /// Items built in-process always pass; this is for records read back
    /// from storage.
    pub fn check(&self) -> Result<(), CartError> {
        if self.id.is_blank() {
            return Err(CartError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(CartError::EmptyName);
        }
        validate_price(self.price)?;
        if self.quantity == 0 {
            return Err(CartError::InvalidQuantity(0));
        }
        Ok(())
    }
}
