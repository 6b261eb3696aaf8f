//! The cart store: owns the line items and keeps storage and view in sync.

use cart_cache::{Backend, Cache};
use tracing::{debug, warn};

use crate::cart::{CartView, LineItem, Notice, Product};
use crate::error::CartError;
use crate::ids::ProductId;

/// Storage key the cart is persisted under.
pub const DEFAULT_CART_KEY: &str = "cart";

/// Single source of truth for the cart contents.
///
/// Every mutation runs the same loop: change the in-memory items, write the
/// whole list to the storage slot, then re-render the badge count and the
/// item list. Items stay in insertion order and are unique by id.
///
/// # Example
///
/// ```rust,ignore
/// let mut store = CartStore::open(Cache::open_dir(".cart")?, view)?;
/// store.add_item(Product::new("ring", "Silver Ring", 120.0, "/ring.jpg")?)?;
/// store.update_quantity("ring", 3)?;
/// assert_eq!(store.total(), 360.0);
/// ```
#[derive(Debug)]
pub struct CartStore<B, V> {
    cache: Cache<B>,
    key: String,
    items: Vec<LineItem>,
    view: V,
}

impl<B: Backend, V: CartView> CartStore<B, V> {
    /// Load the cart from the default slot and render it once.
    pub fn open(cache: Cache<B>, view: V) -> Result<Self, CartError> {
        Self::open_with_key(cache, DEFAULT_CART_KEY, view)
    }

    /// Load the cart from a named slot and render it once.
    ///
    /// An absent slot, or one whose content is not a list of line items,
    /// yields an empty cart. Backend failures are returned.
    pub fn open_with_key(
        cache: Cache<B>,
        key: impl Into<String>,
        view: V,
    ) -> Result<Self, CartError> {
        let key = key.into();
        let items = load_items(&cache, &key)?;
        debug!(key = %key, items = items.len(), "cart loaded");

        let mut store = Self {
            cache,
            key,
            items,
            view,
        };
        store.render();
        Ok(store)
    }

    /// Add one unit of a product.
    ///
    /// If the product is already in the cart its quantity goes up by one and
    /// the stored name, price and image are kept as first inserted.
    pub fn add_item(&mut self, product: Product) -> Result<(), CartError> {
        let previous = self.items.clone();
        match self.items.iter_mut().find(|item| &item.id == product.id()) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(1);
                debug!(id = %existing.id, quantity = existing.quantity, "cart item incremented");
            }
            None => {
                debug!(id = %product.id(), "cart item added");
                self.items.push(LineItem::from_product(product));
            }
        }
        self.commit(previous)?;
        self.view.notify(Notice::Added);
        Ok(())
    }

    /// Add a product described by loose text fields.
    ///
    /// Returns the id the item was stored under, generated when `id` is
    /// absent or blank.
    pub fn add_product(
        &mut self,
        name: &str,
        price: &str,
        image: &str,
        id: Option<&str>,
    ) -> Result<ProductId, CartError> {
        let product = Product::from_fields(name, price, image, id)?;
        let id = product.id().clone();
        self.add_item(product)?;
        Ok(id)
    }

    /// Remove the item with `id`.
    ///
    /// The cart is persisted, re-rendered and the removal notice shown even
    /// when nothing matched. Returns whether an item was removed.
    pub fn remove_item(&mut self, id: &str) -> Result<bool, CartError> {
        let previous = self.items.clone();
        self.items.retain(|item| item.id.as_str() != id);
        let removed = self.items.len() < previous.len();
        debug!(id, removed, "cart item remove");

        self.commit(previous)?;
        self.view.notify(Notice::Removed);
        Ok(removed)
    }

    /// Set the quantity of the item with `id` to exactly `quantity`.
    ///
    /// A quantity of zero or less removes the item. Unknown ids are ignored
    /// without touching storage. Returns whether an item matched.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> Result<bool, CartError> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        if quantity <= 0 {
            return self.remove_item(id);
        }

        let quantity = u32::try_from(quantity).map_err(|_| CartError::InvalidQuantity(quantity))?;
        let previous = self.items.clone();
        if let Some(item) = self.items.iter_mut().find(|item| item.id.as_str() == id) {
            item.quantity = quantity;
        }
        debug!(id, quantity, "cart quantity set");

        self.commit(previous)?;
        Ok(true)
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> Result<(), CartError> {
        let previous = std::mem::take(&mut self.items);
        debug!("cart cleared");
        self.commit(previous)
    }

    /// Sum of `price * quantity` over all items.
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// Sum of quantities over all items.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id.as_str() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Storage key this cart persists under.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Tear the store down, handing back the cache and the view.
    pub fn into_parts(self) -> (Cache<B>, V) {
        (self.cache, self.view)
    }

    /// Persist and re-render, or put `previous` back if the save fails.
    fn commit(&mut self, previous: Vec<LineItem>) -> Result<(), CartError> {
        if let Err(e) = self.persist() {
            warn!(key = %self.key, error = %e, "cart save failed, mutation rolled back");
            self.items = previous;
            return Err(e);
        }
        self.render();
        Ok(())
    }

    fn persist(&mut self) -> Result<(), CartError> {
        self.cache.set(&self.key, &self.items)?;
        Ok(())
    }

    fn render(&mut self) {
        let count = self.item_count();
        let total = self.total();
        self.view.render_count(count);
        self.view.render_list(&self.items, total);
    }
}

fn load_items<B: Backend>(cache: &Cache<B>, key: &str) -> Result<Vec<LineItem>, CartError> {
    match cache.get::<Vec<LineItem>>(key) {
        Ok(Some(items)) => Ok(normalize_items(key, items)),
        Ok(None) => Ok(Vec::new()),
        Err(e) if e.is_malformed() => {
            warn!(key, error = %e, "discarding malformed cart slot");
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Drop stored items that break the line item rules and merge repeated ids
/// into the first occurrence.
fn normalize_items(key: &str, loaded: Vec<LineItem>) -> Vec<LineItem> {
    let mut items: Vec<LineItem> = Vec::with_capacity(loaded.len());
    for item in loaded {
        if let Err(e) = item.check() {
            warn!(key, id = %item.id, error = %e, "dropping invalid stored cart item");
            continue;
        }
        match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => {
                warn!(key, id = %item.id, "merging duplicate stored cart item");
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            }
            None => items.push(item),
        }
    }
    items
}
