//! Checkout: summarize the cart, then empty it.
//!
//! There is no payment step. Checkout produces a summary for the caller to
//! present and unconditionally clears the cart once it has been built.

use cart_cache::Backend;
use serde::Serialize;

use crate::cart::{CartStore, CartView};
use crate::error::CartError;
use crate::price::format_price;

/// One line of a checkout summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryLine {
    pub name: String,
    pub quantity: u32,
}

/// What the customer is paying for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutSummary {
    /// Cart total at checkout time.
    pub total: f64,
    /// Items in cart order.
    pub lines: Vec<SummaryLine>,
}

impl CheckoutSummary {
    /// Items as `"<name> x<qty>"`, comma separated.
    pub fn items_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!("{} x{}", line.name, line.quantity))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Confirmation text shown to the customer.
    pub fn message(&self, currency_symbol: &str) -> String {
        format!(
            "Processing purchase of {}\n\nProducts:\n{}\n\nRedirecting to payment...",
            format_price(self.total, currency_symbol),
            self.items_text()
        )
    }
}

/// Result of a checkout attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// Nothing to buy; the cart was left alone.
    EmptyCart,
    /// The cart was summarized and cleared.
    Completed(CheckoutSummary),
}

impl CheckoutOutcome {
    /// Message for the empty-cart case.
    pub const EMPTY_MESSAGE: &'static str = "Your cart is empty";
}

impl<B: Backend, V: CartView> CartStore<B, V> {
    /// Summarize the cart, clear it and close the cart panel.
    pub fn checkout(&mut self) -> Result<CheckoutOutcome, CartError> {
        if self.is_empty() {
            return Ok(CheckoutOutcome::EmptyCart);
        }

        let summary = CheckoutSummary {
            total: self.total(),
            lines: self
                .items()
                .iter()
                .map(|item| SummaryLine {
                    name: item.name.clone(),
                    quantity: item.quantity,
                })
                .collect(),
        };

        self.clear()?;
        self.view_mut().close_panel();
        tracing::info!(
            total = summary.total,
            lines = summary.lines.len(),
            "checkout completed"
        );
        Ok(CheckoutOutcome::Completed(summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{Product, RecordingView};
    use cart_cache::{Cache, MemoryBackend};

    fn store() -> CartStore<MemoryBackend, RecordingView> {
        CartStore::open(Cache::in_memory(), RecordingView::default()).unwrap()
    }

    #[test]
    fn test_empty_cart_checkout_does_nothing() {
        let mut store = store();
        assert_eq!(store.checkout().unwrap(), CheckoutOutcome::EmptyCart);
        assert!(!store.view().closed);
        assert_eq!(store.view().list_renders, 1);
    }

    #[test]
    fn test_checkout_summarizes_and_clears() {
        let mut store = store();
        store
            .add_item(Product::new("ring", "Silver Ring", 1200.0, "").unwrap())
            .unwrap();
        store
            .add_item(Product::new("ring", "Silver Ring", 1200.0, "").unwrap())
            .unwrap();
        store
            .add_item(Product::new("chain", "Gold Chain", 300.5, "").unwrap())
            .unwrap();

        let CheckoutOutcome::Completed(summary) = store.checkout().unwrap() else {
            panic!("expected a completed checkout");
        };
        assert_eq!(summary.total, 2700.5);
        assert_eq!(summary.items_text(), "Silver Ring x2, Gold Chain x1");
        assert!(summary.message("$").starts_with("Processing purchase of $2,700.50"));

        assert!(store.is_empty());
        assert!(store.view().closed);
        assert_eq!(store.view().count, Some(0));
    }
}
