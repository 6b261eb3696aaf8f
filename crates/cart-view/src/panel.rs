//! HTML cart panel: badge, item list, total and toasts.

use std::time::Duration;

use cart_core::price::{format_price, DEFAULT_CURRENCY_SYMBOL};
use cart_core::{CartView, LineItem, Notice};

use crate::markup::{html_escape, render_items};
use crate::toast::ToastTray;

/// The count indicator next to the cart icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountBadge {
    pub text: String,
    /// Hidden while the cart is empty.
    pub visible: bool,
}

impl Default for CountBadge {
    fn default() -> Self {
        Self {
            text: "0".to_string(),
            visible: false,
        }
    }
}

/// A [`CartView`] that writes markup into up to three targets.
///
/// Any target can be absent (a page without a badge, say); renders aimed at
/// a missing target are skipped.
#[derive(Debug, Clone)]
pub struct HtmlCartView {
    currency_symbol: String,
    count_badge: Option<CountBadge>,
    item_list: Option<String>,
    total: Option<String>,
    toasts: ToastTray,
    now: Duration,
    panel_open: bool,
}

impl Default for HtmlCartView {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

impl HtmlCartView {
    /// A view with every target present.
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            count_badge: Some(CountBadge::default()),
            item_list: Some(String::new()),
            total: Some(String::new()),
            toasts: ToastTray::new(),
            now: Duration::ZERO,
            panel_open: false,
        }
    }

    pub fn without_count_badge(mut self) -> Self {
        self.count_badge = None;
        self
    }

    pub fn without_item_list(mut self) -> Self {
        self.item_list = None;
        self
    }

    pub fn without_total(mut self) -> Self {
        self.total = None;
        self
    }

    /// Advance the clock and drop finished toasts.
    pub fn tick(&mut self, now: Duration) {
        self.now = now;
        self.toasts.prune(now);
    }

    pub fn open_panel(&mut self) {
        self.panel_open = true;
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn count_badge(&self) -> Option<&CountBadge> {
        self.count_badge.as_ref()
    }

    pub fn item_list(&self) -> Option<&str> {
        self.item_list.as_deref()
    }

    pub fn total_text(&self) -> Option<&str> {
        self.total.as_deref()
    }

    pub fn toasts(&self) -> &ToastTray {
        &self.toasts
    }

    /// Assemble the whole widget as one HTML fragment.
    pub fn render_panel(&self) -> String {
        let badge = self
            .count_badge
            .as_ref()
            .map(|badge| {
                format!(
                    r#"<span id="cart-count" class="cart-count" style="display: {};">{}</span>"#,
                    if badge.visible { "flex" } else { "none" },
                    html_escape(&badge.text)
                )
            })
            .unwrap_or_default();
        let items = self
            .item_list
            .as_ref()
            .map(|list| format!(r#"<div id="cartItems">{}</div>"#, list))
            .unwrap_or_default();
        let total = self
            .total
            .as_ref()
            .map(|total| {
                format!(
                    r#"<div class="cart-total">Total: <strong id="cartTotal">{}</strong></div>"#,
                    html_escape(total)
                )
            })
            .unwrap_or_default();

        format!(
            r#"<section class="cart-widget" data-section="cart">
    {}
    <div id="cartModal" class="cart-modal" style="display: {};">
        {}
        {}
    </div>
    <div class="notifications">{}</div>
</section>"#,
            badge,
            if self.panel_open { "block" } else { "none" },
            items,
            total,
            self.toasts.render(self.now)
        )
    }
}

impl CartView for HtmlCartView {
    fn render_count(&mut self, count: u64) {
        if let Some(badge) = self.count_badge.as_mut() {
            badge.text = count.to_string();
            badge.visible = count > 0;
        }
    }

    fn render_list(&mut self, items: &[LineItem], total: f64) {
        if let Some(list) = self.item_list.as_mut() {
            *list = render_items(items, &self.currency_symbol);
        }
        if let Some(text) = self.total.as_mut() {
            *text = format_price(total, &self.currency_symbol);
        }
    }

    fn notify(&mut self, notice: Notice) {
        let id = self.toasts.push(notice.message(), self.now);
        tracing::trace!(id, message = notice.message(), "toast pushed");
    }

    fn close_panel(&mut self) {
        self.panel_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_cache::{Cache, MemoryBackend};
    use cart_core::{CartStore, Product};

    fn store(view: HtmlCartView) -> CartStore<MemoryBackend, HtmlCartView> {
        CartStore::open(Cache::in_memory(), view).unwrap()
    }

    fn ring() -> Product {
        Product::new("ring", "Silver Ring", 100.0, "/ring.jpg").unwrap()
    }

    #[test]
    fn test_initial_render_hides_badge() {
        let store = store(HtmlCartView::default());
        let view = store.view();
        assert_eq!(view.count_badge(), Some(&CountBadge::default()));
        assert!(view.item_list().unwrap().contains("Your cart is empty"));
        assert_eq!(view.total_text(), Some("$0"));
    }

    #[test]
    fn test_add_twice_updates_all_targets() {
        let mut store = store(HtmlCartView::default());
        store.add_item(ring()).unwrap();
        store.add_item(ring()).unwrap();

        let view = store.view();
        let badge = view.count_badge().unwrap();
        assert_eq!(badge.text, "2");
        assert!(badge.visible);
        assert!(view.item_list().unwrap().contains("Silver Ring"));
        assert_eq!(view.total_text(), Some("$200"));
        assert_eq!(view.toasts().toasts().len(), 2);
    }

    #[test]
    fn test_missing_targets_are_skipped() {
        let view = HtmlCartView::new("$")
            .without_count_badge()
            .without_item_list()
            .without_total();
        let mut store = store(view);
        store.add_item(ring()).unwrap();

        let view = store.view();
        assert!(view.count_badge().is_none());
        assert!(view.item_list().is_none());
        assert!(view.total_text().is_none());
        assert!(!view.render_panel().contains("cartTotal"));
    }

    #[test]
    fn test_toasts_expire_on_tick() {
        let mut store = store(HtmlCartView::default());
        store.add_item(ring()).unwrap();
        store.view_mut().tick(Duration::from_millis(1000));
        store.remove_item("ring").unwrap();

        store.view_mut().tick(Duration::from_millis(3300));
        let toasts = store.view().toasts().toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "Product removed from cart");
    }

    #[test]
    fn test_checkout_closes_panel() {
        let mut store = store(HtmlCartView::new("\u{20ac}"));
        store.view_mut().open_panel();
        store.add_item(ring()).unwrap();
        assert!(store.view().render_panel().contains(r#"style="display: block;""#));

        store.checkout().unwrap();
        assert!(!store.view().is_panel_open());
        assert_eq!(store.view().total_text(), Some("\u{20ac}0"));
    }

    #[test]
    fn test_render_panel_shows_badge_when_non_empty() {
        let mut store = store(HtmlCartView::default());
        store.add_item(ring()).unwrap();
        let html = store.view().render_panel();
        assert!(html.contains(r#"id="cart-count" class="cart-count" style="display: flex;">1<"#));
        assert!(html.contains(r#"<strong id="cartTotal">$100</strong>"#));
    }
}
