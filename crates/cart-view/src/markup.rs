//! Markup for the cart panel pieces.

use cart_core::price::format_price;
use cart_core::LineItem;

/// Placeholder shown when the cart holds nothing.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";

/// Render the item list: one block per item, or the placeholder.
pub fn render_items(items: &[LineItem], currency_symbol: &str) -> String {
    if items.is_empty() {
        return render_empty();
    }
    items
        .iter()
        .map(|item| render_line_item(item, currency_symbol))
        .collect()
}

pub fn render_empty() -> String {
    format!(
        r#"<p class="text-center text-muted">{}</p>"#,
        EMPTY_CART_MESSAGE
    )
}

/// One cart row: image, name, price, quantity stepper and remove control.
///
/// Controls carry `data-action`, `data-id` and `data-quantity` attributes;
/// the `-` button asks for `quantity - 1`, which removes the item at 1.
pub fn render_line_item(item: &LineItem, currency_symbol: &str) -> String {
    let id = html_escape(item.id.as_str());
    let name = html_escape(&item.name);
    format!(
        r#"<div class="cart-item d-flex align-items-center justify-content-between p-3 border-bottom" data-id="{id}">
    <div class="d-flex align-items-center">
        <img src="{image}" alt="{name}" style="width: 50px; height: 50px; object-fit: cover; border-radius: 8px;" class="me-3">
        <div>
            <h6 class="mb-0">{name}</h6>
            <small class="text-muted">{price}</small>
        </div>
    </div>
    <div class="d-flex align-items-center">
        <button class="btn btn-sm btn-outline-secondary me-2" data-action="set-quantity" data-id="{id}" data-quantity="{less}">-</button>
        <span class="mx-2">{quantity}</span>
        <button class="btn btn-sm btn-outline-secondary ms-2" data-action="set-quantity" data-id="{id}" data-quantity="{more}">+</button>
        <button class="btn btn-sm btn-outline-danger ms-3" data-action="remove" data-id="{id}">
            <i class="bi bi-trash"></i>
        </button>
    </div>
</div>"#,
        id = id,
        image = html_escape(&item.image),
        name = name,
        price = html_escape(&format_price(item.price, currency_symbol)),
        less = i64::from(item.quantity) - 1,
        quantity = item.quantity,
        more = i64::from(item.quantity) + 1,
    )
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
