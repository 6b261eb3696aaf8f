//! Terminal rendering of the cart.

use cart_core::price::format_price;
use cart_core::{CartView, LineItem, Notice};
use console::style;

use crate::output::{truncate, Output};

const WIDTHS: [usize; 5] = [14, 28, 12, 5, 12];

/// One rendered table row.
#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: String,
    name: String,
    price: String,
    quantity: String,
    subtotal: String,
}

/// A [`CartView`] for the terminal.
///
/// Notices print as soon as they happen. The badge and item list are kept
/// as the last rendered snapshot and printed on demand with [`present`].
///
/// [`present`]: TerminalView::present
#[derive(Debug, Clone)]
pub struct TerminalView {
    output: Output,
    currency_symbol: String,
    count: u64,
    rows: Vec<Row>,
    total: String,
}

impl TerminalView {
    pub fn new(output: Output, currency_symbol: impl Into<String>) -> Self {
        let currency_symbol = currency_symbol.into();
        Self {
            output,
            total: format_price(0.0, &currency_symbol),
            currency_symbol,
            count: 0,
            rows: Vec::new(),
        }
    }

    /// Print the last rendered cart.
    pub fn present(&self) {
        let badge = if self.count > 0 {
            style(format!("({})", self.count)).cyan().bold().to_string()
        } else {
            String::new()
        };
        self.output.header(format!("Cart {}", badge).trim_end());

        if self.rows.is_empty() {
            self.output.info("Your cart is empty");
            return;
        }

        self.output
            .table_row(&["ID", "NAME", "PRICE", "QTY", "SUBTOTAL"], &WIDTHS);
        for row in &self.rows {
            self.output.table_row(
                &[
                    row.id.as_str(),
                    row.name.as_str(),
                    row.price.as_str(),
                    row.quantity.as_str(),
                    row.subtotal.as_str(),
                ],
                &WIDTHS,
            );
        }
        self.output.line("");
        self.output.kv("Total", &self.total);
    }
}

impl CartView for TerminalView {
    fn render_count(&mut self, count: u64) {
        self.count = count;
    }

    fn render_list(&mut self, items: &[LineItem], total: f64) {
        self.rows = items
            .iter()
            .map(|item| Row {
                id: truncate(item.id.as_str(), WIDTHS[0]),
                name: truncate(&item.name, WIDTHS[1]),
                price: format_price(item.price, &self.currency_symbol),
                quantity: item.quantity.to_string(),
                subtotal: format_price(item.subtotal(), &self.currency_symbol),
            })
            .collect();
        self.total = format_price(total, &self.currency_symbol);
    }

    fn notify(&mut self, notice: Notice) {
        match notice {
            Notice::Added => self.output.success(notice.message()),
            Notice::Removed => self.output.info(notice.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_core::ProductId;

    #[test]
    fn test_render_list_formats_rows() {
        let mut view = TerminalView::new(Output::new(false, true), "$");
        view.render_count(3);
        view.render_list(
            &[LineItem {
                id: ProductId::new("ring"),
                name: "Silver Ring".to_string(),
                price: 1200.0,
                image: String::new(),
                quantity: 3,
            }],
            3600.0,
        );

        assert_eq!(view.count, 3);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].price, "$1,200");
        assert_eq!(view.rows[0].subtotal, "$3,600");
        assert_eq!(view.total, "$3,600");
    }

    #[test]
    fn test_empty_total() {
        let view = TerminalView::new(Output::new(false, true), "€");
        assert_eq!(view.total, "€0");
    }
}
