//! Render seam between the store and whatever displays it.

use crate::cart::LineItem;

/// User-visible notice raised by a cart mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// An item was added (or its quantity bumped by an add).
    Added,
    /// A remove was requested.
    Removed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Added => "Product added to cart",
            Notice::Removed => "Product removed from cart",
        }
    }
}

/// Display targets the store keeps in sync with its state.
///
/// The store calls these after every mutation with the complete current
/// state; implementations rebuild their output from scratch.
pub trait CartView {
    /// Show the total quantity. A count of zero should hide the badge.
    fn render_count(&mut self, count: u64);

    /// Rebuild the item list and the running total.
    fn render_list(&mut self, items: &[LineItem], total: f64);

    /// Show a transient notification.
    fn notify(&mut self, notice: Notice);

    /// Close the cart panel, if the view has one.
    fn close_panel(&mut self) {}
}

impl<V: CartView + ?Sized> CartView for &mut V {
    fn render_count(&mut self, count: u64) {
        (**self).render_count(count);
    }

    fn render_list(&mut self, items: &[LineItem], total: f64) {
        (**self).render_list(items, total);
    }

    fn notify(&mut self, notice: Notice) {
        (**self).notify(notice);
    }

    fn close_panel(&mut self) {
        (**self).close_panel();
    }
}

/// A view that displays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl CartView for NullView {
    fn render_count(&mut self, _count: u64) {}

    fn render_list(&mut self, _items: &[LineItem], _total: f64) {}

    fn notify(&mut self, _notice: Notice) {}
}

/// A view that records every call, for assertions.
#[derive(Debug, Default, Clone)]
pub struct RecordingView {
    /// Last badge count rendered.
    pub count: Option<u64>,
    /// Last item list rendered.
    pub items: Vec<LineItem>,
    /// Last total rendered.
    pub total: Option<f64>,
    /// Every notice, oldest first.
    pub notices: Vec<Notice>,
    /// Number of `render_list` calls.
    pub list_renders: usize,
    /// Whether `close_panel` was called.
    pub closed: bool,
}

impl CartView for RecordingView {
    fn render_count(&mut self, count: u64) {
        self.count = Some(count);
    }

    fn render_list(&mut self, items: &[LineItem], total: f64) {
        self.items = items.to_vec();
        self.total = Some(total);
        self.list_renders += 1;
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn close_panel(&mut self) {
        self.closed = true;
    }
}
