//! HTML cart panel and notification toasts.
//!
//! [`HtmlCartView`] implements [`cart_core::CartView`], so a
//! [`cart_core::CartStore`] can drive it directly: every mutation rebuilds
//! the badge, the item list and the total, and notices become toasts.

pub mod markup;
mod panel;
pub mod toast;

pub use panel::{CountBadge, HtmlCartView};
pub use toast::{Toast, ToastPhase, ToastTray};
