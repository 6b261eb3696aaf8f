//! Transient notification toasts.
//!
//! Time is passed in explicitly as an offset from an arbitrary origin, so
//! the tray is a plain state machine: the caller advances the clock and
//! asks what each toast looks like at that instant.

use std::time::Duration;


use crate::markup::html_escape;

/// Delay before a new toast starts sliding in.
pub const SLIDE_IN_DELAY: Duration = Duration::from_millis(100);
/// Time from creation until the toast starts sliding out.
pub const DISMISS_AFTER: Duration = Duration::from_millis(3000);
/// Length of the slide transition.
pub const TRANSITION: Duration = Duration::from_millis(300);

/// Where a toast is in its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Inserted, still off-screen.
    Entering,
    /// Slid in and readable.
    Shown,
    /// Sliding back out.
    Leaving,
    /// Gone; will be pruned.
    Removed,
}

impl ToastPhase {
    /// Value of the `data-phase` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastPhase::Entering => "entering",
            ToastPhase::Shown => "shown",
            ToastPhase::Leaving => "leaving",
            ToastPhase::Removed => "removed",
        }
    }

    /// CSS transform for this phase.
    fn transform(&self) -> &'static str {
        match self {
            ToastPhase::Shown => "translateX(0)",
            _ => "translateX(100%)",
        }
    }
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    /// Clock value when the toast was created.
    pub created_at: Duration,
}

impl Toast {
    pub fn phase(&self, now: Duration) -> ToastPhase {
        let age = now.saturating_sub(self.created_at);
        if age >= DISMISS_AFTER + TRANSITION {
            ToastPhase::Removed
        } else if age >= DISMISS_AFTER {
            ToastPhase::Leaving
        } else if age >= SLIDE_IN_DELAY {
            ToastPhase::Shown
        } else {
            ToastPhase::Entering
        }
    }
}

/// Stack of live toasts. Each one runs on its own schedule.
#[derive(Debug, Clone, Default)]
pub struct ToastTray {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastTray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast created at `now`. Returns its id.
    pub fn push(&mut self, message: impl Into<String>, now: Duration) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            created_at: now,
        });
        id
    }

    /// Drop toasts that have finished sliding out.
    pub fn prune(&mut self, now: Duration) {
        self.toasts
            .retain(|toast| toast.phase(now) != ToastPhase::Removed);
    }

    /// Toasts still in the tray, oldest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Render live toasts as they appear at `now`.
    pub fn render(&self, now: Duration) -> String {
        self.toasts
            .iter()
            .filter(|toast| toast.phase(now) != ToastPhase::Removed)
            .map(|toast| render_toast(toast, toast.phase(now)))
            .collect()
    }
}

fn render_toast(toast: &Toast, phase: ToastPhase) -> String {
    format!(
        r#"<div class="notification" data-toast-id="{}" data-phase="{}" style="transform: {}; transition: transform {}ms ease;">
    <div class="notification-content">
        <i class="bi bi-check-circle text-success"></i>
        <span>{}</span>
    </div>
</div>"#,
        toast.id,
        phase.as_str(),
        phase.transform(),
        TRANSITION.as_millis(),
        html_escape(&toast.message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_phase_timeline() {
        let toast = Toast {
            id: 0,
            message: "hi".into(),
            created_at: ms(1000),
        };
        assert_eq!(toast.phase(ms(1000)), ToastPhase::Entering);
        assert_eq!(toast.phase(ms(1099)), ToastPhase::Entering);
        assert_eq!(toast.phase(ms(1100)), ToastPhase::Shown);
        assert_eq!(toast.phase(ms(3999)), ToastPhase::Shown);
        assert_eq!(toast.phase(ms(4000)), ToastPhase::Leaving);
        assert_eq!(toast.phase(ms(4299)), ToastPhase::Leaving);
        assert_eq!(toast.phase(ms(4300)), ToastPhase::Removed);
    }

    #[test]
    fn test_clock_before_creation_is_entering() {
        let toast = Toast {
            id: 0,
            message: "hi".into(),
            created_at: ms(500),
        };
        assert_eq!(toast.phase(ms(0)), ToastPhase::Entering);
    }

    #[test]
    fn test_toasts_stack_independently() {
        let mut tray = ToastTray::new();
        let first = tray.push("Product added to cart", ms(0));
        let second = tray.push("Product removed from cart", ms(2000));
        assert_ne!(first, second);

        tray.prune(ms(3400));
        assert_eq!(tray.toasts().len(), 1);
        assert_eq!(tray.toasts()[0].id, second);

        tray.prune(ms(5300));
        assert!(tray.is_empty());
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(ToastPhase::Entering.as_str(), "entering");
        assert_eq!(ToastPhase::Shown.as_str(), "shown");
        assert_eq!(ToastPhase::Leaving.as_str(), "leaving");
        assert_eq!(ToastPhase::Removed.as_str(), "removed");
    }

    #[test]
    fn test_render_reflects_phase() {
        let mut tray = ToastTray::new();
        tray.push("Added <b>", ms(0));

        let entering = tray.render(ms(0));
        assert!(entering.contains(r#"data-phase="entering""#));
        assert!(entering.contains("translateX(100%)"));
        assert!(entering.contains("Added &lt;b&gt;"));

        let shown = tray.render(ms(500));
        assert!(shown.contains("translateX(0)"));

        assert!(tray.render(ms(3300)).is_empty());
    }
}
