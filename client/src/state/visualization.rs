//! Display state for agent-pushed HTML fragments.
//!
//! DESIGN
//! ======
//! Both overlays replace their content wholesale on every message; nothing
//! is merged. The drink visualization stays up until superseded. The order
//! receipt additionally hides itself after [`RECEIPT_AUTO_HIDE`]; scheduling
//! the sleep is the component's job, deciding whether an elapsed timer may
//! hide the receipt is decided here so it can be tested without a clock.

#[cfg(test)]
#[path = "visualization_test.rs"]
mod visualization_test;

use std::time::Duration;

use crate::config::ReceiptTimerPolicy;

/// Delay after which a receipt hides itself.
pub const RECEIPT_AUTO_HIDE: Duration = Duration::from_secs(15);

/// Latest drink visualization fragment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisualizationState {
    html: String,
    visible: bool,
    render_key: u64,
}

impl VisualizationState {
    /// Replace the fragment and show it.
    ///
    /// The render key always advances so the entry animation replays even
    /// when the fragment is byte-for-byte identical to the previous one.
    pub fn receive(&mut self, html: String) {
        self.html = html;
        self.visible = true;
        self.render_key += 1;
    }

    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    #[must_use]
    pub fn render_key(&self) -> u64 {
        self.render_key
    }

    /// Whether anything should be drawn.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.visible && !self.html.is_empty()
    }

    /// The fragment to draw keyed by its render key, or nothing.
    ///
    /// Views key their element on the first field so every new message
    /// mounts a fresh node instead of patching the previous one.
    #[must_use]
    pub fn rendered_entry(&self) -> Option<(u64, String)> {
        self.is_rendered().then(|| (self.render_key, self.html.clone()))
    }
}

/// Handle for one scheduled auto-hide, tagged with the receipt it was
/// scheduled for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HideTimer {
    generation: u64,
}

/// Latest order receipt fragment plus its dismissal state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReceiptState {
    html: String,
    visible: bool,
    generation: u64,
    policy: ReceiptTimerPolicy,
}

impl ReceiptState {
    #[must_use]
    pub fn new(policy: ReceiptTimerPolicy) -> Self {
        Self { policy, ..Self::default() }
    }

    /// Replace the fragment, show it, and return the timer the caller must
    /// schedule for [`RECEIPT_AUTO_HIDE`].
    pub fn receive(&mut self, html: String) -> HideTimer {
        self.html = html;
        self.visible = true;
        self.generation += 1;
        HideTimer { generation: self.generation }
    }

    /// Apply an elapsed timer. Returns whether the receipt was hidden.
    ///
    /// Under [`ReceiptTimerPolicy::Stacked`] every timer hides whatever is
    /// showing, including a newer receipt than the one that scheduled it.
    /// Under [`ReceiptTimerPolicy::Reset`] only the newest timer counts.
    pub fn expire(&mut self, timer: HideTimer) -> bool {
        if self.policy == ReceiptTimerPolicy::Reset && timer.generation != self.generation {
            return false;
        }
        self.hide()
    }

    /// Manual dismissal from the backdrop or close control. Idempotent;
    /// returns whether the receipt was showing.
    pub fn dismiss(&mut self) -> bool {
        self.hide()
    }

    fn hide(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.visible && !self.html.is_empty()
    }
}
