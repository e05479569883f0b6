//! L4 Atomic Layer: The scrollable surface the auto-scroller drives
//!
//! `ScrollContainer` is the only capability the scroller needs from a
//! rendering surface. `VirtualContainer` is an in-memory implementation that
//! clamps like a browser scroll box does; the TUI viewport and the tests use it.

use super::geometry::{Offset, ScrollMetrics};

/// A surface with a scroll position that can be read and nudged
pub trait ScrollContainer {
    /// Current scroll position and extents
    fn metrics(&self) -> ScrollMetrics;

    /// Add `offset` to the scroll position
    fn scroll_by(&mut self, offset: Offset);
}

/// In-memory scroll box
///
/// Scroll offsets are clamped to `[0, content - viewport]` on every write, so
/// repeated ticks at an edge never overshoot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VirtualContainer {
    metrics: ScrollMetrics,
}

impl VirtualContainer {
    /// Create a container with the given content and viewport sizes,
    /// scrolled to the top-left corner
    pub fn new(content_width: f64, content_height: f64, client_width: f64, client_height: f64) -> Self {
        Self {
            metrics: ScrollMetrics {
                scroll_top: 0.0,
                scroll_left: 0.0,
                scroll_height: content_height,
                scroll_width: content_width,
                client_height,
                client_width,
            },
        }
    }

    /// Builder-style initial scroll position
    pub fn with_scroll(mut self, top: f64, left: f64) -> Self {
        self.scroll_to(top, left);
        self
    }

    #[inline]
    pub fn scroll_top(&self) -> f64 {
        self.metrics.scroll_top
    }

    #[inline]
    pub fn scroll_left(&self) -> f64 {
        self.metrics.scroll_left
    }

    /// Set the scroll position directly (clamped)
    pub fn scroll_to(&mut self, top: f64, left: f64) {
        self.metrics.scroll_top = top.clamp(0.0, self.metrics.max_scroll_top());
        self.metrics.scroll_left = left.clamp(0.0, self.metrics.max_scroll_left());
    }

    /// Update the content size, keeping the scroll position valid
    pub fn set_content_size(&mut self, width: f64, height: f64) {
        self.metrics.scroll_width = width;
        self.metrics.scroll_height = height;
        self.scroll_to(self.metrics.scroll_top, self.metrics.scroll_left);
    }

    /// Update the viewport size, keeping the scroll position valid
    pub fn set_client_size(&mut self, width: f64, height: f64) {
        self.metrics.client_width = width;
        self.metrics.client_height = height;
        self.scroll_to(self.metrics.scroll_top, self.metrics.scroll_left);
    }
}

impl ScrollContainer for VirtualContainer {
    fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    fn scroll_by(&mut self, offset: Offset) {
        self.scroll_to(
            self.metrics.scroll_top + offset.top,
            self.metrics.scroll_left + offset.left,
        );
    }
}
