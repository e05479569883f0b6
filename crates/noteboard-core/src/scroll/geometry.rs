//! L4 Atomic Layer: Plain geometry types shared by the drag and scroll code
//!
//! All values are in pixels. `Position` is a translation of the dragged item
//! relative to where the drag started; `Offset` is a scroll delta.

use serde::{Deserialize, Serialize};

/// Translated position of the dragged item relative to the drag origin
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ZERO: Position = Position { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamp component-wise into `[min, max]`
    pub fn clamp(self, min: Position, max: Position) -> Position {
        Position {
            x: self.x.max(min.x).min(max.x),
            y: self.y.max(min.y).min(max.y),
        }
    }
}

/// Scroll delta applied to a container in one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub left: f64,
    pub top: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { left: 0.0, top: 0.0 };

    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Snapshot of a scrollable container's extent and current scroll position
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_left: f64,
    pub scroll_height: f64,
    pub scroll_width: f64,
    pub client_height: f64,
    pub client_width: f64,
}

impl ScrollMetrics {
    /// Largest reachable `scroll_top`
    #[inline]
    pub fn max_scroll_top(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }

    /// Largest reachable `scroll_left`
    #[inline]
    pub fn max_scroll_left(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    #[inline]
    pub fn is_top(&self) -> bool {
        self.scroll_top <= 0.0
    }

    #[inline]
    pub fn is_bottom(&self) -> bool {
        self.scroll_height - self.scroll_top - self.client_height <= 0.0
    }

    #[inline]
    pub fn is_left(&self) -> bool {
        self.scroll_left <= 0.0
    }

    #[inline]
    pub fn is_right(&self) -> bool {
        self.scroll_width - self.scroll_left - self.client_width <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_top: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top,
            scroll_left: 0.0,
            scroll_height: 1000.0,
            scroll_width: 300.0,
            client_height: 500.0,
            client_width: 300.0,
        }
    }

    #[test]
    fn test_boundary_flags() {
        let top = metrics(0.0);
        assert!(top.is_top());
        assert!(!top.is_bottom());
        // Content is exactly as wide as the viewport
        assert!(top.is_left());
        assert!(top.is_right());

        let bottom = metrics(500.0);
        assert!(!bottom.is_top());
        assert!(bottom.is_bottom());

        let middle = metrics(250.0);
        assert!(!middle.is_top());
        assert!(!middle.is_bottom());
    }

    #[test]
    fn test_content_shorter_than_viewport_is_at_bottom() {
        let m = ScrollMetrics {
            scroll_height: 200.0,
            client_height: 500.0,
            ..metrics(0.0)
        };
        assert!(m.is_bottom());
        assert_eq!(m.max_scroll_top(), 0.0);
    }

    #[test]
    fn test_position_clamp() {
        let p = Position::new(-5.0, 700.0).clamp(Position::ZERO, Position::new(100.0, 480.0));
        assert_eq!(p, Position::new(0.0, 480.0));
    }
}
