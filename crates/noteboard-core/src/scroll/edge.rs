//! L4 Atomic Layer: Edge detection for drag auto-scrolling
//!
//! Pure functions deciding, from the dragged item's translation and the
//! container's scroll state, which edge (if any) to scroll towards and how fast.

use crate::{Error, Result};

use super::geometry::{Offset, Position, ScrollMetrics};

/// Size of the dragged item and the translations it is allowed to reach
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollerConfig {
    pub width: f64,
    pub height: f64,
    pub min_translate: Position,
    pub max_translate: Position,
}

impl ScrollerConfig {
    /// Build a config, rejecting envelopes that would make speeds non-finite
    pub fn new(width: f64, height: f64, min_translate: Position, max_translate: Position) -> Result<Self> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(Error::InvalidGeometry(format!(
                "envelope must be positive, got {}x{}",
                width, height
            )));
        }
        Ok(Self {
            width,
            height,
            min_translate,
            max_translate,
        })
    }
}

/// Edge of the container being scrolled towards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Direction and per-tick speed of an auto-scroll
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPlan {
    pub edge: Edge,
    /// Pixels per tick along the edge's axis
    pub speed: f64,
}

impl ScrollPlan {
    /// Scroll delta applied on every tick
    pub fn offset(&self) -> Offset {
        match self.edge {
            Edge::Bottom => Offset::new(0.0, self.speed),
            Edge::Top => Offset::new(0.0, -self.speed),
            Edge::Right => Offset::new(self.speed, 0.0),
            Edge::Left => Offset::new(-self.speed, 0.0),
        }
    }
}

/// Decide whether to auto-scroll
///
/// Conditions are checked in a fixed order: down, right, up, left. Only the
/// first one that holds is used, so at most one axis scrolls at a time. An
/// edge the container is already resting against never matches.
pub fn plan(translate: Position, metrics: &ScrollMetrics, config: &ScrollerConfig, acceleration: f64) -> Option<ScrollPlan> {
    let ScrollerConfig {
        width,
        height,
        min_translate,
        max_translate,
    } = *config;
    let half_w = width / 2.0;
    let half_h = height / 2.0;

    let (edge, distance, extent) = if translate.y >= max_translate.y - half_h && !metrics.is_bottom() {
        (Edge::Bottom, max_translate.y - half_h - translate.y, height)
    } else if translate.x >= max_translate.x - half_w && !metrics.is_right() {
        (Edge::Right, max_translate.x - half_w - translate.x, width)
    } else if translate.y <= min_translate.y + half_h && !metrics.is_top() {
        (Edge::Top, translate.y - half_h - min_translate.y, height)
    } else if translate.x <= min_translate.x + half_w && !metrics.is_left() {
        (Edge::Left, translate.x - half_w - min_translate.x, width)
    } else {
        return None;
    };

    Some(ScrollPlan {
        edge,
        speed: acceleration * (distance / extent).abs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(scroll_top: f64, scroll_left: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top,
            scroll_left,
            scroll_height: 1000.0,
            scroll_width: 1000.0,
            client_height: 500.0,
            client_width: 500.0,
        }
    }

    /// Vertical list: no horizontal overflow
    fn vertical(scroll_top: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_width: 500.0,
            ..container(scroll_top, 0.0)
        }
    }

    fn list_config() -> ScrollerConfig {
        ScrollerConfig::new(200.0, 40.0, Position::new(0.0, 0.0), Position::new(0.0, 480.0)).unwrap()
    }

    #[test]
    fn test_scroll_down_speed() {
        let plan = plan(Position::new(0.0, 470.0), &vertical(0.0), &list_config(), 10.0).unwrap();
        assert_eq!(plan.edge, Edge::Bottom);
        assert!((plan.speed - 2.5).abs() < 1e-9);
        assert_eq!(plan.offset(), Offset::new(0.0, 2.5));
    }

    #[test]
    fn test_bottom_suppresses_scroll_down() {
        let metrics = vertical(500.0);
        for y in [460.0, 470.0, 480.0, 5000.0] {
            let p = plan(Position::new(0.0, y), &metrics, &list_config(), 10.0);
            assert!(p.is_none(), "y={} scrolled at bottom", y);
        }
    }

    #[test]
    fn test_top_suppresses_scroll_up() {
        let p = plan(Position::new(0.0, 0.0), &vertical(0.0), &list_config(), 10.0);
        assert!(p.is_none());
    }

    #[test]
    fn test_scroll_up_speed() {
        let plan = plan(Position::new(0.0, 5.0), &vertical(250.0), &list_config(), 10.0).unwrap();
        assert_eq!(plan.edge, Edge::Top);
        assert!((plan.speed - 3.75).abs() < 1e-9);
        assert_eq!(plan.offset(), Offset::new(0.0, -3.75));
    }

    #[test]
    fn test_vertical_wins_over_horizontal() {
        let config = ScrollerConfig::new(40.0, 40.0, Position::new(0.0, 0.0), Position::new(480.0, 480.0)).unwrap();
        let metrics = container(250.0, 250.0);

        // Bottom-right corner: down beats right
        let p = plan(Position::new(480.0, 480.0), &metrics, &config, 10.0).unwrap();
        assert_eq!(p.edge, Edge::Bottom);

        // Top-left corner: up beats left
        let p = plan(Position::new(0.0, 0.0), &metrics, &config, 10.0).unwrap();
        assert_eq!(p.edge, Edge::Top);

        // Bottom-left corner: down beats left
        let p = plan(Position::new(0.0, 480.0), &metrics, &config, 10.0).unwrap();
        assert_eq!(p.edge, Edge::Bottom);
    }

    #[test]
    fn test_right_beats_up() {
        let config = ScrollerConfig::new(40.0, 40.0, Position::new(0.0, 0.0), Position::new(480.0, 480.0)).unwrap();
        let p = plan(Position::new(480.0, 0.0), &container(250.0, 250.0), &config, 10.0).unwrap();
        assert_eq!(p.edge, Edge::Right);
        // 10 * |480 - 20 - 480| / 40
        assert!((p.speed - 5.0).abs() < 1e-9);
        assert_eq!(p.offset(), Offset::new(5.0, 0.0));

        let p = plan(Position::new(470.0, 0.0), &container(250.0, 250.0), &config, 10.0).unwrap();
        assert_eq!(p.edge, Edge::Right);
        assert!((p.speed - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_horizontal_used_when_vertical_blocked() {
        let config = ScrollerConfig::new(40.0, 40.0, Position::new(0.0, 0.0), Position::new(480.0, 480.0)).unwrap();
        // At the bottom already, so the left edge takes over
        let p = plan(Position::new(0.0, 480.0), &container(500.0, 250.0), &config, 10.0).unwrap();
        assert_eq!(p.edge, Edge::Left);
        assert!((p.speed - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_scroll_in_the_middle() {
        let p = plan(Position::new(0.0, 240.0), &vertical(250.0), &list_config(), 10.0);
        assert!(p.is_none());
    }

    #[test]
    fn test_speed_grows_towards_edge() {
        let metrics = vertical(0.0);
        let mut prev = -1.0;
        for y in [460.0, 465.0, 470.0, 475.0, 480.0] {
            let speed = plan(Position::new(0.0, y), &metrics, &list_config(), 10.0).unwrap().speed;
            assert!(speed > prev, "speed not increasing at y={}", y);
            prev = speed;
        }
        // Half an envelope past the threshold gives half the acceleration
        assert!((prev - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_envelope_rejected() {
        for (w, h) in [(0.0, 40.0), (40.0, 0.0), (-1.0, 40.0), (f64::NAN, 40.0), (40.0, f64::INFINITY)] {
            let err = ScrollerConfig::new(w, h, Position::ZERO, Position::ZERO).unwrap_err();
            assert!(matches!(err, Error::InvalidGeometry(_)));
        }
    }
}
