//! Drag auto-scrolling for Noteboard lists
//!
//! While a list item is dragged near the edge of its scrollable container,
//! the container scrolls on its own, faster the closer the item gets.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `geometry` - Position, Offset and ScrollMetrics value types
//! - `container` - The `ScrollContainer` capability and an in-memory implementation
//! - `edge` - Pure edge detection and speed calculation
//! - `config` - Timing helpers for `AutoScrollConfig`
//!
//! ## L3 Molecular Layer
//! - `autoscroll` - Timer-driven controller combining the atoms
//!
//! # Usage
//!
//! ```ignore
//! use noteboard_core::scroll::{AutoScroller, ScrollerConfig, Position, VirtualContainer};
//!
//! let container = Arc::new(Mutex::new(VirtualContainer::new(300.0, 1000.0, 300.0, 500.0)));
//! let geometry = ScrollerConfig::new(300.0, 40.0, Position::ZERO, Position::new(0.0, 480.0))?;
//! let mut scroller = AutoScroller::new(container, Arc::new(|offset| { /* ... */ }), geometry, config)?;
//!
//! // On every pointer move
//! scroller.update(Position::new(0.0, 470.0));
//!
//! // When the drag ends
//! scroller.stop();
//! ```

// L4 Atomic Layer
pub mod config;
pub mod container;
pub mod edge;
pub mod geometry;

// L3 Molecular Layer
pub mod autoscroll;

// Re-exports for convenient access
pub use autoscroll::{AutoScroller, ScrollCallback};
pub use config::{AutoScrollConfig, AutoScrollConfigExt};
pub use container::{ScrollContainer, VirtualContainer};
pub use edge::{plan, Edge, ScrollPlan, ScrollerConfig};
pub use geometry::{Offset, Position, ScrollMetrics};
