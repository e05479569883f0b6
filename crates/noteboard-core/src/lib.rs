pub mod config;
pub mod error;
pub mod list;
pub mod scroll;
pub mod sortable;

pub use config::{AppConfig, AutoScrollConfig};
pub use error::{Error, Result};
pub use scroll::{AutoScroller, Offset, Position, ScrollContainer, ScrollMetrics, VirtualContainer};
