//! L4 Atomic Layer: Configuration types for drag auto-scrolling
//!
//! Re-exports the config section from `crate::config` and adds timing helpers.

use std::time::Duration;

pub use crate::config::AutoScrollConfig;

/// Extension trait for AutoScrollConfig with utility methods
pub trait AutoScrollConfigExt {
    /// Get the tick period as Duration
    fn tick_duration(&self) -> Duration;

    /// Check the settings can drive a timer
    fn validate(&self) -> crate::Result<()>;
}

impl AutoScrollConfigExt for AutoScrollConfig {
    #[inline]
    fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    fn validate(&self) -> crate::Result<()> {
        if self.interval_ms == 0 {
            return Err(crate::Error::Config(
                "autoscroll.interval_ms must be greater than 0".to_string(),
            ));
        }
        if !self.acceleration.is_finite() || self.acceleration < 0.0 {
            return Err(crate::Error::Config(format!(
                "autoscroll.acceleration must be a non-negative number, got {}",
                self.acceleration
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let config = AutoScrollConfig::default();
        assert_eq!(config.tick_duration(), Duration::from_millis(5));
    }

    #[test]
    fn test_validate() {
        assert!(AutoScrollConfig::default().validate().is_ok());

        let zero = AutoScrollConfig {
            interval_ms: 0,
            ..Default::default()
        };
        assert!(zero.validate().is_err());

        let nan = AutoScrollConfig {
            acceleration: f64::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());
    }
}
