//! Aggregation and dashboard feed configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Settings for the read-side reporting operations.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StatsConfig {
    /// Length of the trailing activity-by-day window, today inclusive.
    #[serde(default = "default_window_days", alias = "windowDays")]
    #[validate(range(min = 1, max = 366))]
    pub window_days: u32,
    /// Default number of files returned by the recent-files query.
    #[serde(default = "default_recent_files")]
    #[validate(range(min = 1, max = 200))]
    pub recent_files_limit: u32,
    /// Default number of entries returned by the activity feed.
    #[serde(default = "default_feed_limit")]
    #[validate(range(min = 1, max = 200))]
    pub activity_feed_limit: u32,
}

impl StatsConfig {
    /// The configured default activity window.
    pub fn default_window(&self) -> ActivityWindow {
        ActivityWindow {
            window_days: self.window_days,
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            recent_files_limit: default_recent_files(),
            activity_feed_limit: default_feed_limit(),
        }
    }
}

/// Per-call override of the activity-by-day window (`{ "windowDays": n }`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ActivityWindow {
    /// Number of calendar days in the window, today inclusive.
    #[serde(alias = "windowDays")]
    #[validate(range(min = 1, max = 366))]
    pub window_days: u32,
}

impl ActivityWindow {
    /// Create a window of `days` days.
    pub fn days(days: u32) -> Self {
        Self { window_days: days }
    }
}

fn default_window_days() -> u32 {
    30
}

fn default_recent_files() -> u32 {
    4
}

fn default_feed_limit() -> u32 {
    50
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_accepts_camel_case_option() {
        let window: ActivityWindow =
            serde_json::from_str(r#"{"windowDays": 14}"#).expect("deserialize");
        assert_eq!(window, ActivityWindow::days(14));
        assert!(window.validate().is_ok());
    }

    #[test]
    fn test_zero_window_is_invalid() {
        assert!(ActivityWindow::days(0).validate().is_err());
    }
}
