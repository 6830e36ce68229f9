//! Run configuration.

use std::time::Duration;

use crate::types::{ColorMode, Hue, DRAIN_POLL_MS, SCHEDULER_PACE_MS};

#[derive(Debug, Clone, PartialEq)]
pub struct RainConfig {
    pub hue: Hue,
    pub mode: ColorMode,
    /// Cap on active columns. `None` uses every column the width allows.
    pub columns: Option<usize>,
    /// Delay after each scheduler slot check.
    pub pace: Duration,
    /// Poll interval while waiting for columns to finish on shutdown.
    pub drain_poll: Duration,
    /// Seed for slot selection and column parameters. `None` seeds from
    /// OS entropy.
    pub seed: Option<u64>,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            hue: Hue::Green,
            mode: ColorMode::TrueColor,
            columns: None,
            pace: Duration::from_millis(SCHEDULER_PACE_MS),
            drain_poll: Duration::from_millis(DRAIN_POLL_MS),
            seed: None,
        }
    }
}

impl RainConfig {
    pub fn new(hue: Hue, mode: ColorMode) -> Self {
        Self {
            hue,
            mode,
            ..Self::default()
        }
    }
}
