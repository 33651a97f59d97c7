//! Carousel construction options
//!
//! Options are validated once, at controller creation, against the size of
//! the collection they will govern. Invalid combinations are surfaced as
//! errors instead of being silently corrected, so wiring mistakes in the
//! owning view show up during development.

use std::time::Duration;

use thiserror::Error;

/// Errors produced by option validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("autoplay interval must be greater than zero")]
    ZeroInterval,

    #[error("initial index {index} is out of range for a collection of {len}")]
    InitialIndexOutOfRange { index: usize, len: usize },
}

/// User-facing configuration for a carousel controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselOptions {
    /// Interval between autoplay ticks; None leaves autoplay unavailable
    pub autoplay_interval: Option<Duration>,
    /// Index that is active immediately after creation
    pub initial_index: usize,
    /// Circular wraparound at the ends versus clamping
    pub wrap: bool,
    /// Whether a manual navigation restarts the autoplay interval
    pub reset_phase_on_manual_nav: bool,
}

impl CarouselOptions {
    pub const DEFAULT_INITIAL_INDEX: usize = 0;
    pub const DEFAULT_WRAP: bool = true;
    pub const DEFAULT_RESET_PHASE_ON_MANUAL_NAV: bool = false;

    /// Creates options with the defaults: no autoplay, initial index 0,
    /// wraparound enabled, manual navigation leaving the tick phase alone
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the autoplay tick interval
    pub fn with_autoplay_interval(mut self, interval: Duration) -> Self {
        self.autoplay_interval = Some(interval);
        self
    }

    /// Sets the index active immediately after creation
    pub fn with_initial_index(mut self, index: usize) -> Self {
        self.initial_index = index;
        self
    }

    /// Chooses between wraparound and clamping at the ends
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Chooses whether manual navigation restarts the autoplay interval
    pub fn with_reset_phase_on_manual_nav(mut self, reset: bool) -> Self {
        self.reset_phase_on_manual_nav = reset;
        self
    }

    /// Validates the options against the collection they will govern
    ///
    /// The initial index is only checked for non-empty collections; an
    /// empty collection has no valid index and ignores the field entirely.
    pub fn validate(&self, collection_size: usize) -> Result<(), OptionsError> {
        if let Some(interval) = self.autoplay_interval {
            if interval.is_zero() {
                return Err(OptionsError::ZeroInterval);
            }
        }

        if collection_size > 0 && self.initial_index >= collection_size {
            return Err(OptionsError::InitialIndexOutOfRange {
                index: self.initial_index,
                len: collection_size,
            });
        }

        Ok(())
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            autoplay_interval: None,
            initial_index: Self::DEFAULT_INITIAL_INDEX,
            wrap: Self::DEFAULT_WRAP,
            reset_phase_on_manual_nav: Self::DEFAULT_RESET_PHASE_ON_MANUAL_NAV,
        }
    }
}
