//! Booking and schedule configuration.

use serde::{Deserialize, Serialize};

use crate::result::AppResult;
use crate::types::slot::DaySchedule;

/// Booking flow configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// First bookable slot start hour.
    #[serde(default = "default_open_hour")]
    pub open_hour: u8,
    /// Last bookable slot start hour (inclusive).
    #[serde(default = "default_last_hour")]
    pub last_hour: u8,
    /// Platform fee surcharge as a percentage of the slot total.
    #[serde(default = "default_platform_fee_percent")]
    pub platform_fee_percent: u32,
    /// Timeout applied to every availability-store call, in seconds.
    #[serde(default = "default_store_timeout")]
    pub store_timeout_seconds: u64,
}

impl BookingConfig {
    /// Build the validated daily schedule from the configured hours.
    pub fn schedule(&self) -> AppResult<DaySchedule> {
        DaySchedule::new(self.open_hour, self.last_hour)
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            open_hour: default_open_hour(),
            last_hour: default_last_hour(),
            platform_fee_percent: default_platform_fee_percent(),
            store_timeout_seconds: default_store_timeout(),
        }
    }
}

fn default_open_hour() -> u8 {
    6
}

fn default_last_hour() -> u8 {
    22
}

fn default_platform_fee_percent() -> u32 {
    5
}

fn default_store_timeout() -> u64 {
    5
}
