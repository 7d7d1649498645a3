//! Latency tiers
//!
//! Grades a measured round-trip time into one of seven ordinal tiers and maps
//! each tier to the style token the presentation layer renders.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Reserved measurement meaning "no response within the test window".
pub const LATENCY_TIMEOUT: i64 = -1;

/// Upper bounds (exclusive) of each tier, in milliseconds.
pub const LATENCY_EXCELLENT: i64 = 50;
pub const LATENCY_GOOD: i64 = 100;
pub const LATENCY_FAIR: i64 = 150;
pub const LATENCY_POOR: i64 = 200;
pub const LATENCY_BAD: i64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LatencyLevel {
    Excellent,
    Good,
    Fair,
    Poor,
    Bad,
    Terrible,
    Timeout,
}

impl LatencyLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LatencyLevel::Excellent => "excellent",
            LatencyLevel::Good => "good",
            LatencyLevel::Fair => "fair",
            LatencyLevel::Poor => "poor",
            LatencyLevel::Bad => "bad",
            LatencyLevel::Terrible => "terrible",
            LatencyLevel::Timeout => "timeout",
        }
    }

    /// Tailwind classes for the tier badge.
    pub fn color_class(self) -> &'static str {
        match self {
            LatencyLevel::Excellent => {
                "bg-emerald-100 text-emerald-600 dark:bg-emerald-900/20 dark:text-emerald-400"
            }
            LatencyLevel::Good => {
                "bg-green-100 text-green-600 dark:bg-green-900/20 dark:text-green-400"
            }
            LatencyLevel::Fair => "bg-blue-100 text-blue-600 dark:bg-blue-900/20 dark:text-blue-400",
            LatencyLevel::Poor => {
                "bg-yellow-100 text-yellow-600 dark:bg-yellow-900/20 dark:text-yellow-400"
            }
            LatencyLevel::Bad => {
                "bg-orange-100 text-orange-600 dark:bg-orange-900/20 dark:text-orange-400"
            }
            LatencyLevel::Terrible | LatencyLevel::Timeout => {
                "bg-red-100 text-red-600 dark:bg-red-900/20 dark:text-red-400"
            }
        }
    }
}

impl fmt::Display for LatencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LatencyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "excellent" => Ok(LatencyLevel::Excellent),
            "good" => Ok(LatencyLevel::Good),
            "fair" => Ok(LatencyLevel::Fair),
            "poor" => Ok(LatencyLevel::Poor),
            "bad" => Ok(LatencyLevel::Bad),
            "terrible" => Ok(LatencyLevel::Terrible),
            "timeout" => Ok(LatencyLevel::Timeout),
            _ => Err(format!("Unknown latency level: {}", s)),
        }
    }
}

/// Get the tier of a latency measurement in milliseconds.
///
/// `-1` is the timeout sentinel. Every other value falls through the
/// thresholds in ascending order, each bound exclusive.
pub fn get_latency_level(latency: i64) -> LatencyLevel {
    if latency == LATENCY_TIMEOUT {
        return LatencyLevel::Timeout;
    }

    match latency {
        l if l < LATENCY_EXCELLENT => LatencyLevel::Excellent,
        l if l < LATENCY_GOOD => LatencyLevel::Good,
        l if l < LATENCY_FAIR => LatencyLevel::Fair,
        l if l < LATENCY_POOR => LatencyLevel::Poor,
        l if l < LATENCY_BAD => LatencyLevel::Bad,
        _ => LatencyLevel::Terrible,
    }
}

/// Get the style token for a latency measurement.
pub fn get_latency_color_class(latency: i64) -> &'static str {
    get_latency_level(latency).color_class()
}

/// Get the style token for a tier given by name; unknown names get the timeout style.
pub fn color_class_for_level(level: &str) -> &'static str {
    level
        .parse::<LatencyLevel>()
        .unwrap_or(LatencyLevel::Timeout)
        .color_class()
}
