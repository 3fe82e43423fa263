//! Unit conversion for display
//!
//! Distances are always stored in kilometers; conversion happens only when
//! values are shown to the user.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kilometers to statute miles
pub const MILES_PER_KM: f64 = 0.621371;

/// Convert kilometers to miles
pub fn km_to_miles(distance_km: f64) -> f64 {
    distance_km * MILES_PER_KM
}

/// Convert miles to kilometers
pub fn miles_to_km(distance_miles: f64) -> f64 {
    distance_miles / MILES_PER_KM
}

// ============================================================================
// Unit System
// ============================================================================

/// Measurement system preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Metric,
    #[default]
    Imperial,
}

impl UnitSystem {
    /// Convert a distance in kilometers into this system's unit
    pub fn from_km(&self, distance_km: f64) -> f64 {
        match self {
            UnitSystem::Metric => distance_km,
            UnitSystem::Imperial => km_to_miles(distance_km),
        }
    }

    /// Get the distance unit abbreviation
    pub fn distance_abbreviation(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "km",
            UnitSystem::Imperial => "mi",
        }
    }

    /// Format a distance stored in kilometers, e.g. `"4.66 mi"`
    pub fn format_distance(&self, distance_km: f64) -> String {
        format!("{:.2} {}", self.from_km(distance_km), self.distance_abbreviation())
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "metric"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "km" | "si" => Ok(UnitSystem::Metric),
            "imperial" | "mi" | "miles" | "us" => Ok(UnitSystem::Imperial),
            _ => Err(format!("Unknown unit system: {}", s)),
        }
    }
}
