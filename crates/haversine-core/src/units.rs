//! Distance unit selector and the Earth radius that goes with each unit.
//!
//! The radii are fixed constants; callers cannot supply their own.
//! Text tokens are exactly `"km"` and `"mi"` (case-sensitive).

use std::str::FromStr;

use crate::error::{HaversineError, HaversineResult};

/// Earth radius used for kilometre results.
pub const EARTH_RADIUS_KM: f64 = 6372.8;

/// Earth radius used for mile results.
pub const EARTH_RADIUS_MI: f64 = 3959.87433;

/// The unit a distance is reported in.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Units {
    /// Kilometres (default).
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "km"))]
    Kilometers,
    /// Statute miles.
    #[cfg_attr(feature = "serde", serde(rename = "mi"))]
    Miles,
}

impl Units {
    /// Sphere radius for this unit.
    #[inline]
    pub fn radius(self) -> f64 {
        match self {
            Units::Kilometers => EARTH_RADIUS_KM,
            Units::Miles      => EARTH_RADIUS_MI,
        }
    }

    /// The text token for this unit.
    pub fn as_str(self) -> &'static str {
        match self {
            Units::Kilometers => "km",
            Units::Miles      => "mi",
        }
    }
}

impl FromStr for Units {
    type Err = HaversineError;

    fn from_str(s: &str) -> HaversineResult<Units> {
        match s {
            "km" => Ok(Units::Kilometers),
            "mi" => Ok(Units::Miles),
            other => Err(HaversineError::InvalidUnits(other.to_owned())),
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
