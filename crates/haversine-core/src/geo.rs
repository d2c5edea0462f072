//! Geographic coordinate type.
//!
//! `GeoPoint` uses `f64` latitude/longitude in decimal degrees.  Values are
//! not range-checked: a latitude of 120° is passed through to the
//! trigonometry as-is.

use tracing::debug;

use crate::error::{HaversineError, HaversineResult, PointArg};
use crate::units::Units;

/// A (latitude, longitude) pair in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Build a point from a variable-length slice, as `[lat, lon]`.
    ///
    /// # Errors
    /// The shape error for `arg` if `values` does not hold exactly two items.
    pub fn from_slice(values: &[f64], arg: PointArg) -> HaversineResult<GeoPoint> {
        match *values {
            [lat, lon] => Ok(GeoPoint::new(lat, lon)),
            _ => {
                debug!(arg = %arg, len = values.len(), "rejecting point with wrong arity");
                Err(HaversineError::shape(arg, values.len()))
            }
        }
    }

    /// Check that untyped text holds exactly `[lat, lon]`.
    ///
    /// Only the length is checked; [`GeoPoint::parse`] also converts the
    /// values.
    pub fn check_text_shape<'s>(
        values: &[&'s str],
        arg: PointArg,
    ) -> HaversineResult<(&'s str, &'s str)> {
        match *values {
            [lat, lon] => Ok((lat, lon)),
            _ => {
                debug!(arg = %arg, len = values.len(), "rejecting point with wrong arity");
                Err(HaversineError::shape(arg, values.len()))
            }
        }
    }

    /// Parse a point from untyped text.
    ///
    /// # Errors
    /// The shape error for `arg` on wrong arity, then
    /// [`HaversineError::NonNumericCoordinate`] if either value is not an
    /// `f64`.
    pub fn parse(values: &[&str], arg: PointArg) -> HaversineResult<GeoPoint> {
        let (lat, lon) = GeoPoint::check_text_shape(values, arg)?;
        Ok(GeoPoint::new(parse_coordinate(lat)?, parse_coordinate(lon)?))
    }

    /// Haversine great-circle distance to `other` in `units`.
    #[inline]
    pub fn distance(self, other: GeoPoint, units: Units) -> f64 {
        crate::distance::haversine(self, other, units)
    }
}

/// Parse one coordinate.  Surrounding whitespace is tolerated; anything
/// `f64::from_str` rejects is non-numeric.
pub(crate) fn parse_coordinate(text: &str) -> HaversineResult<f64> {
    text.trim().parse::<f64>().map_err(|_| {
        debug!(value = text, "rejecting non-numeric coordinate");
        HaversineError::NonNumericCoordinate(text.to_owned())
    })
}

impl From<(f64, f64)> for GeoPoint {
    #[inline]
    fn from((lat, lon): (f64, f64)) -> Self {
        GeoPoint::new(lat, lon)
    }
}

impl From<[f64; 2]> for GeoPoint {
    #[inline]
    fn from([lat, lon]: [f64; 2]) -> Self {
        GeoPoint::new(lat, lon)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
