//! Input-validation error type.
//!
//! Only the untyped boundary entries in [`crate::distance`] can fail.  The
//! typed core (`haversine` on two `GeoPoint`s and a `Units`) is infallible.

use thiserror::Error;

/// Every way a distance request can be rejected.  All are invalid-argument
/// failures; each variant maps to exactly one validation check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HaversineError {
    #[error("invalid units {0:?}: units should be 'km' or 'mi'")]
    InvalidUnits(String),

    #[error("point1 should be a pair of two coordinates, got {len} values")]
    InvalidPoint1Shape { len: usize },

    #[error("point2 should be a pair of two coordinates, got {len} values")]
    InvalidPoint2Shape { len: usize },

    #[error("coordinates must be numeric, got {0:?}")]
    NonNumericCoordinate(String),
}

impl HaversineError {
    /// Shape failure for `arg` holding `len` values.
    pub fn shape(arg: PointArg, len: usize) -> Self {
        match arg {
            PointArg::Point1 => HaversineError::InvalidPoint1Shape { len },
            PointArg::Point2 => HaversineError::InvalidPoint2Shape { len },
        }
    }
}

/// Which argument of a two-point request a value came from.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PointArg {
    Point1,
    Point2,
}

impl PointArg {
    pub fn as_str(self) -> &'static str {
        match self {
            PointArg::Point1 => "point1",
            PointArg::Point2 => "point2",
        }
    }
}

impl std::fmt::Display for PointArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shorthand result type for the boundary entries.
pub type HaversineResult<T> = Result<T, HaversineError>;
