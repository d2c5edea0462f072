//! Haversine great-circle distance.
//!
//! [`haversine`] is the typed core: shapes and types are fixed by the
//! signature, so it cannot fail.  [`haversine_checked`] and
//! [`haversine_text`] are the entries for callers holding untyped input;
//! they run every check before any trigonometry, in this order:
//!
//! 1. units token (`"km"` / `"mi"`)
//! 2. `point1` arity
//! 3. `point2` arity
//! 4. coordinate values are numeric (text entry only)
//!
//! The first failing check is the one reported.

use tracing::debug;

use crate::error::{HaversineResult, PointArg};
use crate::geo::{GeoPoint, parse_coordinate};
use crate::units::Units;

/// Great-circle distance between `point1` and `point2`, in `units`.
///
/// The intermediate haversine term is clamped to `[0, 1]` before the square
/// root, so rounding near identical or antipodal points cannot push `asin`
/// out of its domain.  NaN inputs still yield NaN.
pub fn haversine(point1: GeoPoint, point2: GeoPoint, units: Units) -> f64 {
    let r = units.radius();

    let d_lat = (point2.lat - point1.lat).to_radians();
    let d_lon = (point2.lon - point1.lon).to_radians();

    let lat1 = point1.lat.to_radians();
    let lat2 = point2.lat.to_radians();

    let a = (d_lat * 0.5).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

    r * central_angle(a)
}

/// Central angle in radians for the haversine term `a`.
///
/// `a` is clamped to `[0, 1]` first: near-antipodal inputs can round it just
/// above 1, where `asin` returns NaN.
#[inline]
pub(crate) fn central_angle(a: f64) -> f64 {
    2.0 * a.clamp(0.0, 1.0).sqrt().asin()
}

fn parse_units(units: &str) -> HaversineResult<Units> {
    units.parse::<Units>().inspect_err(|_| {
        debug!(units, "rejecting unknown units token");
    })
}

/// Distance between two `[lat, lon]` slices with a text unit token.
///
/// # Errors
/// `InvalidUnits`, `InvalidPoint1Shape` or `InvalidPoint2Shape`, checked in
/// that order.
pub fn haversine_checked(point1: &[f64], point2: &[f64], units: &str) -> HaversineResult<f64> {
    let units = parse_units(units)?;
    let p1 = GeoPoint::from_slice(point1, PointArg::Point1)?;
    let p2 = GeoPoint::from_slice(point2, PointArg::Point2)?;
    Ok(haversine(p1, p2, units))
}

/// Distance between two `[lat, lon]` text pairs with a text unit token.
///
/// # Errors
/// `InvalidUnits`, `InvalidPoint1Shape`, `InvalidPoint2Shape`, then
/// `NonNumericCoordinate` for the first of lat1, lon1, lat2, lon2 that does
/// not parse.
///
/// Any text `f64::from_str` accepts is numeric, including `"NaN"` and
/// `"inf"`; such values are not rejected and the result is then NaN.
pub fn haversine_text(point1: &[&str], point2: &[&str], units: &str) -> HaversineResult<f64> {
    let units = parse_units(units)?;
    let (lat1, lon1) = GeoPoint::check_text_shape(point1, PointArg::Point1)?;
    let (lat2, lon2) = GeoPoint::check_text_shape(point2, PointArg::Point2)?;

    let p1 = GeoPoint::new(parse_coordinate(lat1)?, parse_coordinate(lon1)?);
    let p2 = GeoPoint::new(parse_coordinate(lat2)?, parse_coordinate(lon2)?);
    Ok(haversine(p1, p2, units))
}
