//! `haversine-core` — great-circle distance on a spherical Earth.
//!
//! The whole crate is one computation: the haversine formula applied to two
//! (latitude, longitude) points in decimal degrees, scaled by a fixed Earth
//! radius for the requested unit.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`distance`]    | `haversine`, `haversine_checked`, `haversine_text`    |
//! | [`geo`]         | `GeoPoint`                                            |
//! | [`units`]       | `Units`, `EARTH_RADIUS_KM`, `EARTH_RADIUS_MI`         |
//! | [`error`]       | `HaversineError`, `HaversineResult`, `PointArg`       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `GeoPoint` and `Units`.  |
//!
//! Rejected input is reported through `tracing` at `debug` level.  The crate
//! never installs a subscriber.

pub mod distance;
pub mod error;
pub mod geo;
pub mod units;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use distance::{haversine, haversine_checked, haversine_text};
pub use error::{HaversineError, HaversineResult, PointArg};
pub use geo::GeoPoint;
pub use units::{EARTH_RADIUS_KM, EARTH_RADIUS_MI, Units};
