//! Solar position provider trait.
//!
//! Ephemeris backends implement [`SolarPosition`], which returns the sun's
//! apparent altitude and azimuth for a ground location at a given instant.
//! The geometry layer only consumes these two angles; the astronomical
//! calculation itself lives behind this seam.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors from solar position providers.
#[derive(Debug, Error)]
pub enum SolarError {
    #[error("Coordinates out of range: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("Instant {0} is outside the supported ephemeris range")]
    UnsupportedEpoch(NaiveDateTime),
}

/// Provides the sun's apparent position for a ground observer.
///
/// Angle conventions follow the classical ephemeris form: altitude is
/// measured up from the horizon, azimuth is signed about due south
/// (negative eastward). [`UserGeometry`](crate::geometry::UserGeometry)
/// converts the azimuth to the engine's clockwise-from-north convention.
pub trait SolarPosition: Send + Sync {
    /// Solar altitude above the horizon, in degrees.
    fn solar_altitude(
        &self,
        latitude: f64,
        longitude: f64,
        at: NaiveDateTime,
    ) -> Result<f64, SolarError>;

    /// Signed solar azimuth about due south, in degrees.
    fn solar_azimuth(
        &self,
        latitude: f64,
        longitude: f64,
        at: NaiveDateTime,
    ) -> Result<f64, SolarError>;
}
