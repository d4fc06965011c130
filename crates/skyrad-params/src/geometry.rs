//! Viewing and illumination geometry records.
//!
//! [`Geometry`] is a closed union of the viewing-geometry variants the
//! simulation engine understands, one per supported sensor plus a
//! user-defined form with explicit angles. Each record is a plain value:
//! construct it with defaults, set the fields that matter, then render the
//! engine input block with `to_string()`.
//!
//! The engine identifies variants by an integer tag (0–7). Variants that
//! share a payload shape share a struct here; the tag and label carry the
//! distinction, and the format dispatch in [`Display`](std::fmt::Display)
//! stays exhaustive.

use std::fmt;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dates::{self, ParseError};
use crate::solar::{SolarError, SolarPosition};

/// Errors from geometry derivation. Field mutation and serialization never
/// fail; only [`UserGeometry::from_time_and_location`] is fallible.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("Invalid acquisition timestamp: {0}")]
    Date(#[from] ParseError),

    #[error("Solar position calculation failed: {0}")]
    Solar(#[from] SolarError),
}

/// One viewing/illumination geometry block for the engine input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Tag 0 — explicit solar and view angles supplied by the caller.
    User(UserGeometry),
    /// Tag 1 — Meteosat image coordinates.
    Meteosat(ScanGeometry),
    /// Tag 2 — GOES East image coordinates.
    GoesEast(ScanGeometry),
    /// Tag 3 — GOES West image coordinates.
    GoesWest(ScanGeometry),
    /// Tag 4 — AVHRR afternoon-pass orbital geometry.
    AvhrrPm(OrbitalGeometry),
    /// Tag 5 — AVHRR morning-pass orbital geometry.
    AvhrrAm(OrbitalGeometry),
    /// Tag 6 — SPOT HRV scene centre.
    SpotHrv(SceneGeometry),
    /// Tag 7 — Landsat TM scene centre.
    LandsatTm(SceneGeometry),
}

/// User-defined geometry: all four angles given directly.
///
/// Note the engine's field order on the parameter line puts the month
/// before the day, unlike every sensor variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGeometry {
    /// Solar zenith angle (degrees).
    pub solar_zenith: f64,
    /// Solar azimuth angle (degrees, clockwise from north).
    pub solar_azimuth: f64,
    /// View zenith angle (degrees).
    pub view_zenith: f64,
    /// View azimuth angle (degrees).
    pub view_azimuth: f64,
    /// Acquisition month (1–12).
    pub month: u32,
    /// Acquisition day of month (1–31).
    pub day: u32,
}

/// Geostationary scan geometry (Meteosat, GOES East/West): the engine
/// recovers the angles from the image column/line and acquisition time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanGeometry {
    /// Acquisition month (1–12).
    pub month: u32,
    /// Acquisition day of month (1–31).
    pub day: u32,
    /// Acquisition time as decimal hours GMT (7.5 = 07:30 UTC).
    pub gmt_decimal_hour: f64,
    /// Image column of the target pixel.
    pub column: u32,
    /// Image line of the target pixel.
    pub line: u32,
}

/// Polar-orbiter geometry (AVHRR): the engine locates the pass from the
/// ascendant-node crossing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitalGeometry {
    /// Acquisition month (1–12).
    pub month: u32,
    /// Acquisition day of month (1–31).
    pub day: u32,
    /// Acquisition time as decimal hours GMT.
    pub gmt_decimal_hour: f64,
    /// Image column of the target pixel.
    pub column: u32,
    /// Longitude of the orbit's ascendant node (degrees).
    pub ascendant_node_longitude: f64,
    /// Local hour of the ascendant-node crossing.
    pub ascendant_node_hour: f64,
}

/// Scene-centre geometry (SPOT HRV, Landsat TM): the engine derives the
/// angles from the scene centre coordinates and acquisition time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneGeometry {
    /// Acquisition month (1–12).
    pub month: u32,
    /// Acquisition day of month (1–31).
    pub day: u32,
    /// Acquisition time as decimal hours GMT.
    pub gmt_decimal_hour: f64,
    /// Longitude of the scene centre (degrees).
    pub longitude: f64,
    /// Latitude of the scene centre (degrees).
    pub latitude: f64,
}

impl Default for UserGeometry {
    fn default() -> Self {
        Self {
            solar_zenith: 0.0,
            solar_azimuth: 0.0,
            view_zenith: 0.0,
            view_azimuth: 0.0,
            month: 1,
            day: 1,
        }
    }
}

impl Default for ScanGeometry {
    fn default() -> Self {
        Self {
            month: 1,
            day: 1,
            gmt_decimal_hour: 0.0,
            column: 0,
            line: 0,
        }
    }
}

impl Default for OrbitalGeometry {
    fn default() -> Self {
        Self {
            month: 1,
            day: 1,
            gmt_decimal_hour: 0.0,
            column: 0,
            ascendant_node_longitude: 0.0,
            ascendant_node_hour: 0.0,
        }
    }
}

impl Default for SceneGeometry {
    fn default() -> Self {
        Self {
            month: 1,
            day: 1,
            gmt_decimal_hour: 0.0,
            longitude: 0.0,
            latitude: 0.0,
        }
    }
}

impl Geometry {
    /// The engine's integer discriminator for this variant.
    pub fn tag(&self) -> u8 {
        match self {
            Geometry::User(_) => 0,
            Geometry::Meteosat(_) => 1,
            Geometry::GoesEast(_) => 2,
            Geometry::GoesWest(_) => 3,
            Geometry::AvhrrPm(_) => 4,
            Geometry::AvhrrAm(_) => 5,
            Geometry::SpotHrv(_) => 6,
            Geometry::LandsatTm(_) => 7,
        }
    }

    /// The engine's label for this variant, printed after the tag.
    pub fn label(&self) -> &'static str {
        match self {
            Geometry::User(_) => "User defined",
            Geometry::Meteosat(_) => "Meteosat",
            Geometry::GoesEast(_) => "Goes East",
            Geometry::GoesWest(_) => "Goes West",
            Geometry::AvhrrPm(_) => "AVHRR PM NOAA",
            Geometry::AvhrrAm(_) => "AVHRR AM NOAA",
            Geometry::SpotHrv(_) => "SPOT",
            Geometry::LandsatTm(_) => "TM",
        }
    }
}

/// Renders the engine input block. Pure and infallible: identical field
/// state always yields identical output.
///
/// Time-of-day and angle fields print as decimal numbers, so a
/// `gmt_decimal_hour` of 7.5 reaches the engine as `7.5`, not a truncated
/// integer.
impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.tag(), self.label())?;
        match self {
            // The user-defined line carries a trailing newline; the sensor
            // variants end at the annotation, matching the engine format.
            Geometry::User(g) => writeln!(
                f,
                "{} {} {} {} {} {}",
                g.solar_zenith, g.solar_azimuth, g.view_zenith, g.view_azimuth, g.month, g.day,
            ),
            Geometry::Meteosat(g) | Geometry::GoesEast(g) | Geometry::GoesWest(g) => write!(
                f,
                "{} {} {} {} {} (Geometrical Conditions)",
                g.month, g.day, g.gmt_decimal_hour, g.column, g.line,
            ),
            Geometry::AvhrrPm(g) | Geometry::AvhrrAm(g) => write!(
                f,
                "{} {} {} {} {} {} (Geometrical Conditions)",
                g.month,
                g.day,
                g.gmt_decimal_hour,
                g.column,
                g.ascendant_node_longitude,
                g.ascendant_node_hour,
            ),
            Geometry::SpotHrv(g) | Geometry::LandsatTm(g) => write!(
                f,
                "{} {} {} {} {} (Geometrical Conditions)",
                g.month, g.day, g.gmt_decimal_hour, g.longitude, g.latitude,
            ),
        }
    }
}

impl UserGeometry {
    /// Fill the record from an observation's location and timestamp.
    ///
    /// The view angles are taken as given; the solar angles come from the
    /// `solar` provider for the parsed acquisition instant. The provider's
    /// signed-about-south azimuth is converted to the engine's
    /// clockwise-from-north convention and normalised into [0, 360).
    ///
    /// All fallible work happens before the first field assignment, so a
    /// parse or ephemeris failure leaves the record untouched.
    pub fn from_time_and_location<S: SolarPosition>(
        &mut self,
        solar: &S,
        latitude: f64,
        longitude: f64,
        datetime: &str,
        view_zenith: f64,
        view_azimuth: f64,
    ) -> Result<(), GeometryError> {
        let acquired = dates::parse_day_first(datetime)?;
        let altitude = solar.solar_altitude(latitude, longitude, acquired)?;
        let raw_azimuth = solar.solar_azimuth(latitude, longitude, acquired)?;

        let azimuth = if raw_azimuth < 0.0 {
            raw_azimuth.abs() + 180.0
        } else {
            (raw_azimuth - 180.0).abs()
        };

        self.solar_zenith = altitude;
        self.solar_azimuth = azimuth % 360.0;
        self.month = acquired.month();
        self.day = acquired.day();
        self.view_zenith = view_zenith;
        self.view_azimuth = view_azimuth;
        Ok(())
    }
}
