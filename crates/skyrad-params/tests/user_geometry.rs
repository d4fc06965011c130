//! Integration tests for user-defined geometry derivation.
//!
//! The solar providers here are stubs with pinned outputs: the point is the
//! azimuth-convention arithmetic and the error paths, not real astronomy.

use approx::assert_relative_eq;
use chrono::{Datelike, NaiveDateTime, Timelike};
use skyrad_params::geometry::{Geometry, GeometryError, UserGeometry};
use skyrad_params::solar::{SolarError, SolarPosition};

/// Provider returning fixed angles regardless of input.
struct FixedSun {
    altitude: f64,
    azimuth: f64,
}

impl SolarPosition for FixedSun {
    fn solar_altitude(&self, _: f64, _: f64, _: NaiveDateTime) -> Result<f64, SolarError> {
        Ok(self.altitude)
    }

    fn solar_azimuth(&self, _: f64, _: f64, _: NaiveDateTime) -> Result<f64, SolarError> {
        Ok(self.azimuth)
    }
}

/// Provider that rejects every request.
struct BrokenSun;

impl SolarPosition for BrokenSun {
    fn solar_altitude(&self, latitude: f64, longitude: f64, _: NaiveDateTime) -> Result<f64, SolarError> {
        Err(SolarError::InvalidCoordinates { latitude, longitude })
    }

    fn solar_azimuth(&self, latitude: f64, longitude: f64, _: NaiveDateTime) -> Result<f64, SolarError> {
        Err(SolarError::InvalidCoordinates { latitude, longitude })
    }
}

/// Provider that records the instant it was asked about.
struct EchoSun(std::sync::Mutex<Option<NaiveDateTime>>);

impl SolarPosition for EchoSun {
    fn solar_altitude(&self, _: f64, _: f64, at: NaiveDateTime) -> Result<f64, SolarError> {
        *self.0.lock().unwrap() = Some(at);
        Ok(0.0)
    }

    fn solar_azimuth(&self, _: f64, _: f64, _: NaiveDateTime) -> Result<f64, SolarError> {
        Ok(0.0)
    }
}

#[test]
fn test_observation_fills_calendar_and_view_fields() {
    let sun = FixedSun { altitude: 61.2, azimuth: -147.3 };
    let mut geometry = UserGeometry::default();
    geometry
        .from_time_and_location(&sun, 51.5, -0.12, "15/06/2020 12:00:00", 10.0, 20.0)
        .unwrap();

    assert_eq!(geometry.month, 6);
    assert_eq!(geometry.day, 15);
    assert_relative_eq!(geometry.view_zenith, 10.0);
    assert_relative_eq!(geometry.view_azimuth, 20.0);
    assert_relative_eq!(geometry.solar_zenith, 61.2);
}

#[test]
fn test_negative_azimuth_reflects_about_south() {
    // raw -147.3 → 147.3 + 180 = 327.3
    let sun = FixedSun { altitude: 61.2, azimuth: -147.3 };
    let mut geometry = UserGeometry::default();
    geometry
        .from_time_and_location(&sun, 51.5, -0.12, "15/06/2020 12:00:00", 10.0, 20.0)
        .unwrap();
    assert_relative_eq!(geometry.solar_azimuth, 327.3, max_relative = 1e-12);
}

#[test]
fn test_positive_azimuth_offsets_from_south() {
    // raw 170 → |170 - 180| = 10; raw 190 → |190 - 180| = 10
    for raw in [170.0, 190.0] {
        let sun = FixedSun { altitude: 45.0, azimuth: raw };
        let mut geometry = UserGeometry::default();
        geometry
            .from_time_and_location(&sun, 51.5, -0.12, "15/06/2020 12:00:00", 0.0, 0.0)
            .unwrap();
        assert_relative_eq!(geometry.solar_azimuth, 10.0, max_relative = 1e-12);
    }
}

#[test]
fn test_azimuth_normalised_into_full_circle() {
    // raw -200 → 200 + 180 = 380 → wraps to 20. Pins that the modulo
    // applies to the freshly converted azimuth, not a stale value.
    let sun = FixedSun { altitude: 45.0, azimuth: -200.0 };
    let mut geometry = UserGeometry::default();
    geometry
        .from_time_and_location(&sun, 51.5, -0.12, "15/06/2020 12:00:00", 0.0, 0.0)
        .unwrap();
    assert_relative_eq!(geometry.solar_azimuth, 20.0, max_relative = 1e-12);
}

#[test]
fn test_provider_receives_parsed_instant() {
    let sun = EchoSun(std::sync::Mutex::new(None));
    let mut geometry = UserGeometry::default();
    geometry
        .from_time_and_location(&sun, 51.5, -0.12, "15/06/2020 12:00:00", 0.0, 0.0)
        .unwrap();

    let at = sun.0.lock().unwrap().expect("provider was not called");
    assert_eq!((at.year(), at.month(), at.day()), (2020, 6, 15));
    assert_eq!((at.hour(), at.minute()), (12, 0));
}

#[test]
fn test_malformed_date_leaves_record_unchanged() {
    let sun = FixedSun { altitude: 61.2, azimuth: -147.3 };
    let mut geometry = UserGeometry {
        solar_zenith: 1.0,
        solar_azimuth: 2.0,
        view_zenith: 3.0,
        view_azimuth: 4.0,
        month: 5,
        day: 6,
    };
    let before = geometry.clone();

    let err = geometry
        .from_time_and_location(&sun, 51.5, -0.12, "not-a-date", 10.0, 20.0)
        .unwrap_err();

    assert!(matches!(err, GeometryError::Date(_)));
    assert_eq!(geometry, before);
}

#[test]
fn test_provider_failure_leaves_record_unchanged() {
    let mut geometry = UserGeometry::default();
    let before = geometry.clone();

    let err = geometry
        .from_time_and_location(&BrokenSun, 95.0, 200.0, "15/06/2020 12:00:00", 0.0, 0.0)
        .unwrap_err();

    assert!(matches!(err, GeometryError::Solar(_)));
    assert_eq!(geometry, before);
}

#[test]
fn test_derived_record_renders_engine_block() {
    let sun = FixedSun { altitude: 30.0, azimuth: 170.0 };
    let mut user = UserGeometry::default();
    user.from_time_and_location(&sun, 51.5, -0.12, "15/06/2020 12:00:00", 10.0, 20.0)
        .unwrap();

    let block = Geometry::User(user).to_string();
    assert_eq!(block, "0 (User defined)\n30 10 10 20 6 15\n");
}
