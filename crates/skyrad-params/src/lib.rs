//! # Skyrad Params
//!
//! Geometry-configuration records for the Skyrad radiative-transfer driver.
//! Each record captures one sun-target-sensor viewing geometry and renders
//! itself into the fixed-format text block the simulation engine reads from
//! its input file.
//!
//! ## Modules
//!
//! - [`geometry`] — The [`Geometry`](geometry::Geometry) tagged union (eight
//!   sensor tags) and its engine-block serialization.
//! - [`dates`] — Day-first acquisition-timestamp parsing.
//! - [`solar`] — The [`SolarPosition`](solar::SolarPosition) provider trait
//!   implemented by ephemeris backends.

pub mod dates;
pub mod geometry;
pub mod solar;

pub use geometry::{Geometry, GeometryError};
