#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! GeoJSON dataset loading and coordinate normalization.
//!
//! Reads the two read-only inputs of the system, the per-year district
//! crime count files and the railway section file, normalizes every
//! geometry to WGS84, and memoizes the parsed tables so each file is read
//! from storage at most once per process.

pub mod cache;
pub mod crs;
pub mod loader;
pub mod railway;

use std::path::PathBuf;

use thiserror::Error;
use tokyo_crime_map_crime_models::DataYear;

/// Errors that can occur while loading datasets.
#[derive(Debug, Error)]
pub enum GeographyError {
    /// No crime count file exists for the requested year.
    #[error("No crime dataset for {year}: {}", path.display())]
    DataUnavailable {
        /// The year whose file is missing.
        year: DataYear,
        /// The path that was probed.
        path: PathBuf,
    },

    /// Reading a dataset file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// `GeoJSON` parsing failed.
    #[error("GeoJSON error: {0}")]
    Geojson(#[from] geojson::Error),

    /// The file declares a coordinate reference system the loader cannot
    /// bring to WGS84.
    #[error("Unsupported coordinate reference system: {name}")]
    UnsupportedCrs {
        /// The declared CRS name.
        name: String,
    },

    /// Data conversion error.
    #[error("Conversion error: {message}")]
    Conversion {
        /// Description of what went wrong.
        message: String,
    },
}
