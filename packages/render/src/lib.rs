#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Map rendering pipeline.
//!
//! Turns loaded tables into the serializable map artifact: a threshold
//! color scale anchored on the whole table, filled regions for the
//! ranked cut, and one colored polyline overlay per railway line.

pub mod choropleth;
pub mod color;
pub mod lines;
pub mod pipeline;

use thiserror::Error;
use tokyo_crime_map_crime_models::CrimeCategory;
use tokyo_crime_map_geography::GeographyError;

/// Errors that can occur while building a map.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The selected category has no reported cases anywhere in the
    /// year's table. A signal rather than a failure: callers fall back
    /// to the base map with a notice.
    #[error("No data to display for {category}")]
    NoData {
        /// The category that came up empty.
        category: CrimeCategory,
    },

    /// Loading a dataset failed.
    #[error("Geography error: {0}")]
    Geography(#[from] GeographyError),
}
