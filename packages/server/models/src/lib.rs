#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the Tokyo crime map server.
//!
//! These types are serialized to JSON for the REST API. Selection values
//! travel as their dataset labels (`"2023"`, `"総合計"`), so the menus
//! served by the API are directly submittable.

use serde::{Deserialize, Serialize};
use tokyo_crime_map_crime_models::{CrimeCategory, DataYear};
use tokyo_crime_map_render_models::MapArtifact;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the server is healthy.
    pub healthy: bool,
    /// Server version.
    pub version: String,
}

/// One crime category option of the selection menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCategory {
    /// Category label (the dataset column name).
    pub name: String,
    /// Group label; absent for the grand total.
    pub group: Option<String>,
    /// Whether this is a total column rather than a specific offense.
    pub is_total: bool,
}

/// Request body for map generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRequest {
    /// Dataset year label, `"2019"` through `"2023"`.
    pub year: DataYear,
    /// Crime category label, e.g. `"総合計"`.
    pub category: CrimeCategory,
    /// How many worst regions to fill.
    pub rank: usize,
}

/// Response carrying the generated (or current) map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapResponse {
    /// The composite map artifact.
    pub map: MapArtifact,
    /// User-facing notice; set when the map fell back to base-only.
    pub notice: Option<String>,
}

/// Builds the category menu: every selectable label in dataset column
/// order, with its group metadata.
#[must_use]
pub fn category_menu() -> Vec<ApiCategory> {
    CrimeCategory::all()
        .iter()
        .map(|category| ApiCategory {
            name: category.to_string(),
            group: category.group().map(|group| group.to_string()),
            is_total: category.is_total(),
        })
        .collect()
}

/// Builds the year menu, oldest first.
#[must_use]
pub fn year_menu() -> Vec<String> {
    DataYear::all().iter().map(ToString::to_string).collect()
}
