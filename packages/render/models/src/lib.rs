#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Map artifact types produced by the render pipeline.
//!
//! A serialized [`MapArtifact`] is the boundary of this system: an
//! external display surface takes it from here. The constants are the
//! fixed styling of the Tokyo map; everything that varies per selection
//! lives in the layer types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Latitude of the map center.
pub const TOKYO_CENTER_LAT: f64 = 35.658_593;
/// Longitude of the map center.
pub const TOKYO_CENTER_LON: f64 = 139.745_441;
/// Initial zoom level.
pub const TOKYO_ZOOM: u8 = 10;
/// Base tile layer identifier.
pub const TILE_LAYER: &str = "cartodbpositron";

/// Fill opacity of choropleth regions.
pub const FILL_OPACITY: f64 = 0.7;
/// Border opacity of choropleth regions.
pub const LINE_OPACITY: f64 = 0.2;
/// Border color of choropleth regions.
pub const BORDER_COLOR: &str = "black";
/// Border weight of choropleth regions.
pub const BORDER_WEIGHT: f64 = 0.5;
/// Railway polyline weight.
pub const RAILWAY_WEIGHT: f64 = 2.0;

/// Notice shown when the selected category has no reported cases.
pub const NO_DATA_NOTICE: &str = "0件のため表示できるデータがありません";

/// The fixed base map framing: center, zoom, and tile layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseMap {
    /// Map center latitude.
    pub center_lat: f64,
    /// Map center longitude.
    pub center_lon: f64,
    /// Initial zoom level.
    pub zoom: u8,
    /// Tile layer identifier.
    pub tiles: String,
}

impl BaseMap {
    /// The Tokyo framing used by every map this system produces.
    #[must_use]
    pub fn tokyo() -> Self {
        Self {
            center_lat: TOKYO_CENTER_LAT,
            center_lon: TOKYO_CENTER_LON,
            zoom: TOKYO_ZOOM,
            tiles: TILE_LAYER.to_string(),
        }
    }
}

impl Default for BaseMap {
    fn default() -> Self {
        Self::tokyo()
    }
}

/// One filled region of the choropleth layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoroplethRegion {
    /// District address the region represents.
    pub address: String,
    /// Count of the selected category in this region.
    pub value: u32,
    /// Fill color as lowercase `#rrggbb`.
    pub fill_color: String,
    /// Hover text: address, category, and count.
    pub tooltip: String,
    /// Region boundary as `GeoJSON` (WGS84).
    pub geometry: geojson::Geometry,
}

/// The choropleth layer for one category selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoroplethLayer {
    /// Legend label (the selected category).
    pub legend: String,
    /// Color bin boundaries, low to high.
    pub threshold_scale: Vec<f64>,
    /// Fill opacity of region polygons.
    pub fill_opacity: f64,
    /// Opacity of region borders.
    pub line_opacity: f64,
    /// Border color of region polygons.
    pub border_color: String,
    /// Border weight of region polygons.
    pub border_weight: f64,
    /// The filled regions, worst first.
    pub regions: Vec<ChoroplethRegion>,
}

/// One railway line drawn over the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RailwayOverlay {
    /// Line name (`路線名`).
    pub line_name: String,
    /// Polyline color as lowercase `#rrggbb`, unique per line on a map.
    pub color: String,
    /// Polyline weight.
    pub weight: f64,
    /// The line's sections as `GeoJSON` line strings (WGS84).
    pub paths: Vec<geojson::Geometry>,
}

/// The composite map handed to the display surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapArtifact {
    /// Base map framing.
    pub base: BaseMap,
    /// Choropleth layer; absent when nothing is drawable.
    pub choropleth: Option<ChoroplethLayer>,
    /// Railway overlays, one per drawn line.
    pub railways: Vec<RailwayOverlay>,
    /// When this artifact was generated.
    pub generated_at: DateTime<Utc>,
}

impl MapArtifact {
    /// An artifact carrying only the base map. This is the initial
    /// session state and the fallback when a category has no data.
    #[must_use]
    pub fn base_only() -> Self {
        Self {
            base: BaseMap::tokyo(),
            choropleth: None,
            railways: Vec::new(),
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_only_artifact_has_no_layers() {
        let artifact = MapArtifact::base_only();
        assert!(artifact.choropleth.is_none());
        assert!(artifact.railways.is_empty());
        assert_eq!(artifact.base, BaseMap::tokyo());
    }

    #[test]
    fn artifact_serializes_with_camel_case_keys() {
        let artifact = MapArtifact::base_only();
        let value = serde_json::to_value(&artifact).unwrap();

        assert!(value.get("generatedAt").is_some());
        let base = value.get("base").unwrap();
        assert_eq!(
            base.get("centerLat").unwrap().as_f64().unwrap(),
            TOKYO_CENTER_LAT
        );
        assert_eq!(
            base.get("tiles").unwrap().as_str().unwrap(),
            "cartodbpositron"
        );
    }
}
