//! GeoJSON dataset loading.
//!
//! Parsing is split from file IO so the parse paths are testable with
//! inline fixtures. Features that cannot be used (missing key properties,
//! unusable geometry) are skipped with a warning rather than failing the
//! whole file.

use std::{collections::BTreeMap, fs, path::Path};

use geojson::{FeatureCollection, GeoJson, JsonObject, JsonValue};
use tokyo_crime_map_crime_models::{CrimeCategory, DataYear};
use tokyo_crime_map_geography_models::{RailwaySegment, RailwayTable, RegionRecord, RegionTable};

use crate::{GeographyError, crs};

/// File name of the railway section dataset.
pub const RAILWAY_FILE_NAME: &str = "N02-19_RailroadSection.geojson";

/// File name of the crime count dataset for a year.
#[must_use]
pub fn region_file_name(year: DataYear) -> String {
    format!("{year}_東京都犯罪件数.geojson")
}

/// Loads the per-district crime count table for a year from `data_dir`.
///
/// # Errors
///
/// * `GeographyError::DataUnavailable` if no file exists for the year.
/// * `GeographyError::Io` / `Geojson` / `UnsupportedCrs` if the file
///   cannot be read, parsed, or normalized to WGS84.
pub fn load_regions(data_dir: &Path, year: DataYear) -> Result<RegionTable, GeographyError> {
    let path = data_dir.join(region_file_name(year));
    if !path.is_file() {
        return Err(GeographyError::DataUnavailable { year, path });
    }

    let raw = fs::read_to_string(&path)?;
    let table = parse_regions(&raw)?;
    log::info!(
        "Loaded {} regions for {year} from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Loads the railway section table.
///
/// # Errors
///
/// * `GeographyError::Io` / `Geojson` / `UnsupportedCrs` if the file
///   cannot be read, parsed, or normalized to WGS84.
pub fn load_railways(path: &Path) -> Result<RailwayTable, GeographyError> {
    let raw = fs::read_to_string(path)?;
    let table = parse_railways(&raw)?;
    log::info!(
        "Loaded {} railway segments from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Parses a crime count `FeatureCollection` document.
///
/// Every kept region carries its `住所` address, its boundary as a WGS84
/// multi-polygon (plain polygons are wrapped), and one count per category
/// property present on the feature. Missing or non-numeric counts read
/// as 0 through [`RegionRecord::count`].
///
/// # Errors
///
/// * `GeographyError::Geojson` if the document is not valid `GeoJSON`.
/// * `GeographyError::Conversion` if it is not a `FeatureCollection`.
/// * `GeographyError::UnsupportedCrs` for an unknown declared frame.
pub fn parse_regions(raw: &str) -> Result<RegionTable, GeographyError> {
    let collection = parse_collection(raw)?;
    let source_crs = crs::detect(collection.foreign_members.as_ref())?;

    let mut records = Vec::with_capacity(collection.features.len());
    for feature in collection.features {
        let Some(address) = string_property(feature.properties.as_ref(), "住所") else {
            log::warn!("Skipping region feature without 住所 property");
            continue;
        };

        let Some(geometry) = feature.geometry else {
            log::warn!("Skipping region {address}: no geometry");
            continue;
        };
        let geo_geometry: geo::Geometry<f64> = match geometry.try_into() {
            Ok(converted) => converted,
            Err(error) => {
                log::warn!("Skipping region {address}: {error}");
                continue;
            }
        };
        let geometry = match crs::normalize_geometry(geo_geometry, source_crs) {
            geo::Geometry::MultiPolygon(multi_polygon) => multi_polygon,
            geo::Geometry::Polygon(polygon) => geo::MultiPolygon(vec![polygon]),
            _ => {
                log::warn!("Skipping region {address}: non-areal geometry");
                continue;
            }
        };

        let counts = read_counts(feature.properties.as_ref(), &address);

        records.push(RegionRecord {
            address,
            geometry,
            counts,
        });
    }

    Ok(RegionTable::new(records))
}

/// Parses a railway section `FeatureCollection` document.
///
/// Keeps the `運営会社` / `路線名` properties and the geometry as-is
/// (normalized to WGS84); which geometry types get drawn is decided at
/// render time.
///
/// # Errors
///
/// * `GeographyError::Geojson` if the document is not valid `GeoJSON`.
/// * `GeographyError::Conversion` if it is not a `FeatureCollection`.
/// * `GeographyError::UnsupportedCrs` for an unknown declared frame.
pub fn parse_railways(raw: &str) -> Result<RailwayTable, GeographyError> {
    let collection = parse_collection(raw)?;
    let source_crs = crs::detect(collection.foreign_members.as_ref())?;

    let mut segments = Vec::with_capacity(collection.features.len());
    for feature in collection.features {
        let Some(operator) = string_property(feature.properties.as_ref(), "運営会社") else {
            log::warn!("Skipping railway feature without 運営会社 property");
            continue;
        };
        let Some(line_name) = string_property(feature.properties.as_ref(), "路線名") else {
            log::warn!("Skipping railway feature without 路線名 property");
            continue;
        };

        let Some(geometry) = feature.geometry else {
            log::warn!("Skipping railway segment of {line_name}: no geometry");
            continue;
        };
        let geo_geometry: geo::Geometry<f64> = match geometry.try_into() {
            Ok(converted) => converted,
            Err(error) => {
                log::warn!("Skipping railway segment of {line_name}: {error}");
                continue;
            }
        };

        segments.push(RailwaySegment {
            operator,
            line_name,
            geometry: crs::normalize_geometry(geo_geometry, source_crs),
        });
    }

    Ok(RailwayTable::new(segments))
}

fn parse_collection(raw: &str) -> Result<FeatureCollection, GeographyError> {
    let geojson: GeoJson = raw.parse()?;
    match geojson {
        GeoJson::FeatureCollection(collection) => Ok(collection),
        _ => Err(GeographyError::Conversion {
            message: "Expected a FeatureCollection document".to_string(),
        }),
    }
}

fn string_property(properties: Option<&JsonObject>, key: &str) -> Option<String> {
    properties?.get(key)?.as_str().map(ToString::to_string)
}

fn read_counts(
    properties: Option<&JsonObject>,
    address: &str,
) -> BTreeMap<CrimeCategory, u32> {
    let mut counts = BTreeMap::new();
    let Some(properties) = properties else {
        return counts;
    };

    for category in CrimeCategory::all() {
        let Some(value) = properties.get(category.as_ref()) else {
            continue;
        };
        if let Some(count) = numeric_count(value) {
            counts.insert(*category, count);
        } else if !value.is_null() {
            log::warn!("Region {address}: ignoring non-numeric {category} count {value}");
        }
    }

    counts
}

/// Reads a count as a non-negative integer. Count columns occasionally
/// arrive as integral floats; those are accepted as exact values.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn numeric_count(value: &JsonValue) -> Option<u32> {
    if let Some(count) = value.as_u64() {
        return u32::try_from(count).ok();
    }
    value
        .as_f64()
        .filter(|count| count.fract() == 0.0 && *count >= 0.0 && *count <= f64::from(u32::MAX))
        .map(|count| count as u32)
}
