#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Region and railway record types.
//!
//! These types are the in-memory form of the two GeoJSON inputs after
//! loading and coordinate normalization. They are independent of how the
//! map is rendered: records hold plain `geo` geometry in WGS84 plus the
//! source properties the pipeline needs.

use std::collections::BTreeMap;

use tokyo_crime_map_crime_models::CrimeCategory;

/// One district (丁目) row of the per-year crime count dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionRecord {
    /// District address (property `住所`), unique within a year's file.
    pub address: String,
    /// Region boundary in WGS84. Polygon features are wrapped into a
    /// single-member multi-polygon at load time.
    pub geometry: geo::MultiPolygon<f64>,
    /// Crime counts by category. Categories absent from the source row
    /// are simply absent here; [`RegionRecord::count`] reads them as 0.
    pub counts: BTreeMap<CrimeCategory, u32>,
}

impl RegionRecord {
    /// Returns the count for a category, treating missing values as 0.
    #[must_use]
    pub fn count(&self, category: CrimeCategory) -> u32 {
        self.counts.get(&category).copied().unwrap_or(0)
    }
}

/// An ordered collection of region records, preserving source file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegionTable {
    records: Vec<RegionRecord>,
}

impl RegionTable {
    #[must_use]
    pub const fn new(records: Vec<RegionRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[RegionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RegionRecord> {
        self.records.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RegionTable {
    type Item = &'a RegionRecord;
    type IntoIter = std::slice::Iter<'a, RegionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// One railway section feature.
///
/// Geometry is kept as loaded (any GeoJSON type survives); renderers
/// decide what to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct RailwaySegment {
    /// Operating company (property `運営会社`).
    pub operator: String,
    /// Line name (property `路線名`).
    pub line_name: String,
    /// Section geometry in WGS84.
    pub geometry: geo::Geometry<f64>,
}

/// An ordered collection of railway segments, preserving source file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RailwayTable {
    segments: Vec<RailwaySegment>,
}

impl RailwayTable {
    #[must_use]
    pub const fn new(segments: Vec<RailwaySegment>) -> Self {
        Self { segments }
    }

    #[must_use]
    pub fn segments(&self) -> &[RailwaySegment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RailwaySegment> {
        self.segments.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the distinct line names in order of first appearance.
    #[must_use]
    pub fn line_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if !names.contains(&segment.line_name.as_str()) {
                names.push(&segment.line_name);
            }
        }
        names
    }
}

impl<'a> IntoIterator for &'a RailwayTable {
    type Item = &'a RailwaySegment;
    type IntoIter = std::slice::Iter<'a, RailwaySegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::line_string;

    fn segment(operator: &str, line_name: &str) -> RailwaySegment {
        RailwaySegment {
            operator: operator.to_string(),
            line_name: line_name.to_string(),
            geometry: geo::Geometry::LineString(line_string![
                (x: 139.7, y: 35.6),
                (x: 139.8, y: 35.7),
            ]),
        }
    }

    #[test]
    fn missing_count_reads_as_zero() {
        let record = RegionRecord {
            address: "千代田区丸の内1丁目".to_string(),
            geometry: geo::MultiPolygon::new(vec![]),
            counts: BTreeMap::from([(CrimeCategory::Robbery, 3)]),
        };

        assert_eq!(record.count(CrimeCategory::Robbery), 3);
        assert_eq!(record.count(CrimeCategory::BicycleTheft), 0);
    }

    #[test]
    fn line_names_keep_first_appearance_order() {
        let table = RailwayTable::new(vec![
            segment("東日本旅客鉄道", "山手線"),
            segment("東日本旅客鉄道", "中央線"),
            segment("東日本旅客鉄道", "山手線"),
            segment("東日本旅客鉄道", "南武線"),
        ]);

        assert_eq!(table.line_names(), vec!["山手線", "中央線", "南武線"]);
    }

    #[test]
    fn empty_table_has_no_line_names() {
        let table = RailwayTable::default();
        assert!(table.is_empty());
        assert!(table.line_names().is_empty());
    }
}
