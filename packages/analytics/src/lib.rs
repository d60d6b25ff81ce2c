#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Ranking and per-category statistics over region tables.
//!
//! Pure functions: inputs are borrowed and never mutated, so the cached
//! tables can be shared freely between calls.

use tokyo_crime_map_crime_models::CrimeCategory;
use tokyo_crime_map_geography_models::{RegionRecord, RegionTable};

/// Rank presets offered by interactive surfaces. [`worst_n`] itself
/// accepts any non-negative rank; these are just the menu choices.
pub const RANK_MENU: &[usize] = &[0, 10, 20, 50, 100, 150];

/// Returns the `n` regions with the highest count for a category,
/// ordered worst first.
///
/// The sort is stable: regions with equal counts keep their source file
/// order. `n = 0` yields an empty table; `n` past the table length
/// yields the whole table sorted.
#[must_use]
pub fn worst_n(table: &RegionTable, category: CrimeCategory, n: usize) -> RegionTable {
    let mut records: Vec<RegionRecord> = table.records().to_vec();
    records.sort_by(|a, b| b.count(category).cmp(&a.count(category)));
    records.truncate(n);
    RegionTable::new(records)
}

/// Returns `(min, max)` of a category's counts over the whole table, or
/// `None` for an empty table.
///
/// The range is taken over every region, not a ranked subset, so it can
/// anchor a color scale that stays comparable across rank selections.
#[must_use]
pub fn category_range(table: &RegionTable, category: CrimeCategory) -> Option<(u32, u32)> {
    let mut counts = table.iter().map(|record| record.count(category));
    let first = counts.next()?;
    let (min, max) = counts.fold((first, first), |(min, max), count| {
        (min.min(count), max.max(count))
    });
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn region(address: &str, count: u32) -> RegionRecord {
        RegionRecord {
            address: address.to_string(),
            geometry: geo::MultiPolygon::new(vec![]),
            counts: BTreeMap::from([(CrimeCategory::GrandTotal, count)]),
        }
    }

    fn table() -> RegionTable {
        RegionTable::new(vec![
            region("足立区千住1丁目", 5),
            region("新宿区歌舞伎町1丁目", 20),
            region("世田谷区北沢2丁目", 5),
            region("千代田区丸の内1丁目", 0),
            region("豊島区池袋2丁目", 12),
        ])
    }

    #[test]
    fn ranks_worst_regions_first() {
        let ranked = worst_n(&table(), CrimeCategory::GrandTotal, 3);

        let addresses: Vec<&str> = ranked.iter().map(|r| r.address.as_str()).collect();
        assert_eq!(
            addresses,
            vec!["新宿区歌舞伎町1丁目", "豊島区池袋2丁目", "足立区千住1丁目"]
        );
    }

    #[test]
    fn ties_keep_source_order() {
        let ranked = worst_n(&table(), CrimeCategory::GrandTotal, 4);

        let addresses: Vec<&str> = ranked.iter().map(|r| r.address.as_str()).collect();
        // Both 5-count regions appear, in their original relative order.
        assert_eq!(addresses[2], "足立区千住1丁目");
        assert_eq!(addresses[3], "世田谷区北沢2丁目");
    }

    #[test]
    fn zero_n_yields_an_empty_table() {
        assert!(worst_n(&table(), CrimeCategory::GrandTotal, 0).is_empty());
    }

    #[test]
    fn oversized_n_yields_the_whole_table_sorted() {
        let full = table();
        let ranked = worst_n(&full, CrimeCategory::GrandTotal, 100);

        assert_eq!(ranked.len(), full.len());
        assert_eq!(ranked.records()[0].address, "新宿区歌舞伎町1丁目");
        assert_eq!(ranked.records()[4].address, "千代田区丸の内1丁目");
    }

    #[test]
    fn ranking_does_not_mutate_the_input() {
        let full = table();
        let _ = worst_n(&full, CrimeCategory::GrandTotal, 2);
        assert_eq!(full.records()[0].address, "足立区千住1丁目");
    }

    #[test]
    fn range_spans_the_whole_table() {
        assert_eq!(
            category_range(&table(), CrimeCategory::GrandTotal),
            Some((0, 20))
        );
        // A category no region reports reads as all zeros.
        assert_eq!(
            category_range(&table(), CrimeCategory::Robbery),
            Some((0, 0))
        );
    }

    #[test]
    fn empty_table_has_no_range() {
        assert_eq!(
            category_range(&RegionTable::default(), CrimeCategory::GrandTotal),
            None
        );
    }
}
