//! Memoizing dataset cache.
//!
//! The two inputs are read-only for the lifetime of the process, so each
//! file is read and parsed at most once. Lookups after the first return
//! the shared parsed table without touching storage. Load failures are
//! not cached; a later call retries the read.

use std::{
    collections::BTreeMap,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use tokyo_crime_map_crime_models::DataYear;
use tokyo_crime_map_geography_models::{RailwayTable, RegionTable};

use crate::{GeographyError, loader};

/// Per-process cache over the crime count and railway datasets.
pub struct DatasetCache {
    data_dir: PathBuf,
    railway_path: PathBuf,
    regions: Mutex<BTreeMap<DataYear, Arc<RegionTable>>>,
    railways: Mutex<Option<Arc<RailwayTable>>>,
}

impl DatasetCache {
    /// Creates a cache over a data directory. The railway file is
    /// expected inside it under its standard name unless overridden with
    /// [`DatasetCache::with_railway_path`].
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let railway_path = data_dir.join(loader::RAILWAY_FILE_NAME);
        Self {
            data_dir,
            railway_path,
            regions: Mutex::new(BTreeMap::new()),
            railways: Mutex::new(None),
        }
    }

    /// Overrides where the railway section file is read from.
    #[must_use]
    pub fn with_railway_path(mut self, railway_path: impl Into<PathBuf>) -> Self {
        self.railway_path = railway_path.into();
        self
    }

    /// Returns the region table for a year, reading the file on first use.
    ///
    /// # Errors
    ///
    /// Propagates [`loader::load_regions`] errors, including
    /// `GeographyError::DataUnavailable` for years without a file.
    ///
    /// # Panics
    ///
    /// * If the internal cache mutex is poisoned.
    pub fn regions(&self, year: DataYear) -> Result<Arc<RegionTable>, GeographyError> {
        let mut cache = self.regions.lock().expect("regions cache mutex poisoned");
        if let Some(table) = cache.get(&year) {
            log::debug!("Serving {year} region table from cache");
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(loader::load_regions(&self.data_dir, year)?);
        cache.insert(year, Arc::clone(&table));
        Ok(table)
    }

    /// Returns the railway table, reading the file on first use.
    ///
    /// # Errors
    ///
    /// Propagates [`loader::load_railways`] errors.
    ///
    /// # Panics
    ///
    /// * If the internal cache mutex is poisoned.
    pub fn railways(&self) -> Result<Arc<RailwayTable>, GeographyError> {
        let mut cache = self.railways.lock().expect("railway cache mutex poisoned");
        if let Some(table) = cache.as_ref() {
            log::debug!("Serving railway table from cache");
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(loader::load_railways(&self.railway_path)?);
        *cache = Some(Arc::clone(&table));
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const REGIONS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"住所": "新宿区歌舞伎町1丁目", "総合計": 8},
                "geometry": {"type": "Polygon", "coordinates": [[[139.70, 35.69], [139.71, 35.69], [139.71, 35.70], [139.70, 35.69]]]}
            }
        ]
    }"#;

    const RAILWAYS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"運営会社": "東日本旅客鉄道", "路線名": "山手線"},
                "geometry": {"type": "LineString", "coordinates": [[139.70, 35.65], [139.71, 35.66]]}
            }
        ]
    }"#;

    fn temp_data_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "tokyo_crime_map_cache_{tag}_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn second_region_lookup_skips_storage() {
        let dir = temp_data_dir("regions");
        let path = dir.join(loader::region_file_name(DataYear::Y2021));
        fs::write(&path, REGIONS).unwrap();

        let cache = DatasetCache::new(&dir);
        let first = cache.regions(DataYear::Y2021).unwrap();
        assert_eq!(first.len(), 1);

        // With the file gone, only the cache can satisfy this.
        fs::remove_file(&path).unwrap();
        let second = cache.regions(DataYear::Y2021).unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_year_is_data_unavailable() {
        let dir = temp_data_dir("missing_year");
        let cache = DatasetCache::new(&dir);

        let error = cache.regions(DataYear::Y2019).unwrap_err();
        assert!(matches!(
            error,
            GeographyError::DataUnavailable {
                year: DataYear::Y2019,
                ..
            }
        ));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn failed_region_load_is_retried() {
        let dir = temp_data_dir("retry");
        let cache = DatasetCache::new(&dir);
        assert!(cache.regions(DataYear::Y2022).is_err());

        let path = dir.join(loader::region_file_name(DataYear::Y2022));
        fs::write(&path, REGIONS).unwrap();
        assert!(cache.regions(DataYear::Y2022).is_ok());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn second_railway_lookup_skips_storage() {
        let dir = temp_data_dir("railways");
        let path = dir.join(loader::RAILWAY_FILE_NAME);
        fs::write(&path, RAILWAYS).unwrap();

        let cache = DatasetCache::new(&dir);
        let first = cache.railways().unwrap();
        assert_eq!(first.len(), 1);

        fs::remove_file(&path).unwrap();
        let second = cache.railways().unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn railway_path_can_be_overridden() {
        let dir = temp_data_dir("railway_override");
        let path = dir.join("custom_rail.geojson");
        fs::write(&path, RAILWAYS).unwrap();

        let cache = DatasetCache::new(&dir).with_railway_path(&path);
        assert_eq!(cache.railways().unwrap().len(), 1);

        let _ = fs::remove_dir_all(&dir);
    }
}
