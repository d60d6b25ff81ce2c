//! Choropleth layer rendering.

use tokyo_crime_map_analytics::category_range;
use tokyo_crime_map_crime_models::CrimeCategory;
use tokyo_crime_map_geography_models::RegionTable;
use tokyo_crime_map_render_models::{
    BORDER_COLOR, BORDER_WEIGHT, ChoroplethLayer, ChoroplethRegion, FILL_OPACITY, LINE_OPACITY,
};

use crate::{RenderError, color};

/// Builds the choropleth layer for a category selection.
///
/// The threshold scale is anchored on the category's range over the
/// whole table, so a given count keeps its color whichever rank cut is
/// shown. Only ranked regions with at least one case are filled.
///
/// Returns `Ok(None)` when the ranked cut leaves nothing to fill (for
/// example a rank of 0): the map simply carries no choropleth layer.
///
/// # Errors
///
/// * `RenderError::NoData` when the category has no reported cases in
///   the whole table. Callers show the base map with a notice instead.
pub fn choropleth_layer(
    full: &RegionTable,
    ranked: &RegionTable,
    category: CrimeCategory,
) -> Result<Option<ChoroplethLayer>, RenderError> {
    let Some((min, max)) = category_range(full, category) else {
        return Err(RenderError::NoData { category });
    };
    if max == 0 {
        return Err(RenderError::NoData { category });
    }

    let scale = color::threshold_scale(min, max);

    let regions: Vec<ChoroplethRegion> = ranked
        .iter()
        .filter(|record| record.count(category) > 0)
        .map(|record| {
            let value = record.count(category);
            ChoroplethRegion {
                address: record.address.clone(),
                value,
                fill_color: color::fill_color(value, &scale),
                tooltip: format!("{} / {category}:{value}件", record.address),
                geometry: geojson::Geometry::new(geojson::Value::from(&record.geometry)),
            }
        })
        .collect();

    if regions.is_empty() {
        log::info!("Nothing to fill for {category} in the ranked cut");
        return Ok(None);
    }

    Ok(Some(ChoroplethLayer {
        legend: category.to_string(),
        threshold_scale: scale,
        fill_opacity: FILL_OPACITY,
        line_opacity: LINE_OPACITY,
        border_color: BORDER_COLOR.to_string(),
        border_weight: BORDER_WEIGHT,
        regions,
    }))
}
