//! Map composition.

use tokyo_crime_map_analytics::worst_n;
use tokyo_crime_map_crime_models::{CrimeCategory, DataYear};
use tokyo_crime_map_geography::{cache::DatasetCache, railway::select_tokyo_lines};
use tokyo_crime_map_render_models::{BaseMap, MapArtifact};

use crate::{RenderError, choropleth, lines};

/// Builds the composite map for a `(year, category, rank)` selection.
///
/// Datasets come from the cache; the same selection over the same files
/// yields the same layers, down to the railway colors. Nothing partial
/// is produced: an error means no artifact.
///
/// # Errors
///
/// * `RenderError::NoData` when the category has no cases anywhere in
///   the year's table. Callers fall back to [`MapArtifact::base_only`]
///   with a notice.
/// * `RenderError::Geography` when a dataset cannot be loaded, including
///   the missing-year case.
pub fn build_map(
    datasets: &DatasetCache,
    year: DataYear,
    category: CrimeCategory,
    rank: usize,
) -> Result<MapArtifact, RenderError> {
    let full = datasets.regions(year)?;
    let ranked = worst_n(&full, category, rank);
    let choropleth = choropleth::choropleth_layer(&full, &ranked, category)?;

    let railways = datasets.railways()?;
    let selected = select_tokyo_lines(&railways);
    let overlays = lines::railway_overlays(&selected);

    log::info!(
        "Built map for {year} {category} rank {rank}: {} filled regions, {} lines",
        choropleth.as_ref().map_or(0, |layer| layer.regions.len()),
        overlays.len()
    );

    Ok(MapArtifact {
        base: BaseMap::tokyo(),
        choropleth,
        railways: overlays,
        generated_at: chrono::Utc::now(),
    })
}
