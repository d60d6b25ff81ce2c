//! Railway overlay rendering.

use std::hash::{DefaultHasher, Hash, Hasher};

use rand::{Rng, SeedableRng, rngs::StdRng};
use tokyo_crime_map_geography_models::RailwayTable;
use tokyo_crime_map_render_models::{RAILWAY_WEIGHT, RailwayOverlay};

const BLACK: u32 = 0x00_0000;
const WHITE: u32 = 0xFF_FFFF;

/// Builds one overlay per distinct line name, in first-appearance order.
///
/// Each line draws its color from the 24-bit RGB space with an RNG
/// seeded from the line name, so a line keeps its color from one map to
/// the next. Black, white, and colors already taken by an earlier line
/// on the same map are rejected and redrawn. Only line-string sections
/// are drawn; other geometry types are skipped.
#[must_use]
pub fn railway_overlays(table: &RailwayTable) -> Vec<RailwayOverlay> {
    let mut used: Vec<String> = Vec::new();
    let mut overlays = Vec::new();

    for line_name in table.line_names() {
        let color = line_color(line_name, &used);
        used.push(color.clone());

        let paths: Vec<geojson::Geometry> = table
            .iter()
            .filter(|segment| segment.line_name == line_name)
            .filter_map(|segment| match &segment.geometry {
                geo::Geometry::LineString(line) => {
                    Some(geojson::Geometry::new(geojson::Value::from(line)))
                }
                _ => None,
            })
            .collect();

        if paths.is_empty() {
            log::debug!("Line {line_name} has no drawable sections");
            continue;
        }

        overlays.push(RailwayOverlay {
            line_name: line_name.to_string(),
            color,
            weight: RAILWAY_WEIGHT,
            paths,
        });
    }

    overlays
}

/// Draws a color for a line, rejecting black, white, and anything in
/// `used`.
fn line_color(line_name: &str, used: &[String]) -> String {
    let mut hasher = DefaultHasher::new();
    line_name.hash(&mut hasher);
    let mut rng = StdRng::seed_from_u64(hasher.finish());

    loop {
        let candidate: u32 = rng.random_range(0..=WHITE);
        if candidate == BLACK || candidate == WHITE {
            continue;
        }
        let color = format!("#{candidate:06x}");
        if used.contains(&color) {
            continue;
        }
        return color;
    }
}
