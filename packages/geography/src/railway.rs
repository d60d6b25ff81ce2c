//! Railway operator and line selection.

use tokyo_crime_map_geography_models::RailwayTable;

/// The operator whose lines are drawn (East Japan Railway Company).
pub const JR_EAST_OPERATOR: &str = "東日本旅客鉄道";

/// The JR East lines shown on the Tokyo map.
pub const TOKYO_AREA_LINES: &[&str] = &[
    "横須賀線",
    "山手線",
    "赤羽線（埼京線）",
    "総武線",
    "中央線",
    "東海道線",
    "東北線（埼京線）",
    "東北線",
    "南武線",
    "武蔵野線",
];

/// Filters a railway table down to the JR East lines shown on the map.
///
/// Pure: the input is untouched and segment order is preserved.
#[must_use]
pub fn select_tokyo_lines(table: &RailwayTable) -> RailwayTable {
    let segments = table
        .iter()
        .filter(|segment| {
            segment.operator == JR_EAST_OPERATOR
                && TOKYO_AREA_LINES.contains(&segment.line_name.as_str())
        })
        .cloned()
        .collect();
    RailwayTable::new(segments)
}
