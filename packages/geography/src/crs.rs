//! Coordinate reference system detection and normalization.
//!
//! The source files predate RFC 7946 and may carry a legacy top-level
//! `crs` member. Geographic frames that already agree with WGS84 at map
//! display precision (WGS84 itself plus the JGD2000/JGD2011 frames used
//! by Japanese government data) pass through untouched; spherical Web
//! Mercator is inverted analytically. Anything else is refused rather
//! than drawn in the wrong place.

use std::f64::consts::FRAC_PI_2;

use geo::MapCoords;
use geojson::JsonObject;

use crate::GeographyError;

/// WGS84 semi-major axis in meters, the sphere radius of Web Mercator.
const WGS84_A: f64 = 6_378_137.0;

/// Coordinate reference systems the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceCrs {
    /// Longitude/latitude degrees: WGS84 (EPSG:4326 / CRS84) or the
    /// JGD2000 (EPSG:4612) / JGD2011 (EPSG:6668) geographic frames.
    Geographic,
    /// EPSG:3857 spherical Web Mercator meters.
    WebMercator,
}

/// Determines the source CRS from a collection's foreign members.
///
/// A missing `crs` member means WGS84, the GeoJSON default.
///
/// # Errors
///
/// * `GeographyError::UnsupportedCrs` if the declared frame is none of
///   the supported ones.
/// * `GeographyError::Conversion` if a `crs` member is present but not in
///   the legacy named-CRS shape.
pub fn detect(foreign_members: Option<&JsonObject>) -> Result<SourceCrs, GeographyError> {
    let Some(crs) = foreign_members.and_then(|members| members.get("crs")) else {
        return Ok(SourceCrs::Geographic);
    };

    let Some(name) = crs
        .as_object()
        .and_then(|crs| crs.get("properties"))
        .and_then(|properties| properties.as_object())
        .and_then(|properties| properties.get("name"))
        .and_then(|name| name.as_str())
    else {
        return Err(GeographyError::Conversion {
            message: format!("Malformed crs member: {crs}"),
        });
    };

    // Names arrive as bare codes ("EPSG:4326") or OGC urns
    // ("urn:ogc:def:crs:EPSG::4326"); the trailing segment is the code.
    let code = name.rsplit(':').next().unwrap_or(name);
    match code {
        "CRS84" | "WGS84" | "4326" | "4612" | "6668" => Ok(SourceCrs::Geographic),
        "3857" | "900913" => Ok(SourceCrs::WebMercator),
        _ => Err(GeographyError::UnsupportedCrs {
            name: name.to_string(),
        }),
    }
}

/// Brings a geometry into WGS84 longitude/latitude degrees.
#[must_use]
pub fn normalize_geometry(geometry: geo::Geometry<f64>, crs: SourceCrs) -> geo::Geometry<f64> {
    match crs {
        SourceCrs::Geographic => geometry,
        SourceCrs::WebMercator => geometry.map_coords(mercator_to_wgs84),
    }
}

fn mercator_to_wgs84(coord: geo::Coord<f64>) -> geo::Coord<f64> {
    let lon = (coord.x / WGS84_A).to_degrees();
    let lat = (coord.y / WGS84_A)
        .exp()
        .atan()
        .mul_add(2.0, -FRAC_PI_2)
        .to_degrees();
    geo::coord! { x: lon, y: lat }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::JsonValue;
    use std::f64::consts::{FRAC_PI_4, PI};

    fn members_with_crs(name: &str) -> JsonObject {
        let crs: JsonValue = serde_json::json!({
            "type": "name",
            "properties": { "name": name },
        });
        let mut members = JsonObject::new();
        members.insert("crs".to_string(), crs);
        members
    }

    #[test]
    fn missing_crs_member_defaults_to_wgs84() {
        assert_eq!(detect(None).unwrap(), SourceCrs::Geographic);
        assert_eq!(detect(Some(&JsonObject::new())).unwrap(), SourceCrs::Geographic);
    }

    #[test]
    fn geographic_frames_pass_through() {
        for name in [
            "urn:ogc:def:crs:OGC:1.3:CRS84",
            "EPSG:4326",
            "urn:ogc:def:crs:EPSG::6668",
            "urn:ogc:def:crs:EPSG::4612",
        ] {
            let members = members_with_crs(name);
            assert_eq!(
                detect(Some(&members)).unwrap(),
                SourceCrs::Geographic,
                "{name} should be geographic"
            );
        }
    }

    #[test]
    fn web_mercator_is_detected() {
        let members = members_with_crs("urn:ogc:def:crs:EPSG::3857");
        assert_eq!(detect(Some(&members)).unwrap(), SourceCrs::WebMercator);
    }

    #[test]
    fn unknown_frame_is_refused() {
        let members = members_with_crs("urn:ogc:def:crs:EPSG::2451");
        let error = detect(Some(&members)).unwrap_err();
        assert!(matches!(error, GeographyError::UnsupportedCrs { .. }));
    }

    #[test]
    fn malformed_crs_member_is_an_error() {
        let mut members = JsonObject::new();
        members.insert("crs".to_string(), JsonValue::from(4326));
        let error = detect(Some(&members)).unwrap_err();
        assert!(matches!(error, GeographyError::Conversion { .. }));
    }

    #[test]
    fn mercator_inversion_hits_known_anchors() {
        let origin = mercator_to_wgs84(geo::coord! { x: 0.0, y: 0.0 });
        assert!(origin.x.abs() < 1e-12);
        assert!(origin.y.abs() < 1e-12);

        let antimeridian = mercator_to_wgs84(geo::coord! { x: WGS84_A * PI, y: 0.0 });
        assert!((antimeridian.x - 180.0).abs() < 1e-9);
    }

    #[test]
    fn mercator_inversion_round_trips_tokyo() {
        let lon = 139.745_441_f64;
        let lat = 35.658_593_f64;
        let x = WGS84_A * lon.to_radians();
        let y = WGS84_A * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();

        let geometry = geo::Geometry::Point(geo::Point::new(x, y));
        let normalized = normalize_geometry(geometry, SourceCrs::WebMercator);
        let geo::Geometry::Point(point) = normalized else {
            panic!("geometry type changed");
        };

        assert!((point.x() - lon).abs() < 1e-9);
        assert!((point.y() - lat).abs() < 1e-9);
    }

    #[test]
    fn geographic_geometry_is_untouched() {
        let geometry = geo::Geometry::Point(geo::Point::new(139.7, 35.6));
        let normalized = normalize_geometry(geometry.clone(), SourceCrs::Geographic);
        assert_eq!(normalized, geometry);
    }
}
