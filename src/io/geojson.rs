use anyhow::{bail, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::Value;

use crate::layer::CountyFeature;
use crate::types::Geoid;

/// Read county features from county.json (GeoJSON FeatureCollection) bytes.
///
/// Each feature needs `properties.GEOID`, `properties.NAME`, and a Polygon or
/// MultiPolygon geometry; features missing any of these are skipped rather
/// than failing the whole collection. Collection order is preserved.
pub fn read_features(bytes: &[u8]) -> Result<Vec<CountyFeature>> {
    let value: Value = serde_json::from_slice(bytes).context("Failed to parse GeoJSON bytes")?;

    if value["type"].as_str() != Some("FeatureCollection") {
        bail!("Expected a GeoJSON FeatureCollection");
    }

    let mut features = Vec::new();
    if let Some(collection) = value["features"].as_array() {
        for feature in collection {
            let Some(geoid) = feature["properties"]["GEOID"].as_str() else { continue };
            let Some(name) = feature["properties"]["NAME"].as_str() else { continue };
            let Some(geometry) = parse_geometry(&feature["geometry"])? else { continue };
            features.push(CountyFeature::new(Geoid::new(geoid), name, geometry));
        }
    }
    Ok(features)
}

/// Parse a GeoJSON geometry object into a MultiPolygon. A plain Polygon is
/// promoted to a single-member MultiPolygon; other geometry types yield None.
fn parse_geometry(geometry: &Value) -> Result<Option<MultiPolygon<f64>>> {
    let Some(coords) = geometry["coordinates"].as_array() else { return Ok(None) };

    match geometry["type"].as_str() {
        Some("MultiPolygon") => Ok(Some(parse_multipolygon_coords(coords)?)),
        Some("Polygon") => Ok(Some(MultiPolygon(vec![parse_polygon_coords(coords)?]))),
        _ => Ok(None),
    }
}

/// Parse MultiPolygon coordinates: [[ring, ring, ...], ...] where the first
/// ring of each polygon is the exterior and the rest are holes.
fn parse_multipolygon_coords(coords: &[Value]) -> Result<MultiPolygon<f64>> {
    let mut polygons = Vec::new();
    for polygon_coords in coords {
        let rings = polygon_coords.as_array()
            .context("Invalid MultiPolygon: polygon is not an array of rings")?;
        polygons.push(parse_polygon_coords(rings)?);
    }
    Ok(MultiPolygon(polygons))
}

/// Parse Polygon coordinates: [exterior, hole, hole, ...]
fn parse_polygon_coords(rings: &[Value]) -> Result<Polygon<f64>> {
    let exterior_coords = rings.first()
        .and_then(|v| v.as_array())
        .context("Invalid Polygon: missing exterior ring")?;
    let exterior = parse_ring_coords(exterior_coords)?;

    let mut interiors = Vec::new();
    for interior_ring in &rings[1..] {
        if let Some(ring_array) = interior_ring.as_array() {
            interiors.push(parse_ring_coords(ring_array)?);
        }
    }

    Ok(Polygon::new(exterior, interiors))
}

/// Parse a ring (exterior or interior): [[x, y], [x, y], ...]
fn parse_ring_coords(coords: &[Value]) -> Result<LineString<f64>> {
    let mut points = Vec::new();

    for coord_pair in coords {
        if let Some(coord_array) = coord_pair.as_array() {
            if coord_array.len() >= 2 {
                let x = coord_array[0].as_f64()
                    .context("Invalid coordinate: x must be a number")?;
                let y = coord_array[1].as_f64()
                    .context("Invalid coordinate: y must be a number")?;
                points.push(Coord { x, y });
            }
        }
    }

    // Ensure ring is closed (first point == last point)
    if !points.is_empty() && points[0] != points[points.len() - 1] {
        points.push(points[0]);
    }

    Ok(LineString(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::BoundingRect;

    const SAMPLE: &[u8] = br#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"GEOID": "19153", "NAME": "Polk"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[-93.8, 41.5], [-93.3, 41.5], [-93.3, 41.9], [-93.8, 41.9], [-93.8, 41.5]]]
                }
            },
            {
                "type": "Feature",
                "properties": {"GEOID": "19013", "NAME": "Black Hawk"},
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [[[[-92.5, 42.3], [-92.0, 42.3], [-92.0, 42.6], [-92.5, 42.3]]]]
                }
            },
            {
                "type": "Feature",
                "properties": {"NAME": "No Geoid"},
                "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]}
            }
        ]
    }"#;

    #[test]
    fn reads_polygon_and_multipolygon_features() {
        let features = read_features(SAMPLE).unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].geoid().as_str(), "19153");
        assert_eq!(features[0].name(), "Polk");
        assert_eq!(features[1].geoid().as_str(), "19013");

        let bounds = features[0].bounds().unwrap();
        assert_eq!(bounds, features[0].geometry().bounding_rect().unwrap());
        assert_eq!(bounds.min().x, -93.8);
        assert_eq!(bounds.max().y, 41.9);
    }

    #[test]
    fn features_missing_properties_are_skipped() {
        let features = read_features(SAMPLE).unwrap();
        assert!(features.iter().all(|f| f.name() != "No Geoid"));
    }

    #[test]
    fn unclosed_rings_are_closed() {
        let features = read_features(br#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"GEOID": "1", "NAME": "Open"},
                "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1]]]}
            }]
        }"#).unwrap();
        let exterior = features[0].geometry().0[0].exterior();
        assert_eq!(exterior.0.first(), exterior.0.last());
    }

    #[test]
    fn non_collection_input_is_an_error() {
        assert!(read_features(br#"{"type": "Feature"}"#).is_err());
        assert!(read_features(b"not json").is_err());
    }
}
