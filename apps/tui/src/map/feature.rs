//! GeoJSON feature model. Properties keep their source order
//! (`serde_json` with `preserve_order`), which the popup sort relies on
//! for tie-breaking.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Geographic coordinate, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

/// Viewport coordinate, canvas cells, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<[f64; 2]>>> },
}

impl Geometry {
    /// Even-odd (ray casting) point-in-polygon test.
    pub fn contains(&self, point: LngLat) -> bool {
        match self {
            Self::Polygon { coordinates } => polygon_contains(coordinates, point),
            Self::MultiPolygon { coordinates } => coordinates
                .iter()
                .any(|polygon| polygon_contains(polygon, point)),
        }
    }

    /// Average of the first outer ring's vertices. Good enough to aim the
    /// camera at a census section.
    pub fn centroid(&self) -> Option<LngLat> {
        let ring = match self {
            Self::Polygon { coordinates } => coordinates.first()?,
            Self::MultiPolygon { coordinates } => coordinates.first()?.first()?,
        };
        // GeoJSON rings repeat the first vertex at the end; drop it.
        let ring = match ring.split_last() {
            Some((last, rest)) if !rest.is_empty() && last == &rest[0] => rest,
            _ => ring.as_slice(),
        };
        if ring.is_empty() {
            return None;
        }
        let (sum_lng, sum_lat) = ring
            .iter()
            .fold((0.0, 0.0), |(lng, lat), v| (lng + v[0], lat + v[1]));
        #[allow(clippy::cast_precision_loss)]
        let n = ring.len() as f64;
        Some(LngLat::new(sum_lng / n, sum_lat / n))
    }

    /// All rings, flattened; used by the canvas to draw outlines.
    pub fn rings(&self) -> Vec<&[[f64; 2]]> {
        match self {
            Self::Polygon { coordinates } => {
                coordinates.iter().map(Vec::as_slice).collect()
            }
            Self::MultiPolygon { coordinates } => coordinates
                .iter()
                .flat_map(|polygon| polygon.iter().map(Vec::as_slice))
                .collect(),
        }
    }
}

fn polygon_contains(rings: &[Vec<[f64; 2]>], point: LngLat) -> bool {
    // Even-odd across all rings, so holes punch out correctly.
    rings
        .iter()
        .filter(|ring| point_in_ring(ring, point))
        .count()
        % 2
        == 1
}

fn point_in_ring(ring: &[[f64; 2]], point: LngLat) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (xi, yi) = (ring[i][0], ring[i][1]);
        let (xj, yj) = (ring[j][0], ring[j][1]);
        let crosses = (yi > point.lat) != (yj > point.lat)
            && point.lng < (xj - xi) * (point.lat - yi) / (yj - yi) + xi;
        if crosses {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl Feature {
    /// Property as display text. Numbers are rendered as written in the
    /// source; anything else counts as absent.
    pub fn prop(&self, key: &str) -> Option<String> {
        value_to_string(self.properties.get(key)?)
    }
}

/// String form of a string/number property value.
pub fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn unit_square() -> Geometry {
        Geometry::Polygon {
            coordinates: vec![vec![
                [0.0, 0.0],
                [1.0, 0.0],
                [1.0, 1.0],
                [0.0, 1.0],
                [0.0, 0.0],
            ]],
        }
    }

    #[test]
    fn point_in_polygon() {
        let square = unit_square();
        assert!(square.contains(LngLat::new(0.5, 0.5)));
        assert!(!square.contains(LngLat::new(1.5, 0.5)));
    }

    #[test]
    fn hole_punches_out() {
        let with_hole = Geometry::Polygon {
            coordinates: vec![
                vec![[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]],
                vec![[1.0, 1.0], [3.0, 1.0], [3.0, 3.0], [1.0, 3.0], [1.0, 1.0]],
            ],
        };
        assert!(with_hole.contains(LngLat::new(0.5, 0.5)));
        assert!(!with_hole.contains(LngLat::new(2.0, 2.0)));
    }

    #[test]
    fn feature_collection_parses_and_keeps_property_order() {
        let collection: FeatureCollection = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
                },
                "properties": { "NMUN": "Girona", "Censo": 1234, "CDIS": "01" }
            }]
        }))
        .expect("valid geojson");

        let feature = &collection.features[0];
        assert_eq!(feature.prop("NMUN").as_deref(), Some("Girona"));
        assert_eq!(feature.prop("Censo").as_deref(), Some("1234"));
        let keys: Vec<_> = feature.properties.keys().collect();
        assert_eq!(keys, ["NMUN", "Censo", "CDIS"]);
    }
}
