//! Address search over the loaded sections: fuzzy match on the
//! municipality name, the best hit wins. Stands in for the hosted
//! geocoder control; emits the same `result`-style payload.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::map::feature::{Feature, LngLat};

#[derive(Debug, Clone, PartialEq)]
pub struct GeocoderResult {
    pub place_name: String,
    pub coordinates: LngLat,
}

pub struct Geocoder {
    matcher: SkimMatcherV2,
}

impl Geocoder {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Best fuzzy match for `query` among the features' `NMUN` names.
    /// Returns `None` when nothing scores, or the query is blank.
    pub fn search(&self, features: &[Feature], query: &str) -> Option<GeocoderResult> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let mut best: Option<(i64, GeocoderResult)> = None;
        for feature in features {
            let Some(name) = feature.prop("NMUN") else {
                continue;
            };
            let Some(score) = self.matcher.fuzzy_match(&name, query) else {
                continue;
            };
            let Some(coordinates) = feature.geometry.centroid() else {
                continue;
            };
            if best.as_ref().is_none_or(|(top, _)| score > *top) {
                best = Some((
                    score,
                    GeocoderResult {
                        place_name: name,
                        coordinates,
                    },
                ));
            }
        }
        best.map(|(_, result)| result)
    }
}

impl Default for Geocoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn named_feature(name: &str, x: f64) -> Feature {
        serde_json::from_value(json!({
            "type": "Feature",
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[x, 0.0], [x + 2.0, 0.0], [x + 2.0, 2.0], [x, 2.0], [x, 0.0]]]
            },
            "properties": { "NMUN": name }
        }))
        .expect("valid feature")
    }

    #[test]
    fn exact_name_wins() {
        let features = vec![
            named_feature("Barcelona", 0.0),
            named_feature("Badalona", 10.0),
        ];
        let geocoder = Geocoder::new();
        let result = geocoder.search(&features, "Barcelona").expect("hit");
        assert_eq!(result.place_name, "Barcelona");
        assert!((result.coordinates.lng - 1.0).abs() < 1e-9);
    }

    #[test]
    fn fuzzy_queries_still_resolve() {
        let features = vec![
            named_feature("Barcelona", 0.0),
            named_feature("Girona", 10.0),
        ];
        let geocoder = Geocoder::new();
        let result = geocoder.search(&features, "grna").expect("hit");
        assert_eq!(result.place_name, "Girona");
    }

    #[test]
    fn blank_or_hopeless_queries_return_none() {
        let features = vec![named_feature("Barcelona", 0.0)];
        let geocoder = Geocoder::new();
        assert!(geocoder.search(&features, "   ").is_none());
        assert!(geocoder.search(&features, "zzzzqqqq").is_none());
    }
}
