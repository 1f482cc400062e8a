//! Single-feature highlight overlay. The map rejects duplicate ids, so
//! the previous overlay is always removed before the new one goes in;
//! only the most recent selection survives.

use crate::map::feature::Feature;
use crate::map::service::{LayerKind, LayerSpec, MapError, MapService, Paint, SourceData};

pub const HIGHLIGHT_ID: &str = "highlighted-feature";

const HIGHLIGHT_COLOR: &str = "#ffffff";
const HIGHLIGHT_WIDTH: f64 = 3.0;

/// Replaces the highlight overlay with the given feature's outline.
pub fn highlight_feature<M: MapService + ?Sized>(
    map: &mut M,
    feature: &Feature,
) -> Result<(), MapError> {
    clear_highlight(map)?;
    map.add_source(HIGHLIGHT_ID, SourceData::Feature(Box::new(feature.clone())))?;
    map.add_layer(LayerSpec {
        id: HIGHLIGHT_ID.to_string(),
        kind: LayerKind::Line,
        source: HIGHLIGHT_ID.to_string(),
        paint: Paint {
            line_color: HIGHLIGHT_COLOR.to_string(),
            line_width: HIGHLIGHT_WIDTH,
        },
    })
}

/// Removes the overlay if present; a no-op otherwise.
pub fn clear_highlight<M: MapService + ?Sized>(map: &mut M) -> Result<(), MapError> {
    if map.has_layer(HIGHLIGHT_ID) {
        map.remove_layer(HIGHLIGHT_ID)?;
        map.remove_source(HIGHLIGHT_ID)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::memory::VectorMap;
    use serde_json::json;

    fn feature(name: &str) -> Feature {
        serde_json::from_value(json!({
            "type": "Feature",
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
            },
            "properties": { "NMUN": name }
        }))
        .expect("valid feature")
    }

    #[test]
    fn second_highlight_replaces_the_first() {
        let mut map = VectorMap::new();
        highlight_feature(&mut map, &feature("X")).expect("first highlight");
        highlight_feature(&mut map, &feature("Y")).expect("second highlight");

        let overlays: Vec<_> = map
            .overlays()
            .iter()
            .filter(|layer| layer.id == HIGHLIGHT_ID)
            .collect();
        assert_eq!(overlays.len(), 1);

        let Some(SourceData::Feature(highlighted)) = map.source(HIGHLIGHT_ID) else {
            panic!("highlight source missing");
        };
        assert_eq!(highlighted.prop("NMUN").as_deref(), Some("Y"));
    }

    #[test]
    fn clear_without_highlight_is_a_noop() {
        let mut map = VectorMap::new();
        clear_highlight(&mut map).expect("no-op clear");
        assert!(!map.has_layer(HIGHLIGHT_ID));
    }
}
