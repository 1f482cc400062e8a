//! Interaction pipelines: inspect (click), search, filter, reset and
//! dataset switching. Each runs synchronously to completion against the
//! app-owned map, so highlight and popup always see the same feature
//! snapshot.

use crate::app::state::App;
use crate::config::debug_enabled;
use crate::domain::Dataset;
use crate::map::filter::filter_for_token;
use crate::map::highlight::{clear_highlight, highlight_feature};
use crate::map::popup::Popup;
use crate::map::service::MapService;
use crate::map::ScreenPoint;
use crate::parties::FILTER_TOKENS;
use crate::pipeline::pipeline_for;

/// Zoom applied when a search result flies the view, like the browser
/// geocoder.
const GEOCODER_ZOOM: f64 = 15.0;

/// Cells panned when the cursor pushes past the viewport edge.
const PAN_STEP: f64 = 4.0;

impl App {
    /// Click pipeline: query the topmost feature under the cursor, swap
    /// the highlight overlay and open the popup. With no feature under
    /// the point this is a logged no-op; existing popup and highlight
    /// stay untouched.
    pub fn inspect_at(&mut self, point: ScreenPoint) {
        let pipeline = pipeline_for(self.dataset);
        let features = self.map.query_features_at(point, &[pipeline.layer]);
        let Some(feature) = features.first() else {
            self.status_message = "No features found at the clicked point.".to_string();
            if debug_enabled() {
                eprintln!("inspect: no features at ({:.1}, {:.1})", point.x, point.y);
            }
            return;
        };

        if let Err(e) = highlight_feature(&mut self.map, feature) {
            // Remove-before-add makes this unreachable; degrade, don't die.
            self.status_message = format!("Highlight failed: {e}");
            return;
        }

        let content = (pipeline.build)(&feature.properties);
        self.status_message = content.title();
        Popup::new()
            .lng_lat(self.map.unproject(point))
            .content(content)
            .add_to(&mut self.map);
        self.show_help = false;
    }

    /// Geocoder result pipeline: fly to the match and re-run the popup
    /// pipeline at the landing point. No highlight change on search.
    pub fn submit_search(&mut self) {
        let query = std::mem::take(&mut self.search_input);
        self.searching = false;

        let pipeline = pipeline_for(self.dataset);
        let features = self.map.base_features(pipeline.layer).unwrap_or(&[]);
        let Some(result) = self.geocoder.search(features, &query) else {
            self.status_message = format!("No match for '{}'", query.trim());
            return;
        };

        self.map.fly_to(result.coordinates, GEOCODER_ZOOM);
        let point = self.map.project(result.coordinates);
        self.cursor = point;

        let hits = self.map.query_features_at(point, &[pipeline.layer]);
        if let Some(feature) = hits.first() {
            let content = (pipeline.build)(&feature.properties);
            Popup::new()
                .lng_lat(result.coordinates)
                .content(content)
                .add_to(&mut self.map);
        }
        self.status_message = result.place_name;
        self.show_help = false;
    }

    pub fn current_filter_token(&self) -> &'static str {
        FILTER_TOKENS[self.filter_index % FILTER_TOKENS.len()]
    }

    pub fn cycle_filter(&mut self, step: isize) {
        let len = FILTER_TOKENS.len() as isize;
        let index = self.filter_index as isize;
        self.filter_index = ((index + step).rem_euclid(len)) as usize;
        self.apply_filter(self.current_filter_token());
    }

    /// Applies a party filter token to the elections layer. Harmless to
    /// reapply; a missing layer just disables the control.
    pub fn apply_filter(&mut self, token: &str) {
        let expr = filter_for_token(token);
        match self.map.set_filter(Dataset::Eleccions.layer(), expr) {
            Ok(()) => {
                self.status_message = if token == "all" {
                    String::new()
                } else {
                    format!("Filtro: {token}")
                };
            }
            Err(e) => {
                eprintln!("Party filter unavailable: {e}");
            }
        }
    }

    /// Reset button: clear filter, highlight and popup, restore the
    /// initial view.
    pub fn reset(&mut self) {
        self.filter_index = 0;
        self.apply_filter("all");
        if clear_highlight(&mut self.map).is_err() {
            // Overlay bookkeeping went sideways; nothing else to do.
        }
        self.map.close_popup();
        self.map.fit_bounds(self.dataset.layer());
        self.show_help = false;
        self.status_message = "Vista restablecida".to_string();
    }

    pub fn switch_dataset(&mut self) {
        let target = self.dataset.other();
        if !self.dataset_loaded(target) {
            self.status_message = format!("{} no disponible", target.label());
            eprintln!("Dataset '{}' is not loaded", target.as_str());
            return;
        }
        let _ = clear_highlight(&mut self.map);
        self.map.close_popup();
        self.dataset = target;
        self.status_message = target.label().to_string();
    }

    /// Moves the crosshair; pushing past a viewport edge pans the map
    /// instead.
    pub fn move_cursor(&mut self, dx: f64, dy: f64) {
        let (w, h) = self.map.viewport();
        let next = ScreenPoint::new(self.cursor.x + dx, self.cursor.y + dy);
        if next.x < 0.0 || next.x > w || next.y < 0.0 || next.y > h {
            let shifted = self.map.unproject(ScreenPoint::new(
                dx.mul_add(PAN_STEP, w / 2.0),
                dy.mul_add(PAN_STEP, h / 2.0),
            ));
            let zoom = self.map.zoom();
            self.map.fly_to(shifted, zoom);
            return;
        }
        self.cursor = next;
    }

    pub fn zoom_by(&mut self, delta: f64) {
        let center = self.map.center();
        let zoom = self.map.zoom() + delta;
        self.map.fly_to(center, zoom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::feature::{Feature, LngLat};
    use crate::map::highlight::HIGHLIGHT_ID;
    use crate::map::service::SourceData;
    use crate::pipeline::PopupContent;
    use serde_json::json;

    fn section(origin: (f64, f64), municipality: &str, winner: &str) -> Feature {
        let (x, y) = origin;
        let mut feature: Feature = serde_json::from_value(json!({
            "type": "Feature",
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[x, y], [x + 1.0, y], [x + 1.0, y + 1.0], [x, y + 1.0], [x, y]]]
            },
            "properties": {
                "NMUN": municipality,
                "NPRO": "Girona",
                "CDIS": "01",
                "CSEC": "001",
                "Censo": 1200,
                "Participacion": "64,5",
                "DifParticipacion2019": "1,2",
                "APartidoMasVotado": winner,
            }
        }))
        .expect("valid feature");
        feature
            .properties
            .insert(format!("Percentatge{winner}"), json!("45,0"));
        feature.properties.insert(winner.to_string(), json!(540));
        feature
            .properties
            .insert(format!("Dif{winner}2019"), json!("2,1"));
        feature
    }

    fn test_app() -> App {
        let mut app = App::new();
        app.map.set_viewport(100.0, 50.0);
        app.map
            .add_base_layer(
                Dataset::Eleccions.layer(),
                vec![
                    section((0.0, 0.0), "Vila X", "PSC"),
                    section((2.0, 0.0), "Vila Y", "PP"),
                ],
            )
            .expect("layer");
        app.map.fly_to(LngLat::new(1.5, 0.5), 7.0);
        app
    }

    fn highlighted_name(app: &App) -> Option<String> {
        match app.map.source(HIGHLIGHT_ID)? {
            SourceData::Feature(feature) => feature.prop("NMUN"),
            SourceData::Collection(_) => None,
        }
    }

    #[test]
    fn inspect_opens_popup_and_highlights() {
        let mut app = test_app();
        let point = app.map.project(LngLat::new(0.5, 0.5));
        app.inspect_at(point);

        assert_eq!(highlighted_name(&app).as_deref(), Some("Vila X"));
        let popup = app.map.popup().expect("popup open");
        let Some(PopupContent::Election(summary)) = popup.get_content() else {
            panic!("expected election popup");
        };
        assert_eq!(summary.municipality, "Vila X");
        assert_eq!(summary.rows[0].code, "PSC");
    }

    #[test]
    fn second_inspect_replaces_highlight_and_popup() {
        let mut app = test_app();
        app.inspect_at(app.map.project(LngLat::new(0.5, 0.5)));
        app.inspect_at(app.map.project(LngLat::new(2.5, 0.5)));

        assert_eq!(highlighted_name(&app).as_deref(), Some("Vila Y"));
        let overlay_count = app
            .map
            .overlays()
            .iter()
            .filter(|layer| layer.id == HIGHLIGHT_ID)
            .count();
        assert_eq!(overlay_count, 1);
    }

    #[test]
    fn empty_inspect_leaves_state_untouched() {
        let mut app = test_app();
        app.inspect_at(app.map.project(LngLat::new(0.5, 0.5)));
        let before = highlighted_name(&app);

        app.inspect_at(app.map.project(LngLat::new(30.0, 30.0)));

        assert_eq!(highlighted_name(&app), before);
        assert!(app.map.popup().is_some());
        assert_eq!(
            app.status_message,
            "No features found at the clicked point."
        );
    }

    #[test]
    fn search_flies_and_opens_popup_without_highlight() {
        let mut app = test_app();
        app.search_input = "Vila Y".to_string();
        app.searching = true;
        app.submit_search();

        assert!(!app.searching);
        assert_eq!(app.status_message, "Vila Y");
        assert!((app.map.zoom() - 15.0).abs() < f64::EPSILON);
        assert!(app.map.popup().is_some(), "popup after search");
        assert!(highlighted_name(&app).is_none(), "search must not highlight");
    }

    #[test]
    fn filter_cycle_wraps_and_applies() {
        let mut app = test_app();
        app.cycle_filter(1);
        assert_eq!(app.current_filter_token(), "PSOE");

        // PSC is in the PSOE alias group, PP is not.
        let psc = app.map.project(LngLat::new(0.5, 0.5));
        let pp = app.map.project(LngLat::new(2.5, 0.5));
        assert_eq!(
            app.map
                .query_features_at(psc, &[Dataset::Eleccions.layer()])
                .len(),
            1
        );
        assert!(app
            .map
            .query_features_at(pp, &[Dataset::Eleccions.layer()])
            .is_empty());

        app.cycle_filter(-1);
        assert_eq!(app.current_filter_token(), "all");
        assert_eq!(
            app.map
                .query_features_at(pp, &[Dataset::Eleccions.layer()])
                .len(),
            1
        );
    }

    #[test]
    fn reset_clears_popup_filter_and_highlight() {
        let mut app = test_app();
        app.inspect_at(app.map.project(LngLat::new(0.5, 0.5)));
        app.cycle_filter(2);
        app.reset();

        assert!(app.map.popup().is_none());
        assert!(highlighted_name(&app).is_none());
        assert_eq!(app.current_filter_token(), "all");
    }

    #[test]
    fn switching_to_a_missing_dataset_is_disabled_not_fatal() {
        let mut app = test_app();
        app.switch_dataset();
        assert_eq!(app.dataset, Dataset::Eleccions);
        assert!(app.status_message.contains("no disponible"));
    }
}
