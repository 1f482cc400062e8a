//! In-memory vector map backing the terminal canvas. Implements the
//! [`MapService`] contract over GeoJSON layers loaded at startup.

use std::collections::HashMap;

use crate::map::feature::{Feature, LngLat, ScreenPoint};
use crate::map::filter::FilterExpr;
use crate::map::popup::Popup;
use crate::map::service::{LayerSpec, MapError, MapService, SourceData};

const MIN_ZOOM: f64 = 0.0;
const MAX_ZOOM: f64 = 22.0;

/// Initial view: roughly mainland Spain.
const DEFAULT_CENTER: LngLat = LngLat::new(-3.7, 40.2);
const DEFAULT_ZOOM: f64 = 5.0;

struct BaseLayer {
    id: String,
    features: Vec<Feature>,
}

pub struct VectorMap {
    base: Vec<BaseLayer>,
    sources: HashMap<String, SourceData>,
    overlays: Vec<LayerSpec>,
    filters: HashMap<String, FilterExpr>,
    center: LngLat,
    zoom: f64,
    viewport: (f64, f64),
    popup: Option<Popup>,
}

impl VectorMap {
    pub fn new() -> Self {
        Self {
            base: Vec::new(),
            sources: HashMap::new(),
            overlays: Vec::new(),
            filters: HashMap::new(),
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            viewport: (80.0, 24.0),
            popup: None,
        }
    }

    /// Registers a data layer. Base layers are permanent; only overlay
    /// layers can be removed.
    pub fn add_base_layer(&mut self, id: &str, features: Vec<Feature>) -> Result<(), MapError> {
        if self.has_layer(id) {
            return Err(MapError::DuplicateLayer(id.to_string()));
        }
        self.base.push(BaseLayer {
            id: id.to_string(),
            features,
        });
        Ok(())
    }

    pub fn has_base_layer(&self, id: &str) -> bool {
        self.base.iter().any(|layer| layer.id == id)
    }

    /// Unfiltered features of a base layer (geocoding, stats).
    pub fn base_features(&self, id: &str) -> Option<&[Feature]> {
        self.base
            .iter()
            .find(|layer| layer.id == id)
            .map(|layer| layer.features.as_slice())
    }

    /// Features of a base layer that pass its active filter, in draw
    /// order.
    pub fn visible_features<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a Feature> {
        let filter = self.filters.get(id);
        self.base
            .iter()
            .find(|layer| layer.id == id)
            .into_iter()
            .flat_map(|layer| layer.features.iter())
            .filter(move |feature| filter.is_none_or(|f| f.matches(feature)))
    }

    pub fn overlays(&self) -> &[LayerSpec] {
        &self.overlays
    }

    pub fn source(&self, id: &str) -> Option<&SourceData> {
        self.sources.get(id)
    }

    pub const fn center(&self) -> LngLat {
        self.center
    }

    pub const fn zoom(&self) -> f64 {
        self.zoom
    }

    pub const fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = (width.max(1.0), height.max(1.0));
    }

    pub const fn viewport(&self) -> (f64, f64) {
        self.viewport
    }

    fn scale(&self) -> f64 {
        // Cells per degree at the current zoom; the whole world spans the
        // larger viewport axis at zoom 0.
        self.viewport.0.max(self.viewport.1) * self.zoom.exp2() / 360.0
    }

    pub fn unproject(&self, point: ScreenPoint) -> LngLat {
        let scale = self.scale();
        let (w, h) = self.viewport;
        LngLat::new(
            (point.x - w / 2.0).mul_add(1.0 / scale, self.center.lng),
            (h / 2.0 - point.y).mul_add(1.0 / scale, self.center.lat),
        )
    }

    /// Centers the view on a base layer's bounding box.
    pub fn fit_bounds(&mut self, id: &str) {
        let Some(features) = self.base_features(id) else {
            return;
        };
        let mut min_lng = f64::MAX;
        let mut max_lng = f64::MIN;
        let mut min_lat = f64::MAX;
        let mut max_lat = f64::MIN;
        for feature in features {
            for ring in feature.geometry.rings() {
                for vertex in ring {
                    min_lng = min_lng.min(vertex[0]);
                    max_lng = max_lng.max(vertex[0]);
                    min_lat = min_lat.min(vertex[1]);
                    max_lat = max_lat.max(vertex[1]);
                }
            }
        }
        if min_lng > max_lng {
            return;
        }

        self.center = LngLat::new((min_lng + max_lng) / 2.0, (min_lat + max_lat) / 2.0);
        let span = (max_lng - min_lng).max(max_lat - min_lat).max(1e-6);
        let (w, h) = self.viewport;
        // Fit the span into 90% of the shorter viewport axis.
        let needed = w.min(h) * 0.9 / span;
        self.zoom = (needed * 360.0 / w.max(h)).log2().clamp(MIN_ZOOM, MAX_ZOOM);
    }
}

impl Default for VectorMap {
    fn default() -> Self {
        Self::new()
    }
}

impl MapService for VectorMap {
    fn query_features_at(&self, point: ScreenPoint, layers: &[&str]) -> Vec<Feature> {
        let lng_lat = self.unproject(point);
        let mut hits = Vec::new();
        for id in layers {
            let filter = self.filters.get(*id);
            let Some(layer) = self.base.iter().find(|layer| layer.id == *id) else {
                continue;
            };
            // Later features draw on top, so report them first.
            for feature in layer.features.iter().rev() {
                if filter.is_none_or(|f| f.matches(feature)) && feature.geometry.contains(lng_lat)
                {
                    hits.push(feature.clone());
                }
            }
        }
        hits
    }

    fn add_source(&mut self, id: &str, data: SourceData) -> Result<(), MapError> {
        if self.sources.contains_key(id) {
            return Err(MapError::DuplicateSource(id.to_string()));
        }
        self.sources.insert(id.to_string(), data);
        Ok(())
    }

    fn add_layer(&mut self, spec: LayerSpec) -> Result<(), MapError> {
        if self.has_layer(&spec.id) {
            return Err(MapError::DuplicateLayer(spec.id));
        }
        if !self.sources.contains_key(&spec.source) && !self.has_base_layer(&spec.source) {
            return Err(MapError::UnknownSource(spec.source));
        }
        self.overlays.push(spec);
        Ok(())
    }

    fn has_layer(&self, id: &str) -> bool {
        self.has_base_layer(id) || self.overlays.iter().any(|layer| layer.id == id)
    }

    fn remove_layer(&mut self, id: &str) -> Result<(), MapError> {
        let Some(position) = self.overlays.iter().position(|layer| layer.id == id) else {
            return Err(MapError::UnknownLayer(id.to_string()));
        };
        self.overlays.remove(position);
        Ok(())
    }

    fn remove_source(&mut self, id: &str) -> Result<(), MapError> {
        if self.sources.remove(id).is_none() {
            return Err(MapError::UnknownSource(id.to_string()));
        }
        Ok(())
    }

    fn set_filter(&mut self, layer: &str, filter: Option<FilterExpr>) -> Result<(), MapError> {
        if !self.has_base_layer(layer) {
            return Err(MapError::UnknownLayer(layer.to_string()));
        }
        match filter {
            Some(expr) => {
                self.filters.insert(layer.to_string(), expr);
            }
            None => {
                self.filters.remove(layer);
            }
        }
        Ok(())
    }

    fn project(&self, lng_lat: LngLat) -> ScreenPoint {
        let scale = self.scale();
        let (w, h) = self.viewport;
        ScreenPoint::new(
            (lng_lat.lng - self.center.lng).mul_add(scale, w / 2.0),
            (self.center.lat - lng_lat.lat).mul_add(scale, h / 2.0),
        )
    }

    fn fly_to(&mut self, center: LngLat, zoom: f64) {
        self.center = center;
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    fn show_popup(&mut self, popup: Popup) {
        self.popup = Some(popup);
    }

    fn close_popup(&mut self) {
        self.popup = None;
    }
}
