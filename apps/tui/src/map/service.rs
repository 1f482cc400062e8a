//! The map service seam. The interactive pipelines only talk to
//! [`MapService`], so tests drive them against [`crate::map::VectorMap`]
//! without a terminal.

use thiserror::Error;

use crate::map::feature::{Feature, LngLat, ScreenPoint};
use crate::map::filter::FilterExpr;
use crate::map::popup::Popup;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("layer already exists: {0}")]
    DuplicateLayer(String),
    #[error("source already exists: {0}")]
    DuplicateSource(String),
    #[error("no such layer: {0}")]
    UnknownLayer(String),
    #[error("no such source: {0}")]
    UnknownSource(String),
}

/// GeoJSON payload backing an overlay layer.
#[derive(Debug, Clone)]
pub enum SourceData {
    Feature(Box<Feature>),
    Collection(Vec<Feature>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Fill,
    Line,
}

#[derive(Debug, Clone)]
pub struct Paint {
    pub line_color: String,
    pub line_width: f64,
}

#[derive(Debug, Clone)]
pub struct LayerSpec {
    pub id: String,
    pub kind: LayerKind,
    pub source: String,
    pub paint: Paint,
}

pub trait MapService {
    /// Rendered features under a viewport point, topmost first, honoring
    /// the active layer filter.
    fn query_features_at(&self, point: ScreenPoint, layers: &[&str]) -> Vec<Feature>;

    fn add_source(&mut self, id: &str, data: SourceData) -> Result<(), MapError>;
    fn add_layer(&mut self, spec: LayerSpec) -> Result<(), MapError>;
    fn has_layer(&self, id: &str) -> bool;
    fn remove_layer(&mut self, id: &str) -> Result<(), MapError>;
    fn remove_source(&mut self, id: &str) -> Result<(), MapError>;

    /// `None` clears the filter. Idempotent, reapplied on (re)init.
    fn set_filter(&mut self, layer: &str, filter: Option<FilterExpr>) -> Result<(), MapError>;

    fn project(&self, lng_lat: LngLat) -> ScreenPoint;
    fn fly_to(&mut self, center: LngLat, zoom: f64);

    /// Opens a popup, replacing any open one. Last writer wins.
    fn show_popup(&mut self, popup: Popup);
    fn close_popup(&mut self);
}
