// Map service: feature model, declarative filters, the in-memory vector
// map and the highlight/popup primitives built on top of it.

pub mod feature;
pub mod filter;
pub mod highlight;
pub mod memory;
pub mod popup;
pub mod service;

pub use feature::{Feature, FeatureCollection, Geometry, LngLat, ScreenPoint};
pub use filter::{filter_for_token, FilterExpr};
pub use highlight::{clear_highlight, highlight_feature, HIGHLIGHT_ID};
pub use memory::VectorMap;
pub use popup::Popup;
pub use service::{LayerKind, LayerSpec, MapError, MapService, Paint, SourceData};
