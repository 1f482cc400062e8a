//! Popup primitive: built with a fluent chain and handed to the map
//! service, which owns its display lifecycle.

use crate::map::feature::LngLat;
use crate::map::service::MapService;
use crate::pipeline::PopupContent;

#[derive(Debug, Clone, Default)]
pub struct Popup {
    lng_lat: Option<LngLat>,
    content: Option<PopupContent>,
}

impl Popup {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn lng_lat(mut self, coords: LngLat) -> Self {
        self.lng_lat = Some(coords);
        self
    }

    #[must_use]
    pub fn content(mut self, content: PopupContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn add_to<M: MapService + ?Sized>(self, map: &mut M) {
        map.show_popup(self);
    }

    pub const fn coords(&self) -> Option<LngLat> {
        self.lng_lat
    }

    pub fn get_content(&self) -> Option<&PopupContent> {
        self.content.as_ref()
    }
}
