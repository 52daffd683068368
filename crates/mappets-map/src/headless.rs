//! A map widget with no rendering, for hosts without a display and for tests.

use mappets_core::Coordinate;

use crate::widget::{MapProvider, MapWidget, MarkerId, TileLayer};

/// Records what a real widget would have drawn.
#[derive(Debug, Clone, Default)]
pub struct HeadlessMap {
    container: String,
    tile_layers: Vec<TileLayer>,
    view: Option<(Coordinate, u8)>,
    markers: Vec<Coordinate>,
}

impl HeadlessMap {
    #[must_use]
    pub fn container(&self) -> &str {
        &self.container
    }

    #[must_use]
    pub fn tile_layers(&self) -> &[TileLayer] {
        &self.tile_layers
    }

    /// Last `(center, zoom)` the map was set to.
    #[must_use]
    pub fn view(&self) -> Option<(Coordinate, u8)> {
        self.view
    }

    /// Current position of every marker, indexed by [`MarkerId`].
    #[must_use]
    pub fn markers(&self) -> &[Coordinate] {
        &self.markers
    }
}

impl MapWidget for HeadlessMap {
    fn add_tile_layer(&mut self, layer: &TileLayer) {
        self.tile_layers.push(layer.clone());
    }

    fn set_view(&mut self, center: Coordinate, zoom: u8) {
        self.view = Some((center, zoom));
    }

    fn add_marker(&mut self, at: Coordinate) -> MarkerId {
        self.markers.push(at);
        MarkerId(self.markers.len() - 1)
    }

    fn move_marker(&mut self, marker: MarkerId, to: Coordinate) {
        if let Some(slot) = self.markers.get_mut(marker.0) {
            *slot = to;
        }
    }
}

/// Provider for [`HeadlessMap`].
///
/// `available: false` stands in for a host where the map library failed to
/// load.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessProvider {
    pub available: bool,
}

impl Default for HeadlessProvider {
    fn default() -> Self {
        Self { available: true }
    }
}

impl MapProvider for HeadlessProvider {
    type Widget = HeadlessMap;

    fn create(&self, container: &str) -> Option<HeadlessMap> {
        self.available.then(|| HeadlessMap {
            container: container.to_string(),
            ..HeadlessMap::default()
        })
    }
}
