use mappets_core::{Coordinate, SiteConfig};

/// Raster tile source drawn under the markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

impl TileLayer {
    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            url_template: config.tile_url_template.clone(),
            attribution: config.tile_attribution.clone(),
        }
    }
}

/// Handle to a marker placed on a [`MapWidget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerId(pub usize);

/// The slippy-map surface the picker draws on.
pub trait MapWidget {
    fn add_tile_layer(&mut self, layer: &TileLayer);

    fn set_view(&mut self, center: Coordinate, zoom: u8);

    fn add_marker(&mut self, at: Coordinate) -> MarkerId;

    fn move_marker(&mut self, marker: MarkerId, to: Coordinate);
}

/// Builds map widgets inside a host container.
pub trait MapProvider {
    type Widget: MapWidget;

    /// Returns `None` when the map library is not available on this host.
    fn create(&self, container: &str) -> Option<Self::Widget>;
}
