//! Coordinate picker state machine.
//!
//! ```text
//! Uninitialized --mount--> Ready --click / geolocation fix--> PointSelected
//!       |                                                        |   ^
//!       +--mount, no map library--> Disabled                     +---+
//! ```
//!
//! Every selection rounds the point to seven decimals, writes both form
//! fields together, moves the single marker (creating it the first time) and
//! echoes the rounded values on the status line.

use std::ops::{Deref, DerefMut};
use std::time::Duration;

use mappets_core::{Coordinate, SiteConfig};

use crate::geolocation::{GeolocationError, Geolocator, PositionRequest};
use crate::widget::{MapProvider, MapWidget, MarkerId, TileLayer};

/// Host container the commerce map is mounted into.
pub const MAP_CONTAINER: &str = "commerce-map";

const STATUS_READY: &str = "Toca el mapa para marcar la ubicacion del comercio.";
const STATUS_DISABLED: &str =
    "No pudimos cargar el mapa. Pega el enlace de Google Maps del comercio en el campo de ubicacion.";
const STATUS_LOCATING: &str = "Buscando tu ubicacion...";
const STATUS_LOCATE_FAILED: &str =
    "No pudimos obtener tu ubicacion. Marca el punto manualmente en el mapa.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickerState {
    Uninitialized,
    Ready,
    PointSelected(Coordinate),
    /// No map library on this host. Terminal.
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTone {
    #[default]
    Neutral,
    Error,
}

/// The form-side elements the picker reads and writes: the two coordinate
/// inputs, the status line and the "use current location" control.
pub trait PickerSurface {
    /// Current raw `(latitude, longitude)` input values.
    fn coordinate_values(&self) -> (String, String);

    /// Writes both coordinate inputs at once.
    fn write_coordinates(&mut self, latitude: &str, longitude: &str);

    fn set_status(&mut self, message: &str, tone: StatusTone);

    fn set_locate_enabled(&mut self, enabled: bool);
}

/// Map and geolocation settings for one picker.
#[derive(Debug, Clone)]
pub struct PickerSettings {
    pub tile_layer: TileLayer,
    pub geolocation_timeout: Duration,
    pub default_center: Coordinate,
    pub default_zoom: u8,
    pub selected_zoom: u8,
}

impl PickerSettings {
    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            tile_layer: TileLayer::from_config(config),
            geolocation_timeout: Duration::from_secs(config.geolocation_timeout_secs),
            // Whole-country view of Argentina.
            default_center: Coordinate::new(-38.416_1, -63.616_7),
            default_zoom: 4,
            selected_zoom: 16,
        }
    }
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

/// How a "use current location" request ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocateOutcome {
    Selected(Coordinate),
    Failed(GeolocationError),
    /// The picker has no map; nothing was requested.
    Unavailable,
}

/// Binds one map widget to the commerce form's coordinate inputs.
///
/// The picker is the handle to its widget: callers that need the map reach it
/// through [`CoordinatePicker::widget`].
pub struct CoordinatePicker<W> {
    settings: PickerSettings,
    widget: Option<W>,
    marker: Option<MarkerId>,
    state: PickerState,
}

impl<W: MapWidget> CoordinatePicker<W> {
    #[must_use]
    pub fn new(settings: PickerSettings) -> Self {
        Self {
            settings,
            widget: None,
            marker: None,
            state: PickerState::Uninitialized,
        }
    }

    /// Mounts the map into `container` and hydrates from the form.
    ///
    /// If both coordinate inputs already hold a point, it is selected and the
    /// map is centered tightly on it; otherwise the wide default view is
    /// shown. Without a map library the picker ends up `Disabled` and the
    /// status line asks for a manual location link.
    pub fn mount<P, S>(&mut self, provider: &P, container: &str, surface: &mut S) -> &PickerState
    where
        P: MapProvider<Widget = W>,
        S: PickerSurface,
    {
        if self.state != PickerState::Uninitialized {
            return &self.state;
        }

        let Some(mut widget) = provider.create(container) else {
            tracing::warn!(container, "map library unavailable, picker disabled");
            self.state = PickerState::Disabled;
            surface.set_status(STATUS_DISABLED, StatusTone::Error);
            return &self.state;
        };

        widget.add_tile_layer(&self.settings.tile_layer);
        self.widget = Some(widget);
        self.state = PickerState::Ready;

        let (latitude, longitude) = surface.coordinate_values();
        match Coordinate::from_fields(&latitude, &longitude) {
            Some(stored) => {
                tracing::debug!(%stored, "hydrating picker from form values");
                let point = self.select(stored, surface);
                self.set_view(point, self.settings.selected_zoom);
            }
            None => {
                if !latitude.trim().is_empty() || !longitude.trim().is_empty() {
                    tracing::warn!("discarding half-filled coordinate pair");
                    surface.write_coordinates("", "");
                }
                self.set_view(self.settings.default_center, self.settings.default_zoom);
                surface.set_status(STATUS_READY, StatusTone::Neutral);
            }
        }

        &self.state
    }

    #[must_use]
    pub fn state(&self) -> &PickerState {
        &self.state
    }

    /// The currently selected point, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Coordinate> {
        match self.state {
            PickerState::PointSelected(point) => Some(point),
            _ => None,
        }
    }

    #[must_use]
    pub fn widget(&self) -> Option<&W> {
        self.widget.as_ref()
    }

    pub fn widget_mut(&mut self) -> Option<&mut W> {
        self.widget.as_mut()
    }

    /// Selects the clicked point. Returns `None` while no map is mounted.
    pub fn on_map_click<S: PickerSurface>(
        &mut self,
        at: Coordinate,
        surface: &mut S,
    ) -> Option<Coordinate> {
        if !self.is_interactive() {
            return None;
        }
        Some(self.select(at, surface))
    }

    /// Handles the "use current location" control.
    ///
    /// The control is disabled for the duration of the request and re-enabled
    /// on every exit path. A failed or timed-out request leaves the current
    /// selection untouched.
    pub async fn use_current_location<G, S>(
        &mut self,
        geolocator: &G,
        surface: &mut S,
    ) -> LocateOutcome
    where
        G: Geolocator + ?Sized,
        S: PickerSurface,
    {
        if !self.is_interactive() {
            return LocateOutcome::Unavailable;
        }

        let mut locating = LocateInFlight::engage(surface);
        locating.set_status(STATUS_LOCATING, StatusTone::Neutral);

        let request = PositionRequest::high_accuracy(self.settings.geolocation_timeout);
        // Hosts that ignore the requested timeout are cut off here.
        let fix = tokio::time::timeout(request.timeout, geolocator.current_position(&request))
            .await
            .unwrap_or(Err(GeolocationError::Timeout));

        match fix {
            Ok(position) => {
                let point = self.select(position, &mut *locating);
                self.set_view(point, self.settings.selected_zoom);
                LocateOutcome::Selected(point)
            }
            Err(err) => {
                tracing::warn!(error = %err, "geolocation request failed");
                locating.set_status(STATUS_LOCATE_FAILED, StatusTone::Error);
                LocateOutcome::Failed(err)
            }
        }
    }

    fn is_interactive(&self) -> bool {
        matches!(
            self.state,
            PickerState::Ready | PickerState::PointSelected(_)
        )
    }

    fn select<S: PickerSurface + ?Sized>(&mut self, at: Coordinate, surface: &mut S) -> Coordinate {
        let point = at.rounded();
        let latitude = point.latitude_text();
        let longitude = point.longitude_text();

        surface.write_coordinates(&latitude, &longitude);

        if let Some(widget) = self.widget.as_mut() {
            match self.marker {
                Some(marker) => widget.move_marker(marker, point),
                None => self.marker = Some(widget.add_marker(point)),
            }
        }

        surface.set_status(
            &format!("Ubicacion seleccionada: {latitude}, {longitude}"),
            StatusTone::Neutral,
        );
        tracing::info!(%point, "commerce location selected");

        self.state = PickerState::PointSelected(point);
        point
    }

    fn set_view(&mut self, center: Coordinate, zoom: u8) {
        if let Some(widget) = self.widget.as_mut() {
            widget.set_view(center, zoom);
        }
    }
}

/// Keeps the "use current location" control disabled until dropped.
struct LocateInFlight<'a, S: PickerSurface> {
    surface: &'a mut S,
}

impl<'a, S: PickerSurface> LocateInFlight<'a, S> {
    fn engage(surface: &'a mut S) -> Self {
        surface.set_locate_enabled(false);
        Self { surface }
    }
}

impl<S: PickerSurface> Deref for LocateInFlight<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: PickerSurface> DerefMut for LocateInFlight<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: PickerSurface> Drop for LocateInFlight<'_, S> {
    fn drop(&mut self) {
        self.surface.set_locate_enabled(true);
    }
}

#[cfg(test)]
#[path = "picker_test.rs"]
mod tests;
