//! Map-backed coordinate selection for the commerce signup form.
//!
//! [`CoordinatePicker`] binds a [`MapWidget`] to the form's latitude and
//! longitude inputs. Points come from map clicks or from a device
//! [`Geolocator`] fix.

pub mod geolocation;
pub mod headless;
pub mod picker;
pub mod widget;

pub use geolocation::{GeolocationError, Geolocator, PositionRequest};
pub use headless::{HeadlessMap, HeadlessProvider};
pub use picker::{
    CoordinatePicker, LocateOutcome, PickerSettings, PickerState, PickerSurface, StatusTone,
};
pub use widget::{MapProvider, MapWidget, MarkerId, TileLayer};
