//! Picker behavior through the public API, configured the way the site
//! configures it.

use mappets_core::{Coordinate, SiteConfig};
use mappets_map::picker::MAP_CONTAINER;
use mappets_map::{
    CoordinatePicker, HeadlessMap, HeadlessProvider, PickerSettings, PickerState, PickerSurface,
    StatusTone,
};

#[derive(Default)]
struct Inputs {
    latitude: String,
    longitude: String,
    status: String,
}

impl PickerSurface for Inputs {
    fn coordinate_values(&self) -> (String, String) {
        (self.latitude.clone(), self.longitude.clone())
    }

    fn write_coordinates(&mut self, latitude: &str, longitude: &str) {
        self.latitude = latitude.to_string();
        self.longitude = longitude.to_string();
    }

    fn set_status(&mut self, message: &str, _tone: StatusTone) {
        self.status = message.to_string();
    }

    fn set_locate_enabled(&mut self, _enabled: bool) {}
}

#[test]
fn configured_tile_source_is_attached_on_mount() {
    let config = SiteConfig {
        tile_url_template: "https://tiles.example.org/{z}/{x}/{y}.png".to_string(),
        tile_attribution: "Example tiles".to_string(),
        ..SiteConfig::default()
    };
    let mut inputs = Inputs::default();
    let mut picker: CoordinatePicker<HeadlessMap> =
        CoordinatePicker::new(PickerSettings::from_config(&config));

    picker.mount(&HeadlessProvider::default(), MAP_CONTAINER, &mut inputs);

    let layers = picker.widget().expect("map mounted").tile_layers();
    assert_eq!(layers.len(), 1);
    assert_eq!(layers[0].url_template, "https://tiles.example.org/{z}/{x}/{y}.png");
    assert_eq!(layers[0].attribution, "Example tiles");
}

#[test]
fn restored_point_can_be_replaced_by_a_click() {
    let mut inputs = Inputs {
        latitude: "-34.6037".to_string(),
        longitude: "-58.3815".to_string(),
        ..Inputs::default()
    };
    let mut picker: CoordinatePicker<HeadlessMap> =
        CoordinatePicker::new(PickerSettings::default());
    picker.mount(&HeadlessProvider::default(), MAP_CONTAINER, &mut inputs);

    picker.on_map_click(Coordinate::new(-34.921_45, -57.954_53), &mut inputs);

    assert_eq!(
        picker.state(),
        &PickerState::PointSelected(Coordinate::new(-34.921_45, -57.954_53))
    );
    assert_eq!(inputs.latitude, "-34.9214500");
    assert_eq!(inputs.longitude, "-57.9545300");
    assert_eq!(picker.widget().expect("map mounted").markers().len(), 1);
    assert_eq!(
        inputs.status,
        "Ubicacion seleccionada: -34.9214500, -57.9545300"
    );
}
