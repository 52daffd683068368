//! Terminal stand-ins for the page elements the library crates drive.

use mappets_forms::commerce::{LATITUDE_FIELD, LONGITUDE_FIELD};
use mappets_forms::{FieldSource, MemoryForm};
use mappets_map::{PickerSurface, StatusTone};
use mappets_ui::ModalSurface;

/// Prints the confirmation dialog when it is shown.
pub(crate) struct ConsoleModal {
    title: &'static str,
    body: &'static str,
}

impl ConsoleModal {
    pub(crate) fn new(title: &'static str, body: &'static str) -> Self {
        Self { title, body }
    }
}

impl ModalSurface for ConsoleModal {
    // A terminal has nothing to hand focus back to.
    type Focus = ();

    fn active_element(&self) -> Option<()> {
        None
    }

    fn focus(&mut self, _target: &()) {}

    fn focus_close_control(&mut self) {}

    fn set_hidden(&mut self, hidden: bool) {
        if !hidden {
            println!();
            println!("  {}", self.title);
            println!("  {}", self.body);
            println!();
        }
    }

    fn set_scroll_locked(&mut self, _locked: bool) {}
}

/// Exposes the commerce form's coordinate inputs to the picker and keeps the
/// picker's status line for printing.
pub(crate) struct FormPickerSurface<'a> {
    form: &'a mut MemoryForm,
    pub(crate) status: String,
}

impl<'a> FormPickerSurface<'a> {
    pub(crate) fn new(form: &'a mut MemoryForm) -> Self {
        Self {
            form,
            status: String::new(),
        }
    }
}

impl PickerSurface for FormPickerSurface<'_> {
    fn coordinate_values(&self) -> (String, String) {
        (
            self.form.value(LATITUDE_FIELD),
            self.form.value(LONGITUDE_FIELD),
        )
    }

    fn write_coordinates(&mut self, latitude: &str, longitude: &str) {
        self.form.set_value(LATITUDE_FIELD, latitude);
        self.form.set_value(LONGITUDE_FIELD, longitude);
    }

    fn set_status(&mut self, message: &str, tone: StatusTone) {
        self.status = message.to_string();
        if tone == StatusTone::Error {
            tracing::warn!(status = message, "map status");
        }
    }

    // No location control in the terminal.
    fn set_locate_enabled(&mut self, _enabled: bool) {}
}
