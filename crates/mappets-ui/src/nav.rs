//! Collapsible main navigation.

use crate::ESCAPE_KEY;

/// Widest viewport, in CSS pixels, that uses the collapsed mobile menu.
pub const MOBILE_MAX_WIDTH_PX: u32 = 900;

const OPEN_LABEL: &str = "Abrir menu";
const CLOSE_LABEL: &str = "Cerrar menu";

/// The menu element and its toggle button.
pub trait NavSurface {
    /// Mirrors the menu's `data-open` attribute.
    fn set_menu_open(&mut self, open: bool);

    /// Mirrors the toggle's `aria-expanded` and `aria-label`.
    fn set_toggle_state(&mut self, expanded: bool, label: &str);

    fn focus_toggle(&mut self);

    fn viewport_width(&self) -> u32;
}

pub struct NavMenu<S> {
    surface: S,
    open: bool,
}

impl<S: NavSurface> NavMenu<S> {
    /// Wires the menu, starting closed.
    ///
    /// Returns `None` when the page has no menu or no toggle, leaving the
    /// page without menu behavior.
    pub fn mount(surface: Option<S>) -> Option<Self> {
        let mut menu = Self {
            surface: surface?,
            open: false,
        };
        menu.set_open(false);
        Some(menu)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn on_toggle_click(&mut self) {
        self.set_open(!self.open);
    }

    /// A link inside the menu was followed. Only the mobile menu collapses.
    pub fn on_link_click(&mut self) {
        if self.surface.viewport_width() <= MOBILE_MAX_WIDTH_PX {
            self.set_open(false);
        }
    }

    pub fn on_key(&mut self, key: &str) {
        if key == ESCAPE_KEY && self.open {
            self.set_open(false);
            self.surface.focus_toggle();
        }
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
        self.surface.set_menu_open(open);
        let label = if open { CLOSE_LABEL } else { OPEN_LABEL };
        self.surface.set_toggle_state(open, label);
        tracing::trace!(open, "navigation menu toggled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeNav {
        width: u32,
        data_open: bool,
        aria_expanded: bool,
        aria_label: String,
        toggle_focused: bool,
    }

    impl NavSurface for FakeNav {
        fn set_menu_open(&mut self, open: bool) {
            self.data_open = open;
        }

        fn set_toggle_state(&mut self, expanded: bool, label: &str) {
            self.aria_expanded = expanded;
            self.aria_label = label.to_string();
        }

        fn focus_toggle(&mut self) {
            self.toggle_focused = true;
        }

        fn viewport_width(&self) -> u32 {
            self.width
        }
    }

    fn menu(width: u32) -> NavMenu<FakeNav> {
        NavMenu::mount(Some(FakeNav {
            width,
            ..FakeNav::default()
        }))
        .expect("menu should mount")
    }

    #[test]
    fn starts_closed_with_open_label() {
        let nav = menu(1280);
        assert!(!nav.is_open());
        assert!(!nav.surface().data_open);
        assert_eq!(nav.surface().aria_label, OPEN_LABEL);
    }

    #[test]
    fn toggle_flips_state_and_aria_attributes() {
        let mut nav = menu(1280);

        nav.on_toggle_click();
        assert!(nav.surface().data_open);
        assert!(nav.surface().aria_expanded);
        assert_eq!(nav.surface().aria_label, CLOSE_LABEL);

        nav.on_toggle_click();
        assert!(!nav.surface().data_open);
        assert_eq!(nav.surface().aria_label, OPEN_LABEL);
    }

    #[test]
    fn link_click_closes_only_on_mobile() {
        let mut desktop = menu(1280);
        desktop.on_toggle_click();
        desktop.on_link_click();
        assert!(desktop.is_open());

        let mut mobile = menu(MOBILE_MAX_WIDTH_PX);
        mobile.on_toggle_click();
        mobile.on_link_click();
        assert!(!mobile.is_open());
    }

    #[test]
    fn escape_closes_open_menu_and_refocuses_toggle() {
        let mut nav = menu(600);
        nav.on_toggle_click();
        nav.on_key("Escape");
        assert!(!nav.is_open());
        assert!(nav.surface().toggle_focused);
    }

    #[test]
    fn escape_on_closed_menu_keeps_focus_where_it_is() {
        let mut nav = menu(600);
        nav.on_key("Escape");
        assert!(!nav.surface().toggle_focused);
    }

    #[test]
    fn missing_elements_leave_page_inert() {
        assert!(NavMenu::<FakeNav>::mount(None).is_none());
    }
}
