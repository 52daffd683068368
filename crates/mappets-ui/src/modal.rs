//! Modal dialog with focus handoff.

use mappets_forms::ModalTrigger;

use crate::ESCAPE_KEY;

/// The dialog element and the page-level state it touches.
pub trait ModalSurface {
    /// Handle to a focusable element on the page.
    type Focus;

    /// The element that currently has focus, if any.
    fn active_element(&self) -> Option<Self::Focus>;

    fn focus(&mut self, target: &Self::Focus);

    /// Focuses the dialog's close control. No-op when the dialog has none.
    fn focus_close_control(&mut self);

    fn set_hidden(&mut self, hidden: bool);

    /// Locks or unlocks page scrolling behind the dialog.
    fn set_scroll_locked(&mut self, locked: bool);
}

/// A dialog that returns focus to where it was when it closes.
///
/// Built over a missing element, every operation is a no-op.
pub struct Modal<S: ModalSurface> {
    surface: Option<S>,
    last_focus: Option<S::Focus>,
    open: bool,
}

impl<S: ModalSurface> Modal<S> {
    #[must_use]
    pub fn new(surface: Option<S>) -> Self {
        Self {
            surface,
            last_focus: None,
            open: false,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn show(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        self.last_focus = surface.active_element();
        surface.set_hidden(false);
        surface.set_scroll_locked(true);
        surface.focus_close_control();
        self.open = true;
        tracing::debug!("modal opened");
    }

    pub fn close(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        surface.set_hidden(true);
        surface.set_scroll_locked(false);
        if let Some(previous) = self.last_focus.take() {
            surface.focus(&previous);
        }
        self.open = false;
        tracing::debug!("modal closed");
    }

    /// Escape is only listened for while the dialog is open.
    pub fn on_key(&mut self, key: &str) {
        if self.open && key == ESCAPE_KEY {
            self.close();
        }
    }

    pub fn on_close_click(&mut self) {
        self.close();
    }

    /// A click landed inside the modal element. Only clicks on the overlay
    /// itself, not on the dialog content, dismiss it.
    pub fn on_click(&mut self, target_is_overlay: bool) {
        if target_is_overlay {
            self.close();
        }
    }
}

impl<S: ModalSurface> ModalTrigger for Modal<S> {
    fn open(&mut self) {
        self.show();
    }
}
