//! Page chrome shared by every page: the navigation menu and the modal
//! dialog shown after certain submissions.

pub mod modal;
pub mod nav;

pub use modal::{Modal, ModalSurface};
pub use nav::{NavMenu, NavSurface, MOBILE_MAX_WIDTH_PX};

/// DOM `KeyboardEvent.key` value for the Escape key.
pub const ESCAPE_KEY: &str = "Escape";
