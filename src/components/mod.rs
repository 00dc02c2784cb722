//! UI Components
//!
//! Leptos components making up the activity modal.

mod activity_modal;
mod activity_form;
mod favorite_picker;
mod submit_button;
mod status_banner;

pub use activity_modal::ActivityModal;
pub use activity_form::ActivityForm;
pub use favorite_picker::FavoritePicker;
pub use submit_button::SubmitButton;
pub use status_banner::StatusBanner;
