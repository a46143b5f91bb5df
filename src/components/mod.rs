//! UI Components
//!
//! Reusable Leptos components.

mod list_view;
mod interactive_form;

pub use list_view::ListView;
pub use interactive_form::InteractiveForm;
