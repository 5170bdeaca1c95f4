//! Reusable UI components

mod button;
mod error_dialog;
mod field;
mod page_indicator;

pub use button::{render_button, BUTTON_HEIGHT};
pub use error_dialog::render_error_dialog;
pub use field::{draw_field, FIELD_HEIGHT};
pub use page_indicator::render_page_indicator;
