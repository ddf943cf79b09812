//! Reusable UI components

mod button;
mod dialog;

pub use button::{button_width, render_button, render_key_button, BUTTON_HEIGHT};
pub use dialog::{centered_rect, render_error_dialog};
