//! UI module for rendering the TUI

mod components;
mod form_list;
mod forms;
mod layout;
mod widgets;

pub use widgets::render_scrollable_list;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match (&app.state.current_view, &app.state.builder) {
        (View::Create, Some(builder)) => forms::draw_create(frame, main_area, builder),
        _ => form_list::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Modal notices sit above everything else
    if let Some(notice) = app.state.current_error() {
        render_error_dialog(frame, &notice.title, &notice.message);
    }
}
