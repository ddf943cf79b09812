//! Layout components (header, status bar)

use super::components::{button_width, render_key_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const APP_NAME: &str = "FormCraft";
const CREATE_KEY: &str = "n";
const CREATE_LABEL: &str = "Create Form";

/// Split the screen into header, main content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Header
            Constraint::Min(0),                // Content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the app name and, on the list, the create button
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title_area = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    let title = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(
            APP_NAME,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(title, title_area);

    if app.state.current_view == View::List {
        let content = format!("{CREATE_KEY} {CREATE_LABEL}");
        let width = button_width(&content).min(area.width);
        let button_area = Rect {
            x: area.x + area.width - width,
            width,
            ..area
        };
        render_key_button(frame, button_area, CREATE_KEY, CREATE_LABEL, true);
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    let hints = get_view_hints(app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_width = (quit_hint.len() as u16).min(area.width);
    let quit_area = Rect {
        x: area.x + area.width - quit_width,
        width: quit_width,
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> String {
    match view {
        View::List => "j/k:nav  n:new form  q:quit".to_string(),
        View::Create => format!(
            "Tab:next  {}:add field  {}:save  Esc:cancel",
            crate::platform::ADD_FIELD_SHORTCUT,
            crate::platform::SAVE_SHORTCUT
        ),
    }
}
