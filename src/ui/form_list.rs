//! Saved forms list view

use super::render_scrollable_list;
use crate::app::App;
use crate::state::SavedForm;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Per-form actions shown on each card. Not bound to any key yet.
const FORM_ACTIONS: &[&str] = &["Edit", "View", "Copy", "Delete"];

/// Draw the forms list
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Heading
            Constraint::Min(0),    // Forms
        ])
        .split(area);

    draw_heading(frame, chunks[0]);

    if app.state.collection.is_empty() {
        draw_empty_state(frame, chunks[1]);
        return;
    }
    let forms = app.state.collection.list();

    let date_format = app.config.date_format();
    let items: Vec<ListItem> = forms
        .iter()
        .enumerate()
        .map(|(idx, form)| form_item(form, idx == app.state.selected_index, date_format))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Forms ({}) ", forms.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    render_scrollable_list(frame, chunks[1], list, app.state.selected_index);
}

fn draw_heading(frame: &mut Frame, area: Rect) {
    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "Your Forms",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Create, manage, and share your forms",
            Style::default().fg(Color::Gray),
        )),
    ]);
    let area = Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(1),
        ..area
    };
    frame.render_widget(heading, area);
}

fn draw_empty_state(frame: &mut Frame, area: Rect) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "You don't have any forms yet",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Create your first form to get started",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("n", Style::default().fg(Color::Cyan)),
            Span::raw(" to create a form"),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(content, area);
}

/// A multi-line card for one saved form
fn form_item<'a>(form: &'a SavedForm, is_selected: bool, date_format: &str) -> ListItem<'a> {
    let prefix = if is_selected { "▸ " } else { "  " };
    let style = if is_selected {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };

    let actions: Vec<Span> = FORM_ACTIONS
        .iter()
        .flat_map(|action| {
            [
                Span::styled(*action, Style::default().fg(Color::DarkGray)),
                Span::raw("  "),
            ]
        })
        .collect();

    let mut action_line = vec![Span::raw("  ")];
    action_line.extend(actions);

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(
                form.title.as_str(),
                style.add_modifier(Modifier::BOLD).fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                form.created_label(date_format),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(vec![Span::raw("  "), Span::raw(form.description.as_str())]),
        Line::from(action_line),
        Line::from(""),
    ])
}
