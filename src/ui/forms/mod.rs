//! Form rendering module
//!
//! This module contains UI components for the create view:
//! - `build_tab`: form details and editable field cards
//! - `preview_tab`: the draft rendered as a disabled form
//! - `field_renderer`: input and field card rendering utilities
//! - `type_picker`: the add-field popup

mod build_tab;
mod field_renderer;
mod preview_tab;
mod type_picker;

use crate::state::{BuilderState, DraftTab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Draw the create view around an open draft
pub fn draw_create(frame: &mut Frame, area: Rect, builder: &BuilderState) {
    let block = Block::default()
        .title(" Create a New Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tabs
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Tab content
            Constraint::Length(1), // Help text
        ])
        .horizontal_margin(1)
        .split(inner);

    let tabs = Tabs::new([DraftTab::Build.label(), DraftTab::Preview.label()])
        .select(builder.tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    frame.render_widget(tabs, chunks[0]);

    match builder.tab {
        DraftTab::Build => build_tab::draw(frame, chunks[2], builder),
        DraftTab::Preview => preview_tab::draw(frame, chunks[2], builder),
    }

    draw_help_text(frame, chunks[3], builder);

    if let Some(picker) = &builder.picker {
        type_picker::draw(frame, picker);
    }
}

/// Key hints for the current tab and focus
fn draw_help_text(frame: &mut Frame, area: Rect, builder: &BuilderState) {
    let key = Style::default().fg(Color::Cyan);
    let mut spans = Vec::new();

    match builder.tab {
        DraftTab::Build => {
            spans.push(Span::styled("Tab", key));
            spans.push(Span::raw(": next  "));
            if builder.focus.field_id().is_some() {
                spans.push(Span::styled("^E", key));
                spans.push(Span::raw(": settings  "));
                spans.push(Span::styled("^R", key));
                spans.push(Span::raw(": type  "));
                spans.push(Span::styled("^D", key));
                spans.push(Span::raw(": remove  "));
            }
        }
        DraftTab::Preview => {
            spans.push(Span::styled("↑/↓", key));
            spans.push(Span::raw(": scroll  "));
        }
    }

    spans.extend([
        Span::styled(crate::platform::PREVIEW_SHORTCUT, key),
        Span::raw(": build/preview  "),
        Span::styled(crate::platform::SAVE_SHORTCUT, key),
        Span::raw(": save form  "),
        Span::styled("Esc", key),
        Span::raw(": back to forms"),
    ]);

    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
