//! Field rendering utilities for forms

use crate::state::{BuilderFocus, BuilderState, Field};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Height of a collapsed field card (borders + label input)
pub const CARD_HEIGHT_COLLAPSED: u16 = 5;

/// Height of an expanded field card (adds placeholder input and toggle)
pub const CARD_HEIGHT_EXPANDED: u16 = 9;

/// Draw a text input with label, showing a cursor when active
pub fn draw_field_with_value(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    is_multiline: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };
    let value_style = if value.is_empty() && !is_active {
        Style::default().fg(Color::DarkGray)
    } else {
        style
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if is_multiline {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, value_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw an on/off switch line
pub fn draw_toggle(frame: &mut Frame, area: Rect, label: &str, checked: bool, focused: bool) {
    let switch = if checked { "[x]" } else { "[ ]" };
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    let line = Line::from(vec![
        Span::styled(format!("{switch} "), style.add_modifier(Modifier::BOLD)),
        Span::styled(label.to_string(), style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Card height for a field in its current expanded state
pub fn card_height(builder: &BuilderState, field: &Field) -> u16 {
    if builder.is_expanded(field.id()) {
        CARD_HEIGHT_EXPANDED
    } else {
        CARD_HEIGHT_COLLAPSED
    }
}

/// Draw one field card of the build tab
pub fn draw_field_card(
    frame: &mut Frame,
    area: Rect,
    builder: &BuilderState,
    field: &Field,
    index: usize,
) {
    let id = field.id();
    let expanded = builder.is_expanded(id);
    let card_focused = builder.focus.field_id() == Some(id);

    let border_style = if card_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let settings_icon = if expanded { "▴" } else { "⚙" };
    let title = Line::from(vec![
        Span::styled(
            format!(" #{} ", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{} ▾ ", field.field_type.menu_label()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    let block = Block::default()
        .title(title)
        .title_bottom(Line::from(format!(" {settings_icon} ")).right_aligned())
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let constraints: Vec<Constraint> = if expanded {
        vec![
            Constraint::Length(3), // Question
            Constraint::Length(3), // Placeholder
            Constraint::Length(1), // Required
        ]
    } else {
        vec![Constraint::Length(3)]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    draw_field_with_value(
        frame,
        chunks[0],
        "Question",
        &field.label,
        builder.focus == BuilderFocus::Label(id.to_string()),
        false,
    );

    if expanded {
        draw_field_with_value(
            frame,
            chunks[1],
            "Placeholder",
            &field.placeholder,
            builder.focus == BuilderFocus::Placeholder(id.to_string()),
            false,
        );
        draw_toggle(
            frame,
            chunks[2],
            "Required field",
            field.required,
            builder.focus == BuilderFocus::Required(id.to_string()),
        );
    }
}
