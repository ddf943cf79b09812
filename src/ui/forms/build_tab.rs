//! Build tab: form details and the editable field cards

use super::field_renderer::{card_height, draw_field_card, draw_field_with_value};
use crate::state::{BuilderFocus, BuilderState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the build tab
pub fn draw(frame: &mut Frame, area: Rect, builder: &BuilderState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(5), // Description
            Constraint::Length(1), // Fields header
            Constraint::Min(0),    // Field cards
        ])
        .split(area);

    draw_field_with_value(
        frame,
        chunks[0],
        "Form Title",
        builder.draft.title(),
        builder.focus == BuilderFocus::Title,
        false,
    );
    draw_field_with_value(
        frame,
        chunks[1],
        "Description",
        builder.draft.description(),
        builder.focus == BuilderFocus::Description,
        true,
    );

    draw_fields_header(frame, chunks[2]);

    if builder.draft.fields().is_empty() {
        draw_no_fields(frame, chunks[3]);
    } else {
        draw_cards(frame, chunks[3], builder);
    }
}

fn draw_fields_header(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Cyan);
    let line = Line::from(vec![
        Span::styled("Form Fields", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("   + "),
        Span::styled("^T", key),
        Span::raw(" Text  + "),
        Span::styled("^Y", key),
        Span::raw(" Paragraph  + "),
        Span::styled("^O", key),
        Span::raw(" Dropdown  + "),
        Span::styled(crate::platform::ADD_FIELD_SHORTCUT, key),
        Span::raw(" More"),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_no_fields(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No fields added yet",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("Ctrl+T", Style::default().fg(Color::Cyan)),
            Span::raw(" to add your first question"),
        ]),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

/// Index of the first card to draw so the focused card stays visible
fn first_visible_card(builder: &BuilderState, available: u16) -> usize {
    let fields = builder.draft.fields();
    let Some(focused) = builder
        .focus
        .field_id()
        .and_then(|id| fields.iter().position(|f| f.id() == id))
    else {
        return 0;
    };

    let mut start = 0;
    let height_through_focus = |start: usize| -> u16 {
        fields[start..=focused]
            .iter()
            .map(|f| card_height(builder, f))
            .sum()
    };
    while start < focused && height_through_focus(start) > available {
        start += 1;
    }
    start
}

fn draw_cards(frame: &mut Frame, area: Rect, builder: &BuilderState) {
    let start = first_visible_card(builder, area.height);
    let mut y = area.y;
    let bottom = area.y + area.height;

    for (index, field) in builder.draft.fields().iter().enumerate().skip(start) {
        let height = card_height(builder, field);
        if y + height > bottom {
            break;
        }
        let card = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        draw_field_card(frame, card, builder, field, index);
        y += height;
    }
}
