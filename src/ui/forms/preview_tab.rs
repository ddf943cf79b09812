//! Preview tab: the draft rendered as a disabled form

use crate::state::{BuilderState, Preview, PreviewBody, PreviewControl, PreviewField};
use crate::ui::components::{button_width, render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const SUBMIT_LABEL: &str = "Submit";

/// Rows taken by one previewed field (label line + control)
fn field_height(field: &PreviewField) -> u16 {
    1 + match field.control {
        PreviewControl::Input { .. } => 3,
        PreviewControl::TextArea { .. } => 4,
        PreviewControl::Choice { options, .. } => 3 + options.len() as u16,
    }
}

/// Draw the preview tab
pub fn draw(frame: &mut Frame, area: Rect, builder: &BuilderState) {
    let preview = builder.draft.preview();

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", preview.title),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let description_height = if preview.description.is_some() { 2 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(description_height),
            Constraint::Min(0),
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .horizontal_margin(1)
        .split(inner);

    draw_description(frame, chunks[0], &preview);

    match &preview.body {
        PreviewBody::Empty => draw_nothing_to_preview(frame, chunks[1]),
        PreviewBody::Fields(fields) => {
            let offset = builder
                .preview_offset
                .min(fields.len().saturating_sub(1));
            draw_fields(frame, chunks[1], &fields[offset..]);
        }
    }

    let submit_area = Rect {
        width: button_width(SUBMIT_LABEL).min(chunks[2].width),
        ..chunks[2]
    };
    render_button(frame, submit_area, SUBMIT_LABEL, false, false);
}

fn draw_description(frame: &mut Frame, area: Rect, preview: &Preview) {
    if let Some(description) = &preview.description {
        let paragraph = Paragraph::new(description.as_str())
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

fn draw_nothing_to_preview(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from("No fields to preview"),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

fn draw_fields(frame: &mut Frame, area: Rect, fields: &[PreviewField]) {
    let mut y = area.y;
    let bottom = area.y + area.height;
    for field in fields {
        let height = field_height(field);
        if y + height > bottom {
            break;
        }
        draw_field(
            frame,
            Rect {
                x: area.x,
                y,
                width: area.width,
                height,
            },
            field,
        );
        y += height;
    }
}

fn draw_field(frame: &mut Frame, area: Rect, field: &PreviewField) {
    let mut label = vec![Span::styled(
        field.label.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if field.required {
        label.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(label)),
        Rect { height: 1, ..area },
    );

    let control_area = Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(1),
        ..area
    };
    let disabled = Style::default().fg(Color::DarkGray);
    let block = Block::default().borders(Borders::ALL).border_style(disabled);

    let content: Vec<Line> = match &field.control {
        PreviewControl::Input {
            input_type,
            placeholder,
        } => {
            let block = block.title_top(Line::from(format!(" {input_type} ")).right_aligned());
            frame.render_widget(
                Paragraph::new(placeholder.as_str())
                    .style(disabled)
                    .block(block),
                control_area,
            );
            return;
        }
        PreviewControl::TextArea { placeholder } => vec![Line::from(placeholder.as_str())],
        PreviewControl::Choice { prompt, options } => {
            let mut lines = vec![Line::from(format!("{prompt} ▾"))];
            lines.extend(options.iter().map(|o| Line::from(format!("  {o}"))));
            lines
        }
    };

    frame.render_widget(
        Paragraph::new(content)
            .style(disabled)
            .wrap(Wrap { trim: false })
            .block(block),
        control_area,
    );
}
