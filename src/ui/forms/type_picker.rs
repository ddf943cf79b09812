//! Add-field popup listing every field type

use crate::state::{FieldType, TypePicker};
use crate::ui::components::centered_rect;
use crate::ui::render_scrollable_list;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

/// Draw the picker as an overlay
pub fn draw(frame: &mut Frame, picker: &TypePicker) {
    let types = FieldType::all();
    let area = centered_rect(frame.area(), 34, types.len() as u16 + 4);
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = types
        .iter()
        .enumerate()
        .map(|(idx, field_type)| {
            let is_selected = idx == picker.selected;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(field_type.menu_label(), style),
                Span::styled(
                    format!("  {field_type}"),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(Span::styled(
                " Add Field ",
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::from(" Enter: add  Esc: close ").centered())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    render_scrollable_list(frame, area, list, picker.selected);
}
