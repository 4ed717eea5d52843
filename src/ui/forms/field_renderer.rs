//! Field rendering utilities for forms

use crate::state::FormField;
use crate::utm::{FieldError, OTHER_MEDIUM, OTHER_SOURCE};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn border_style(is_active: bool, error: Option<FieldError>) -> Style {
    match (is_active, error) {
        (_, Some(_)) => Style::default().fg(Color::Red),
        (true, None) => Style::default().fg(Color::Cyan),
        (false, None) => Style::default().fg(Color::DarkGray),
    }
}

fn field_block(field: &FormField, is_active: bool, error: Option<FieldError>) -> Block<'static> {
    let mut block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, error));
    if let Some(err) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {err} "),
            Style::default().fg(Color::Red),
        )));
    }
    block
}

/// Draw a single-line text field
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    value: &str,
    is_active: bool,
    error: Option<FieldError>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let (display_value, style) = if value.is_empty() && !is_active {
        ("(empty)", Style::default().fg(Color::DarkGray))
    } else {
        (value, style)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    frame.render_widget(content.block(field_block(field, is_active, error)), area);
}

/// Display text for an option tag
pub fn option_label(tag: &str) -> &str {
    if tag == OTHER_SOURCE || tag == OTHER_MEDIUM {
        "other…"
    } else {
        tag
    }
}

/// Draw a choice field as a wrapped row of tags with the selection highlighted
pub fn draw_choice_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    options: &[String],
    selected: Option<usize>,
    is_active: bool,
    error: Option<FieldError>,
) {
    let mut spans = Vec::with_capacity(options.len() * 2);
    for (idx, tag) in options.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        let label = option_label(tag);
        if Some(idx) == selected {
            let style = if is_active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            };
            spans.push(Span::styled(format!("[{label}]"), style));
        } else {
            spans.push(Span::styled(
                format!(" {label} "),
                Style::default().fg(Color::Gray),
            ));
        }
    }

    let content = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: false });
    frame.render_widget(content.block(field_block(field, is_active, error)), area);
}
