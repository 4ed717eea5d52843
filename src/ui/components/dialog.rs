//! Validation error dialog

use crate::utm::FieldErrors;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MAX_WIDTH: u16 = 64;

/// Render the list of field errors centered over the form
pub fn render_error_dialog(frame: &mut Frame, errors: &FieldErrors) {
    let mut content = vec![
        Line::from(Span::styled(
            "The link could not be generated",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (field, err) in errors.iter() {
        content.push(Line::from(vec![
            Span::raw("• "),
            Span::styled(
                field.label().trim_end_matches('*'),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(": "),
            Span::styled(err.to_string(), Style::default().fg(Color::Red)),
        ]));
    }

    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" or "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to fix"),
    ]));

    let content_width = content.iter().map(Line::width).max().unwrap_or(0) as u16;
    let height = content.len() as u16 + 2; // +2 for borders
    let area = centered(frame.area(), (content_width + 4).min(MAX_WIDTH), height);

    frame.render_widget(Clear, area);
    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));
    frame.render_widget(dialog, area);
}

/// A `width` x `height` rect centered in `outer`, clipped to it
fn centered(outer: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(outer.width);
    let height = height.min(outer.height);
    Rect {
        x: outer.x + (outer.width - width) / 2,
        y: outer.y + (outer.height - height) / 2,
        width,
        height,
    }
}
