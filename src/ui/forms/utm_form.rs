//! UTM form rendering

use super::field_renderer::{draw_choice_field, draw_text_field};
use crate::app::App;
use crate::state::{FieldKind, FormButton};
use crate::ui::components::render_button;
use crate::ui::layout::form_areas;
use crate::utm::FieldName;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the form fields and the buttons row
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let fields = form.fields();
    let areas = form_areas(area, &fields);
    let errors = form.visible_errors();

    let block = Block::default()
        .title(" Campaign ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    for (idx, (field, rect)) in fields.iter().zip(areas.fields.iter()).enumerate() {
        let is_active = form.active_field_index == idx;
        let error = errors.get(field.name);
        match field.kind {
            FieldKind::Choice => {
                let options = if field.name == FieldName::Source {
                    &form.source_options
                } else {
                    &form.medium_options
                };
                draw_choice_field(
                    frame,
                    *rect,
                    field,
                    options,
                    form.selected_option(field.name),
                    is_active,
                    error,
                );
            }
            FieldKind::Date => {
                draw_text_field(frame, *rect, field, &form.date_draft, is_active, None);
            }
            FieldKind::Text => {
                let value = form.values.text(field.name).unwrap_or_default();
                draw_text_field(frame, *rect, field, value, is_active, error);
            }
        }
    }

    let on_buttons = form.is_buttons_row_active();
    let has_link = app.copy_target().is_some();
    for (button, rect) in FormButton::ALL.iter().zip(areas.buttons.iter()) {
        let is_selected = on_buttons && form.active_button() == *button;
        let is_enabled = *button != FormButton::Copy || has_link;
        render_button(frame, *rect, button.label(), is_selected, is_enabled);
    }
}

/// Draw the live preview (or the last generated link)
pub fn draw_preview(frame: &mut Frame, area: Rect, app: &App) {
    let (title, border_color, body) = match (&app.generated_url, app.form.preview()) {
        (Some(url), _) => (
            " Generated URL ",
            Color::Green,
            Line::from(Span::styled(url.clone(), Style::default().fg(Color::Green))),
        ),
        (None, Some(url)) => (" URL Preview ", Color::Cyan, Line::from(url)),
        (None, None) => (
            " URL Preview ",
            Color::DarkGray,
            Line::from(Span::styled(
                "Fill in every field marked * to see the URL.",
                Style::default().fg(Color::DarkGray),
            )),
        ),
    };

    let preview = Paragraph::new(body).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(preview, area);
}

/// Draw the help line for the focused field
pub fn draw_help_text(frame: &mut Frame, area: Rect, app: &App) {
    let text = match app.form.active_form_field() {
        Some(field) => field.help().to_string(),
        None => match app.form.active_button() {
            FormButton::Generate => "Validate the form and generate the link".to_string(),
            FormButton::Copy => "Copy the link to the clipboard".to_string(),
            FormButton::Reset => "Clear the form".to_string(),
        },
    };
    let help = Paragraph::new(format!(" {text}")).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

/// Draw the title and usage line
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            " UTM Link Builder",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Fill in every field marked * to build a link your analytics can attribute.",
            Style::default().fg(Color::Gray),
        )),
    ]);
    frame.render_widget(header, area);
}
