//! Screen layout (header, form, preview, help line, status bar)

use super::components::BUTTON_HEIGHT;
use crate::app::App;
use crate::state::{FieldKind, FormButton, FormField, NotificationKind};
use crate::utm::FieldName;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the delivery date box next to the campaign name
const DATE_FIELD_WIDTH: u16 = 30;
/// Width of each button on the buttons row
const BUTTON_WIDTH: u16 = 14;

/// Top-level regions of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub form: Rect,
    pub preview: Rect,
    pub help: Rect,
    pub status: Rect,
}

/// Split the whole terminal into its regions
pub fn create_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(10),   // Form
            Constraint::Length(5), // Preview
            Constraint::Length(1), // Help line
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        form: chunks[1],
        preview: chunks[2],
        help: chunks[3],
        status: chunks[4],
    }
}

/// Where every visible field and button is drawn inside the form block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormAreas {
    /// One rect per visible field, same order as `UtmForm::fields`
    pub fields: Vec<Rect>,
    /// One rect per button, same order as `FormButton::ALL`
    pub buttons: Vec<Rect>,
}

/// What a mouse click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormHit {
    Field(usize),
    Button(usize),
}

impl FormAreas {
    pub fn hit_test(&self, column: u16, row: u16) -> Option<FormHit> {
        let pos = Position::new(column, row);
        if let Some(i) = self.fields.iter().position(|r| r.contains(pos)) {
            return Some(FormHit::Field(i));
        }
        self.buttons
            .iter()
            .position(|r| r.contains(pos))
            .map(FormHit::Button)
    }
}

fn row_height(field: &FormField) -> u16 {
    match field.kind {
        FieldKind::Choice => 4,
        FieldKind::Text | FieldKind::Date => 3,
    }
}

/// Lay out the form rows. The delivery date shares a row with the
/// campaign name that follows it.
pub fn form_areas(area: Rect, fields: &[FormField]) -> FormAreas {
    let inner = area.inner(ratatui::layout::Margin::new(1, 1));

    // Each entry is the list of field indices drawn side by side on one row
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut i = 0;
    while i < fields.len() {
        let pairs_with_next = fields[i].name == FieldName::DeliveryDate
            && fields
                .get(i + 1)
                .is_some_and(|f| f.name == FieldName::CampaignName);
        if pairs_with_next {
            rows.push(vec![i, i + 1]);
            i += 2;
        } else {
            rows.push(vec![i]);
            i += 1;
        }
    }

    let mut constraints: Vec<Constraint> = rows
        .iter()
        .map(|row| Constraint::Length(row_height(&fields[row[0]])))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let mut field_rects = vec![Rect::default(); fields.len()];
    for (row, chunk) in rows.iter().zip(chunks.iter()) {
        if let [date, name] = row.as_slice() {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(DATE_FIELD_WIDTH), Constraint::Min(0)])
                .split(*chunk);
            field_rects[*date] = halves[0];
            field_rects[*name] = halves[1];
        } else {
            field_rects[row[0]] = *chunk;
        }
    }

    let button_row = chunks[rows.len()];
    let mut button_constraints: Vec<Constraint> = FormButton::ALL
        .iter()
        .map(|_| Constraint::Length(BUTTON_WIDTH))
        .collect();
    button_constraints.push(Constraint::Min(0));
    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(button_constraints)
        .split(button_row);

    FormAreas {
        fields: field_rects,
        buttons: button_chunks[..FormButton::ALL.len()].to_vec(),
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " UTM ",
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        get_view_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(notification) = &app.notification {
        let color = match notification.kind {
            NotificationKind::Success => Color::Green,
            NotificationKind::Failure => Color::Red,
            NotificationKind::Info => Color::Yellow,
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            notification.message.as_str(),
            Style::default().fg(color),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for the focused row
fn get_view_hints(app: &App) -> String {
    use crate::platform::{COPY_SHORTCUT, GENERATE_SHORTCUT, RESET_SHORTCUT};

    if app.error_dialog.is_some() {
        return "Enter/Esc:dismiss".to_string();
    }
    let common = format!("{GENERATE_SHORTCUT}:generate  {COPY_SHORTCUT}:copy  {RESET_SHORTCUT}:reset  Esc:quit");
    match app.form.active_form_field().map(|f| f.kind) {
        Some(FieldKind::Choice) => format!("←/→:choose  Tab:next  {common}"),
        Some(FieldKind::Date) => format!("↑/↓:±1 day  t:today  Del:clear  Enter:set  {common}"),
        Some(FieldKind::Text) => format!("Tab:next  Del:clear  {common}"),
        None => format!("←/→:button  Enter:press  {common}"),
    }
}
