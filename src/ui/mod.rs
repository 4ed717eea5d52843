//! UI module for rendering the TUI

mod components;
mod forms;
pub mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = layout::create_layout(frame.area());

    forms::draw_header(frame, layout.header);
    forms::draw_form(frame, layout.form, app);
    forms::draw_preview(frame, layout.preview, app);
    forms::draw_help_text(frame, layout.help, app);
    layout::draw_status_bar(frame, layout.status, app);

    if let Some(errors) = &app.error_dialog {
        components::render_error_dialog(frame, errors);
    }
}
