//! Application state and core logic

use crate::clipboard::{ClipboardChannel, ClipboardOutcome, ClipboardWriter};
use crate::config::TuiConfig;
use crate::state::{FieldKind, Form, FormButton, Notification, TextEdit, UtmForm};
use crate::ui::layout::{create_layout, form_areas, FormHit};
use crate::utm::FieldErrors;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Main application struct
pub struct App {
    /// The form being edited
    pub form: UtmForm,
    /// Link from the last successful generate; cleared by any edit
    pub generated_url: Option<String>,
    /// Errors from the last failed generate, shown until dismissed
    pub error_dialog: Option<FieldErrors>,
    /// Transient status-bar message
    pub notification: Option<Notification>,
    /// Terminal size for mouse hit testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
    clipboard: ClipboardChannel,
    pending_copy: Option<JoinHandle<()>>,
    notification_ttl: Duration,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig, clipboard: Arc<dyn ClipboardWriter>) -> Self {
        let form = UtmForm::new(
            config.source_options(),
            config.medium_options(),
            config.initial_source(),
            config.initial_medium(),
        );

        Self {
            form,
            generated_url: None,
            error_dialog: None,
            notification: None,
            terminal_size: None,
            clipboard: ClipboardChannel::new(clipboard),
            pending_copy: None,
            notification_ttl: config.notification_duration(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Link the Copy action would put on the clipboard
    pub fn copy_target(&self) -> Option<String> {
        self.generated_url.clone().or_else(|| self.form.preview())
    }

    /// Collect finished clipboard writes and drop expired notifications
    pub fn tick(&mut self) {
        if self.pending_copy.as_ref().is_some_and(|h| h.is_finished()) {
            self.pending_copy = None;
        }
        while let Some(outcome) = self.clipboard.try_recv() {
            self.notification = Some(match outcome {
                ClipboardOutcome::Copied { chars } => Notification::success(
                    format!("Copied {chars} chars to clipboard"),
                    self.notification_ttl,
                ),
                ClipboardOutcome::Failed(err) => {
                    Notification::failure(format!("Copy failed: {err}"), self.notification_ttl)
                }
            });
        }

        if self.notification.as_ref().is_some_and(|n| n.is_expired()) {
            self.notification = None;
        }
    }

    fn notify_info(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification::info(message, self.notification_ttl));
    }

    fn notify_failure(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification::failure(message, self.notification_ttl));
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let before = self.form.values.clone();
        self.dispatch_key(key);
        if self.form.values != before {
            self.generated_url = None;
        }
        Ok(())
    }

    fn dispatch_key(&mut self, key: KeyEvent) {
        if self.error_dialog.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.error_dialog = None;
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let copy_modifier = key.modifiers.contains(crate::platform::COPY_MODIFIER);

        // Keyboard shortcuts (work from anywhere)
        match key.code {
            KeyCode::Char('s') if ctrl => return self.generate(),
            KeyCode::Char('y') if ctrl || copy_modifier => return self.copy(),
            KeyCode::Char('r') if ctrl => return self.reset(),
            KeyCode::Esc => {
                self.quit = true;
                return;
            }
            KeyCode::Tab => {
                self.leave_field();
                self.form.next_field();
                return;
            }
            KeyCode::BackTab => {
                self.leave_field();
                self.form.prev_field();
                return;
            }
            _ => {}
        }

        if ctrl || key.modifiers.contains(KeyModifiers::ALT) {
            return;
        }

        match self.form.active_form_field().map(|f| f.kind) {
            None => self.handle_buttons_key(key),
            Some(FieldKind::Choice) => self.handle_choice_key(key),
            Some(FieldKind::Date) => self.handle_date_key(key),
            Some(FieldKind::Text) => self.handle_text_key(key),
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.form.edit_active_text(TextEdit::Push(c)),
            KeyCode::Backspace => self.form.edit_active_text(TextEdit::Pop),
            KeyCode::Delete => self.form.edit_active_text(TextEdit::Clear),
            KeyCode::Enter | KeyCode::Down => self.form.next_field(),
            KeyCode::Up => self.form.prev_field(),
            _ => {}
        }
    }

    fn handle_choice_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                self.form.cycle_choice(true)
            }
            KeyCode::Left | KeyCode::Char('h') => self.form.cycle_choice(false),
            KeyCode::Enter | KeyCode::Down => self.form.next_field(),
            KeyCode::Up => self.form.prev_field(),
            _ => {}
        }
    }

    fn handle_date_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.form.step_date(1, today()),
            KeyCode::Down => self.form.step_date(-1, today()),
            KeyCode::PageUp => self.form.step_date(7, today()),
            KeyCode::PageDown => self.form.step_date(-7, today()),
            KeyCode::Char('t') => self.form.select_date(Some(today())),
            KeyCode::Delete => self.form.select_date(None),
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                self.form.edit_active_text(TextEdit::Push(c))
            }
            KeyCode::Backspace => self.form.edit_active_text(TextEdit::Pop),
            KeyCode::Enter => {
                self.commit_date();
            }
            _ => {}
        }
    }

    fn handle_buttons_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => self.form.next_button(),
            KeyCode::Left | KeyCode::Char('h') => self.form.prev_button(),
            KeyCode::Up => self.form.prev_field(),
            KeyCode::Enter | KeyCode::Char(' ') => self.press(self.form.active_button()),
            _ => {}
        }
    }

    /// Handle mouse events: a left click focuses a field or presses a button
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.error_dialog.is_some() {
            return Ok(());
        }
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Ok(());
        }
        let Some((height, width)) = self.terminal_size else {
            return Ok(());
        };

        let layout = create_layout(Rect::new(0, 0, width, height));
        let areas = form_areas(layout.form, &self.form.fields());
        let before = self.form.values.clone();
        match areas.hit_test(mouse.column, mouse.row) {
            Some(FormHit::Field(index)) => {
                if index != self.form.active_field() {
                    self.leave_field();
                }
                self.form.set_active_field(index);
            }
            Some(FormHit::Button(index)) => {
                if !self.leave_field() {
                    return Ok(());
                }
                self.form.set_active_field(self.form.buttons_row());
                self.form.selected_button = index;
                self.press(self.form.active_button());
            }
            None => {}
        }
        if self.form.values != before {
            self.generated_url = None;
        }
        Ok(())
    }

    fn press(&mut self, button: FormButton) {
        match button {
            FormButton::Generate => self.generate(),
            FormButton::Copy => self.copy(),
            FormButton::Reset => self.reset(),
        }
    }

    /// Commit a typed date before focus moves away from the date box.
    /// Returns false when the typed text was not a date.
    fn leave_field(&mut self) -> bool {
        let on_date = self
            .form
            .active_form_field()
            .is_some_and(|f| f.kind == FieldKind::Date);
        if on_date && self.form.has_pending_date_draft() {
            return self.commit_date();
        }
        true
    }

    fn commit_date(&mut self) -> bool {
        match self.form.commit_date_draft() {
            Ok(()) => true,
            Err(err) => {
                tracing::info!("Rejected delivery date: {err}");
                self.notify_failure(err.to_string());
                false
            }
        }
    }

    /// Validate and generate the link
    fn generate(&mut self) {
        // A rejected date must not turn into an undated link
        if !self.leave_field() {
            return;
        }
        match self.form.submit() {
            Ok(url) => {
                tracing::info!(url = %url, "Generated URL");
                self.generated_url = Some(url);
                self.error_dialog = None;
                self.notify_info(format!(
                    "URL generated, {} to copy",
                    crate::platform::COPY_SHORTCUT
                ));
            }
            Err(errors) => {
                tracing::info!(count = errors.len(), errors = ?errors.messages(), "Validation failed");
                self.generated_url = None;
                self.error_dialog = Some(errors);
            }
        }
    }

    /// Copy the current link in the background
    fn copy(&mut self) {
        if !self.leave_field() {
            return;
        }
        let Some(text) = self.copy_target() else {
            self.notify_info("Nothing to copy yet, fill in the required fields");
            return;
        };
        self.pending_copy = Some(self.clipboard.copy(text));
        self.notify_info("Copying…");
    }

    fn reset(&mut self) {
        self.form.reset();
        self.generated_url = None;
        self.error_dialog = None;
        self.notify_info("Form cleared");
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
