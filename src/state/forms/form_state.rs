//! Editing session state for the UTM form

use super::field::{FieldKind, FormField, TextEdit};
use crate::utm::{self, FieldErrors, FieldName, FieldUpdate, FormState};
use chrono::{Days, NaiveDate};
use std::collections::BTreeSet;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<FormField>;
}

/// Buttons on the last row, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Generate,
    Copy,
    Reset,
}

impl FormButton {
    pub const ALL: [FormButton; 3] = [FormButton::Generate, FormButton::Copy, FormButton::Reset];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Generate => "Generate",
            Self::Copy => "Copy",
            Self::Reset => "Reset",
        }
    }
}

/// The typed delivery date could not be read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateInputError {
    #[error("'{0}' is not a date, use YYYY-MM-DD")]
    Invalid(String),
}

/// UTM form with focus, option lists and submit bookkeeping
#[derive(Debug, Clone)]
pub struct UtmForm {
    /// Current field values
    pub values: FormState,
    pub source_options: Vec<String>,
    pub medium_options: Vec<String>,
    /// Text in the delivery date box, committed on Enter or when leaving it
    pub date_draft: String,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row
    pub selected_button: usize,
    /// Set after the first generate attempt; from then on every error is shown
    pub submitted: bool,
    touched: BTreeSet<FieldName>,
    initial: FormState,
}

impl UtmForm {
    pub fn new(
        source_options: Vec<String>,
        medium_options: Vec<String>,
        default_source: String,
        default_medium: String,
    ) -> Self {
        let initial = FormState::with_defaults(default_source, default_medium);
        Self {
            values: initial.clone(),
            source_options,
            medium_options,
            date_draft: String::new(),
            active_field_index: 0,
            selected_button: 0,
            submitted: false,
            touched: BTreeSet::new(),
            initial,
        }
    }

    /// Visible rows; the "other" text boxes appear only when their sentinel is chosen
    pub fn fields(&self) -> Vec<FormField> {
        let mut names = vec![FieldName::WebsiteUrl, FieldName::Source];
        if self.values.is_other_source() {
            names.push(FieldName::SourceOther);
        }
        names.push(FieldName::Medium);
        if self.values.is_other_medium() {
            names.push(FieldName::MediumOther);
        }
        names.extend([
            FieldName::DeliveryDate,
            FieldName::CampaignName,
            FieldName::Content,
        ]);
        names.into_iter().map(FormField::new).collect()
    }

    /// Index of the buttons row
    pub fn buttons_row(&self) -> usize {
        self.fields().len()
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.buttons_row()
    }

    pub fn active_form_field(&self) -> Option<FormField> {
        self.get_field(self.active_field_index)
    }

    pub fn active_button(&self) -> FormButton {
        FormButton::ALL[self.selected_button % FormButton::ALL.len()]
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % FormButton::ALL.len();
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = FormButton::ALL.len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Focus the row showing `name`, if it is visible
    pub fn focus(&mut self, name: FieldName) {
        if let Some(index) = self.fields().iter().position(|f| f.name == name) {
            self.set_active_field(index);
        }
    }

    /// Route one change through the core update path
    pub fn update(&mut self, update: FieldUpdate) {
        let field = update.field();
        tracing::debug!(field = %field, "Form field updated");
        self.values = self.values.apply(update);
        self.touched.insert(field);
        // A manual name edit drops the date, so the date box follows either way
        if matches!(field, FieldName::DeliveryDate | FieldName::CampaignName) {
            self.sync_date_draft();
        }
        // Keep the cursor on the same row if a conditional field disappeared
        self.set_active_field(self.active_field_index);
    }

    /// Apply a keystroke to the focused text field
    pub fn edit_active_text(&mut self, edit: TextEdit) {
        let Some(field) = self.active_form_field() else {
            return;
        };
        match field.kind {
            FieldKind::Text => {
                let Some(current) = self.values.text(field.name) else {
                    return;
                };
                let next = edit.apply(current);
                if let Some(update) = text_update(field.name, next) {
                    self.update(update);
                }
            }
            FieldKind::Date => {
                self.date_draft = edit.apply(&self.date_draft);
            }
            FieldKind::Choice => {}
        }
    }

    /// Cycle the focused choice field
    pub fn cycle_choice(&mut self, forward: bool) {
        let Some(field) = self.active_form_field() else {
            return;
        };
        let (options, current) = match field.name {
            FieldName::Source => (&self.source_options, &self.values.source),
            FieldName::Medium => (&self.medium_options, &self.values.medium),
            _ => return,
        };
        if options.is_empty() {
            return;
        }
        let len = options.len();
        let next_index = match options.iter().position(|o| o == current) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        let tag = options[next_index].clone();
        let update = if field.name == FieldName::Source {
            FieldUpdate::Source(tag)
        } else {
            FieldUpdate::Medium(tag)
        };
        self.update(update);
    }

    /// Index of the selected option for a choice field
    pub fn selected_option(&self, name: FieldName) -> Option<usize> {
        match name {
            FieldName::Source => self
                .source_options
                .iter()
                .position(|o| *o == self.values.source),
            FieldName::Medium => self
                .medium_options
                .iter()
                .position(|o| *o == self.values.medium),
            _ => None,
        }
    }

    /// Select a delivery date (or clear it)
    pub fn select_date(&mut self, date: Option<NaiveDate>) {
        if date != self.values.delivery_date {
            self.update(FieldUpdate::DeliveryDate(date));
        } else {
            self.sync_date_draft();
        }
    }

    /// Move the delivery date by `days`, starting from `today` when none is set
    pub fn step_date(&mut self, days: i64, today: NaiveDate) {
        let target = match self.values.delivery_date {
            None => Some(today),
            Some(current) if days >= 0 => current.checked_add_days(Days::new(days.unsigned_abs())),
            Some(current) => current.checked_sub_days(Days::new(days.unsigned_abs())),
        };
        if let Some(date) = target {
            self.select_date(Some(date));
        }
    }

    /// Commit the typed date. An empty box clears the date.
    pub fn commit_date_draft(&mut self) -> Result<(), DateInputError> {
        let draft = self.date_draft.trim();
        if draft.is_empty() {
            self.select_date(None);
            return Ok(());
        }
        match NaiveDate::parse_from_str(draft, DATE_FORMAT) {
            Ok(date) => {
                self.select_date(Some(date));
                Ok(())
            }
            Err(_) => {
                let err = DateInputError::Invalid(draft.to_string());
                self.sync_date_draft();
                Err(err)
            }
        }
    }

    /// Whether the date box holds text that differs from the stored date
    pub fn has_pending_date_draft(&self) -> bool {
        self.date_draft.trim() != format_date(self.values.delivery_date)
    }

    fn sync_date_draft(&mut self) {
        self.date_draft = format_date(self.values.delivery_date);
    }

    /// All current validation errors
    pub fn errors(&self) -> FieldErrors {
        utm::validate(&self.values)
    }

    /// Errors worth showing: touched fields before the first submit, all after
    pub fn visible_errors(&self) -> FieldErrors {
        let errors = self.errors();
        if self.submitted {
            errors
        } else {
            errors.filtered(|field| self.touched.contains(&field))
        }
    }

    pub fn preview(&self) -> Option<String> {
        utm::preview(&self.values)
    }

    /// Validate and generate; on failure focus the first offending field
    pub fn submit(&mut self) -> Result<String, FieldErrors> {
        self.submitted = true;
        let result = utm::submit(&self.values);
        if let Err(errors) = &result {
            if let Some((field, _)) = errors.iter().next() {
                self.focus(field);
            }
        }
        result
    }

    /// Back to the initial values
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.date_draft.clear();
        self.active_field_index = 0;
        self.selected_button = 0;
        self.submitted = false;
        self.touched.clear();
    }
}

impl Form for UtmForm {
    fn field_count(&self) -> usize {
        self.fields().len() + 1 // fields + buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.buttons_row());
    }
    fn get_field(&self, index: usize) -> Option<FormField> {
        self.fields().get(index).copied()
    }
}

fn text_update(name: FieldName, value: String) -> Option<FieldUpdate> {
    Some(match name {
        FieldName::WebsiteUrl => FieldUpdate::WebsiteUrl(value),
        FieldName::SourceOther => FieldUpdate::SourceOther(value),
        FieldName::MediumOther => FieldUpdate::MediumOther(value),
        FieldName::CampaignName => FieldUpdate::CampaignName(value),
        FieldName::Content => FieldUpdate::Content(value),
        FieldName::Source | FieldName::Medium | FieldName::DeliveryDate => return None,
    })
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utm::{FieldError, OTHER_MEDIUM, OTHER_SOURCE};

    fn create_test_form() -> UtmForm {
        UtmForm::new(
            vec!["newsletter".into(), "line".into(), OTHER_SOURCE.into()],
            vec!["email".into(), "social".into(), OTHER_MEDIUM.into()],
            "newsletter".into(),
            "email".into(),
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn type_text(form: &mut UtmForm, text: &str) {
        for c in text.chars() {
            form.edit_active_text(TextEdit::Push(c));
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = create_test_form();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.values.source, "newsletter");
            assert_eq!(form.values.medium, "email");
            assert!(!form.submitted);
        }

        #[test]
        fn test_default_field_order() {
            let names: Vec<FieldName> = create_test_form().fields().iter().map(|f| f.name).collect();
            assert_eq!(
                names,
                vec![
                    FieldName::WebsiteUrl,
                    FieldName::Source,
                    FieldName::Medium,
                    FieldName::DeliveryDate,
                    FieldName::CampaignName,
                    FieldName::Content,
                ]
            );
        }

        #[test]
        fn test_field_count_includes_buttons() {
            let form = create_test_form();
            assert_eq!(form.field_count(), 7);
            assert_eq!(form.buttons_row(), 6);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = create_test_form();
            for _ in 0..form.field_count() {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_buttons() {
            let mut form = create_test_form();
            form.prev_field();
            assert!(form.is_buttons_row_active());
            assert!(form.active_form_field().is_none());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = create_test_form();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, form.buttons_row());
        }

        #[test]
        fn test_buttons_wrap() {
            let mut form = create_test_form();
            assert_eq!(form.active_button(), FormButton::Generate);
            form.prev_button();
            assert_eq!(form.active_button(), FormButton::Reset);
            form.next_button();
            assert_eq!(form.active_button(), FormButton::Generate);
        }

        #[test]
        fn test_other_source_inserts_text_row() {
            let mut form = create_test_form();
            form.focus(FieldName::Source);
            form.cycle_choice(false);
            assert_eq!(form.values.source, OTHER_SOURCE);
            assert_eq!(form.get_field(2).map(|f| f.name), Some(FieldName::SourceOther));
            // Focus stays on the choice row
            assert_eq!(form.active_form_field().map(|f| f.name), Some(FieldName::Source));
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_into_text_field() {
            let mut form = create_test_form();
            type_text(&mut form, "https://example.com");
            assert_eq!(form.values.website_url, "https://example.com");
            form.edit_active_text(TextEdit::Pop);
            assert_eq!(form.values.website_url, "https://example.co");
        }

        #[test]
        fn test_typing_on_choice_is_ignored() {
            let mut form = create_test_form();
            form.focus(FieldName::Source);
            type_text(&mut form, "abc");
            assert_eq!(form.values.source, "newsletter");
        }

        #[test]
        fn test_cycle_choice_wraps() {
            let mut form = create_test_form();
            form.focus(FieldName::Medium);
            form.cycle_choice(true);
            assert_eq!(form.values.medium, "social");
            form.cycle_choice(true);
            form.cycle_choice(true);
            assert_eq!(form.values.medium, "email");
            assert_eq!(form.selected_option(FieldName::Medium), Some(0));
        }

        #[test]
        fn test_unknown_current_choice_resets_to_first() {
            let mut form = create_test_form();
            form.values.medium = "fax".into();
            form.focus(FieldName::Medium);
            form.cycle_choice(true);
            assert_eq!(form.values.medium, "email");
        }

        #[test]
        fn test_reset_restores_defaults() {
            let mut form = create_test_form();
            type_text(&mut form, "https://example.com");
            form.focus(FieldName::Source);
            form.cycle_choice(true);
            let _ = form.submit();
            form.reset();
            assert_eq!(form.values, FormState::with_defaults("newsletter", "email"));
            assert!(!form.submitted);
            assert!(form.visible_errors().is_empty());
        }
    }

    mod dates {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typed_date_prefixes_campaign() {
            let mut form = create_test_form();
            form.focus(FieldName::CampaignName);
            type_text(&mut form, "launch");
            form.focus(FieldName::DeliveryDate);
            type_text(&mut form, "2024-03-05");
            form.commit_date_draft().unwrap();
            assert_eq!(form.values.campaign_name, "20240305_launch");
            assert_eq!(form.values.delivery_date, Some(date(2024, 3, 5)));
        }

        #[test]
        fn test_invalid_date_reverts_draft() {
            let mut form = create_test_form();
            form.select_date(Some(date(2024, 3, 5)));
            form.focus(FieldName::DeliveryDate);
            form.date_draft = "2024-13-40".into();
            assert_eq!(
                form.commit_date_draft(),
                Err(DateInputError::Invalid("2024-13-40".into()))
            );
            assert_eq!(form.date_draft, "2024-03-05");
            assert_eq!(form.values.delivery_date, Some(date(2024, 3, 5)));
        }

        #[test]
        fn test_empty_draft_clears_date() {
            let mut form = create_test_form();
            form.values.campaign_name = "launch".into();
            form.select_date(Some(date(2024, 3, 5)));
            form.date_draft.clear();
            form.commit_date_draft().unwrap();
            assert_eq!(form.values.delivery_date, None);
            assert_eq!(form.values.campaign_name, "launch");
        }

        #[test]
        fn test_empty_draft_without_date_keeps_manual_prefix() {
            let mut form = create_test_form();
            form.focus(FieldName::CampaignName);
            type_text(&mut form, "20240101_manual");
            form.commit_date_draft().unwrap();
            assert_eq!(form.values.campaign_name, "20240101_manual");
        }

        #[test]
        fn test_step_from_nothing_starts_today() {
            let mut form = create_test_form();
            form.step_date(1, date(2024, 3, 5));
            assert_eq!(form.values.delivery_date, Some(date(2024, 3, 5)));
            assert_eq!(form.date_draft, "2024-03-05");
        }

        #[test]
        fn test_step_moves_by_days() {
            let mut form = create_test_form();
            form.values.campaign_name = "sale".into();
            form.select_date(Some(date(2024, 2, 28)));
            form.step_date(2, date(2000, 1, 1));
            assert_eq!(form.values.delivery_date, Some(date(2024, 3, 1)));
            form.step_date(-1, date(2000, 1, 1));
            assert_eq!(form.values.delivery_date, Some(date(2024, 2, 29)));
            assert_eq!(form.values.campaign_name, "20240229_sale");
        }

        #[test]
        fn test_manual_campaign_edit_clears_date() {
            let mut form = create_test_form();
            form.select_date(Some(date(2024, 3, 5)));
            form.focus(FieldName::CampaignName);
            type_text(&mut form, "x");
            assert_eq!(form.values.campaign_name, "20240305_x");
            assert_eq!(form.values.delivery_date, None);
            assert_eq!(form.date_draft, "");
            assert!(!form.has_pending_date_draft());
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_untouched_errors_hidden() {
            let form = create_test_form();
            assert!(!form.errors().is_empty());
            assert!(form.visible_errors().is_empty());
        }

        #[test]
        fn test_touched_field_error_visible() {
            let mut form = create_test_form();
            type_text(&mut form, "nope");
            let visible = form.visible_errors();
            assert_eq!(visible.get(FieldName::WebsiteUrl), Some(FieldError::InvalidUrl));
            assert!(!visible.contains(FieldName::CampaignName));
        }

        #[test]
        fn test_submit_reveals_all_and_focuses_first() {
            let mut form = create_test_form();
            form.focus(FieldName::Content);
            let errors = form.submit().unwrap_err();
            assert!(errors.contains(FieldName::WebsiteUrl));
            assert_eq!(form.visible_errors(), errors);
            assert_eq!(
                form.active_form_field().map(|f| f.name),
                Some(FieldName::WebsiteUrl)
            );
        }

        #[test]
        fn test_submit_success() {
            let mut form = create_test_form();
            type_text(&mut form, "https://example.com");
            form.focus(FieldName::CampaignName);
            type_text(&mut form, "spring_sale");
            assert_eq!(
                form.submit().as_deref(),
                Ok("https://example.com?utm_source=newsletter&utm_medium=email&utm_campaign=spring_sale")
            );
        }

        #[test]
        fn test_preview_follows_values() {
            let mut form = create_test_form();
            assert_eq!(form.preview(), None);
            type_text(&mut form, "https://example.com");
            form.focus(FieldName::CampaignName);
            type_text(&mut form, "a");
            assert!(form.preview().is_some());
        }
    }
}
