//! Field-level validation rules

use super::form::{FieldName, FormState};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;
use url::Url;

/// Lowercase alphanumerics, underscore and hyphen
static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+$").expect("invalid slug regex"));

/// Why a single field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("required")]
    Required,
    #[error("must be a valid URL")]
    InvalidUrl,
    #[error("invalid characters")]
    InvalidCharacters,
}

/// Validation result keyed by the offending field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldName, FieldError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FieldName) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    #[cfg(test)]
    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, FieldError)> + '_ {
        self.0.iter().map(|(field, err)| (*field, *err))
    }

    /// Flat list of `"field: message"` lines in field order
    pub fn messages(&self) -> Vec<String> {
        self.iter()
            .map(|(field, err)| format!("{}: {}", field.label().trim_end_matches('*'), err))
            .collect()
    }

    /// Keep only the errors whose field passes `keep`
    pub fn filtered(&self, mut keep: impl FnMut(FieldName) -> bool) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(field, _)| keep(**field))
                .map(|(field, err)| (*field, *err))
                .collect(),
        )
    }

    fn insert(&mut self, field: FieldName, err: FieldError) {
        self.0.insert(field, err);
    }
}

/// True when `value` parses as an absolute URL
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

/// True when `value` is a non-empty slug of `[a-z0-9_-]`
pub fn is_slug(value: &str) -> bool {
    SLUG_RE.is_match(value)
}

/// Check every rule independently and collect the failures
pub fn validate(state: &FormState) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if state.website_url.is_empty() {
        errors.insert(FieldName::WebsiteUrl, FieldError::Required);
    } else if !is_valid_url(&state.website_url) {
        errors.insert(FieldName::WebsiteUrl, FieldError::InvalidUrl);
    }

    if state.campaign_name.is_empty() {
        errors.insert(FieldName::CampaignName, FieldError::Required);
    } else if !is_slug(&state.campaign_name) {
        errors.insert(FieldName::CampaignName, FieldError::InvalidCharacters);
    }

    if !state.content.is_empty() && !is_slug(&state.content) {
        errors.insert(FieldName::Content, FieldError::InvalidCharacters);
    }

    if state.is_other_source() && state.source_other.is_empty() {
        errors.insert(FieldName::SourceOther, FieldError::Required);
    }

    if state.is_other_medium() && state.medium_other.is_empty() {
        errors.insert(FieldName::MediumOther, FieldError::Required);
    }

    errors
}
