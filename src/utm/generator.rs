//! Campaign link generation

use super::form::FormState;
use super::validator::{validate, FieldErrors};
use url::form_urlencoded;

pub const UTM_SOURCE: &str = "utm_source";
pub const UTM_MEDIUM: &str = "utm_medium";
pub const UTM_CAMPAIGN: &str = "utm_campaign";
pub const UTM_CONTENT: &str = "utm_content";

/// Build `{website_url}?utm_source=..&utm_medium=..&utm_campaign=..[&utm_content=..]`.
///
/// Values are form-urlencoded once (space becomes `+`). The generator does
/// not validate; call [`submit`] to gate on the validator.
pub fn generate(state: &FormState) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair(UTM_SOURCE, state.effective_source())
        .append_pair(UTM_MEDIUM, state.effective_medium())
        .append_pair(UTM_CAMPAIGN, &state.campaign_name);
    if !state.content.is_empty() {
        query.append_pair(UTM_CONTENT, &state.content);
    }
    format!("{}?{}", state.website_url, query.finish())
}

/// Whether the four required values needed for a preview are present
pub fn has_required_fields(state: &FormState) -> bool {
    !state.website_url.is_empty()
        && !state.effective_source().is_empty()
        && !state.effective_medium().is_empty()
        && !state.campaign_name.is_empty()
}

/// Live preview, suppressed until the required values are present
pub fn preview(state: &FormState) -> Option<String> {
    has_required_fields(state).then(|| generate(state))
}

/// Validate and, only when everything passes, generate the link
pub fn submit(state: &FormState) -> Result<String, FieldErrors> {
    let errors = validate(state);
    if errors.is_empty() {
        Ok(generate(state))
    } else {
        Err(errors)
    }
}
