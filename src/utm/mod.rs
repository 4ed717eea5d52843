//! UTM link core
//!
//! Pure functions over [`FormState`] snapshots. Nothing in here touches the
//! terminal, the clipboard or the filesystem.

mod date_rule;
mod form;
mod generator;
mod validator;

pub use form::{FieldName, FieldUpdate, FormState, OTHER_MEDIUM, OTHER_SOURCE};
pub use generator::{preview, submit};
pub use validator::{validate, FieldError, FieldErrors};
