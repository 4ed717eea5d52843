//! Form domain layer
//!
//! Focus, option cycling and date entry on top of the pure
//! [`FormState`](crate::utm::FormState) snapshots.

mod field;
mod form_state;

pub use field::{FieldKind, FormField, TextEdit};
pub use form_state::{Form, FormButton, UtmForm};
