//! Form rendering module
//!
//! - `field_renderer`: text and choice field widgets
//! - `utm_form`: the UTM form, preview, help line and header

mod field_renderer;
mod utm_form;

pub use utm_form::{draw_form, draw_header, draw_help_text, draw_preview};
