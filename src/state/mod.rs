//! Application state module

mod forms;
mod notification;

pub use forms::*;
pub use notification::*;
