//! Reusable TUI widgets.

pub mod form;

pub use form::{FieldInput, Form, FormField, draw_form};
