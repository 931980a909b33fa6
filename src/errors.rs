//! Inline validation overlays for contact form fields.
//!
//! An overlay is the field's error marker class plus a message node appended
//! to the field's parent. Clearing removes both; clearing a field with no
//! overlay changes nothing.

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

use crate::effect::{Effect, Target};
use crate::event::FormField;

/// Effects that remove any overlay from `field`.
#[must_use]
pub fn clear_field(field: FormField, error_class: &str) -> [Effect; 2] {
    [
        Effect::RemoveClass { target: Target::Field(field), class: error_class.to_owned() },
        Effect::RemoveErrorMessage(field),
    ]
}

/// Effects that mark `field` invalid and show `message` beside it.
#[must_use]
pub fn show_field(field: FormField, error_class: &str, message: &str) -> [Effect; 2] {
    [
        Effect::AddClass { target: Target::Field(field), class: error_class.to_owned() },
        Effect::AppendErrorMessage { field, message: message.to_owned() },
    ]
}
