//! Output vocabulary: the DOM mutations a handler asks for.
//!
//! Handlers never touch the document. They return a `Vec<Effect>` which the
//! browser layer applies in order; tests inspect the same list.

use std::fmt;

use crate::event::FormField;

/// Identity of one success banner, unique for the lifetime of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BannerId(pub u64);

impl fmt::Display for BannerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "banner-{}", self.0)
    }
}

/// An element an effect applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Hamburger,
    NavLinks,
    SkillBar(usize),
    FilterButton(usize),
    ProjectCard(usize),
    Field(FormField),
    RevealItem(usize),
}

/// A single requested mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Add a marker class.
    AddClass { target: Target, class: String },
    /// Remove a marker class.
    RemoveClass { target: Target, class: String },
    /// Write one inline style property.
    SetStyle { target: Target, property: &'static str, value: String },
    /// Stop the visibility observer watching this element.
    Unobserve(Target),
    /// Remove the inline error message next to a field, if there is one.
    RemoveErrorMessage(FormField),
    /// Append an inline error message next to a field.
    AppendErrorMessage { field: FormField, message: String },
    /// Suppress the default action of the event being handled.
    PreventDefault,
    /// Insert a success banner immediately before the form.
    InsertBanner { banner: BannerId, text: String },
    /// Arrange for [`crate::event::Event::BannerExpired`] after `delay_ms`.
    ScheduleBannerRemoval { banner: BannerId, delay_ms: u32 },
    /// Detach a success banner.
    RemoveBanner(BannerId),
    /// Restore every form control to its initial value.
    ResetForm,
}
