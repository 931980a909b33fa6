//! Input vocabulary: everything the page can tell the store.
//!
//! Listener, observer, and timer callbacks in the browser layer translate
//! what they receive into an [`Event`] and hand it to
//! [`crate::store::UiStore::dispatch`]. Element positions are indices into
//! the lists captured by [`crate::layout::PageLayout`].

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use crate::effect::BannerId;

/// One of the four required contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    /// All fields in validation order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Position of this field in [`FormField::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Subject => 2,
            Self::Message => 3,
        }
    }
}

/// Raw field values read at submit time, untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormValues {
    /// The value of `field`.
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }
}

/// A single visibility observer entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    /// Index of the observed element within its component's list.
    pub index: usize,
    /// Fraction of the element's area inside the viewport.
    pub ratio: f64,
    /// Whether the element intersects the viewport at all.
    pub intersecting: bool,
}

impl Visibility {
    #[must_use]
    pub fn new(index: usize, ratio: f64, intersecting: bool) -> Self {
        Self { index, ratio, intersecting }
    }

    /// Whether this entry counts as a crossing into view.
    ///
    /// The observer is built with the component's threshold, so the browser
    /// only reports entries at that boundary; `ratio` is not re-checked
    /// against it because sub-pixel layout can land a hair under.
    #[must_use]
    pub fn crosses(&self) -> bool {
        self.intersecting
    }
}

/// Something that happened on the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The hamburger control was activated.
    HamburgerClicked,
    /// Any navigation link was activated.
    NavLinkClicked,
    /// The skill bar observer reported an entry.
    SkillVisibility(Visibility),
    /// The filter control at this index was activated.
    FilterClicked(usize),
    /// The contact form was submitted with these values.
    FormSubmitted(FormValues),
    /// The removal timer for a success banner fired.
    BannerExpired(BannerId),
    /// The scroll reveal observer reported an entry.
    RevealVisibility(Visibility),
}
