//! What the page scan found, in the shape the store needs.
//!
//! The browser layer fills this in once at boot. Indices in every list are
//! the indices later carried by [`crate::event::Event`] and
//! [`crate::effect::Target`].

/// Snapshot of the interactive elements present on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    /// The hamburger control exists.
    pub has_hamburger: bool,
    /// The links container already carries the active marker.
    pub nav_open: bool,
    /// Declared level of each skill bar; `None` when missing or not a number.
    pub skill_levels: Vec<Option<u8>>,
    /// Declared filter value of each filter control.
    pub filter_values: Vec<Option<String>>,
    /// Class list of each project card.
    pub card_classes: Vec<Vec<String>>,
    /// The contact form exists.
    pub has_form: bool,
    /// Number of elements carrying an entrance-animation marker.
    pub reveal_count: usize,
}
