//! Project gallery filter.
//!
//! Activating a filter control makes it the only active control and
//! recomputes every card's visibility from scratch: a card is shown when the
//! control's value is the wildcard or one of the card's classes.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::consts::{DISPLAY_HIDDEN, DISPLAY_PROPERTY, DISPLAY_SHOWN};
use crate::effect::{Effect, Target};

/// Filter controls, card classes, and the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    values: Vec<Option<String>>,
    cards: Vec<Vec<String>>,
    visible: Vec<bool>,
    active: Option<usize>,
    wildcard: String,
    active_class: String,
}

impl FilterState {
    #[must_use]
    pub fn new(
        values: Vec<Option<String>>,
        cards: Vec<Vec<String>>,
        wildcard: impl Into<String>,
        active_class: impl Into<String>,
    ) -> Self {
        let visible = vec![true; cards.len()];
        Self { values, cards, visible, active: None, wildcard: wildcard.into(), active_class: active_class.into() }
    }

    /// Whether a card with `classes` passes `filter`.
    ///
    /// A control with no declared value matches nothing.
    #[must_use]
    pub fn matches(&self, filter: Option<&str>, classes: &[String]) -> bool {
        filter.is_some_and(|value| value == self.wildcard || classes.iter().any(|c| c == value))
    }

    /// The control at `index` was activated.
    pub fn click(&mut self, index: usize) -> Vec<Effect> {
        let Some(value) = self.values.get(index).cloned() else {
            return Vec::new();
        };
        self.active = Some(index);

        let mut effects = Vec::with_capacity(self.values.len() + 1 + self.cards.len());
        effects.extend(
            (0..self.values.len())
                .map(|i| Effect::RemoveClass { target: Target::FilterButton(i), class: self.active_class.clone() }),
        );
        effects.push(Effect::AddClass { target: Target::FilterButton(index), class: self.active_class.clone() });

        let visible: Vec<bool> = self.cards.iter().map(|classes| self.matches(value.as_deref(), classes)).collect();
        effects.extend(visible.iter().enumerate().map(|(i, shown)| Effect::SetStyle {
            target: Target::ProjectCard(i),
            property: DISPLAY_PROPERTY,
            value: (if *shown { DISPLAY_SHOWN } else { DISPLAY_HIDDEN }).to_owned(),
        }));

        log::debug!(
            "filter {:?} shows {} of {} cards",
            value.as_deref().unwrap_or_default(),
            visible.iter().filter(|v| **v).count(),
            visible.len()
        );
        self.visible = visible;
        effects
    }

    /// Index of the control most recently activated.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Declared value of the active control.
    #[must_use]
    pub fn active_value(&self) -> Option<&str> {
        self.active.and_then(|i| self.values.get(i)).and_then(Option::as_deref)
    }

    /// Current visibility of each card.
    #[must_use]
    pub fn visible(&self) -> &[bool] {
        &self.visible
    }
}
