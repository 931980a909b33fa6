//! Scroll-triggered entrance animations.
//!
//! Tagged elements start with their CSS animation paused and are released
//! the first time enough of them is on screen.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::{PLAY_STATE_PAUSED, PLAY_STATE_PROPERTY, PLAY_STATE_RUNNING};
use crate::effect::{Effect, Target};
use crate::event::Visibility;
use crate::visibility::OneShot;

/// Fired flags for every tagged element.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealState {
    tracker: OneShot,
}

impl RevealState {
    #[must_use]
    pub fn new(count: usize, threshold: f64) -> Self {
        Self { tracker: OneShot::new(count, threshold) }
    }

    /// Pause every tagged element before observation starts.
    #[must_use]
    pub fn initial_effects(&self) -> Vec<Effect> {
        (0..self.tracker.len()).map(|i| play_state(i, PLAY_STATE_PAUSED)).collect()
    }

    /// Handle one observer entry: on first crossing, run the animation and unobserve.
    pub fn on_visibility(&mut self, entry: &Visibility) -> Vec<Effect> {
        if !self.tracker.observe(entry) {
            return Vec::new();
        }
        log::debug!("reveal element {} running", entry.index);
        vec![play_state(entry.index, PLAY_STATE_RUNNING), Effect::Unobserve(Target::RevealItem(entry.index))]
    }

    #[must_use]
    pub fn triggered(&self, index: usize) -> bool {
        self.tracker.fired(index)
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.tracker.pending()
    }
}

fn play_state(index: usize, state: &str) -> Effect {
    Effect::SetStyle { target: Target::RevealItem(index), property: PLAY_STATE_PROPERTY, value: state.to_owned() }
}
