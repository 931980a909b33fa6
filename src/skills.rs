//! Skill bars that fill to their declared level the first time they scroll into view.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use crate::consts::{MAX_SKILL_LEVEL, WIDTH_PROPERTY};
use crate::effect::{Effect, Target};
use crate::event::Visibility;
use crate::visibility::OneShot;

/// Parse a declared skill level such as `"75"`.
///
/// Whole numbers only; values above 100 are capped at 100.
#[must_use]
pub fn parse_level(raw: &str) -> Option<u8> {
    match raw.trim().parse::<u16>() {
        Ok(level) => Some(u8::try_from(level).map_or(MAX_SKILL_LEVEL, |l| l.min(MAX_SKILL_LEVEL))),
        Err(err) => {
            log::debug!("ignoring skill level {raw:?}: {err}");
            None
        }
    }
}

/// Target levels and fired flags for every skill bar on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillState {
    levels: Vec<Option<u8>>,
    tracker: OneShot,
}

impl SkillState {
    #[must_use]
    pub fn new(levels: Vec<Option<u8>>, threshold: f64) -> Self {
        let tracker = OneShot::new(levels.len(), threshold);
        Self { levels, tracker }
    }

    /// Handle one observer entry.
    ///
    /// On the first crossing the bar's width is set to its level and the bar
    /// is unobserved. A bar with no usable level is still unobserved.
    pub fn on_visibility(&mut self, entry: &Visibility) -> Vec<Effect> {
        if !self.tracker.observe(entry) {
            return Vec::new();
        }
        let target = Target::SkillBar(entry.index);
        let mut effects = Vec::with_capacity(2);
        match self.levels.get(entry.index).copied().flatten() {
            Some(level) => {
                log::debug!("skill bar {} filled to {level}%", entry.index);
                effects.push(Effect::SetStyle { target, property: WIDTH_PROPERTY, value: format!("{level}%") });
            }
            None => log::warn!("skill bar {} has no usable level", entry.index),
        }
        effects.push(Effect::Unobserve(target));
        effects
    }

    #[must_use]
    pub fn triggered(&self, index: usize) -> bool {
        self.tracker.fired(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
