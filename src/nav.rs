//! Mobile navigation toggle.
//!
//! The menu is open when the links container and the hamburger both carry
//! the active marker. The hamburger flips it; any nav link closes it.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::effect::{Effect, Target};

/// Open/closed flag for the mobile menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    open: bool,
    active_class: String,
}

impl NavState {
    /// Start from whatever state the markup shipped with.
    #[must_use]
    pub fn new(active_class: impl Into<String>, open: bool) -> Self {
        Self { open, active_class: active_class.into() }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger activated: flip the menu.
    pub fn toggle(&mut self) -> Vec<Effect> {
        self.open = !self.open;
        log::debug!("nav menu {}", if self.open { "opened" } else { "closed" });
        self.marker_effects()
    }

    /// A nav link was activated: close the menu if it is open.
    pub fn link_clicked(&mut self) -> Vec<Effect> {
        if !self.open {
            return Vec::new();
        }
        self.open = false;
        log::debug!("nav menu closed by link");
        self.marker_effects()
    }

    fn marker_effects(&self) -> Vec<Effect> {
        [Target::NavLinks, Target::Hamburger]
            .into_iter()
            .map(|target| {
                let class = self.active_class.clone();
                if self.open { Effect::AddClass { target, class } } else { Effect::RemoveClass { target, class } }
            })
            .collect()
    }
}
