//! One-shot visibility tracking shared by skill bars and scroll reveal.
//!
//! Each tracked element fires at most once: the first intersecting observer
//! entry fires it, and every later entry for that element is ignored whatever
//! it reports. The threshold is applied by the browser observer, not here.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use crate::event::Visibility;

/// Per-element fired flags plus the threshold the observer is built with.
#[derive(Debug, Clone, PartialEq)]
pub struct OneShot {
    threshold: f64,
    fired: Vec<bool>,
}

impl OneShot {
    #[must_use]
    pub fn new(count: usize, threshold: f64) -> Self {
        Self { threshold, fired: vec![false; count] }
    }

    /// Feed one observer entry. Returns `true` only when this entry fires its element.
    pub fn observe(&mut self, entry: &Visibility) -> bool {
        let Some(fired) = self.fired.get_mut(entry.index) else {
            return false;
        };
        if *fired || !entry.crosses() {
            return false;
        }
        *fired = true;
        true
    }

    /// Whether the element at `index` has fired.
    #[must_use]
    pub fn fired(&self, index: usize) -> bool {
        self.fired.get(index).copied().unwrap_or(false)
    }

    /// Number of elements still waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.fired.iter().filter(|f| !**f).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fired.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}
