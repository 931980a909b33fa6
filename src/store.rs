//! The UI state store: one record per component, driven by events.
//!
//! `UiStore` is the testable core of the page script, the same split the
//! browser runtime keeps between itself and the document: the runtime owns
//! the elements, the store owns the state, and effects are the only thing
//! that crosses over. A component whose elements were not found at init has
//! no record, and every event addressed to it yields no effects.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::config::Config;
use crate::effect::{BannerId, Effect};
use crate::event::Event;
use crate::filter::FilterState;
use crate::form::{FormPhase, FormState, Outcome};
use crate::layout::PageLayout;
use crate::nav::NavState;
use crate::reveal::RevealState;
use crate::skills::SkillState;

/// All component state for one page.
#[derive(Debug, Clone, Default)]
pub struct UiStore {
    config: Config,
    nav: Option<NavState>,
    skills: Option<SkillState>,
    filter: Option<FilterState>,
    form: Option<FormState>,
    reveal: Option<RevealState>,
}

impl UiStore {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config, ..Self::default() }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build component records from the page scan.
    ///
    /// Runs nav, skills, filter, form, reveal in that order and returns the
    /// effects needed before any event arrives.
    pub fn init(&mut self, layout: &PageLayout) -> Vec<Effect> {
        let mut effects = Vec::new();

        self.nav = layout
            .has_hamburger
            .then(|| NavState::new(self.config.nav.active_class.clone(), layout.nav_open));
        log_component("navigation", self.nav.is_some());

        self.skills = (!layout.skill_levels.is_empty())
            .then(|| SkillState::new(layout.skill_levels.clone(), self.config.skills.threshold));
        log_component("skills", self.skills.is_some());

        self.filter = (!layout.filter_values.is_empty() && !layout.card_classes.is_empty()).then(|| {
            FilterState::new(
                layout.filter_values.clone(),
                layout.card_classes.clone(),
                self.config.filter.wildcard.clone(),
                self.config.filter.active_class.clone(),
            )
        });
        log_component("project filter", self.filter.is_some());

        self.form = layout.has_form.then(|| FormState::new(self.config.form.clone()));
        log_component("contact form", self.form.is_some());

        self.reveal = (layout.reveal_count > 0).then(|| RevealState::new(layout.reveal_count, self.config.reveal.threshold));
        log_component("scroll reveal", self.reveal.is_some());
        if let Some(reveal) = &self.reveal {
            effects.extend(reveal.initial_effects());
        }

        effects
    }

    /// Route one event to its component.
    pub fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::HamburgerClicked => self.nav.as_mut().map(NavState::toggle),
            Event::NavLinkClicked => self.nav.as_mut().map(NavState::link_clicked),
            Event::SkillVisibility(entry) => self.skills.as_mut().map(|s| s.on_visibility(&entry)),
            Event::FilterClicked(index) => self.filter.as_mut().map(|f| f.click(index)),
            Event::FormSubmitted(values) => self.form.as_mut().map(|f| f.submit(&values)),
            Event::BannerExpired(banner) => self.form.as_mut().map(|f| f.banner_expired(banner)),
            Event::RevealVisibility(entry) => self.reveal.as_mut().map(|r| r.on_visibility(&entry)),
        }
        .unwrap_or_default()
    }

    // --- Queries ---

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.nav.as_ref().is_some_and(NavState::is_open)
    }

    #[must_use]
    pub fn active_filter(&self) -> Option<&str> {
        self.filter.as_ref().and_then(FilterState::active_value)
    }

    #[must_use]
    pub fn card_visibility(&self) -> Option<&[bool]> {
        self.filter.as_ref().map(FilterState::visible)
    }

    /// Per-field error flags; all clear when there is no form.
    #[must_use]
    pub fn field_errors(&self) -> [bool; 4] {
        self.form.as_ref().map_or([false; 4], FormState::field_errors)
    }

    #[must_use]
    pub fn form_phase(&self) -> Option<FormPhase> {
        self.form.as_ref().map(FormState::phase)
    }

    #[must_use]
    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.form.as_ref().and_then(FormState::last_outcome)
    }

    #[must_use]
    pub fn live_banners(&self) -> Vec<BannerId> {
        self.form.as_ref().map(FormState::live_banners).unwrap_or_default()
    }

    #[must_use]
    pub fn skill_triggered(&self, index: usize) -> bool {
        self.skills.as_ref().is_some_and(|s| s.triggered(index))
    }

    #[must_use]
    pub fn reveal_triggered(&self, index: usize) -> bool {
        self.reveal.as_ref().is_some_and(|r| r.triggered(index))
    }

    #[must_use]
    pub fn has_nav(&self) -> bool {
        self.nav.is_some()
    }

    #[must_use]
    pub fn has_skills(&self) -> bool {
        self.skills.is_some()
    }

    #[must_use]
    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    #[must_use]
    pub fn has_form(&self) -> bool {
        self.form.is_some()
    }

    #[must_use]
    pub fn has_reveal(&self) -> bool {
        self.reveal.is_some()
    }
}

fn log_component(name: &str, present: bool) {
    if present {
        log::debug!("{name} initialized");
    } else {
        log::debug!("{name} skipped: elements not found");
    }
}
