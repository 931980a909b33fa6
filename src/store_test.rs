use super::*;

use crate::effect::Target;
use crate::event::{FormField, FormValues, Visibility};

// =============================================================
// Helpers
// =============================================================

fn full_layout() -> PageLayout {
    PageLayout {
        has_hamburger: true,
        nav_open: false,
        skill_levels: vec![Some(75), Some(60)],
        filter_values: vec![Some("all".into()), Some("web".into()), Some("app".into())],
        card_classes: vec![
            vec!["project-card".into(), "web".into()],
            vec!["project-card".into(), "app".into()],
        ],
        has_form: true,
        reveal_count: 2,
    }
}

fn store() -> UiStore {
    let mut store = UiStore::new(Config::default());
    store.init(&full_layout());
    store
}

fn submit(name: &str, email: &str, subject: &str, message: &str) -> Event {
    Event::FormSubmitted(FormValues {
        name: name.into(),
        email: email.into(),
        subject: subject.into(),
        message: message.into(),
    })
}

fn error_count(effects: &[Effect]) -> usize {
    effects.iter().filter(|e| matches!(e, Effect::AppendErrorMessage { .. })).count()
}

// =============================================================
// init
// =============================================================

#[test]
fn init_with_full_page_builds_every_component() {
    let store = store();
    assert!(store.has_nav());
    assert!(store.has_skills());
    assert!(store.has_filter());
    assert!(store.has_form());
    assert!(store.has_reveal());
}

#[test]
fn init_pauses_reveal_elements_only() {
    let mut store = UiStore::new(Config::default());
    let effects = store.init(&full_layout());
    assert_eq!(effects.len(), 2);
    assert!(effects.iter().all(|e| matches!(
        e,
        Effect::SetStyle { target: Target::RevealItem(_), property: "animation-play-state", value } if value == "paused"
    )));
}

#[test]
fn init_on_empty_page_builds_nothing() {
    let mut store = UiStore::new(Config::default());
    assert!(store.init(&PageLayout::default()).is_empty());
    assert!(!store.has_nav());
    assert!(!store.has_skills());
    assert!(!store.has_filter());
    assert!(!store.has_form());
    assert!(!store.has_reveal());
}

#[test]
fn filter_needs_both_controls_and_cards() {
    let mut store = UiStore::new(Config::default());
    store.init(&PageLayout { filter_values: vec![Some("all".into())], ..PageLayout::default() });
    assert!(!store.has_filter());
    assert!(store.dispatch(Event::FilterClicked(0)).is_empty());
}

// =============================================================
// Absent components are no-ops
// =============================================================

#[test]
fn events_for_absent_components_yield_nothing() {
    let mut store = UiStore::new(Config::default());
    store.init(&PageLayout::default());
    assert!(store.dispatch(Event::HamburgerClicked).is_empty());
    assert!(store.dispatch(Event::NavLinkClicked).is_empty());
    assert!(store.dispatch(Event::SkillVisibility(Visibility::new(0, 1.0, true))).is_empty());
    assert!(store.dispatch(submit("", "", "", "")).is_empty());
    assert!(store.dispatch(Event::BannerExpired(BannerId(0))).is_empty());
    assert!(store.dispatch(Event::RevealVisibility(Visibility::new(0, 1.0, true))).is_empty());
    assert!(!store.menu_open());
    assert_eq!(store.form_phase(), None);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn hamburger_twice_opens_then_closes() {
    let mut store = store();
    store.dispatch(Event::HamburgerClicked);
    assert!(store.menu_open());
    store.dispatch(Event::HamburgerClicked);
    assert!(!store.menu_open());
}

#[test]
fn nav_link_closes_open_menu() {
    let mut store = store();
    store.dispatch(Event::HamburgerClicked);
    let effects = store.dispatch(Event::NavLinkClicked);
    assert_eq!(effects.len(), 2);
    assert!(!store.menu_open());
}

#[test]
fn menu_open_in_markup_closes_on_first_link_click() {
    let mut store = UiStore::new(Config::default());
    store.init(&PageLayout { nav_open: true, ..full_layout() });
    assert!(store.menu_open());
    assert_eq!(store.dispatch(Event::NavLinkClicked).len(), 2);
    assert!(!store.menu_open());
}

// =============================================================
// Skills
// =============================================================

#[test]
fn skill_fills_to_seventy_five_exactly_once() {
    let mut store = store();
    let first = store.dispatch(Event::SkillVisibility(Visibility::new(0, 0.5, true)));
    assert!(first.contains(&Effect::SetStyle {
        target: Target::SkillBar(0),
        property: "width",
        value: "75%".into()
    }));
    assert!(first.contains(&Effect::Unobserve(Target::SkillBar(0))));

    assert!(store.dispatch(Event::SkillVisibility(Visibility::new(0, 0.0, false))).is_empty());
    assert!(store.dispatch(Event::SkillVisibility(Visibility::new(0, 1.0, true))).is_empty());
    assert!(store.skill_triggered(0));
    assert!(!store.skill_triggered(1));
}

#[test]
fn entry_reported_a_hair_under_threshold_still_fires() {
    let mut store = store();
    let skill = store.dispatch(Event::SkillVisibility(Visibility::new(0, 0.4999, true)));
    assert!(!skill.is_empty());
    assert!(store.skill_triggered(0));

    let reveal = store.dispatch(Event::RevealVisibility(Visibility::new(0, 0.05, true)));
    assert!(!reveal.is_empty());
    assert!(store.reveal_triggered(0));
}

#[test]
fn non_intersecting_entries_are_ignored() {
    let mut store = store();
    assert!(store.dispatch(Event::SkillVisibility(Visibility::new(0, 0.0, false))).is_empty());
    assert!(store.dispatch(Event::RevealVisibility(Visibility::new(1, 0.0, false))).is_empty());
    assert!(!store.skill_triggered(0));
    assert!(!store.reveal_triggered(1));
}

// =============================================================
// Filter
// =============================================================

#[test]
fn all_after_web_restores_every_card() {
    let mut store = store();
    store.dispatch(Event::FilterClicked(1));
    assert_eq!(store.card_visibility(), Some(&[true, false][..]));
    assert_eq!(store.active_filter(), Some("web"));

    store.dispatch(Event::FilterClicked(0));
    assert_eq!(store.card_visibility(), Some(&[true, true][..]));
    assert_eq!(store.active_filter(), Some("all"));
}

// =============================================================
// Contact form
// =============================================================

#[test]
fn empty_submit_yields_four_errors_and_no_acceptance() {
    let mut store = store();
    let effects = store.dispatch(submit("", "", "", ""));
    assert_eq!(error_count(&effects), 4);
    assert_eq!(store.field_errors(), [true; 4]);
    assert!(matches!(store.last_outcome(), Some(Outcome::Invalid(_))));
    assert!(store.live_banners().is_empty());
}

#[test]
fn bad_email_yields_single_email_error() {
    let mut store = store();
    let effects = store.dispatch(submit("Jo", "bad", "Hi", "Test"));
    assert_eq!(error_count(&effects), 1);
    assert_eq!(store.field_errors(), [false, true, false, false]);
    assert!(!effects.contains(&Effect::ResetForm));
}

#[test]
fn valid_submit_shows_banner_and_clears_fields() {
    let mut store = store();
    let effects = store.dispatch(submit("Jo", "jo@example.com", "Hi", "Test"));
    assert_eq!(error_count(&effects), 0);
    assert!(effects.iter().any(|e| matches!(e, Effect::InsertBanner { .. })));
    assert!(effects.contains(&Effect::ResetForm));
    assert_eq!(store.live_banners(), vec![BannerId(0)]);
    assert_eq!(store.form_phase(), Some(FormPhase::Idle));
}

#[test]
fn banner_expiry_round_trip_and_stray_expiry() {
    let mut store = store();
    store.dispatch(submit("Jo", "jo@example.com", "Hi", "Test"));
    assert_eq!(store.dispatch(Event::BannerExpired(BannerId(0))), vec![Effect::RemoveBanner(BannerId(0))]);
    assert!(store.dispatch(Event::BannerExpired(BannerId(0))).is_empty());
}

#[test]
fn error_overlays_rebuild_on_every_submit() {
    let mut store = store();
    store.dispatch(submit("", "", "", ""));
    let effects = store.dispatch(submit("Jo", "", "Hi", "Test"));
    assert_eq!(error_count(&effects), 1);
    assert!(store.field_errors()[FormField::Email.index()]);
    assert_eq!(store.field_errors().iter().filter(|e| **e).count(), 1);
}

// =============================================================
// Scroll reveal
// =============================================================

#[test]
fn reveal_runs_once_per_element() {
    let mut store = store();
    let effects = store.dispatch(Event::RevealVisibility(Visibility::new(1, 0.2, true)));
    assert_eq!(effects.len(), 2);
    assert!(store.reveal_triggered(1));
    assert!(!store.reveal_triggered(0));
    assert!(store.dispatch(Event::RevealVisibility(Visibility::new(1, 0.9, true))).is_empty());
}
