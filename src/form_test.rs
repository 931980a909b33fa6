use super::*;

use crate::effect::Target;

fn values(name: &str, email: &str, subject: &str, message: &str) -> FormValues {
    FormValues { name: name.into(), email: email.into(), subject: subject.into(), message: message.into() }
}

fn valid() -> FormValues {
    values("Jo", "jo@example.com", "Hi", "Test")
}

fn form() -> FormState {
    FormState::new(FormConfig::default())
}

fn shown_errors(effects: &[Effect]) -> Vec<(FormField, String)> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::AppendErrorMessage { field, message } => Some((*field, message.clone())),
            _ => None,
        })
        .collect()
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_all_empty_reports_four_errors_in_order() {
    let errors = validate(&FormValues::default(), &Messages::default());
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, FormField::ALL.to_vec());
}

#[test]
fn validate_whitespace_only_counts_as_empty() {
    let errors = validate(&values("  ", "\t", " \n", "   "), &Messages::default());
    assert_eq!(errors.len(), 4);
    assert_eq!(errors[1].message, "Email is required");
}

#[test]
fn validate_bad_email_reports_format_message() {
    let errors = validate(&values("Jo", "bad", "Hi", "Test"), &Messages::default());
    assert_eq!(errors, vec![FieldError { field: FormField::Email, message: "Please enter a valid email".into() }]);
}

#[test]
fn validate_email_shape_checks_untrimmed_value() {
    let errors = validate(&values("Jo", " jo@example.com", "Hi", "Test"), &Messages::default());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Please enter a valid email");
}

#[test]
fn validate_accepts_padded_text_fields() {
    assert!(validate(&values("  Jo  ", "jo@example.com", " Hi", "Test "), &Messages::default()).is_empty());
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_always_prevents_default_first() {
    let mut form = form();
    assert_eq!(form.submit(&FormValues::default())[0], Effect::PreventDefault);
    assert_eq!(form.submit(&valid())[0], Effect::PreventDefault);
}

#[test]
fn submit_empty_form_shows_four_errors_and_no_banner() {
    let mut form = form();
    let effects = form.submit(&FormValues::default());
    assert_eq!(shown_errors(&effects).len(), 4);
    assert!(!effects.iter().any(|e| matches!(e, Effect::InsertBanner { .. })));
    assert_eq!(form.field_errors(), [true; 4]);
    assert!(matches!(form.last_outcome(), Some(Outcome::Invalid(errs)) if errs.len() == 4));
}

#[test]
fn submit_with_bad_email_shows_exactly_one_error() {
    let mut form = form();
    let effects = form.submit(&values("Jo", "bad", "Hi", "Test"));
    assert_eq!(shown_errors(&effects), vec![(FormField::Email, "Please enter a valid email".to_owned())]);
    assert!(form.has_error(FormField::Email));
    assert!(!form.has_error(FormField::Name));
    assert!(!effects.contains(&Effect::ResetForm));
}

#[test]
fn submit_clears_every_overlay_before_showing_new_ones() {
    let mut form = form();
    let effects = form.submit(&values("", "jo@example.com", "Hi", "Test"));
    let clears = effects.iter().filter(|e| matches!(e, Effect::RemoveErrorMessage(_))).count();
    assert_eq!(clears, 4);
    let last_clear = effects.iter().rposition(|e| matches!(e, Effect::RemoveErrorMessage(_))).unwrap();
    let first_show = effects.iter().position(|e| matches!(e, Effect::AppendErrorMessage { .. })).unwrap();
    assert!(last_clear < first_show);
    assert!(effects.contains(&Effect::RemoveClass { target: Target::Field(FormField::Message), class: "error".into() }));
    assert!(effects.contains(&Effect::AddClass { target: Target::Field(FormField::Name), class: "error".into() }));
}

#[test]
fn submit_valid_form_shows_banner_resets_and_schedules_removal() {
    let mut form = form();
    let effects = form.submit(&valid());
    assert!(shown_errors(&effects).is_empty());
    let banner = BannerId(0);
    let tail = &effects[effects.len() - 3..];
    assert_eq!(
        tail,
        &[
            Effect::InsertBanner {
                banner,
                text: "Thank you for your message! I will get back to you soon.".into()
            },
            Effect::ScheduleBannerRemoval { banner, delay_ms: 5_000 },
            Effect::ResetForm,
        ]
    );
    assert_eq!(form.field_errors(), [false; 4]);
    assert_eq!(form.last_outcome(), Some(&Outcome::Accepted(banner)));
    assert_eq!(form.live_banners(), vec![banner]);
}

#[test]
fn valid_submit_after_invalid_clears_old_errors() {
    let mut form = form();
    form.submit(&FormValues::default());
    form.submit(&valid());
    assert_eq!(form.field_errors(), [false; 4]);
}

#[test]
fn phase_returns_to_idle_after_every_submit() {
    let mut form = form();
    assert_eq!(form.phase(), FormPhase::Idle);
    form.submit(&FormValues::default());
    assert_eq!(form.phase(), FormPhase::Idle);
    form.submit(&valid());
    assert_eq!(form.phase(), FormPhase::Idle);
}

#[test]
fn rapid_resubmits_stack_banners() {
    let mut form = form();
    form.submit(&valid());
    form.submit(&valid());
    assert_eq!(form.live_banners(), vec![BannerId(0), BannerId(1)]);
}

// =============================================================
// banner_expired
// =============================================================

#[test]
fn banner_expiry_removes_banner_once() {
    let mut form = form();
    form.submit(&valid());
    assert_eq!(form.banner_expired(BannerId(0)), vec![Effect::RemoveBanner(BannerId(0))]);
    assert!(form.banner_expired(BannerId(0)).is_empty());
    assert!(form.live_banners().is_empty());
}

#[test]
fn unknown_banner_expiry_is_silent() {
    let mut form = form();
    assert!(form.banner_expired(BannerId(42)).is_empty());
}

#[test]
fn custom_delay_and_messages_are_used() {
    let mut config = FormConfig::default();
    config.banner_delay_ms = 1_500;
    config.messages.name_required = "Who are you?".into();
    let mut form = FormState::new(config);

    let invalid = form.submit(&values("", "jo@example.com", "Hi", "Test"));
    assert_eq!(shown_errors(&invalid), vec![(FormField::Name, "Who are you?".to_owned())]);

    let accepted = form.submit(&valid());
    assert!(accepted.contains(&Effect::ScheduleBannerRemoval { banner: BannerId(0), delay_ms: 1_500 }));
}
