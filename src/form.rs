//! Contact form validation.
//!
//! STATE MACHINE
//! =============
//! `Idle -> Validating -> (Invalid | Accepted) -> Idle`, all within one
//! submit. Every submit clears all four overlays before checking, so
//! overlays always reflect the latest attempt only. Nothing is ever sent;
//! an accepted submit shows a banner, resets the form, and schedules the
//! banner's removal. Banner timers are never cancelled, so several banners
//! can be up at once after quick resubmits.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeSet;

use crate::config::{FormConfig, Messages};
use crate::effect::{BannerId, Effect};
use crate::email::is_valid_email;
use crate::errors::{clear_field, show_field};
use crate::event::{FormField, FormValues};

/// Where the validator is in its submit cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Invalid,
    Accepted,
}

/// A failed rule and the message shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl FieldError {
    fn new(field: FormField, message: &str) -> Self {
        Self { field, message: message.to_owned() }
    }
}

/// Result of the most recent submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Invalid(Vec<FieldError>),
    Accepted(BannerId),
}

/// Check all four fields, in order, without stopping at the first failure.
///
/// Emptiness is judged on trimmed values; the email shape check sees the
/// value as typed.
#[must_use]
pub fn validate(values: &FormValues, messages: &Messages) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if is_blank(&values.name) {
        errors.push(FieldError::new(FormField::Name, &messages.name_required));
    }
    if is_blank(&values.email) {
        errors.push(FieldError::new(FormField::Email, &messages.email_required));
    } else if !is_valid_email(&values.email) {
        errors.push(FieldError::new(FormField::Email, &messages.email_invalid));
    }
    if is_blank(&values.subject) {
        errors.push(FieldError::new(FormField::Subject, &messages.subject_required));
    }
    if is_blank(&values.message) {
        errors.push(FieldError::new(FormField::Message, &messages.message_required));
    }
    errors
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validator state: phase, per-field error flags, and live banners.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    config: FormConfig,
    phase: FormPhase,
    errors: [bool; 4],
    last_outcome: Option<Outcome>,
    live_banners: BTreeSet<BannerId>,
    next_banner: u64,
}

impl FormState {
    #[must_use]
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            phase: FormPhase::Idle,
            errors: [false; 4],
            last_outcome: None,
            live_banners: BTreeSet::new(),
            next_banner: 0,
        }
    }

    /// Handle a submit with the values currently in the form.
    pub fn submit(&mut self, values: &FormValues) -> Vec<Effect> {
        self.transition(FormPhase::Validating);
        let mut effects = vec![Effect::PreventDefault];

        for field in FormField::ALL {
            effects.extend(clear_field(field, &self.config.error_class));
        }
        self.errors = [false; 4];

        let failures = validate(values, &self.config.messages);
        for failure in &failures {
            self.errors[failure.field.index()] = true;
            effects.extend(show_field(failure.field, &self.config.error_class, &failure.message));
        }

        if failures.is_empty() {
            self.transition(FormPhase::Accepted);
            let banner = BannerId(self.next_banner);
            self.next_banner += 1;
            self.live_banners.insert(banner);
            log::info!("contact form accepted, showing {banner}");
            effects.push(Effect::InsertBanner { banner, text: self.config.messages.success.clone() });
            effects.push(Effect::ScheduleBannerRemoval { banner, delay_ms: self.config.banner_delay_ms });
            effects.push(Effect::ResetForm);
            self.last_outcome = Some(Outcome::Accepted(banner));
        } else {
            self.transition(FormPhase::Invalid);
            log::debug!("contact form rejected with {} error(s)", failures.len());
            self.last_outcome = Some(Outcome::Invalid(failures));
        }

        self.transition(FormPhase::Idle);
        effects
    }

    /// The removal timer for `banner` fired.
    ///
    /// Unknown or already removed banners produce nothing.
    pub fn banner_expired(&mut self, banner: BannerId) -> Vec<Effect> {
        if self.live_banners.remove(&banner) {
            log::debug!("removing {banner}");
            vec![Effect::RemoveBanner(banner)]
        } else {
            log::debug!("{banner} already gone");
            Vec::new()
        }
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Error flag per field, in [`FormField::ALL`] order.
    #[must_use]
    pub fn field_errors(&self) -> [bool; 4] {
        self.errors
    }

    #[must_use]
    pub fn has_error(&self, field: FormField) -> bool {
        self.errors[field.index()]
    }

    #[must_use]
    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last_outcome.as_ref()
    }

    /// Banners inserted whose removal timer has not fired yet.
    #[must_use]
    pub fn live_banners(&self) -> Vec<BannerId> {
        self.live_banners.iter().copied().collect()
    }

    fn transition(&mut self, to: FormPhase) {
        log::trace!("contact form {:?} -> {to:?}", self.phase);
        self.phase = to;
    }
}
