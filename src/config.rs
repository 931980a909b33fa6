//! Page configuration: which markers to look for and how to react.
//!
//! Every field has a default taken from [`crate::consts`], so an empty JSON
//! object (or no config element at all) describes the stock portfolio page.
//! A partial JSON object overrides only the fields it names.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;

/// Error returned by [`Config::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The raw text is not valid JSON for a [`Config`].
    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// A visibility threshold lies outside `0.0..=1.0`.
    #[error("{field} must be within 0.0..=1.0, got {value}")]
    Threshold { field: &'static str, value: f64 },
    /// A selector, attribute, or class name is empty.
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}

/// Markers for the mobile navigation menu.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub hamburger: String,
    pub links: String,
    pub items: String,
    pub active_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            hamburger: consts::HAMBURGER_SELECTOR.into(),
            links: consts::NAV_LINKS_SELECTOR.into(),
            items: consts::NAV_ITEM_SELECTOR.into(),
            active_class: consts::ACTIVE_CLASS.into(),
        }
    }
}

/// Markers and threshold for skill bars.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    pub selector: String,
    pub level_attr: String,
    pub threshold: f64,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            selector: consts::SKILL_SELECTOR.into(),
            level_attr: consts::SKILL_LEVEL_ATTR.into(),
            threshold: consts::SKILL_THRESHOLD,
        }
    }
}

/// Markers for the project gallery filter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub button_selector: String,
    pub value_attr: String,
    pub card_selector: String,
    pub wildcard: String,
    pub active_class: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            button_selector: consts::FILTER_BUTTON_SELECTOR.into(),
            value_attr: consts::FILTER_VALUE_ATTR.into(),
            card_selector: consts::PROJECT_CARD_SELECTOR.into(),
            wildcard: consts::FILTER_WILDCARD.into(),
            active_class: consts::ACTIVE_CLASS.into(),
        }
    }
}

/// Element ids of the four required contact fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldIds {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Default for FieldIds {
    fn default() -> Self {
        Self {
            name: consts::NAME_FIELD_ID.into(),
            email: consts::EMAIL_FIELD_ID.into(),
            subject: consts::SUBJECT_FIELD_ID.into(),
            message: consts::MESSAGE_FIELD_ID.into(),
        }
    }
}

/// Inline validation message texts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub name_required: String,
    pub email_required: String,
    pub email_invalid: String,
    pub subject_required: String,
    pub message_required: String,
    pub success: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            name_required: consts::NAME_REQUIRED.into(),
            email_required: consts::EMAIL_REQUIRED.into(),
            email_invalid: consts::EMAIL_INVALID.into(),
            subject_required: consts::SUBJECT_REQUIRED.into(),
            message_required: consts::MESSAGE_REQUIRED.into(),
            success: consts::SUCCESS_TEXT.into(),
        }
    }
}

/// Contact form markers, messages, and banner behavior.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub form_id: String,
    pub fields: FieldIds,
    pub error_class: String,
    pub error_message_class: String,
    pub success_class: String,
    pub messages: Messages,
    pub banner_delay_ms: u32,
    /// `(property, value)` pairs written inline on each error message node.
    pub error_style: Vec<(String, String)>,
    /// `(property, value)` pairs written inline on the success banner.
    pub banner_style: Vec<(String, String)>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: consts::FORM_ID.into(),
            fields: FieldIds::default(),
            error_class: consts::FIELD_ERROR_CLASS.into(),
            error_message_class: consts::ERROR_MESSAGE_CLASS.into(),
            success_class: consts::SUCCESS_MESSAGE_CLASS.into(),
            messages: Messages::default(),
            banner_delay_ms: consts::BANNER_DELAY_MS,
            error_style: style_pairs(consts::ERROR_MESSAGE_STYLE),
            banner_style: style_pairs(consts::SUCCESS_MESSAGE_STYLE),
        }
    }
}

/// Markers and threshold for scroll-triggered entrance animations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selectors: Vec<String>,
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: consts::REVEAL_SELECTORS.iter().map(|s| (*s).to_owned()).collect(),
            threshold: consts::REVEAL_THRESHOLD,
        }
    }
}

impl RevealConfig {
    /// All variant selectors joined into one selector list.
    #[must_use]
    pub fn selector(&self) -> String {
        self.selectors.join(", ")
    }
}

/// Full page configuration, one section per component.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub nav: NavConfig,
    pub skills: SkillsConfig,
    pub filter: FilterConfig,
    pub form: FormConfig,
    pub reveal: RevealConfig,
}

impl Config {
    /// Parse and validate a config from JSON text.
    ///
    /// Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the JSON is malformed, a threshold is out
    /// of range, or a marker is empty.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check thresholds and markers.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_threshold("skills.threshold", self.skills.threshold)?;
        check_threshold("reveal.threshold", self.reveal.threshold)?;

        let required = [
            ("nav.hamburger", &self.nav.hamburger),
            ("nav.links", &self.nav.links),
            ("nav.items", &self.nav.items),
            ("nav.active_class", &self.nav.active_class),
            ("skills.selector", &self.skills.selector),
            ("skills.level_attr", &self.skills.level_attr),
            ("filter.button_selector", &self.filter.button_selector),
            ("filter.value_attr", &self.filter.value_attr),
            ("filter.card_selector", &self.filter.card_selector),
            ("filter.wildcard", &self.filter.wildcard),
            ("filter.active_class", &self.filter.active_class),
            ("form.form_id", &self.form.form_id),
            ("form.fields.name", &self.form.fields.name),
            ("form.fields.email", &self.form.fields.email),
            ("form.fields.subject", &self.form.fields.subject),
            ("form.fields.message", &self.form.fields.message),
            ("form.error_class", &self.form.error_class),
            ("form.error_message_class", &self.form.error_message_class),
            ("form.success_class", &self.form.success_class),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty { field });
            }
        }

        if self.reveal.selectors.is_empty() || self.reveal.selectors.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::Empty { field: "reveal.selectors" });
        }
        Ok(())
    }
}

fn check_threshold(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Threshold { field, value })
    }
}

fn style_pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}
