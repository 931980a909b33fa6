//! Default markers, thresholds, messages, and inline styles for the portfolio page.
//!
//! These are the values [`crate::config::Config::default`] is built from. Pages
//! with different markup override them through the JSON config element.

// ── Navigation ──────────────────────────────────────────────────

pub const HAMBURGER_SELECTOR: &str = ".hamburger";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";
pub const NAV_ITEM_SELECTOR: &str = ".nav-links a";

/// Marker class for the open menu and the selected filter control.
pub const ACTIVE_CLASS: &str = "active";

// ── Skills ──────────────────────────────────────────────────────

pub const SKILL_SELECTOR: &str = ".skill-level";
pub const SKILL_LEVEL_ATTR: &str = "data-level";

/// Fraction of a skill bar that must be visible before it fills.
pub const SKILL_THRESHOLD: f64 = 0.5;

/// Upper bound for a declared skill level, in percent.
pub const MAX_SKILL_LEVEL: u8 = 100;

// ── Project filter ──────────────────────────────────────────────

pub const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
pub const FILTER_VALUE_ATTR: &str = "data-filter";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";

/// Filter value that matches every card.
pub const FILTER_WILDCARD: &str = "all";

pub const DISPLAY_SHOWN: &str = "block";
pub const DISPLAY_HIDDEN: &str = "none";

// ── Contact form ────────────────────────────────────────────────

pub const FORM_ID: &str = "contactForm";
pub const NAME_FIELD_ID: &str = "name";
pub const EMAIL_FIELD_ID: &str = "email";
pub const SUBJECT_FIELD_ID: &str = "subject";
pub const MESSAGE_FIELD_ID: &str = "message";

pub const FIELD_ERROR_CLASS: &str = "error";
pub const ERROR_MESSAGE_CLASS: &str = "error-message";
pub const SUCCESS_MESSAGE_CLASS: &str = "success-message";

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const SUBJECT_REQUIRED: &str = "Subject is required";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const SUCCESS_TEXT: &str = "Thank you for your message! I will get back to you soon.";

/// How long the success banner stays up before it is removed.
pub const BANNER_DELAY_MS: u32 = 5_000;

pub const ERROR_MESSAGE_STYLE: &[(&str, &str)] =
    &[("color", "var(--danger)"), ("font-size", "0.9rem"), ("margin-top", "5px")];

pub const SUCCESS_MESSAGE_STYLE: &[(&str, &str)] = &[
    ("background-color", "var(--success)"),
    ("color", "white"),
    ("padding", "15px"),
    ("border-radius", "var(--radius)"),
    ("margin-bottom", "20px"),
    ("text-align", "center"),
];

// ── Scroll reveal ───────────────────────────────────────────────

pub const REVEAL_SELECTORS: &[&str] = &[".slide-up", ".slide-in-left", ".slide-in-right"];

/// Fraction of a reveal element that must be visible before its animation runs.
pub const REVEAL_THRESHOLD: f64 = 0.1;

// ── Inline style properties ─────────────────────────────────────

pub const WIDTH_PROPERTY: &str = "width";
pub const DISPLAY_PROPERTY: &str = "display";
pub const PLAY_STATE_PROPERTY: &str = "animation-play-state";
pub const PLAY_STATE_PAUSED: &str = "paused";
pub const PLAY_STATE_RUNNING: &str = "running";

// ── Boot ────────────────────────────────────────────────────────

/// Id of the optional `<script type="application/json">` element holding a [`crate::config::Config`].
pub const CONFIG_ELEMENT_ID: &str = "folio-config";
