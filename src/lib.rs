//! Interactivity for a static portfolio page, compiled to WebAssembly.
//!
//! Five independent behaviors attach to whatever markup the page has: a
//! mobile navigation toggle, skill bars that fill when scrolled into view, a
//! project gallery filter, a contact form validator, and scroll-triggered
//! entrance animations. Each one no-ops when its elements are missing.
//!
//! All state lives in [`store::UiStore`], which turns [`event::Event`]s into
//! [`effect::Effect`]s without touching the browser. The `browser` feature
//! adds [`dom`], which scans the document, wires listeners and observers,
//! and applies effects.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`store`] | Component records, `init` and `dispatch` |
//! | [`nav`] | Mobile menu toggle |
//! | [`skills`] | One-shot skill bar fill |
//! | [`filter`] | Project card filter |
//! | [`form`] | Contact form state machine |
//! | [`errors`] | Inline validation overlays |
//! | [`email`] | Email shape check |
//! | [`reveal`] | One-shot entrance animations |
//! | [`visibility`] | Shared one-shot visibility tracker |
//! | [`event`] / [`effect`] | Input and output vocabularies |
//! | [`layout`] | What the page scan found |
//! | [`config`] | Selectors, thresholds, messages |
//! | [`consts`] | Default values |
//! | `dom` | web-sys glue (feature `browser`) |

pub mod config;
pub mod consts;
pub mod effect;
pub mod email;
pub mod errors;
pub mod event;
pub mod filter;
pub mod form;
pub mod layout;
pub mod nav;
pub mod reveal;
pub mod skills;
pub mod store;
pub mod visibility;

#[cfg(feature = "browser")]
pub mod dom;
