//! Browser bindings: everything that touches `web_sys`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only compiled with the `browser` feature. The rest of the crate is plain
//! Rust and tested natively; this module scans the document, feeds DOM
//! callbacks into [`crate::store::UiStore`], and applies the effects it
//! returns.

mod error;
pub mod page;
pub mod runtime;

pub use error::DomError;
pub use runtime::Runtime;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::Config;
use crate::consts::CONFIG_ELEMENT_ID;

/// Module entry point: install logging, then start once the document is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::warn!("console logger not installed: {err}");
    }
    if let Err(err) = when_ready() {
        log::error!("portfolio interactivity failed to start: {err}");
    }
}

/// Run [`boot`] now, or on `DOMContentLoaded` if the document is still loading.
///
/// # Errors
///
/// Returns [`DomError`] if there is no document or the listener cannot be attached.
pub fn when_ready() -> Result<(), DomError> {
    let doc = document()?;
    if doc.ready_state() != "loading" {
        boot(&doc);
        return Ok(());
    }

    let cb = Closure::once_into_js(|| match document() {
        Ok(doc) => boot(&doc),
        Err(err) => log::error!("portfolio interactivity failed to start: {err}"),
    });
    doc.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref())
        .map_err(|e| DomError::js("addEventListener", e))
}

/// Load config and start the runtime against `document`.
///
/// The runtime is kept alive by the callbacks it registers.
pub fn boot(document: &Document) {
    Runtime::start(document.clone(), load_config(document));
}

/// Read the JSON config element, falling back to defaults when it is absent or invalid.
#[must_use]
pub fn load_config(document: &Document) -> Config {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return Config::default();
    };
    match Config::from_json(&raw) {
        Ok(config) => {
            log::debug!("loaded config from #{CONFIG_ELEMENT_ID}");
            config
        }
        Err(err) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            Config::default()
        }
    }
}

fn document() -> Result<Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}
