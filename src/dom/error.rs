use wasm_bindgen::JsValue;

/// Failure talking to the browser.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// No global `window` (not running in a browser main thread).
    #[error("no global window")]
    NoWindow,
    /// The window has no document.
    #[error("window has no document")]
    NoDocument,
    /// A DOM call threw.
    #[error("{op} failed: {message}")]
    Js { op: &'static str, message: String },
}

impl DomError {
    /// Wrap a thrown `JsValue` from the DOM call named `op`.
    #[must_use]
    pub fn js(op: &'static str, err: JsValue) -> Self {
        let message = err.as_string().unwrap_or_else(|| format!("{err:?}"));
        Self::Js { op, message }
    }
}
