//! Browser-boundary error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Every error is caught at the operation that
//! produced it and logged as a warning; reads degrade to "absent", writes
//! are dropped, and the next user action or page load retries naturally.

use wasm_bindgen::JsValue;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failures crossing the browser boundary.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// `window` is missing (not running inside a browser page).
    #[error("browser window is not available")]
    NoWindow,

    /// The window has no `document`.
    #[error("document is not available")]
    NoDocument,

    /// `localStorage` is disabled or inaccessible (permissions, privacy
    /// mode).
    #[error("local storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Reading the stored preference failed.
    #[error("failed to read stored theme: {0}")]
    StorageRead(String),

    /// Persisting the preference failed (quota, read-only storage).
    #[error("failed to store theme: {0}")]
    StorageWrite(String),

    /// The color-scheme media query could not be evaluated or watched.
    #[error("color-scheme media query failed: {0}")]
    MediaQuery(String),

    /// The browser rejected a DOM lookup or mutation.
    #[error("dom update failed: {0}")]
    Dom(String),
}

/// Render a JS exception for log output.
pub(crate) fn js_error(value: &JsValue) -> String {
    format!("{value:?}")
}
