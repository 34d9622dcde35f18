//! The browser window as a [`PageHost`]

use tracing::warn;
use wasm_bindgen::JsValue;

use crate::runtime::PageHost;

/// Page host backed by `window`
#[derive(Clone, Debug)]
pub struct BrowserWindow {
    window: web_sys::Window,
}

impl BrowserWindow {
    /// The current window, if running in a browser context
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }

    pub fn document(&self) -> Option<web_sys::Document> {
        self.window.document()
    }

    /// `location.origin`, used as the base URL for requests
    pub fn origin(&self) -> Result<String, JsValue> {
        self.window.location().origin()
    }
}

impl PageHost for BrowserWindow {
    fn replace_location(&self, path: &str) {
        if let Err(e) = self.window.location().replace(path) {
            warn!(path, error = ?e, "location.replace failed");
        }
    }

    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or_else(|e| {
            warn!(error = ?e, "confirm dialog unavailable");
            false
        })
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            warn!(error = ?e, "alert dialog unavailable");
        }
    }
}
