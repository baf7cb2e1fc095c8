//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.
//! These call into the browser and must only run on `wasm32`.

use web_sys::{HtmlElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document body.
#[inline]
pub fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

/// Add or remove a class on `<body>`.
///
/// Returns `true` if the class list was updated.
pub fn toggle_body_class(class: &str, enabled: bool) -> bool {
    let Some(body) = body() else {
        return false;
    };
    let classes = body.class_list();
    if enabled {
        classes.add_1(class).is_ok()
    } else {
        classes.remove_1(class).is_ok()
    }
}

/// Set the document title.
pub fn set_title(title: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash, including the '#' prefix (empty if none).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Set the URL hash (adds to browser history and fires `hashchange`).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}

/// Replace the URL hash without adding to browser history.
///
/// The hash should include the '#' prefix. Does not fire `hashchange`.
pub fn replace_hash(hash: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(hash));
    }
}
