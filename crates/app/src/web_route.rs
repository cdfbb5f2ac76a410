//! Start page from the browser URL.
//!
//! Usage: serve the app at `/dashboard` or `/detection` to open that page.

#![cfg(target_arch = "wasm32")]

/// Returns the URL path, e.g. `"/dashboard"`, if it names a page.
pub fn location_route() -> Option<String> {
    let window = web_sys::window()?;
    let path = window.location().pathname().ok()?;
    if path.trim().is_empty() || path == "/" || path.ends_with(".html") {
        None
    } else {
        Some(path)
    }
}
