//! Thin wrappers over the few `window`/`document` calls the features share.
//! Each one logs and gives up when the capability is missing.

use log::warn;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};

pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                warn!("alert failed: {:?}", e);
            }
        }
        None => warn!("no window for alert: {}", message),
    }
}

/// `false` when the dialog cannot be shown.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn prompt(message: &str) -> Option<String> {
    web_sys::window()
        .and_then(|w| w.prompt_with_message(message).ok())
        .flatten()
}

pub fn scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_id(id: &str) {
    match web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        Some(element) => scroll_into_view(&element),
        None => warn!("nothing to scroll to: #{}", id),
    }
}

/// Locks page scrolling while an overlay (mobile menu, modal) is open.
pub fn lock_body_scroll(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(e) = result {
            warn!("could not change body overflow: {:?}", e);
        }
    }
}

/// Milliseconds since navigation start.
pub fn page_load_time_ms() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
}
