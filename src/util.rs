// Browser helpers and small numeric utilities.

use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement, MediaQueryList};

use crate::state::Size;

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;

/// Marks chrome (HUD, minimap, panels, modal) that must not pan or zoom the stage.
pub const NO_DRAG_SELECTOR: &str = "[data-no-drag]";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
}

/// `n` limited to `[min, max]`; never panics on inverted bounds.
pub fn clamp(n: f64, min: f64, max: f64) -> f64 {
    n.min(max).max(min)
}

pub fn is_editable_tag(tag: &str, content_editable: bool) -> bool {
    matches!(
        tag.to_ascii_lowercase().as_str(),
        "input" | "textarea" | "select"
    ) || content_editable
}

/// Key events aimed at form fields belong to the page, not the map.
pub fn is_editable_target(target: Option<EventTarget>) -> bool {
    let Some(el) = target.and_then(|t| t.dyn_into::<HtmlElement>().ok()) else {
        return false;
    };
    is_editable_tag(&el.tag_name(), el.is_content_editable())
}

pub fn is_within_no_drag(target: Option<EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(NO_DRAG_SELECTOR).ok().flatten())
        .is_some()
}

pub fn element_size(el: &Element) -> Size {
    let rect = el.get_bounding_client_rect();
    Size::new(rect.width(), rect.height())
}

/// Milliseconds on the same clock as `requestAnimationFrame` timestamps.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

pub fn reduced_motion_query() -> Option<MediaQueryList> {
    web_sys::window()?
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
}
