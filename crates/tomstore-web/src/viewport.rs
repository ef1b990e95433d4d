//! Viewport class hook for responsive layout switching
//!
//! Wraps `window.matchMedia` in a Leptos signal so components re-render
//! whenever the browser crosses the breakpoint. No polling: the browser
//! pushes a change event and the closure updates the signal.

use leptos::prelude::*;
use tomstore_core::{ViewportClass, COMPACT_BREAKPOINT_PX};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MediaQueryListEvent;

/// Media query matching the "expanded" regime.
pub(crate) fn expanded_query() -> String {
    format!("(min-width: {COMPACT_BREAKPOINT_PX}px)")
}

fn class_from_match(matches_expanded: bool) -> ViewportClass {
    if matches_expanded {
        ViewportClass::Expanded
    } else {
        ViewportClass::Compact
    }
}

/// Leptos hook observing the viewport class.
///
/// Returns a signal holding the current [`ViewportClass`], updated on
/// every media-query change. If `matchMedia` is unavailable the hook
/// logs a warning and stays at `Expanded` (inline menus always reachable).
pub fn use_viewport_class() -> ReadSignal<ViewportClass> {
    let (class, set_class) = signal(ViewportClass::Expanded);

    let media_query = match window().match_media(&expanded_query()) {
        Ok(Some(mql)) => mql,
        Ok(None) | Err(_) => {
            leptos::logging::warn!("matchMedia unavailable; staying in expanded layout");
            return class;
        }
    };

    set_class.set(class_from_match(media_query.matches()));

    let callback = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
        set_class.set(class_from_match(event.matches()));
    }) as Box<dyn FnMut(_)>);

    if let Err(e) =
        media_query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
    {
        leptos::logging::warn!("Failed to observe viewport changes: {:?}", e);
    }

    // Listener lives for the lifetime of the page; the header is mounted once.
    callback.forget();

    class
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expanded_query_uses_breakpoint() {
        assert_eq!(expanded_query(), "(min-width: 900px)");
    }

    #[test]
    fn test_class_from_match() {
        assert_eq!(class_from_match(true), ViewportClass::Expanded);
        assert_eq!(class_from_match(false), ViewportClass::Compact);
    }
}
