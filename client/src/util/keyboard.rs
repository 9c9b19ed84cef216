//! Document-level Escape handling for overlays.
//!
//! SYSTEM CONTEXT
//! ==============
//! Overlays open from a button elsewhere on the page, so keyboard focus stays
//! behind them. Listening on `window` catches Escape wherever focus sits.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

/// Whether a `KeyboardEvent.key` value should dismiss an open overlay.
#[must_use]
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Run `on_dismiss` whenever Escape is pressed anywhere in the document.
///
/// Call from a component body; the listener is removed when that component's
/// owner is cleaned up. No-op outside the browser.
pub fn on_escape(on_dismiss: impl Fn() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::{on_cleanup, window_event_listener};

        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if is_dismiss_key(&ev.key()) {
                on_dismiss();
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_dismiss;
    }
}
