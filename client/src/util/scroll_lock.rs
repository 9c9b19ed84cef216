//! `<body>` overflow toggling for the overlay scroll lock.
//!
//! The original inline `overflow` value is stashed in a data attribute on
//! lock and written back on unlock. Requires a browser environment; both
//! calls are no-ops elsewhere.

#[cfg(feature = "hydrate")]
const SAVED_OVERFLOW_ATTR: &str = "data-scroll-lock-overflow";

#[cfg(feature = "hydrate")]
fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window()?.document()?.body()
}

/// Hide background scrolling while an overlay is open.
pub fn suppress_body_scroll() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = body() {
            let style = body.style();
            let previous = style.get_property_value("overflow").unwrap_or_default();
            let _ = body.set_attribute(SAVED_OVERFLOW_ATTR, &previous);
            let _ = style.set_property("overflow", "hidden");
        }
    }
}

/// Put back whatever `overflow` the body had before locking.
pub fn restore_body_scroll() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = body() {
            let previous = body.get_attribute(SAVED_OVERFLOW_ATTR).unwrap_or_default();
            let _ = body.remove_attribute(SAVED_OVERFLOW_ATTR);
            let style = body.style();
            if previous.is_empty() {
                let _ = style.remove_property("overflow");
            } else {
                let _ = style.set_property("overflow", &previous);
            }
        }
    }
}
