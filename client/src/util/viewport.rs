//! Window scroll metrics for the reading-progress bar.

/// Current vertical scroll geometry of the document.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn progress(self) -> f64 {
        crate::state::article_detail::reading_progress(
            self.scroll_y,
            self.document_height,
            self.viewport_height,
        )
    }
}

/// Read scroll geometry from `window`. Zeroed outside the browser.
pub fn scroll_metrics() -> ScrollMetrics {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return ScrollMetrics::default();
        };
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let document_height = window
            .document()
            .and_then(|d| d.document_element())
            .map_or(0.0, |el| f64::from(el.scroll_height()));
        ScrollMetrics { scroll_y, document_height, viewport_height }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ScrollMetrics::default()
    }
}

/// Jump back to the top, used after route changes.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
