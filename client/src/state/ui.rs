//! Site-wide chrome state (locale, mobile navigation).
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of the page models so the header can change
//! them without touching article, certificate, or wizard state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::i18n::{Locale, SiteStrings, strings};

/// UI state shared through context as `RwSignal<UiState>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub locale: Locale,
    pub nav_open: bool,
}

impl UiState {
    #[must_use]
    pub fn strings(&self) -> &'static SiteStrings {
        strings(self.locale)
    }

    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggled();
    }

    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    /// Collapse the mobile menu after a navigation.
    pub fn close_nav(&mut self) {
        self.nav_open = false;
    }
}
