//! Browser helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate DOM access from page and state logic; every helper
//! degrades to a no-op outside the browser.

pub mod keyboard;
pub mod scroll_lock;
pub mod viewport;
