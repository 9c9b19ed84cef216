//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and overlays while reading/writing shared
//! state from Leptos context providers or signals handed in by their page.

pub mod article_card;
pub mod certificate_preview;
pub mod consultation_modal;
pub mod image_lightbox;
pub mod reading_progress_bar;
pub mod site_footer;
pub mod site_header;
