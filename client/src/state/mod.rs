//! Client-side state models.
//!
//! DESIGN
//! ======
//! Each page or overlay owns one plain state record, updated through explicit
//! methods and held in a signal by its component. Models have no Leptos
//! dependency so they can be unit tested natively.

pub mod article_detail;
pub mod articles;
pub mod certifications;
pub mod consultation;
pub mod overlay;
pub mod ui;
