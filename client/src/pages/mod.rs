//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state (filters, gallery, lightbox) and
//! delegates rendering details to `components`.

pub mod about;
pub mod article;
pub mod articles;
pub mod certifications;
pub mod home;
pub mod not_found;
pub mod services;
