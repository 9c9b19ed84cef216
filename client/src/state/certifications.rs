//! Certifications gallery: category tabs plus a single-item preview overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the certifications page. The preview participates in the shared
//! `ScrollLock`, so every exit path must go through `close_preview`.

#[cfg(test)]
#[path = "certifications_test.rs"]
mod certifications_test;

use crate::content::certifications::CERTIFICATIONS;
use crate::i18n::SiteStrings;
use crate::state::overlay::{OverlaySlot, ScrollLock};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CertificationCategory {
    #[default]
    Iso,
    Legal,
    Membership,
}

impl CertificationCategory {
    pub const ALL: [CertificationCategory; 3] = [Self::Iso, Self::Legal, Self::Membership];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Iso => "iso",
            Self::Legal => "legal",
            Self::Membership => "membership",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    #[must_use]
    pub fn label(self, strings: &SiteStrings) -> &'static str {
        match self {
            Self::Iso => strings.cert_iso,
            Self::Legal => strings.cert_legal,
            Self::Membership => strings.cert_membership,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
    pub id: u32,
    pub title: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub category: CertificationCategory,
}

/// Certificates in `category`, in catalog order.
#[must_use]
pub fn filter(certs: &[Certification], category: CertificationCategory) -> Vec<&Certification> {
    certs.iter().filter(|c| c.category == category).collect()
}

#[must_use]
pub fn find_by_id(id: u32) -> Option<&'static Certification> {
    CERTIFICATIONS.iter().find(|c| c.id == id)
}

/// Page-scoped gallery state.
#[derive(Clone, Debug, Default)]
pub struct CertificationGalleryState {
    pub active: CertificationCategory,
    preview: Option<u32>,
    slot: OverlaySlot,
}

impl CertificationGalleryState {
    #[must_use]
    pub fn new(lock: ScrollLock) -> Self {
        Self {
            active: CertificationCategory::default(),
            preview: None,
            slot: OverlaySlot::new(lock),
        }
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&'static Certification> {
        filter(CERTIFICATIONS, self.active)
    }

    pub fn select_category(&mut self, category: CertificationCategory) {
        self.active = category;
    }

    /// Show `cert` in the preview overlay. Switching items keeps one lock.
    pub fn select_for_preview(&mut self, cert: &Certification) {
        self.preview = Some(cert.id);
        self.slot.hold();
    }

    /// Dismiss the preview. Safe to call from every exit path.
    pub fn close_preview(&mut self) {
        self.preview = None;
        self.slot.release();
    }

    #[must_use]
    pub fn is_preview_open(&self) -> bool {
        self.preview.is_some()
    }

    #[must_use]
    pub fn previewed(&self) -> Option<&'static Certification> {
        self.preview.and_then(find_by_id)
    }
}
