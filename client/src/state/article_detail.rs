//! Article detail model: typed body blocks, reading progress, image lightbox.

#[cfg(test)]
#[path = "article_detail_test.rs"]
mod article_detail_test;

use crate::content::bodies::BODIES;
use crate::i18n::SiteStrings;
use crate::state::overlay::{OverlaySlot, ScrollLock};

const WORDS_PER_MINUTE: usize = 200;

/// One unit of article body content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentBlock {
    Paragraph { text: &'static str },
    Subheading { text: &'static str },
    Image { url: &'static str, caption: Option<&'static str> },
    List { items: &'static [&'static str] },
    Quote { text: &'static str, author: Option<&'static str> },
}

impl ContentBlock {
    fn word_count(&self) -> usize {
        let words = |s: &str| s.split_whitespace().count();
        match self {
            Self::Paragraph { text } | Self::Subheading { text } => words(text),
            Self::Image { caption, .. } => caption.map_or(0, words),
            Self::List { items } => items.iter().map(|item| words(item)).sum(),
            Self::Quote { text, author } => words(text) + author.map_or(0, words),
        }
    }
}

/// Body blocks for `slug`, empty when the article has no body yet.
#[must_use]
pub fn body_for(slug: &str) -> &'static [ContentBlock] {
    BODIES
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, blocks)| *blocks)
        .unwrap_or_default()
}

/// Reading time estimate in whole minutes, never below one.
#[must_use]
pub fn estimated_read_minutes(blocks: &[ContentBlock]) -> usize {
    let words: usize = blocks.iter().map(ContentBlock::word_count).sum();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Reading time for the detail header: estimated from the body, or the
/// summary's own `read_time` when there is no body to count.
#[must_use]
pub fn read_time_label(blocks: &[ContentBlock], summary_read_time: &str, strings: &SiteStrings) -> String {
    if blocks.is_empty() {
        return summary_read_time.to_owned();
    }
    format!("{} {}", estimated_read_minutes(blocks), strings.minutes_read)
}

/// Percentage of the scrollable span already scrolled past, in `[0, 100]`.
#[must_use]
pub fn reading_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let span = document_height - viewport_height;
    if span <= 0.0 || !span.is_finite() || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / span).clamp(0.0, 1.0) * 100.0
}

/// Image shown full-screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LightboxImage {
    pub url: &'static str,
    pub caption: Option<&'static str>,
}

/// Full-screen image preview, sharing the overlay scroll lock.
#[derive(Clone, Debug, Default)]
pub struct LightboxState {
    image: Option<LightboxImage>,
    slot: OverlaySlot,
}

impl LightboxState {
    #[must_use]
    pub fn new(lock: ScrollLock) -> Self {
        Self { image: None, slot: OverlaySlot::new(lock) }
    }

    /// Open on an image block. Other block kinds are ignored.
    pub fn open_block(&mut self, block: &ContentBlock) {
        if let ContentBlock::Image { url, caption } = *block {
            self.open(url, caption);
        }
    }

    pub fn open(&mut self, url: &'static str, caption: Option<&'static str>) {
        self.image = Some(LightboxImage { url, caption });
        self.slot.hold();
    }

    pub fn close(&mut self) {
        self.image = None;
        self.slot.release();
    }

    #[must_use]
    pub fn image(&self) -> Option<LightboxImage> {
        self.image
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.image.is_some()
    }
}
