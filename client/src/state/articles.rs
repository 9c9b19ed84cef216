//! Article listing model: category chips, free-text search, date ordering.
//!
//! DESIGN
//! ======
//! Articles are static metadata compiled into the binary. Filtering is pure
//! over a slice so the listing page, the related-articles rail and tests all
//! share one code path. Display dates are parsed on demand for ordering only;
//! the original string is what the UI renders.

#[cfg(test)]
#[path = "articles_test.rs"]
mod articles_test;

use std::fmt;

use time::{Date, Month};

use crate::content::articles::ARTICLES;

/// Editorial category attached to every article.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArticleCategory {
    Proyek,
    Layanan,
    Manajemen,
    Regulasi,
    Teknologi,
}

impl ArticleCategory {
    pub const ALL: [ArticleCategory; 5] = [
        ArticleCategory::Proyek,
        ArticleCategory::Layanan,
        ArticleCategory::Manajemen,
        ArticleCategory::Regulasi,
        ArticleCategory::Teknologi,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Proyek => "Proyek",
            Self::Layanan => "Layanan",
            Self::Manajemen => "Manajemen",
            Self::Regulasi => "Regulasi",
            Self::Teknologi => "Teknologi",
        }
    }
}

impl fmt::Display for ArticleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label of the catch-all filter chip.
pub const ALL_CATEGORIES_LABEL: &str = "Semua";

/// Category chip selection on the listing page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ArticleCategory),
}

impl CategoryFilter {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => ALL_CATEGORIES_LABEL,
            Self::Only(category) => category.label(),
        }
    }

    #[must_use]
    pub fn matches(self, category: ArticleCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

/// Listing card metadata for one article.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArticleSummary {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: ArticleCategory,
    pub image: &'static str,
    /// Human-readable publication date, e.g. `"12 Maret 2024"`.
    pub date: &'static str,
    pub read_time: &'static str,
    /// Routing key for `/artikel/{slug}`.
    pub slug: &'static str,
}

impl ArticleSummary {
    #[must_use]
    pub fn published_on(&self) -> Option<Date> {
        parse_display_date(self.date)
    }

    #[must_use]
    pub fn href(&self) -> String {
        format!("/artikel/{}", self.slug)
    }
}

/// Filter chips in display order, "Semua" first.
#[must_use]
pub fn categories() -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(ArticleCategory::ALL.into_iter().map(CategoryFilter::Only))
        .collect()
}

/// Apply category and search filters, then order newest first.
///
/// Search is a case-insensitive substring match over title or excerpt; a
/// blank query matches everything. Ordering is stable, so articles sharing
/// a date keep their source order. Unparseable dates sink to the end.
#[must_use]
pub fn filter<'a>(
    articles: &'a [ArticleSummary],
    category: CategoryFilter,
    search: &str,
) -> Vec<&'a ArticleSummary> {
    let needle = search.trim().to_lowercase();
    let mut out = articles
        .iter()
        .filter(|a| category.matches(a.category))
        .filter(|a| {
            needle.is_empty()
                || a.title.to_lowercase().contains(&needle)
                || a.excerpt.to_lowercase().contains(&needle)
        })
        .collect::<Vec<_>>();
    sort_newest_first(&mut out);
    out
}

fn sort_newest_first(items: &mut [&ArticleSummary]) {
    // `None < Some(_)`, so reversing the comparison also pushes undated items last.
    items.sort_by(|a, b| b.published_on().cmp(&a.published_on()));
}

/// Look up an article by its routing slug.
#[must_use]
pub fn find_by_slug(slug: &str) -> Option<&'static ArticleSummary> {
    ARTICLES.iter().find(|a| a.slug == slug)
}

/// Other articles in the same category, newest first.
#[must_use]
pub fn related(article: &ArticleSummary, limit: usize) -> Vec<&'static ArticleSummary> {
    let mut out = filter(ARTICLES, CategoryFilter::Only(article.category), "");
    out.retain(|a| a.id != article.id);
    out.truncate(limit);
    out
}

/// Parse `"<day> <month> <year>"` with Indonesian or English month names.
#[must_use]
pub fn parse_display_date(raw: &str) -> Option<Date> {
    let mut parts = raw.split_whitespace();
    let day = parts.next()?.parse::<u8>().ok()?;
    let month = parse_month(parts.next()?)?;
    let year = parts.next()?.parse::<i32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Date::from_calendar_date(year, month, day).ok()
}

fn parse_month(raw: &str) -> Option<Month> {
    let month = match raw.to_lowercase().as_str() {
        "januari" | "january" | "jan" => Month::January,
        "februari" | "february" | "feb" => Month::February,
        "maret" | "march" | "mar" => Month::March,
        "april" | "apr" => Month::April,
        "mei" | "may" => Month::May,
        "juni" | "june" | "jun" => Month::June,
        "juli" | "july" | "jul" => Month::July,
        "agustus" | "august" | "agu" | "aug" => Month::August,
        "september" | "sep" => Month::September,
        "oktober" | "october" | "okt" | "oct" => Month::October,
        "november" | "nov" => Month::November,
        "desember" | "december" | "des" | "dec" => Month::December,
        _ => return None,
    };
    Some(month)
}

/// Filter state owned by the article listing page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArticleListState {
    pub category: CategoryFilter,
    pub search: String,
}

impl ArticleListState {
    /// Articles matching the current filters, newest first.
    #[must_use]
    pub fn visible(&self) -> Vec<&'static ArticleSummary> {
        filter(ARTICLES, self.category, &self.search)
    }

    /// Empty-state action: back to "Semua" with no query.
    pub fn reset_filters(&mut self) {
        self.category = CategoryFilter::All;
        self.search.clear();
    }

    /// Whether the reset control should be offered.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.category != CategoryFilter::All || !self.search.trim().is_empty()
    }
}
