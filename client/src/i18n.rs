//! Two-locale display string table (Indonesian default, English).
//!
//! DESIGN
//! ======
//! Copy is grouped into one `SiteStrings` record per locale and resolved once
//! per render via `strings(locale)`, instead of branching on the locale at
//! every call site.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    Id,
    En,
}

impl Locale {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::En => "en",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "id" => Some(Self::Id),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Id => Self::En,
            Self::En => Self::Id,
        }
    }
}

/// Every piece of UI copy that changes with the locale.
#[derive(Debug, PartialEq, Eq)]
pub struct SiteStrings {
    pub nav_home: &'static str,
    pub nav_about: &'static str,
    pub nav_services: &'static str,
    pub nav_certifications: &'static str,
    pub nav_articles: &'static str,
    pub cta_consultation: &'static str,
    pub locale_toggle: &'static str,

    pub articles_heading: &'static str,
    pub search_placeholder: &'static str,
    pub empty_results: &'static str,
    pub reset_filters: &'static str,
    pub read_more: &'static str,
    pub minutes_read: &'static str,
    pub related_heading: &'static str,
    pub back_to_articles: &'static str,
    pub article_not_found: &'static str,
    pub page_not_found: &'static str,

    pub certifications_heading: &'static str,
    pub cert_iso: &'static str,
    pub cert_legal: &'static str,
    pub cert_membership: &'static str,
    pub close: &'static str,

    pub wizard_title: &'static str,
    pub wizard_step_label: &'static str,
    pub step_project_type: &'static str,
    pub step_details: &'static str,
    pub step_contact: &'static str,
    pub project_buildings: &'static str,
    pub project_civil: &'static str,
    pub project_industrial: &'static str,
    pub field_description: &'static str,
    pub field_location: &'static str,
    pub field_area: &'static str,
    pub field_timeframe: &'static str,
    pub field_first_name: &'static str,
    pub field_last_name: &'static str,
    pub field_phone: &'static str,
    pub field_email: &'static str,
    pub field_company: &'static str,
    pub field_newsletter: &'static str,
    pub timeframe_unset: &'static str,
    pub timeframe_immediate: &'static str,
    pub timeframe_three_months: &'static str,
    pub timeframe_six_months: &'static str,
    pub timeframe_year: &'static str,
    pub timeframe_planning: &'static str,
    pub back: &'static str,
    pub next: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub submit_success: &'static str,
    pub submit_failed: &'static str,

    pub footer_tagline: &'static str,
}

static ID: SiteStrings = SiteStrings {
    nav_home: "Beranda",
    nav_about: "Tentang Kami",
    nav_services: "Layanan",
    nav_certifications: "Sertifikasi",
    nav_articles: "Artikel",
    cta_consultation: "Konsultasi Gratis",
    locale_toggle: "EN",

    articles_heading: "Wawasan & Artikel",
    search_placeholder: "Cari artikel...",
    empty_results: "Tidak ada artikel yang cocok dengan pencarian Anda.",
    reset_filters: "Reset filter",
    read_more: "Baca selengkapnya",
    minutes_read: "menit baca",
    related_heading: "Artikel terkait",
    back_to_articles: "Kembali ke daftar artikel",
    article_not_found: "Artikel tidak ditemukan.",
    page_not_found: "Halaman tidak ditemukan.",

    certifications_heading: "Sertifikasi & Legalitas",
    cert_iso: "Sertifikasi ISO",
    cert_legal: "Legalitas",
    cert_membership: "Keanggotaan",
    close: "Tutup",

    wizard_title: "Permintaan Konsultasi",
    wizard_step_label: "Langkah",
    step_project_type: "Jenis Proyek",
    step_details: "Detail Proyek",
    step_contact: "Informasi Kontak",
    project_buildings: "Gedung",
    project_civil: "Sipil",
    project_industrial: "Industri",
    field_description: "Deskripsi proyek",
    field_location: "Lokasi proyek",
    field_area: "Luas (m²)",
    field_timeframe: "Jadwal mulai",
    field_first_name: "Nama depan",
    field_last_name: "Nama belakang",
    field_phone: "Nomor telepon",
    field_email: "Email",
    field_company: "Perusahaan",
    field_newsletter: "Kirimi saya kabar dan artikel terbaru",
    timeframe_unset: "Pilih jadwal",
    timeframe_immediate: "Segera",
    timeframe_three_months: "Dalam 3 bulan",
    timeframe_six_months: "Dalam 6 bulan",
    timeframe_year: "Dalam 1 tahun",
    timeframe_planning: "Masih perencanaan",
    back: "Kembali",
    next: "Lanjut",
    submit: "Kirim Permintaan",
    submitting: "Mengirim...",
    submit_success: "Terima kasih! Tim kami akan segera menghubungi Anda.",
    submit_failed: "Gagal mengirim permintaan. Silakan coba lagi.",

    footer_tagline: "Membangun dengan mutu, tepat waktu, dan aman.",
};

static EN: SiteStrings = SiteStrings {
    nav_home: "Home",
    nav_about: "About Us",
    nav_services: "Services",
    nav_certifications: "Certifications",
    nav_articles: "Insights",
    cta_consultation: "Free Consultation",
    locale_toggle: "ID",

    articles_heading: "Insights & Articles",
    search_placeholder: "Search articles...",
    empty_results: "No articles match your search.",
    reset_filters: "Reset filters",
    read_more: "Read more",
    minutes_read: "min read",
    related_heading: "Related articles",
    back_to_articles: "Back to articles",
    article_not_found: "Article not found.",
    page_not_found: "Page not found.",

    certifications_heading: "Certifications & Legal",
    cert_iso: "ISO Certifications",
    cert_legal: "Legal",
    cert_membership: "Memberships",
    close: "Close",

    wizard_title: "Consultation Request",
    wizard_step_label: "Step",
    step_project_type: "Project Type",
    step_details: "Project Details",
    step_contact: "Contact Information",
    project_buildings: "Buildings",
    project_civil: "Civil",
    project_industrial: "Industrial",
    field_description: "Project description",
    field_location: "Project location",
    field_area: "Area (m²)",
    field_timeframe: "Start timeframe",
    field_first_name: "First name",
    field_last_name: "Last name",
    field_phone: "Phone number",
    field_email: "Email",
    field_company: "Company",
    field_newsletter: "Send me news and new articles",
    timeframe_unset: "Select a timeframe",
    timeframe_immediate: "Immediately",
    timeframe_three_months: "Within 3 months",
    timeframe_six_months: "Within 6 months",
    timeframe_year: "Within 1 year",
    timeframe_planning: "Still planning",
    back: "Back",
    next: "Next",
    submit: "Send Request",
    submitting: "Sending...",
    submit_success: "Thank you! Our team will contact you shortly.",
    submit_failed: "Failed to send your request. Please try again.",

    footer_tagline: "Building with quality, on time, and safely.",
};

#[must_use]
pub fn strings(locale: Locale) -> &'static SiteStrings {
    match locale {
        Locale::Id => &ID,
        Locale::En => &EN,
    }
}
