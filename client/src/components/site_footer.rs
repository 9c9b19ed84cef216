//! Site footer.

use leptos::prelude::*;

use crate::components::site_header::COMPANY_NAME;
use crate::state::ui::UiState;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let s = move || ui.get().strings();

    view! {
        <footer class="site-footer">
            <div class="site-footer__brand">
                <strong>{COMPANY_NAME}</strong>
                <p>{move || s().footer_tagline}</p>
            </div>
            <nav class="site-footer__links">
                <a href="/layanan">{move || s().nav_services}</a>
                <a href="/sertifikasi">{move || s().nav_certifications}</a>
                <a href="/artikel">{move || s().nav_articles}</a>
            </nav>
            <p class="site-footer__copy">"© " {COMPANY_NAME}</p>
        </footer>
    }
}
