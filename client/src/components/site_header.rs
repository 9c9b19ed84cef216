//! Top navigation bar with locale toggle and consultation call-to-action.

use leptos::prelude::*;

use crate::state::consultation::ConsultationWizard;
use crate::state::ui::UiState;

pub const COMPANY_NAME: &str = "PT Beton Nusantara";

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let wizard = expect_context::<RwSignal<ConsultationWizard>>();
    let s = move || ui.get().strings();

    let nav_class = move || {
        if ui.with(|u| u.nav_open) {
            "site-header__nav site-header__nav--open"
        } else {
            "site-header__nav"
        }
    };
    let close_nav = move |_| ui.update(UiState::close_nav);

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">{COMPANY_NAME}</a>
            <button
                class="site-header__menu"
                aria-label="Menu"
                on:click=move |_| ui.update(UiState::toggle_nav)
            >
                "☰"
            </button>
            <nav class=nav_class>
                <a href="/" on:click=close_nav>{move || s().nav_home}</a>
                <a href="/tentang" on:click=close_nav>{move || s().nav_about}</a>
                <a href="/layanan" on:click=close_nav>{move || s().nav_services}</a>
                <a href="/sertifikasi" on:click=close_nav>{move || s().nav_certifications}</a>
                <a href="/artikel" on:click=close_nav>{move || s().nav_articles}</a>
            </nav>
            <div class="site-header__actions">
                <button
                    class="btn site-header__locale"
                    on:click=move |_| ui.update(UiState::toggle_locale)
                >
                    {move || s().locale_toggle}
                </button>
                <button
                    class="btn btn--primary"
                    on:click=move |_| wizard.update(ConsultationWizard::open)
                >
                    {move || s().cta_consultation}
                </button>
            </div>
        </header>
    }
}
