//! Landing page: hero, service highlights, latest articles.

use leptos::prelude::*;

use crate::components::article_card::ArticleCard;
use crate::content::articles::ARTICLES;
use crate::state::articles::{CategoryFilter, filter};
use crate::state::consultation::ConsultationWizard;
use crate::state::ui::UiState;

const LATEST_COUNT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let wizard = expect_context::<RwSignal<ConsultationWizard>>();
    let s = move || ui.get().strings();
    let latest = filter(ARTICLES, CategoryFilter::All, "")
        .into_iter()
        .take(LATEST_COUNT)
        .collect::<Vec<_>>();

    view! {
        <section class="hero">
            <div class="hero__content">
                <h1>"Kontraktor gedung, sipil, dan industri"</h1>
                <p>
                    "Lebih dari dua dekade membangun gedung perkantoran, infrastruktur, "
                    "dan fasilitas industri di seluruh Indonesia."
                </p>
                <div class="hero__actions">
                    <button
                        class="btn btn--primary"
                        on:click=move |_| wizard.update(ConsultationWizard::open)
                    >
                        {move || s().cta_consultation}
                    </button>
                    <a class="btn" href="/layanan">{move || s().nav_services}</a>
                </div>
            </div>
        </section>
        <section class="highlights">
            <div class="highlight">
                <strong>"250+"</strong>
                <span>"Proyek selesai"</span>
            </div>
            <div class="highlight">
                <strong>"ISO 9001 · 14001 · 45001"</strong>
                <span>"Sistem manajemen terintegrasi"</span>
            </div>
            <div class="highlight">
                <strong>"0"</strong>
                <span>"Kecelakaan fatal sejak 2015"</span>
            </div>
        </section>
        <section class="latest-articles">
            <h2>{move || s().articles_heading}</h2>
            <div class="article-grid">
                {latest
                    .into_iter()
                    .map(|article| view! { <ArticleCard article=article/> })
                    .collect_view()}
            </div>
            <a class="btn" href="/artikel">{move || s().nav_articles}</a>
        </section>
    }
}
