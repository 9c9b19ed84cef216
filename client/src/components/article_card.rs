//! Listing card linking to an article detail page.

use leptos::prelude::*;

use crate::state::articles::ArticleSummary;
use crate::state::ui::UiState;

#[component]
pub fn ArticleCard(article: &'static ArticleSummary) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let href = article.href();

    view! {
        <article class="article-card">
            <a href=href.clone() class="article-card__image">
                <img src=article.image alt=article.title loading="lazy"/>
            </a>
            <div class="article-card__body">
                <span class="article-card__category">{article.category.label()}</span>
                <h3 class="article-card__title">
                    <a href=href.clone()>{article.title}</a>
                </h3>
                <p class="article-card__excerpt">{article.excerpt}</p>
                <div class="article-card__meta">
                    <span>{article.date}</span>
                    <span>{article.read_time}</span>
                </div>
                <a href=href class="article-card__more">{move || ui.get().strings().read_more}</a>
            </div>
        </article>
    }
}
