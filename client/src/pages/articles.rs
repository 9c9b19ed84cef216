//! Article listing with category chips, search box, and empty state.

use leptos::prelude::*;

use crate::components::article_card::ArticleCard;
use crate::state::articles::{ArticleListState, categories};
use crate::state::ui::UiState;

#[component]
pub fn ArticlesPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let list = RwSignal::new(ArticleListState::default());
    let s = move || ui.get().strings();
    let visible = Memo::new(move |_| list.with(ArticleListState::visible));

    view! {
        <section class="page articles-page">
            <h1>{move || s().articles_heading}</h1>
            <div class="articles-page__filters">
                <div class="chips">
                    {categories()
                        .into_iter()
                        .map(|chip| {
                            let class = move || {
                                if list.with(|l| l.category == chip) {
                                    "chip chip--active"
                                } else {
                                    "chip"
                                }
                            };
                            view! {
                                <button class=class on:click=move |_| list.update(|l| l.category = chip)>
                                    {chip.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <input
                    class="articles-page__search"
                    type="search"
                    placeholder=move || s().search_placeholder
                    prop:value=move || list.with(|l| l.search.clone())
                    on:input=move |ev| list.update(|l| l.search = event_target_value(&ev))
                />
                <Show when=move || list.with(ArticleListState::has_active_filters)>
                    <button class="btn" on:click=move |_| list.update(ArticleListState::reset_filters)>
                        {move || s().reset_filters}
                    </button>
                </Show>
            </div>
            <Show
                when=move || !visible.with(Vec::is_empty)
                fallback=move || {
                    view! {
                        <div class="empty-state">
                            <p>{move || s().empty_results}</p>
                            <button
                                class="btn"
                                on:click=move |_| list.update(ArticleListState::reset_filters)
                            >
                                {move || s().reset_filters}
                            </button>
                        </div>
                    }
                }
            >
                <div class="article-grid">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|article| view! { <ArticleCard article=article/> })
                            .collect_view()
                    }}
                </div>
            </Show>
        </section>
    }
}
