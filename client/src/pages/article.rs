//! Article detail page: header, typed body blocks, progress bar, lightbox,
//! related articles.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::article_card::ArticleCard;
use crate::components::image_lightbox::ImageLightbox;
use crate::components::reading_progress_bar::ReadingProgressBar;
use crate::state::article_detail::{ContentBlock, LightboxState, body_for, read_time_label};
use crate::state::articles::{ArticleSummary, find_by_slug, related};
use crate::state::overlay::ScrollLock;
use crate::state::ui::UiState;

const RELATED_COUNT: usize = 3;

#[component]
pub fn ArticlePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();
    let article = Memo::new(move |_| params.read().get("slug").and_then(|slug| find_by_slug(&slug)));

    Effect::new(move || {
        article.track();
        crate::util::viewport::scroll_to_top();
    });

    view! {
        {move || match article.get() {
            Some(article) => view! { <ArticleDetail article=article/> }.into_any(),
            None => {
                let s = move || ui.get().strings();
                view! {
                    <section class="page not-found">
                        <p>{move || s().article_not_found}</p>
                        <a class="btn" href="/artikel">{move || s().back_to_articles}</a>
                    </section>
                }
                .into_any()
            }
        }}
    }
}

#[component]
fn ArticleDetail(article: &'static ArticleSummary) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let lock = expect_context::<ScrollLock>();
    let lightbox = RwSignal::new(LightboxState::new(lock));
    let s = move || ui.get().strings();

    on_cleanup(move || {
        lightbox.try_update(LightboxState::close);
    });

    view! {
        <ReadingProgressBar/>
        <article class="page article-detail">
            <a class="article-detail__back" href="/artikel">{move || s().back_to_articles}</a>
            <header class="article-detail__header">
                <span class="article-card__category">{article.category.label()}</span>
                <h1>{article.title}</h1>
                <div class="article-detail__meta">
                    <span>{article.date}</span>
                    <span>{move || read_time_label(body_for(article.slug), article.read_time, s())}</span>
                </div>
            </header>
            <img class="article-detail__hero" src=article.image alt=article.title/>
            <div class="article-detail__body">
                {body_for(article.slug)
                    .iter()
                    .map(|block| render_block(block, lightbox))
                    .collect_view()}
            </div>
            <RelatedArticles article=article/>
        </article>
        <ImageLightbox lightbox=lightbox/>
    }
}

fn render_block(block: &'static ContentBlock, lightbox: RwSignal<LightboxState>) -> AnyView {
    match *block {
        ContentBlock::Paragraph { text } => view! { <p>{text}</p> }.into_any(),
        ContentBlock::Subheading { text } => view! { <h2>{text}</h2> }.into_any(),
        ContentBlock::Image { url, caption } => view! {
            <figure class="article-detail__figure">
                <button
                    class="article-detail__image-button"
                    on:click=move |_| lightbox.update(|l| l.open_block(block))
                >
                    <img src=url alt=caption.unwrap_or_default() loading="lazy"/>
                </button>
                {caption.map(|caption| view! { <figcaption>{caption}</figcaption> })}
            </figure>
        }
        .into_any(),
        ContentBlock::List { items } => view! {
            <ul>{items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}</ul>
        }
        .into_any(),
        ContentBlock::Quote { text, author } => view! {
            <blockquote>
                <p>{text}</p>
                {author.map(|author| view! { <cite>{author}</cite> })}
            </blockquote>
        }
        .into_any(),
    }
}

#[component]
fn RelatedArticles(article: &'static ArticleSummary) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let items = related(article, RELATED_COUNT);
    (!items.is_empty()).then(|| {
        view! {
            <section class="related-articles">
                <h2>{move || ui.get().strings().related_heading}</h2>
                <div class="article-grid">
                    {items
                        .into_iter()
                        .map(|item| view! { <ArticleCard article=item/> })
                        .collect_view()}
                </div>
            </section>
        }
    })
}
