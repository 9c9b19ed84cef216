//! Fallback route.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    view! {
        <section class="page not-found">
            <h1>"404"</h1>
            <p>{move || ui.get().strings().page_not_found}</p>
            <a class="btn" href="/">{move || ui.get().strings().nav_home}</a>
        </section>
    }
}
