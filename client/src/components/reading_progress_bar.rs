//! Fixed bar showing how far the reader has scrolled through the article.

use leptos::prelude::*;

#[component]
pub fn ReadingProgressBar() -> impl IntoView {
    let progress = RwSignal::new(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        let update = move || progress.set(crate::util::viewport::scroll_metrics().progress());
        update();
        let scroll = window_event_listener(leptos::ev::scroll, move |_| update());
        let resize = window_event_listener(leptos::ev::resize, move |_| update());
        on_cleanup(move || {
            scroll.remove();
            resize.remove();
        });
    }

    view! {
        <div class="reading-progress" aria-hidden="true">
            <div
                class="reading-progress__bar"
                style:width=move || format!("{:.1}%", progress.get())
            ></div>
        </div>
    }
}
