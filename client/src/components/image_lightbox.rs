//! Full-screen image viewer for article body images.

use leptos::prelude::*;

use crate::state::article_detail::LightboxState;
use crate::state::ui::UiState;

#[component]
pub fn ImageLightbox(lightbox: RwSignal<LightboxState>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let close = move || lightbox.update(LightboxState::close);
    crate::util::keyboard::on_escape(move || {
        if lightbox.with_untracked(LightboxState::is_open) {
            close();
        }
    });

    view! {
        {move || {
            lightbox.with(LightboxState::image).map(|image| {
                view! {
                    <div class="overlay-backdrop lightbox" on:click=move |_| close()>
                        <figure
                            class="lightbox__figure"
                            role="dialog"
                            aria-modal="true"
                            on:click=move |ev| ev.stop_propagation()
                        >
                            <button
                                class="overlay__close"
                                title=move || ui.get().strings().close
                                on:click=move |_| close()
                            >
                                "✕"
                            </button>
                            <img src=image.url alt=image.caption.unwrap_or_default()/>
                            {image.caption.map(|caption| view! { <figcaption>{caption}</figcaption> })}
                        </figure>
                    </div>
                }
            })
        }}
    }
}
