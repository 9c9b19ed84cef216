//! Full-screen certificate preview overlay.

use leptos::prelude::*;

use crate::state::certifications::CertificationGalleryState;
use crate::state::ui::UiState;

/// Renders the previewed certificate, if any. Close button, backdrop click
/// and Escape all route through `close_preview`.
#[component]
pub fn CertificatePreview(gallery: RwSignal<CertificationGalleryState>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let close = move || gallery.update(CertificationGalleryState::close_preview);
    crate::util::keyboard::on_escape(move || {
        if gallery.with_untracked(CertificationGalleryState::is_preview_open) {
            close();
        }
    });

    view! {
        {move || {
            gallery.with(CertificationGalleryState::previewed).map(|cert| {
                view! {
                    <div class="overlay-backdrop" on:click=move |_| close()>
                        <div
                            class="overlay certificate-preview"
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
                            <img class="certificate-preview__image" src=cert.image alt=cert.title/>
                            <h3>{cert.title}</h3>
                            <p>{cert.description}</p>
                        </div>
                    </div>
                }
            })
        }}
    }
}
