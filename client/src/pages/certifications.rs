//! Certifications gallery page.

use leptos::prelude::*;

use crate::components::certificate_preview::CertificatePreview;
use crate::state::certifications::{CertificationCategory, CertificationGalleryState};
use crate::state::overlay::ScrollLock;
use crate::state::ui::UiState;

#[component]
pub fn CertificationsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let lock = expect_context::<ScrollLock>();
    let gallery = RwSignal::new(CertificationGalleryState::new(lock));
    let s = move || ui.get().strings();

    // Leaving the page with the preview open must not strand the lock.
    on_cleanup(move || {
        gallery.try_update(CertificationGalleryState::close_preview);
    });

    view! {
        <section class="page certifications-page">
            <h1>{move || s().certifications_heading}</h1>
            <div class="tabs" role="tablist">
                {CertificationCategory::ALL
                    .into_iter()
                    .map(|category| {
                        let class = move || {
                            if gallery.with(|g| g.active == category) {
                                "tabs__tab tabs__tab--active"
                            } else {
                                "tabs__tab"
                            }
                        };
                        view! {
                            <button
                                class=class
                                role="tab"
                                data-category=category.key()
                                on:click=move |_| gallery.update(|g| g.select_category(category))
                            >
                                {move || category.label(s())}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="certificate-grid">
                {move || {
                    gallery
                        .with(CertificationGalleryState::visible)
                        .into_iter()
                        .map(|cert| {
                            view! {
                                <button
                                    class="certificate-card"
                                    on:click=move |_| gallery.update(|g| g.select_for_preview(cert))
                                >
                                    <img src=cert.image alt=cert.title loading="lazy"/>
                                    <span class="certificate-card__title">{cert.title}</span>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
        <CertificatePreview gallery=gallery/>
    }
}
