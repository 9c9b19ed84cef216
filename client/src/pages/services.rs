//! Services overview, one card per project type.

use leptos::prelude::*;

use crate::state::consultation::{ConsultationWizard, ProjectType};
use crate::state::ui::UiState;

fn service_blurb(project_type: ProjectType) -> &'static str {
    match project_type {
        ProjectType::Buildings => "Perkantoran, hunian vertikal, fasilitas pendidikan dan kesehatan.",
        ProjectType::Civil => "Jalan, jembatan, drainase, dan pekerjaan tanah.",
        ProjectType::Industrial => "Pabrik, gudang, dan fasilitas produksi termasuk renovasi bertahap.",
    }
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let wizard = expect_context::<RwSignal<ConsultationWizard>>();
    let s = move || ui.get().strings();

    view! {
        <section class="page services-page">
            <h1>{move || s().nav_services}</h1>
            <div class="service-grid">
                {ProjectType::ALL
                    .into_iter()
                    .map(|project_type| {
                        view! {
                            <div class="service-card">
                                <h3>{move || project_type.label(s())}</h3>
                                <p>{service_blurb(project_type)}</p>
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| {
                                        wizard.update(|w| {
                                            w.open();
                                            w.toggle_project_type(project_type);
                                        });
                                    }
                                >
                                    {move || s().cta_consultation}
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
