//! Company profile page.

use leptos::prelude::*;

use crate::state::ui::UiState;

struct Milestone {
    year: &'static str,
    text: &'static str,
}

const MILESTONES: &[Milestone] = &[
    Milestone { year: "2001", text: "Didirikan sebagai kontraktor bangunan gedung di Jakarta." },
    Milestone { year: "2008", text: "Memperluas layanan ke pekerjaan sipil dan infrastruktur." },
    Milestone { year: "2015", text: "Meraih sertifikasi ISO 9001, 14001, dan 45001." },
    Milestone { year: "2021", text: "Menerapkan BIM pada seluruh proyek baru." },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <section class="page about-page">
            <h1>{move || ui.get().strings().nav_about}</h1>
            <p>
                "Kami adalah kontraktor umum yang menangani proyek gedung, sipil, dan industri "
                "dari tahap perencanaan hingga serah terima."
            </p>
            <ol class="timeline">
                {MILESTONES
                    .iter()
                    .map(|m| {
                        view! {
                            <li class="timeline__item">
                                <span class="timeline__year">{m.year}</span>
                                <p>{m.text}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
