//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::consultation_modal::ConsultationModal;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::{COMPANY_NAME, SiteHeader};
use crate::net::config::API_BASE_META;
use crate::pages::{
    about::AboutPage, article::ArticlePage, articles::ArticlesPage,
    certifications::CertificationsPage, home::HomePage, not_found::NotFoundPage,
    services::ServicesPage,
};
use crate::state::consultation::ConsultationWizard;
use crate::state::overlay::ScrollLock;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_base` is published as a `<meta>` tag so the hydrated client posts to
/// the same consultation API the server was configured with.
pub fn shell(options: LeptosOptions, api_base: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="id">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared scroll lock, UI chrome state, and the consultation
/// wizard, then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let lock = ScrollLock::new();
    let ui = RwSignal::new(UiState::default());
    let wizard = RwSignal::new(ConsultationWizard::new(lock.clone()));

    provide_context(lock);
    provide_context(ui);
    provide_context(wizard);

    view! {
        <Stylesheet id="leptos" href="/pkg/beton-site.css"/>
        <Title text=COMPANY_NAME/>
        <Meta name="description" content="Kontraktor gedung, sipil, dan industri."/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("tentang") view=AboutPage/>
                    <Route path=StaticSegment("layanan") view=ServicesPage/>
                    <Route path=StaticSegment("sertifikasi") view=CertificationsPage/>
                    <Route path=StaticSegment("artikel") view=ArticlesPage/>
                    <Route path=(StaticSegment("artikel"), ParamSegment("slug")) view=ArticlePage/>
                </Routes>
            </main>
            <SiteFooter/>
            <ConsultationModal/>
        </Router>
    }
}
