pub mod components;
pub mod config;
pub mod content;
#[cfg(feature = "ssr")]
pub mod context;
pub mod icons;
pub mod pages;
pub mod particles;
pub mod scroll;
pub mod state;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    SsrMode, StaticSegment,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Franklin loaiza, desarrollador de software: proyectos, habilidades y contacto."/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>

        <Title formatter=|text: String| {
            if text.is_empty() {
                String::from(content::BRAND)
            } else {
                format!("{} - {}", text, content::BRAND)
            }
        }/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                // Nothing on the page is fetched, render it in one go.
                <Route
                    path=StaticSegment("")
                    view=pages::home::PortfolioPage
                    ssr=SsrMode::Async
                />
            </Routes>
        </Router>
    }
}
