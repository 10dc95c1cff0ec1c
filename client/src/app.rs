//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::{hero_banner::HeroBanner, navbar::Navbar};
use crate::site::site;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
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
/// Renders the navbar and hero banner from the embedded site configuration,
/// or a static notice when that configuration does not validate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let body = match site() {
        Ok(site) => view! {
            <div class="app">
                <Navbar site=site/>
                <div class="main-content">
                    <HeroBanner site=site/>
                </div>
            </div>
        }
        .into_any(),
        Err(e) => {
            log::error!("site configuration rejected: {e}");
            view! {
                <div class="app app--error">
                    <p class="config-error">"This page is temporarily unavailable."</p>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/deeple.css"/>
        <Title text=site().map_or("Deeple", |site| site.brand.name.as_str())/>
        {body}
    }
}
