//! Root document component - the complete HTML page

use super::HomepageLayout;
use crate::config::SiteConfig;
use crate::styles::site_css;
use leptos::prelude::*;

/// The complete HTML document for server rendering
#[component]
pub fn HomepageDocument(title: String) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let css = site_css(&config.layout);

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{css}</style>
            </head>
            <body>
                <HomepageLayout />
            </body>
        </html>
    }
}
