use crate::config::SiteConfig;
use crate::content::{SERVICES, Service};
use leptos::prelude::*;

#[component]
fn ServiceCard(image: String, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="column">
            <div class="card">
                <img class="image" src=image alt=title />
                <div class="card-content">
                    <div class="card-header">{title}</div>
                    <div class="card-description">{description}</div>
                </div>
            </div>
        </div>
    }
}

/// Service offering cards, three per row.
#[component]
pub fn ServiceCards() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    let rows = SERVICES
        .chunks(3)
        .map(|row| {
            let cards = row
                .iter()
                .map(|service: &Service| {
                    view! {
                        <ServiceCard
                            image=config.asset(service.image)
                            title=service.title
                            description=service.description
                        />
                    }
                })
                .collect::<Vec<_>>();
            view! { <div class="row">{cards}</div> }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="container services" style="margin-top: 2em;">
            <div class="grid grid-columns-3 grid-stackable">{rows}</div>
        </div>
    }
}
