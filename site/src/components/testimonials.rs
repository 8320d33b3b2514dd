use crate::config::SiteConfig;
use crate::content::{
    APPROACH, CLIENT_NAME, CLIENT_QUOTE, CLIENT_ROLE, PLEDGE, TESTIMONIAL_HEADLINE,
    TESTIMONIAL_QUOTE, TESTIMONIALS_ID, images,
};
use leptos::prelude::*;

/// Company approach, the testimonials divider and a customer quote.
#[component]
pub fn ApproachSection() -> impl IntoView {
    view! {
        <section class="segment segment-vertical" style="padding: 8em 0em;">
            <div class="container container-text">
                <h3 class="header" style="font-size: 2em;">
                    "The professional approach to security"
                </h3>
                <p style="font-size: 1.33em;">{APPROACH}</p>
                <a class="button button-large">"Got a Question?"</a>
                <h4
                    id=TESTIMONIALS_ID
                    class="divider divider-horizontal header"
                    style="margin: 3em 0em; text-transform: uppercase;"
                >
                    <a href="#">"Testimonials"</a>
                </h4>
                <h3 class="header" style="font-size: 2em;">{TESTIMONIAL_HEADLINE}</h3>
                <p style="font-size: 1.33em;">{TESTIMONIAL_QUOTE}</p>
                <a class="button button-large">"Get free security assessment"</a>
            </div>
        </section>
    }
}

/// Two-column pledge and client quote.
#[component]
pub fn PledgeGrid() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let avatar = config.asset(images::AVATAR);

    view! {
        <section class="segment segment-vertical" style="padding: 0em;">
            <div class="grid grid-celled-internally grid-equal grid-stackable">
                <div class="row centered">
                    <div class="column" style="padding-bottom: 5em; padding-top: 5em;">
                        <h3 class="header" style="font-size: 2em;">{PLEDGE}</h3>
                        <p style="font-size: 1.33em;">"- Our pledge"</p>
                    </div>
                    <div class="column" style="padding-bottom: 5em; padding-top: 5em;">
                        <h3 class="header" style="font-size: 2em;">{CLIENT_QUOTE}</h3>
                        <p style="font-size: 1.33em;">
                            <img class="image image-avatar" src=avatar alt=CLIENT_NAME />
                            <b>{CLIENT_NAME}</b>
                            " "
                            {CLIENT_ROLE}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
