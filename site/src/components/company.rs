use crate::config::SiteConfig;
use crate::content::{
    COMPANY, COMPANY_FUTURE, COMPANY_PITCH, PHONE_HREF, TESTIMONIALS_ID, images,
};
use crate::nav::Section;
use leptos::prelude::*;

/// "We guard. We protect. We secure." block with the company logo.
#[component]
pub fn CompanySection() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let logo = config.asset(images::LOGO);

    view! {
        <section id=Section::Company.id() class="segment segment-vertical" style="padding: 6em 0em;">
            <div class="grid grid-container grid-stackable grid-middle">
                <div class="row">
                    <div class="column wide-8">
                        <div class="container container-text" style="padding: 1em 0em;">
                            <h3 class="header" style="font-size: 2em;">
                                "We guard. We protect. We secure."
                            </h3>
                            <p style="font-size: 1.33em;">
                                {COMPANY_PITCH}
                                <a href=PHONE_HREF>"@+263773205674"</a>
                            </p>
                        </div>
                        <div class="container container-text" style="padding: 1em 0em;">
                            <h3 class="header" style="font-size: 2em;">"The future of Security"</h3>
                            <p style="font-size: 1.33em;">{COMPANY_FUTURE}</p>
                        </div>
                    </div>
                    <div class="column wide-6 floated-right">
                        <img class="image image-large image-bordered image-rounded" src=logo alt=COMPANY />
                    </div>
                </div>
                <div class="row">
                    <div class="column centered">
                        <a class="button button-huge" href=format!("#{TESTIMONIALS_ID}")>
                            "Testimonials"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
