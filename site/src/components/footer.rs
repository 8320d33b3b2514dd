use super::{
    Icon, ICON_BRIEFCASE, ICON_ENVELOPE, ICON_HOUSE, ICON_INFO, ICON_MAP_PIN, ICON_PHONE,
};
use crate::content::{
    ADDRESS, CEO_NAME, CEO_QUOTE, EMAIL, MAILTO_HREF, MAP_HREF, PHONE_DISPLAY, PHONE_HREF,
    SERVICES,
};
use crate::nav::Section;
use leptos::prelude::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let service_links = SERVICES
        .iter()
        .map(|service| {
            view! {
                <a class="list-item" href=Section::Services.anchor()>{service.link_text}</a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <footer class="segment segment-inverted segment-vertical" style="padding: 5em 0em;">
            <div class="container">
                <div class="grid grid-divided grid-inverted grid-stackable">
                    <div class="row">
                        <div class="column wide-3">
                            <h4 class="header header-inverted">"Services"</h4>
                            <div class="list list-link list-inverted">{service_links}</div>
                        </div>
                        <div class="column wide-5">
                            <h4 class="header header-inverted">"Contact Details"</h4>
                            <div class="list list-link list-inverted">
                                <a class="list-item" href=PHONE_HREF>
                                    <Icon path=ICON_PHONE size="16" />
                                    {PHONE_DISPLAY}
                                </a>
                                <a class="list-item" href=MAILTO_HREF target="_top">
                                    <Icon path=ICON_ENVELOPE size="16" />
                                    {EMAIL}
                                </a>
                                <a class="list-item" href=MAP_HREF target="_blank" rel="noopener">
                                    <Icon path=ICON_MAP_PIN size="16" />
                                    {ADDRESS}
                                </a>
                            </div>
                        </div>
                        <div class="column wide-3">
                            <h4 class="header header-inverted">"Quick Links"</h4>
                            <div class="list list-link list-inverted">
                                <a class="list-item" href=Section::Company.anchor()>
                                    <Icon path=ICON_INFO size="16" />
                                    "Corporate Information"
                                </a>
                                <a class="list-item" href=Section::Services.anchor()>
                                    <Icon path=ICON_BRIEFCASE size="16" />
                                    "Services"
                                </a>
                                <a class="list-item" href=Section::Contact.anchor()>
                                    <Icon path=ICON_PHONE size="16" />
                                    "Contact Us"
                                </a>
                                <a class="list-item" href=Section::Home.anchor()>
                                    <Icon path=ICON_HOUSE size="16" />
                                    "Home"
                                </a>
                            </div>
                        </div>
                        <div class="column wide-4">
                            <h4 class="header header-inverted">{CEO_NAME}</h4>
                            <p>{CEO_QUOTE}</p>
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
