use super::{Icon, ICON_PHONE};
use crate::config::SiteConfig;
use crate::content::{COMPANY, PHONE_HREF, TAGLINE, images};
use leptos::prelude::*;

/// Type scale of the hero heading for one presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingScale {
    pub logo_margin_top: &'static str,
    pub title_size: &'static str,
    pub subtitle_size: &'static str,
}

impl HeadingScale {
    pub fn for_presentation(mobile: bool) -> Self {
        if mobile {
            HeadingScale {
                logo_margin_top: "1.5em",
                title_size: "2em",
                subtitle_size: "1.5em",
            }
        } else {
            HeadingScale {
                logo_margin_top: "10em",
                title_size: "4em",
                subtitle_size: "1.7em",
            }
        }
    }
}

/// Logo, company name, tagline and the emergency call button.
#[component]
pub fn HomepageHeading(#[prop(optional)] mobile: bool) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let scale = HeadingScale::for_presentation(mobile);
    let logo = config.asset(images::LOGO_ONLY);

    view! {
        <div class="container container-text heading-container fade-in">
            <img
                class="image image-small image-centered"
                src=logo
                alt=COMPANY
                style=format!("margin-bottom: 0; margin-top: {};", scale.logo_margin_top)
            />
            <h1
                class="header"
                style=format!("font-size: {}; font-weight: normal; margin: 0;", scale.title_size)
            >
                {COMPANY}
            </h1>
            <h2
                class="header"
                style=format!("font-size: {}; font-weight: normal; margin-top: 0;", scale.subtitle_size)
            >
                {TAGLINE}
            </h2>
            <a class="button button-facebook button-animated-fade" href=PHONE_HREF>
                <span class="button-content visible">
                    <Icon path=ICON_PHONE size="16" />
                    "24/7 Emergency Call Support"
                </span>
                <span class="button-content hidden">"Get in touch"</span>
            </a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_heading_is_smaller() {
        let mobile = HeadingScale::for_presentation(true);
        let desktop = HeadingScale::for_presentation(false);
        assert_eq!(mobile.title_size, "2em");
        assert_eq!(desktop.title_size, "4em");
        assert_ne!(mobile.logo_margin_top, desktop.logo_margin_top);
    }
}
