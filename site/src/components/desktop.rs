//! Desktop presentation: full-height hero with a menu that pins to the top
//! once the hero has scrolled out of view.

use super::{HomepageHeading, Icon, ICON_ENVELOPE};
use crate::config::SiteConfig;
use crate::content::{COMPANY, EMAIL, MAILTO_HREF, images};
use crate::nav::{PinController, PinState, Section};
use crate::viewport::Viewport;
use leptos::prelude::*;

#[component]
pub fn DesktopContainer(children: Children) -> impl IntoView {
    let viewport = use_context::<Viewport>().unwrap_or_else(Viewport::headless);
    let config = use_context::<SiteConfig>().unwrap_or_default();

    let (pinned, set_pinned) = signal(PinState::Unpinned);
    let (active, set_active) = signal(Section::Home);

    let controller = PinController::mount(
        viewport.source(),
        Section::Home.id(),
        f64::from(config.layout.hero_height),
        move |state| set_pinned.set(state),
    );
    set_pinned.set(controller.state());
    on_cleanup(move || drop(controller));

    let hero_style = format!(
        "min-height: {}px; padding: 1em 0em; background-image: url({}); background-size: cover;",
        config.layout.hero_height,
        config.asset(images::COVER),
    );
    let logo = config.asset(images::LOGO_TRANSPARENT);

    let entries = Section::ALL
        .into_iter()
        .map(move |section| {
            view! {
                <a
                    href=section.anchor()
                    class=move || if active.get() == section { "menu-item active" } else { "menu-item" }
                    on:click=move |_| set_active.set(section)
                >
                    {section.label()}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="presentation presentation-desktop">
            <section
                id=Section::Home.id()
                class="segment segment-inverted segment-vertical hero hero-desktop"
                style=hero_style
            >
                <nav
                    class=move || pinned.get().menu_class()
                    data-pinned=move || pinned.get().is_pinned().to_string()
                >
                    <div class="container menu-container">
                        <span class="menu-item">
                            <img class="image image-mini" src=logo alt=COMPANY />
                        </span>
                        {entries}
                        <span class="menu-item menu-right">
                            <a class="button button-labeled" href=MAILTO_HREF>
                                <Icon path=ICON_ENVELOPE size="16" />
                                {EMAIL}
                            </a>
                        </span>
                    </div>
                </nav>
                <HomepageHeading />
            </section>
            {children()}
        </div>
    }
}
