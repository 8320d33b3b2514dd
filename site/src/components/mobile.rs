//! Mobile presentation: compact hero, hamburger button and an off-canvas
//! menu that dims the page while open.

use super::{HomepageHeading, Icon, ICON_ENVELOPE, ICON_LIST};
use crate::config::SiteConfig;
use crate::content::{EMAIL, MAILTO_HREF};
use crate::nav::{OffCanvasMenu, ScrollTrace, Section};
use crate::viewport::Viewport;
use leptos::prelude::*;

#[component]
pub fn MobileContainer(children: Children) -> impl IntoView {
    let viewport = use_context::<Viewport>().unwrap_or_else(Viewport::headless);
    let config = use_context::<SiteConfig>().unwrap_or_default();

    let menu = RwSignal::new(OffCanvasMenu::default());
    let trace = ScrollTrace::mount(viewport.source());
    on_cleanup(move || drop(trace));

    let select_entry = move |_| {
        menu.maybe_update(|m| m.entry_selected());
    };
    let hero_style = format!(
        "min-height: {}px; padding: 1em 0em;",
        config.layout.mobile_hero_height
    );

    let entries = Section::ALL
        .into_iter()
        .map(move |section| {
            view! {
                <a
                    href=section.anchor()
                    class=if section == Section::Home { "menu-item active" } else { "menu-item" }
                    on:click=select_entry
                >
                    {section.label()}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="presentation presentation-mobile pushable">
            <nav
                class=move || menu.get().sidebar_class()
                aria-hidden=move || (!menu.get().is_open()).to_string()
            >
                {entries}
                <a class="menu-item" href=MAILTO_HREF on:click=select_entry>
                    <Icon path=ICON_ENVELOPE size="16" />
                    {EMAIL}
                </a>
            </nav>

            <div class=move || menu.get().pusher_class()>
                <Show when=move || menu.get().is_open()>
                    <div
                        class="dimmer"
                        on:click=move |_| {
                            menu.maybe_update(|m| m.dismissed());
                        }
                    ></div>
                </Show>
                <section
                    id=Section::Home.id()
                    class="segment segment-inverted segment-vertical hero hero-mobile"
                    style=hero_style
                >
                    <div class="container">
                        <div class="menu menu-large menu-inverted menu-pointing menu-secondary">
                            <button
                                class="menu-item menu-toggle"
                                aria-label="Open menu"
                                on:click=move |_| {
                                    menu.maybe_update(|m| m.toggle_activated());
                                }
                            >
                                <Icon path=ICON_LIST />
                            </button>
                            <span class="menu-item menu-right">
                                <a class="button button-inverted" href=MAILTO_HREF>
                                    <Icon path=ICON_ENVELOPE size="16" />
                                    "Email Us"
                                </a>
                            </span>
                        </div>
                    </div>
                    <HomepageHeading mobile=true />
                </section>
                {children()}
            </div>
        </div>
    }
}
