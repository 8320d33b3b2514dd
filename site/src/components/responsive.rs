//! Mounts exactly one of the two presentations for the current width.

use super::{DesktopContainer, MobileContainer};
use crate::config::SiteConfig;
use crate::layout::{self, LayoutSelector, Presentation};
use crate::viewport::Viewport;
use leptos::prelude::*;

/// Chooses the desktop or mobile presentation from the viewport width and
/// keeps the choice live across resizes. Both receive the same `children`.
#[component]
pub fn ResponsiveContainer(children: ChildrenFn) -> impl IntoView {
    let viewport = use_context::<Viewport>().unwrap_or_else(Viewport::headless);
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let source = viewport.source();

    let (presentation, set_presentation) =
        signal(layout::resolve(source.as_ref(), &config.layout));
    let selector = LayoutSelector::mount(source, config.layout, move |next| {
        set_presentation.set(next);
    });
    on_cleanup(move || drop(selector));

    view! {
        <div class="responsive-root" data-presentation=move || presentation.get().as_str()>
            {move || {
                let children = children.clone();
                match presentation.get() {
                    Presentation::Desktop => {
                        view! { <DesktopContainer>{children()}</DesktopContainer> }.into_any()
                    }
                    Presentation::Mobile => {
                        view! { <MobileContainer>{children()}</MobileContainer> }.into_any()
                    }
                }
            }}
        </div>
    }
}
