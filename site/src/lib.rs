//! # crimestoppers-site
//!
//! The CrimeStoppers homepage as a tree of [Leptos](https://leptos.dev/)
//! components.
//!
//! The page is static content except for its navigation: viewports at or
//! above the configured breakpoint get the desktop presentation (a menu that
//! pins to the top once the hero scrolls away), narrower ones get the mobile
//! presentation (an off-canvas menu).
//!
//! ## Builds
//!
//! - `ssr` (default): [`render_homepage`] produces a complete HTML document.
//!   Without a real display surface the layout uses the configured fallback
//!   width.
//! - `csr`: `mount_homepage` mounts the page in the browser, backed by the
//!   real `window` through `browser::BrowserViewport`.
//!
//! ## Architecture
//!
//! - [`viewport`] - the injected viewport abstraction and listener guards
//! - [`layout`] - breakpoint selection kept live across resizes
//! - [`nav`] - pin-on-scroll and off-canvas menu state
//! - [`components`] - Leptos UI components
//! - [`content`] - static copy
//! - [`config`] - `site.toml` support
//! - [`styles`] - CSS

#![recursion_limit = "256"]

pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod layout;
pub mod nav;
pub mod styles;
pub mod viewport;

#[cfg(feature = "csr")]
pub mod browser;
#[cfg(feature = "csr")]
mod console;

pub use config::{LayoutConfig, SiteConfig};
pub use error::SiteError;
pub use layout::Presentation;
pub use viewport::{Headless, SyntheticViewport, Viewport, ViewportSource};

#[cfg(feature = "ssr")]
use std::sync::Arc;

/// Render the complete homepage document.
///
/// Components run under a fresh reactive owner with `config` and a
/// [`Viewport`] over `source` in context. The owner is cleaned up before
/// returning, which detaches every listener the page registered on `source`.
///
/// ```rust
/// use std::sync::Arc;
/// use crimestoppers_site::{render_homepage, Headless, SiteConfig};
///
/// let html = render_homepage(&SiteConfig::default(), Arc::new(Headless));
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_homepage(config: &SiteConfig, source: Arc<dyn ViewportSource>) -> String {
    use components::HomepageDocument;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    let owner = Owner::new();
    let html = owner.with(|| {
        provide_context(config.clone());
        provide_context(Viewport::new(source));
        let title = config.title.clone();
        view! { <HomepageDocument title=title /> }.to_html()
    });
    owner.cleanup();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Mount the homepage into `<body>` (browser build).
#[cfg(feature = "csr")]
pub fn mount_homepage() {
    use components::HomepageLayout;
    use leptos::prelude::*;
    use std::sync::Arc;

    console_error_panic_hook::set_once();
    console::init_console_tracing();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mounting homepage");

    leptos::mount::mount_to_body(|| {
        let config = SiteConfig::default();
        let css = styles::site_css(&config.layout);
        provide_context(config);
        provide_context(Viewport::new(Arc::new(browser::BrowserViewport)));
        view! {
            <style>{css}</style>
            <HomepageLayout />
        }
    });
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::viewport::ViewportEventKind;

    fn render_at(width: Option<u32>) -> String {
        render_homepage(&SiteConfig::default(), Arc::new(SyntheticViewport::new(width)))
    }

    #[test]
    fn renders_full_document() {
        let html = render_homepage(&SiteConfig::default(), Arc::new(Headless));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>"));
        assert!(html.contains("CrimeStoppers"));
        assert!(html.contains("Trusted. Everyday. Everywhere."));
    }

    #[test]
    fn headless_render_uses_fallback_width() {
        let html = render_homepage(&SiteConfig::default(), Arc::new(Headless));

        assert!(html.contains("presentation-desktop"));
        assert!(!html.contains("presentation-mobile"));
    }

    #[test]
    fn narrow_viewport_renders_mobile_only() {
        let html = render_at(Some(375));

        assert!(html.contains("presentation-mobile"));
        assert!(!html.contains("presentation-desktop"));
        assert!(html.contains("Email Us"));
        assert!(html.contains("Open menu"));
    }

    #[test]
    fn wide_viewport_renders_desktop_only() {
        let html = render_at(Some(1280));

        assert!(html.contains("presentation-desktop"));
        assert!(!html.contains("presentation-mobile"));
        assert!(html.contains(r#"data-pinned="false""#));
    }

    #[test]
    fn breakpoint_width_is_desktop() {
        assert!(render_at(Some(768)).contains("presentation-desktop"));
        assert!(render_at(Some(767)).contains("presentation-mobile"));
    }

    #[test]
    fn both_presentations_render_shared_content() {
        for width in [375, 1280] {
            let html = render_at(Some(width));
            assert!(html.contains("We guard. We protect. We secure."), "{width}");
            assert!(html.contains("Trained Personnel"), "{width}");
            assert!(html.contains("Secure Goods-In-Transit"), "{width}");
            assert!(html.contains("Contact Us"), "{width}");
            assert!(html.contains("Hardlife Chipika, CEO"), "{width}");
        }
    }

    #[test]
    fn contact_form_has_no_action() {
        let html = render_at(Some(1280));

        assert!(html.contains("form-input-control-first-name"));
        assert!(html.contains("form-select-control-gender"));
        assert!(html.contains("form-textarea-control-opinion"));
        assert!(html.contains("Send Mail"));
        assert!(!html.contains("action="));
    }

    #[test]
    fn desktop_starts_pinned_when_scrolled_past_hero() {
        let viewport = SyntheticViewport::with_width(1280);
        viewport.scroll_to(2000.0);
        let html = render_homepage(&SiteConfig::default(), Arc::new(viewport));

        assert!(html.contains(r#"data-pinned="true""#));
    }

    #[test]
    fn narrow_screen_css_follows_configured_breakpoint() {
        let mut config = SiteConfig::default();
        config.layout.desktop_min_width = 992;
        let html = render_homepage(&config, Arc::new(SyntheticViewport::with_width(900)));

        assert!(html.contains("presentation-mobile"));
        assert!(html.contains("(max-width: 991px)"));
        assert!(!html.contains("(max-width: 767px)"));
    }

    #[test]
    fn asset_base_is_applied() {
        let config = SiteConfig {
            asset_base: "/static/img".into(),
            ..Default::default()
        };
        let html = render_homepage(&config, Arc::new(Headless));

        assert!(html.contains("/static/img/logoOnly.png"));
        assert!(html.contains("/static/img/cctv.jpg"));
    }

    #[test]
    fn render_detaches_all_listeners() {
        for width in [375, 1280] {
            let viewport = Arc::new(SyntheticViewport::with_width(width));
            let _ = render_homepage(&SiteConfig::default(), viewport.clone());

            assert_eq!(viewport.listener_count(ViewportEventKind::Resize), 0, "{width}");
            assert_eq!(viewport.listener_count(ViewportEventKind::Scroll), 0, "{width}");
        }
    }
}
