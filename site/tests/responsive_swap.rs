//! Live presentation swaps in a real DOM.
//!
//! ```bash
//! wasm-pack test --headless --firefox site --no-default-features --features csr
//! ```

#![cfg(all(target_arch = "wasm32", feature = "csr"))]

use std::sync::Arc;

use crimestoppers_site::components::ResponsiveContainer;
use crimestoppers_site::viewport::ViewportEventKind;
use crimestoppers_site::{SiteConfig, SyntheticViewport, Viewport};
use leptos::prelude::*;
use leptos::task::Executor;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn host() -> web_sys::HtmlElement {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("document");
    let host = document.create_element("div").expect("create host");
    document
        .body()
        .expect("body")
        .append_child(&host)
        .expect("attach host");
    host.unchecked_into()
}

fn count(host: &web_sys::HtmlElement, selector: &str) -> u32 {
    host.query_selector_all(selector).expect("query").length()
}

#[track_caller]
fn assert_mounted(host: &web_sys::HtmlElement, viewport: &SyntheticViewport, presentation: &str) {
    let other = if presentation == "desktop" { "mobile" } else { "desktop" };
    assert_eq!(count(host, &format!(".presentation-{presentation}")), 1);
    assert_eq!(count(host, &format!(".presentation-{other}")), 0);
    assert_eq!(count(host, ".presentation"), 1);
    assert_eq!(count(host, ".shared"), 1);
    assert_eq!(viewport.listener_count(ViewportEventKind::Scroll), 1);
    assert_eq!(viewport.listener_count(ViewportEventKind::Resize), 1);
}

#[wasm_bindgen_test]
async fn resizing_swaps_one_presentation_at_a_time() {
    let _ = Executor::init_wasm_bindgen();
    let viewport = Arc::new(SyntheticViewport::with_width(1280));
    let host = host();

    let source = Arc::clone(&viewport);
    let handle = leptos::mount::mount_to(host.clone(), move || {
        provide_context(SiteConfig::default());
        provide_context(Viewport::new(source));
        view! {
            <ResponsiveContainer>
                <p class="shared">"shared"</p>
            </ResponsiveContainer>
        }
    });
    Executor::tick().await;
    assert_mounted(&host, &viewport, "desktop");

    viewport.resize(Some(375));
    Executor::tick().await;
    assert_mounted(&host, &viewport, "mobile");

    viewport.resize(Some(1280));
    Executor::tick().await;
    assert_mounted(&host, &viewport, "desktop");

    drop(handle);
    assert_eq!(viewport.listener_count(ViewportEventKind::Scroll), 0);
    assert_eq!(viewport.listener_count(ViewportEventKind::Resize), 0);
    host.remove();
}

#[wasm_bindgen_test]
async fn resizing_within_a_side_keeps_the_mounted_presentation() {
    let _ = Executor::init_wasm_bindgen();
    let viewport = Arc::new(SyntheticViewport::with_width(375));
    let host = host();

    let source = Arc::clone(&viewport);
    let handle = leptos::mount::mount_to(host.clone(), move || {
        provide_context(SiteConfig::default());
        provide_context(Viewport::new(source));
        view! {
            <ResponsiveContainer>
                <p class="shared">"shared"</p>
            </ResponsiveContainer>
        }
    });
    Executor::tick().await;
    let menu_toggle = host.query_selector(".menu-toggle").expect("query");
    assert!(menu_toggle.is_some());

    viewport.resize(Some(500));
    Executor::tick().await;
    assert_mounted(&host, &viewport, "mobile");
    let same_toggle = host.query_selector(".menu-toggle").expect("query");
    assert_eq!(menu_toggle, same_toggle);

    drop(handle);
    assert_eq!(viewport.listener_count(ViewportEventKind::Scroll), 0);
    host.remove();
}
