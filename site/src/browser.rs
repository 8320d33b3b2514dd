//! `window`-backed [`ViewportSource`] for the browser build.
//!
//! DOM callbacks are `wasm-bindgen` closures kept in a thread-local registry
//! keyed by [`ListenerId`], so removing a listener both detaches it from
//! `window` and frees the closure.

use crate::viewport::{Listener, ListenerId, ViewportEvent, ViewportEventKind, ViewportSource};
use std::cell::RefCell;
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

type DomCallback = Closure<dyn FnMut(web_sys::Event)>;

thread_local! {
    static REGISTERED: RefCell<HashMap<ListenerId, (ViewportEventKind, DomCallback)>> =
        RefCell::new(HashMap::new());
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

fn inner_width() -> Option<u32> {
    let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
    (width.is_finite() && width >= 0.0).then_some(width as u32)
}

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

impl ViewportSource for BrowserViewport {
    fn width(&self) -> Option<u32> {
        inner_width()
    }

    fn scroll_offset(&self) -> f64 {
        scroll_y()
    }

    fn element_bottom(&self, id: &str) -> Option<f64> {
        let element = web_sys::window()?.document()?.get_element_by_id(id)?;
        Some(element.get_bounding_client_rect().bottom() + scroll_y())
    }

    fn add_listener(&self, kind: ViewportEventKind, listener: Listener) -> ListenerId {
        let id = ListenerId::next();
        let Some(window) = web_sys::window() else {
            return id;
        };

        let callback = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let event = match kind {
                ViewportEventKind::Resize => ViewportEvent::Resized {
                    width: inner_width(),
                },
                ViewportEventKind::Scroll => ViewportEvent::Scrolled { offset: scroll_y() },
            };
            listener(event);
        }) as Box<dyn FnMut(web_sys::Event)>);

        if let Err(err) = window
            .add_event_listener_with_callback(kind.dom_name(), callback.as_ref().unchecked_ref())
        {
            tracing::warn!(?err, event = kind.dom_name(), "failed to attach window listener");
            return id;
        }

        REGISTERED.with(|registry| registry.borrow_mut().insert(id, (kind, callback)));
        id
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        let Some((kind, callback)) = REGISTERED.with(|registry| registry.borrow_mut().remove(&id))
        else {
            return false;
        };
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                kind.dom_name(),
                callback.as_ref().unchecked_ref(),
            );
        }
        true
    }
}
