//! Viewport access for the responsive layout.
//!
//! Components never touch `window` directly. They read width, scroll offset
//! and element geometry from a [`ViewportSource`] provided through Leptos
//! context as [`Viewport`], and register resize/scroll listeners through it.
//!
//! Three sources ship with the crate:
//!
//! - [`Headless`] - no display surface (server rendering). Width is unknown,
//!   so the layout falls back to the configured default width.
//! - [`SyntheticViewport`] - scriptable width, scroll offset and element
//!   geometry. Used by tests and by the prerender `--width` flag.
//! - `BrowserViewport` (`csr` feature) - the real `window`.
//!
//! Listener lifetime is tied to a [`Subscription`] guard: dropping it removes
//! the listener from the source.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// Which stream a listener observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportEventKind {
    Resize,
    Scroll,
}

impl ViewportEventKind {
    /// DOM event name used when registering on `window`.
    pub fn dom_name(self) -> &'static str {
        match self {
            ViewportEventKind::Resize => "resize",
            ViewportEventKind::Scroll => "scroll",
        }
    }
}

/// A single event delivered to a listener.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    /// Viewport width after the resize, `None` when it cannot be read.
    Resized { width: Option<u32> },
    /// Vertical scroll offset of the document in CSS pixels.
    Scrolled { offset: f64 },
}

impl ViewportEvent {
    pub fn kind(&self) -> ViewportEventKind {
        match self {
            ViewportEvent::Resized { .. } => ViewportEventKind::Resize,
            ViewportEvent::Scrolled { .. } => ViewportEventKind::Scroll,
        }
    }
}

/// Handle identifying a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Allocate a process-unique id.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        ListenerId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

/// Callback invoked for every event of the kind it was registered for.
pub type Listener = Arc<dyn Fn(ViewportEvent) + Send + Sync>;

/// Read access to the viewport plus resize/scroll event registration.
pub trait ViewportSource: Send + Sync {
    /// Current inner width in CSS pixels, `None` without a display surface.
    fn width(&self) -> Option<u32>;

    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Document-space bottom edge of the element with the given id.
    fn element_bottom(&self, id: &str) -> Option<f64>;

    fn add_listener(&self, kind: ViewportEventKind, listener: Listener) -> ListenerId;

    /// Returns `false` when the id was not registered.
    fn remove_listener(&self, id: ListenerId) -> bool;
}

/// Shared handle to the active [`ViewportSource`], stored in Leptos context.
#[derive(Clone)]
pub struct Viewport(Arc<dyn ViewportSource>);

impl Viewport {
    pub fn new(source: Arc<dyn ViewportSource>) -> Self {
        Viewport(source)
    }

    pub fn headless() -> Self {
        Viewport(Arc::new(Headless))
    }

    pub fn source(&self) -> Arc<dyn ViewportSource> {
        Arc::clone(&self.0)
    }
}

impl fmt::Debug for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Viewport")
            .field("width", &self.0.width())
            .finish()
    }
}

/// RAII registration of a listener on a source.
///
/// The listener is removed when the guard is dropped or [`cancel`]led.
///
/// [`cancel`]: Subscription::cancel
pub struct Subscription {
    source: Arc<dyn ViewportSource>,
    id: Option<ListenerId>,
}

impl Subscription {
    pub fn new(
        source: Arc<dyn ViewportSource>,
        kind: ViewportEventKind,
        listener: Listener,
    ) -> Self {
        let id = source.add_listener(kind, listener);
        tracing::debug!(%id, event = kind.dom_name(), "viewport listener added");
        Subscription {
            source,
            id: Some(id),
        }
    }

    pub fn id(&self) -> Option<ListenerId> {
        self.id
    }

    /// Remove the listener now. Calling it twice is a no-op.
    pub fn cancel(&mut self) {
        if let Some(id) = self.id.take() {
            let removed = self.source.remove_listener(id);
            tracing::debug!(%id, removed, "viewport listener removed");
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// Source with no display surface. Never dispatches events.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl ViewportSource for Headless {
    fn width(&self) -> Option<u32> {
        None
    }

    fn scroll_offset(&self) -> f64 {
        0.0
    }

    fn element_bottom(&self, _id: &str) -> Option<f64> {
        None
    }

    fn add_listener(&self, _kind: ViewportEventKind, _listener: Listener) -> ListenerId {
        ListenerId::next()
    }

    fn remove_listener(&self, _id: ListenerId) -> bool {
        false
    }
}

#[derive(Default)]
struct SyntheticState {
    width: Option<u32>,
    scroll: f64,
    elements: HashMap<String, f64>,
    listeners: Vec<(ListenerId, ViewportEventKind, Listener)>,
}

/// Scriptable viewport.
///
/// Listeners are called synchronously from [`resize`](Self::resize) and
/// [`scroll_to`](Self::scroll_to), outside the internal lock, so a listener
/// may query the viewport or (un)register other listeners.
#[derive(Default)]
pub struct SyntheticViewport {
    state: Mutex<SyntheticState>,
}

impl SyntheticViewport {
    pub fn new(width: Option<u32>) -> Self {
        SyntheticViewport {
            state: Mutex::new(SyntheticState {
                width,
                ..Default::default()
            }),
        }
    }

    pub fn with_width(width: u32) -> Self {
        Self::new(Some(width))
    }

    fn lock(&self) -> MutexGuard<'_, SyntheticState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Set the document-space bottom edge reported for an element id.
    pub fn set_element_bottom(&self, id: impl Into<String>, bottom: f64) {
        self.lock().elements.insert(id.into(), bottom);
    }

    pub fn resize(&self, width: Option<u32>) {
        self.lock().width = width;
        self.dispatch(ViewportEvent::Resized { width });
    }

    pub fn scroll_to(&self, offset: f64) {
        self.lock().scroll = offset;
        self.dispatch(ViewportEvent::Scrolled { offset });
    }

    pub fn listener_count(&self, kind: ViewportEventKind) -> usize {
        self.lock()
            .listeners
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .count()
    }

    fn dispatch(&self, event: ViewportEvent) {
        let targets: Vec<Listener> = self
            .lock()
            .listeners
            .iter()
            .filter(|(_, kind, _)| *kind == event.kind())
            .map(|(_, _, listener)| Arc::clone(listener))
            .collect();
        for listener in targets {
            listener(event);
        }
    }
}

impl ViewportSource for SyntheticViewport {
    fn width(&self) -> Option<u32> {
        self.lock().width
    }

    fn scroll_offset(&self) -> f64 {
        self.lock().scroll
    }

    fn element_bottom(&self, id: &str) -> Option<f64> {
        self.lock().elements.get(id).copied()
    }

    fn add_listener(&self, kind: ViewportEventKind, listener: Listener) -> ListenerId {
        let id = ListenerId::next();
        self.lock().listeners.push((id, kind, listener));
        id
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        let mut state = self.lock();
        let before = state.listeners.len();
        state.listeners.retain(|(existing, _, _)| *existing != id);
        state.listeners.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counter() -> (Arc<AtomicUsize>, Listener) {
        let hits = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&hits);
        let listener: Listener = Arc::new(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        (hits, listener)
    }

    #[test]
    fn dispatches_only_matching_kind() {
        let viewport = SyntheticViewport::with_width(1024);
        let (resizes, on_resize) = counter();
        let (scrolls, on_scroll) = counter();
        viewport.add_listener(ViewportEventKind::Resize, on_resize);
        viewport.add_listener(ViewportEventKind::Scroll, on_scroll);

        viewport.resize(Some(800));
        viewport.scroll_to(120.0);
        viewport.scroll_to(240.0);

        assert_eq!(resizes.load(Ordering::SeqCst), 1);
        assert_eq!(scrolls.load(Ordering::SeqCst), 2);
        assert_eq!(viewport.width(), Some(800));
        assert_eq!(viewport.scroll_offset(), 240.0);
    }

    #[test]
    fn dropping_subscription_removes_listener() {
        let viewport = Arc::new(SyntheticViewport::with_width(1024));
        let (hits, listener) = counter();
        let subscription = Subscription::new(viewport.clone(), ViewportEventKind::Resize, listener);
        assert_eq!(viewport.listener_count(ViewportEventKind::Resize), 1);

        drop(subscription);
        viewport.resize(Some(500));

        assert_eq!(viewport.listener_count(ViewportEventKind::Resize), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn cancel_is_idempotent() {
        let viewport = Arc::new(SyntheticViewport::with_width(1024));
        let (_, listener) = counter();
        let mut subscription =
            Subscription::new(viewport.clone(), ViewportEventKind::Scroll, listener);

        subscription.cancel();
        subscription.cancel();

        assert!(subscription.id().is_none());
        assert_eq!(viewport.listener_count(ViewportEventKind::Scroll), 0);
    }

    #[test]
    fn listener_may_reenter_viewport() {
        let viewport = Arc::new(SyntheticViewport::with_width(1024));
        let observed = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&observed);
        let inner = Arc::clone(&viewport);
        viewport.add_listener(
            ViewportEventKind::Resize,
            Arc::new(move |_| {
                *sink.lock().unwrap() = inner.width();
            }),
        );

        viewport.resize(Some(640));

        assert_eq!(*observed.lock().unwrap(), Some(640));
    }

    #[test]
    fn headless_has_no_surface() {
        let headless = Headless;
        assert_eq!(headless.width(), None);
        assert_eq!(headless.element_bottom("Home"), None);
        let (_, listener) = counter();
        let id = headless.add_listener(ViewportEventKind::Scroll, listener);
        assert!(!headless.remove_listener(id));
    }

    #[test]
    fn element_geometry_is_scriptable() {
        let viewport = SyntheticViewport::default();
        assert_eq!(viewport.element_bottom("Home"), None);
        viewport.set_element_bottom("Home", 700.0);
        assert_eq!(viewport.element_bottom("Home"), Some(700.0));
    }
}
