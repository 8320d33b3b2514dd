//! Navigation state for both presentations.
//!
//! Desktop: [`PinMachine`] decides whether the menu sits inline in the hero
//! or is pinned to the top of the viewport, driven by scroll events through
//! [`PinController`]. The highlighted entry is a plain [`Section`].
//!
//! Mobile: [`OffCanvasMenu`] tracks the slide-in panel; [`ScrollTrace`]
//! observes scrolling for diagnostics.

use crate::viewport::{Subscription, ViewportEvent, ViewportEventKind, ViewportSource};
use std::fmt;
use std::sync::{Arc, Mutex};

/// Navigation anchors, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Company,
    Services,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Company,
        Section::Services,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Company => "Company",
            Section::Services => "Services",
            Section::Contact => "Contact",
        }
    }

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "#Home",
            Section::Company => "#Company",
            Section::Services => "#Services",
            Section::Contact => "#Contact",
        }
    }

    pub fn label(self) -> &'static str {
        self.id()
    }
}

/// Whether the desktop menu is inline in the hero or fixed to the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinState {
    #[default]
    Unpinned,
    Pinned,
}

impl PinState {
    pub fn is_pinned(self) -> bool {
        self == PinState::Pinned
    }

    /// CSS classes for the menu bar.
    pub fn menu_class(self) -> &'static str {
        match self {
            PinState::Unpinned => "menu menu-large menu-inverted menu-secondary",
            PinState::Pinned => "menu menu-large menu-fixed-top",
        }
    }
}

impl fmt::Display for PinState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinState::Unpinned => f.write_str("unpinned"),
            PinState::Pinned => f.write_str("pinned"),
        }
    }
}

/// Two-state pin-on-scroll machine.
///
/// The hero's lower edge sits at `hero_bottom - scroll_offset` in viewport
/// coordinates. The menu is pinned while that edge is above the viewport's
/// top edge (strictly negative).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PinMachine {
    state: PinState,
}

impl PinMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PinState {
        self.state
    }

    /// Feed a scroll position. Returns the new state on a transition.
    pub fn observe(&mut self, scroll_offset: f64, hero_bottom: f64) -> Option<PinState> {
        let bottom_passed = hero_bottom - scroll_offset < 0.0;
        let next = if bottom_passed {
            PinState::Pinned
        } else {
            PinState::Unpinned
        };
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }
}

/// Drives a [`PinMachine`] from a viewport's scroll events.
///
/// The hero element is re-measured on every scroll so that content reflow is
/// picked up; `fallback_bottom` is used while it cannot be measured.
pub struct PinController {
    machine: Arc<Mutex<PinMachine>>,
    _subscription: Subscription,
}

impl PinController {
    pub fn mount<F>(
        source: Arc<dyn ViewportSource>,
        hero_id: &'static str,
        fallback_bottom: f64,
        on_change: F,
    ) -> Self
    where
        F: Fn(PinState) + Send + Sync + 'static,
    {
        let machine = Arc::new(Mutex::new(PinMachine::new()));
        let shared = Arc::clone(&machine);
        let measure = Arc::clone(&source);

        // A page restored mid-scroll starts below the hero.
        let initial = {
            let bottom = measure.element_bottom(hero_id).unwrap_or(fallback_bottom);
            let mut machine = machine.lock().unwrap_or_else(|p| p.into_inner());
            machine.observe(source.scroll_offset(), bottom);
            machine.state()
        };
        tracing::debug!(state = %initial, hero_id, "pin controller mounted");

        let subscription = Subscription::new(
            source,
            ViewportEventKind::Scroll,
            Arc::new(move |event| {
                let ViewportEvent::Scrolled { offset } = event else {
                    return;
                };
                let bottom = measure.element_bottom(hero_id).unwrap_or(fallback_bottom);
                let transition = shared
                    .lock()
                    .unwrap_or_else(|p| p.into_inner())
                    .observe(offset, bottom);
                if let Some(state) = transition {
                    tracing::debug!(%state, offset, bottom, "navigation pin changed");
                    on_change(state);
                }
            }),
        );

        PinController {
            machine,
            _subscription: subscription,
        }
    }

    pub fn state(&self) -> PinState {
        self.machine.lock().unwrap_or_else(|p| p.into_inner()).state()
    }
}

impl fmt::Debug for PinController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinController")
            .field("state", &self.state())
            .finish()
    }
}

/// Mobile slide-in menu. Closed initially.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OffCanvasMenu {
    open: bool,
}

impl OffCanvasMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger button. Opens; an open menu stays open.
    pub fn toggle_activated(&mut self) -> bool {
        self.set(true)
    }

    /// Any menu entry was chosen.
    pub fn entry_selected(&mut self) -> bool {
        self.set(false)
    }

    /// Click outside the panel.
    pub fn dismissed(&mut self) -> bool {
        self.set(false)
    }

    fn set(&mut self, open: bool) -> bool {
        let changed = self.open != open;
        self.open = open;
        changed
    }

    pub fn pusher_class(&self) -> &'static str {
        if self.open { "pusher dimmed" } else { "pusher" }
    }

    pub fn sidebar_class(&self) -> &'static str {
        if self.open {
            "sidebar menu menu-inverted menu-vertical visible"
        } else {
            "sidebar menu menu-inverted menu-vertical"
        }
    }
}

/// Scroll observer held by the mobile presentation for its mounted lifetime.
pub struct ScrollTrace {
    _subscription: Subscription,
}

impl ScrollTrace {
    pub fn mount(source: Arc<dyn ViewportSource>) -> Self {
        let subscription = Subscription::new(
            source,
            ViewportEventKind::Scroll,
            Arc::new(|event| {
                if let ViewportEvent::Scrolled { offset } = event {
                    tracing::trace!(offset, "mobile scroll");
                }
            }),
        );
        ScrollTrace {
            _subscription: subscription,
        }
    }
}

impl fmt::Debug for ScrollTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollTrace").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::SyntheticViewport;
    use pretty_assertions::assert_eq;

    fn recorder() -> (Arc<Mutex<Vec<PinState>>>, impl Fn(PinState) + Send + Sync) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        (log, move |s| sink.lock().unwrap().push(s))
    }

    #[test]
    fn section_anchors_match_ids() {
        for section in Section::ALL {
            assert_eq!(section.anchor(), format!("#{}", section.id()));
        }
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn pin_machine_scroll_scenario() {
        let mut machine = PinMachine::new();
        assert_eq!(machine.state(), PinState::Unpinned);

        assert_eq!(machine.observe(0.0, 700.0), None);
        assert_eq!(machine.observe(750.0, 700.0), Some(PinState::Pinned));
        assert_eq!(machine.observe(760.0, 700.0), None);
        assert_eq!(machine.observe(100.0, 700.0), Some(PinState::Unpinned));
        assert_eq!(machine.state(), PinState::Unpinned);
    }

    #[test]
    fn pin_requires_edge_strictly_above_viewport() {
        let mut machine = PinMachine::new();
        assert_eq!(machine.observe(700.0, 700.0), None);
        assert_eq!(machine.observe(700.5, 700.0), Some(PinState::Pinned));
        assert_eq!(machine.observe(700.0, 700.0), Some(PinState::Unpinned));
    }

    #[test]
    fn controller_follows_scroll_events() {
        let viewport = Arc::new(SyntheticViewport::with_width(1280));
        viewport.set_element_bottom("Home", 700.0);
        let (log, on_change) = recorder();
        let controller = PinController::mount(viewport.clone(), "Home", 700.0, on_change);
        assert_eq!(controller.state(), PinState::Unpinned);

        viewport.scroll_to(0.0);
        viewport.scroll_to(750.0);
        assert_eq!(controller.state(), PinState::Pinned);
        viewport.scroll_to(100.0);

        assert_eq!(
            *log.lock().unwrap(),
            vec![PinState::Pinned, PinState::Unpinned]
        );
        assert_eq!(controller.state(), PinState::Unpinned);
    }

    #[test]
    fn controller_uses_fallback_until_hero_measurable() {
        let viewport = Arc::new(SyntheticViewport::with_width(1280));
        let (log, on_change) = recorder();
        let controller = PinController::mount(viewport.clone(), "Home", 700.0, on_change);

        viewport.scroll_to(650.0);
        assert_eq!(controller.state(), PinState::Unpinned);

        // Hero grew after images loaded.
        viewport.set_element_bottom("Home", 900.0);
        viewport.scroll_to(750.0);
        assert_eq!(controller.state(), PinState::Unpinned);
        viewport.scroll_to(901.0);

        assert_eq!(*log.lock().unwrap(), vec![PinState::Pinned]);
    }

    #[test]
    fn controller_starts_pinned_when_mounted_below_hero() {
        let viewport = Arc::new(SyntheticViewport::with_width(1280));
        viewport.scroll_to(1200.0);
        let (log, on_change) = recorder();
        let controller = PinController::mount(viewport.clone(), "Home", 700.0, on_change);

        assert_eq!(controller.state(), PinState::Pinned);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn dropping_controller_deregisters_listener() {
        let viewport = Arc::new(SyntheticViewport::with_width(1280));
        let (log, on_change) = recorder();
        let controller = PinController::mount(viewport.clone(), "Home", 700.0, on_change);
        assert_eq!(viewport.listener_count(ViewportEventKind::Scroll), 1);

        drop(controller);
        viewport.scroll_to(5000.0);

        assert_eq!(viewport.listener_count(ViewportEventKind::Scroll), 0);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn off_canvas_open_then_select_closes() {
        let mut menu = OffCanvasMenu::default();
        assert!(!menu.is_open());

        assert!(menu.toggle_activated());
        assert!(menu.is_open());
        assert_eq!(menu.pusher_class(), "pusher dimmed");

        // Tapping "Services"
        assert!(menu.entry_selected());
        assert!(!menu.is_open());
        assert_eq!(menu.pusher_class(), "pusher");
    }

    #[test]
    fn off_canvas_toggle_is_idempotent() {
        let mut menu = OffCanvasMenu::default();
        assert!(menu.toggle_activated());
        assert!(!menu.toggle_activated());
        assert!(!menu.toggle_activated());
        assert!(menu.is_open());

        assert!(menu.dismissed());
        assert!(!menu.dismissed());
        assert!(!menu.is_open());
    }

    #[test]
    fn repeated_toggle_does_not_add_listeners() {
        let viewport = Arc::new(SyntheticViewport::with_width(375));
        let trace = ScrollTrace::mount(viewport.clone());
        let mut menu = OffCanvasMenu::default();

        for _ in 0..5 {
            menu.toggle_activated();
        }

        assert!(menu.is_open());
        assert_eq!(viewport.listener_count(ViewportEventKind::Scroll), 1);
        drop(trace);
        assert_eq!(viewport.listener_count(ViewportEventKind::Scroll), 0);
    }
}
