//! Responsive layout selection.
//!
//! The page has two mutually exclusive presentations of the same content.
//! Which one is mounted depends only on the viewport width compared to
//! [`LayoutConfig::desktop_min_width`]; see [`presentation_for`].

use crate::config::LayoutConfig;
use crate::viewport::{Subscription, ViewportEvent, ViewportEventKind, ViewportSource};
use std::fmt;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presentation {
    /// Off-canvas navigation, compact hero.
    Mobile,
    /// Pin-on-scroll navigation, full-height hero.
    Desktop,
}

impl Presentation {
    pub fn as_str(self) -> &'static str {
        match self {
            Presentation::Mobile => "mobile",
            Presentation::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Width to lay out for, substituting the fallback when unmeasurable.
pub fn effective_width(width: Option<u32>, layout: &LayoutConfig) -> u32 {
    width.unwrap_or(layout.fallback_width)
}

/// Below the breakpoint is mobile, at or above it is desktop.
pub fn presentation_for(width: u32, layout: &LayoutConfig) -> Presentation {
    if width < layout.desktop_min_width {
        Presentation::Mobile
    } else {
        Presentation::Desktop
    }
}

/// Presentation for whatever the source currently reports.
pub fn resolve(source: &dyn ViewportSource, layout: &LayoutConfig) -> Presentation {
    presentation_for(effective_width(source.width(), layout), layout)
}

/// Keeps the presentation choice live across resizes.
///
/// `on_change` runs once per breakpoint crossing and never for a resize that
/// stays on the same side. Dropping the selector removes its resize listener.
pub struct LayoutSelector {
    current: Arc<Mutex<Presentation>>,
    _subscription: Subscription,
}

impl LayoutSelector {
    pub fn mount<F>(source: Arc<dyn ViewportSource>, layout: LayoutConfig, on_change: F) -> Self
    where
        F: Fn(Presentation) + Send + Sync + 'static,
    {
        let initial = resolve(source.as_ref(), &layout);
        tracing::debug!(presentation = %initial, width = ?source.width(), "layout mounted");

        let current = Arc::new(Mutex::new(initial));
        let shared = Arc::clone(&current);
        let subscription = Subscription::new(
            source,
            ViewportEventKind::Resize,
            Arc::new(move |event| {
                let ViewportEvent::Resized { width } = event else {
                    return;
                };
                let next = presentation_for(effective_width(width, &layout), &layout);
                let changed = {
                    let mut current = shared.lock().unwrap_or_else(|p| p.into_inner());
                    let changed = *current != next;
                    *current = next;
                    changed
                };
                if changed {
                    tracing::debug!(presentation = %next, ?width, "breakpoint crossed");
                    on_change(next);
                }
            }),
        );

        LayoutSelector {
            current,
            _subscription: subscription,
        }
    }

    pub fn current(&self) -> Presentation {
        *self.current.lock().unwrap_or_else(|p| p.into_inner())
    }
}

impl fmt::Debug for LayoutSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutSelector")
            .field("current", &self.current())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::{Headless, SyntheticViewport};

    fn recorder() -> (Arc<Mutex<Vec<Presentation>>>, impl Fn(Presentation) + Send + Sync) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        (log, move |p| sink.lock().unwrap().push(p))
    }

    #[test]
    fn presentation_names_match_root_classes() {
        assert_eq!(Presentation::Mobile.to_string(), "mobile");
        assert_eq!(Presentation::Desktop.as_str(), "desktop");
        assert_ne!(Presentation::Mobile, Presentation::Desktop);
    }

    #[test]
    fn widths_below_breakpoint_are_mobile() {
        let layout = LayoutConfig::default();
        for width in [0, 320, 480, 767] {
            assert_eq!(presentation_for(width, &layout), Presentation::Mobile, "{width}");
        }
    }

    #[test]
    fn widths_at_or_above_breakpoint_are_desktop() {
        let layout = LayoutConfig::default();
        for width in [768, 769, 1024, 1920, u32::MAX] {
            assert_eq!(presentation_for(width, &layout), Presentation::Desktop, "{width}");
        }
    }

    #[test]
    fn breakpoint_follows_config() {
        let layout = LayoutConfig {
            desktop_min_width: 1000,
            ..Default::default()
        };
        assert_eq!(presentation_for(999, &layout), Presentation::Mobile);
        assert_eq!(presentation_for(1000, &layout), Presentation::Desktop);
    }

    #[test]
    fn unmeasurable_width_uses_fallback() {
        let layout = LayoutConfig::default();
        assert_eq!(resolve(&Headless, &layout), Presentation::Desktop);

        let narrow_fallback = LayoutConfig {
            fallback_width: 360,
            ..Default::default()
        };
        assert_eq!(resolve(&Headless, &narrow_fallback), Presentation::Mobile);
    }

    #[test]
    fn switches_once_per_crossing() {
        let viewport = Arc::new(SyntheticViewport::with_width(1024));
        let (log, on_change) = recorder();
        let selector = LayoutSelector::mount(viewport.clone(), LayoutConfig::default(), on_change);
        assert_eq!(selector.current(), Presentation::Desktop);

        for width in [900, 800, 600, 500, 700, 768, 1280, 1440] {
            viewport.resize(Some(width));
        }

        assert_eq!(
            *log.lock().unwrap(),
            vec![Presentation::Mobile, Presentation::Desktop]
        );
        assert_eq!(selector.current(), Presentation::Desktop);
    }

    #[test]
    fn resize_to_unmeasurable_uses_fallback() {
        let viewport = Arc::new(SyntheticViewport::with_width(400));
        let (log, on_change) = recorder();
        let selector = LayoutSelector::mount(viewport.clone(), LayoutConfig::default(), on_change);
        assert_eq!(selector.current(), Presentation::Mobile);

        viewport.resize(None);

        assert_eq!(*log.lock().unwrap(), vec![Presentation::Desktop]);
    }

    #[test]
    fn dropping_selector_deregisters_listener() {
        let viewport = Arc::new(SyntheticViewport::with_width(1024));
        let (log, on_change) = recorder();
        let selector = LayoutSelector::mount(viewport.clone(), LayoutConfig::default(), on_change);
        assert_eq!(viewport.listener_count(ViewportEventKind::Resize), 1);

        drop(selector);
        viewport.resize(Some(320));

        assert_eq!(viewport.listener_count(ViewportEventKind::Resize), 0);
        assert!(log.lock().unwrap().is_empty());
    }
}
