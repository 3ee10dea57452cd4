//! Side-effect ports used by the theme controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller never reaches for `window` or `document` itself. It is
//! handed a `RenderTarget` (where the theme marker goes) and a
//! `ColorSchemeSignal` (the OS "prefers dark" media query). Browser
//! implementations are compiled under `hydrate`; the in-memory ones back
//! the tests.
//!
//! LIFECYCLE
//! =========
//! `ColorSchemeSignal::subscribe` returns a `Subscription` guard. Dropping
//! the guard detaches the listener, so a subscription cannot outlive the
//! value that owns it.

#[cfg(test)]
#[path = "theme_ports_test.rs"]
mod theme_ports_test;

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::state::theme::EffectiveTheme;

/// Media query matching an OS-level dark color scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Callback invoked with the new "prefers dark" value.
pub type SchemeListener = Box<dyn Fn(bool)>;

/// Element whose marker classes drive visual theming.
pub trait RenderTarget {
    /// Clear both theme markers, then set the one for `theme`.
    fn apply(&self, theme: EffectiveTheme);
}

/// Subscribable OS "prefers dark" signal.
pub trait ColorSchemeSignal {
    fn prefers_dark(&self) -> bool;

    /// Install `listener` until the returned guard is dropped.
    fn subscribe(&self, listener: SchemeListener) -> Subscription;
}

/// RAII guard for a signal listener.
#[must_use = "dropping a Subscription detaches the listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// A guard with nothing to release, for signals that cannot notify.
    pub fn detached() -> Self {
        Self { release: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("attached", &self.release.is_some()).finish()
    }
}

// =============================================================================
// IN-MEMORY PORTS
// =============================================================================

/// Render target that records its marker set. Clones share state.
#[derive(Clone, Debug, Default)]
pub struct MemoryRenderTarget {
    markers: Rc<RefCell<BTreeSet<&'static str>>>,
    applied: Rc<RefCell<Vec<EffectiveTheme>>>,
}

impl MemoryRenderTarget {
    /// Markers currently set, sorted.
    #[must_use]
    pub fn markers(&self) -> Vec<&'static str> {
        self.markers.borrow().iter().copied().collect()
    }

    /// Every theme applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<EffectiveTheme> {
        self.applied.borrow().clone()
    }
}

impl RenderTarget for MemoryRenderTarget {
    fn apply(&self, theme: EffectiveTheme) {
        let mut markers = self.markers.borrow_mut();
        for marker in EffectiveTheme::MARKERS {
            markers.remove(marker);
        }
        markers.insert(theme.marker());
        self.applied.borrow_mut().push(theme);
    }
}

#[derive(Default)]
struct SignalState {
    prefers_dark: bool,
    next_id: u64,
    listeners: Vec<(u64, Rc<dyn Fn(bool)>)>,
}

/// Settable color-scheme signal. Clones share state.
#[derive(Clone, Default)]
pub struct MemorySchemeSignal {
    state: Rc<RefCell<SignalState>>,
}

impl MemorySchemeSignal {
    #[must_use]
    pub fn new(prefers_dark: bool) -> Self {
        let signal = Self::default();
        signal.state.borrow_mut().prefers_dark = prefers_dark;
        signal
    }

    /// Change the OS value and notify every listener.
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        let listeners: Vec<Rc<dyn Fn(bool)>> = {
            let mut state = self.state.borrow_mut();
            state.prefers_dark = prefers_dark;
            state.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };
        for listener in listeners {
            listener(prefers_dark);
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

impl ColorSchemeSignal for MemorySchemeSignal {
    fn prefers_dark(&self) -> bool {
        self.state.borrow().prefers_dark
    }

    fn subscribe(&self, listener: SchemeListener) -> Subscription {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.push((id, Rc::from(listener)));
            id
        };
        let weak = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }
}

// =============================================================================
// BROWSER PORTS
// =============================================================================

/// The document's `<html>` element class list.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRenderTarget;

#[cfg(feature = "hydrate")]
impl RenderTarget for DocumentRenderTarget {
    fn apply(&self, theme: EffectiveTheme) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let [light, dark] = EffectiveTheme::MARKERS;
        let _ = classes.remove_2(light, dark);
        let _ = classes.add_1(theme.marker());
    }
}

/// `window.matchMedia("(prefers-color-scheme: dark)")`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug, Default)]
pub struct MediaQuerySignal {
    query: Option<web_sys::MediaQueryList>,
}

#[cfg(feature = "hydrate")]
impl MediaQuerySignal {
    #[must_use]
    pub fn new() -> Self {
        let query = web_sys::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten());
        Self { query }
    }
}

#[cfg(feature = "hydrate")]
impl ColorSchemeSignal for MediaQuerySignal {
    fn prefers_dark(&self) -> bool {
        self.query.as_ref().is_some_and(web_sys::MediaQueryList::matches)
    }

    fn subscribe(&self, listener: SchemeListener) -> Subscription {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(query) = self.query.clone() else {
            return Subscription::detached();
        };
        let callback = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
            move |event: web_sys::MediaQueryListEvent| listener(event.matches()),
        );
        if query
            .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("color scheme listener could not be attached");
            return Subscription::detached();
        }
        Subscription::new(move || {
            let _ = query.remove_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
        })
    }
}
