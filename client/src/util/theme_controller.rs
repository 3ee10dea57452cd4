//! Theme preference controller.
//!
//! Owns the user's light/dark/system preference, persists it under
//! `STORAGE_KEY`, and keeps the render target in sync with the effective
//! theme. While the preference is `System` it holds exactly one OS
//! color-scheme subscription; the subscription is dropped as soon as the
//! preference moves away from `System` or the controller itself is dropped.
//!
//! TRADE-OFFS
//! ==========
//! Storage failures are logged and otherwise ignored: the preference still
//! takes effect for the current session, it just won't survive a reload.

#[cfg(test)]
#[path = "theme_controller_test.rs"]
mod theme_controller_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::theme::{EffectiveTheme, ThemePreference, ThemeState};
use crate::util::storage::KeyValueStore;
use crate::util::theme_ports::{ColorSchemeSignal, RenderTarget, Subscription};

/// Durable storage key holding `"light" | "dark" | "system"`.
pub const STORAGE_KEY: &str = "atrium_theme";

type ChangeHook = Rc<dyn Fn(ThemeState)>;

struct Inner {
    preference: ThemePreference,
    effective: EffectiveTheme,
    store: Box<dyn KeyValueStore>,
    target: Box<dyn RenderTarget>,
    signal: Rc<dyn ColorSchemeSignal>,
    subscription: Option<Subscription>,
    on_change: Option<ChangeHook>,
}

/// Single authority for the theme preference.
///
/// Not `Send`: OS callbacks and the UI share state through `Rc`.
pub struct ThemeController {
    inner: Rc<RefCell<Inner>>,
}

impl ThemeController {
    /// Read the persisted preference (falling back to `System`), apply the
    /// resulting theme, and subscribe to the OS signal if needed.
    pub fn new(
        store: impl KeyValueStore + 'static,
        target: impl RenderTarget + 'static,
        signal: impl ColorSchemeSignal + 'static,
    ) -> Self {
        let preference = load_preference(&store);
        let inner = Inner {
            preference,
            effective: preference.resolve(signal.prefers_dark()),
            store: Box::new(store),
            target: Box::new(target),
            signal: Rc::new(signal),
            subscription: None,
            on_change: None,
        };
        let controller = Self { inner: Rc::new(RefCell::new(inner)) };
        controller.sync_subscription();
        controller.refresh();
        controller
    }

    /// Controller wired to `localStorage`, `<html>` and `matchMedia`.
    #[cfg(feature = "hydrate")]
    pub fn browser() -> Self {
        use crate::util::storage::LocalStorageStore;
        use crate::util::theme_ports::{DocumentRenderTarget, MediaQuerySignal};

        Self::new(LocalStorageStore, DocumentRenderTarget, MediaQuerySignal::new())
    }

    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.inner.borrow().preference
    }

    #[must_use]
    pub fn effective(&self) -> EffectiveTheme {
        self.inner.borrow().effective
    }

    #[must_use]
    pub fn state(&self) -> ThemeState {
        let inner = self.inner.borrow();
        ThemeState { preference: inner.preference, effective: inner.effective }
    }

    /// Register the observer called after every theme application.
    /// Replaces any previous observer.
    pub fn on_change(&self, hook: impl Fn(ThemeState) + 'static) {
        self.inner.borrow_mut().on_change = Some(Rc::new(hook));
    }

    /// Persist and apply `preference`.
    pub fn set_preference(&self, preference: ThemePreference) {
        let saved = {
            let mut inner = self.inner.borrow_mut();
            inner.preference = preference;
            inner.store.save(STORAGE_KEY, preference.as_str())
        };
        if let Err(err) = saved {
            log::warn!("theme preference kept in memory only: {err}");
        }
        self.sync_subscription();
        self.refresh();
    }

    /// Advance along `Light -> Dark -> System -> Light`.
    pub fn toggle(&self) {
        let next = self.preference().next();
        self.set_preference(next);
    }

    /// Whether an OS color-scheme subscription is currently held.
    #[must_use]
    pub fn is_following_system(&self) -> bool {
        self.inner.borrow().subscription.is_some()
    }

    fn refresh(&self) {
        let prefers_dark = self.inner.borrow().signal.prefers_dark();
        apply(&self.inner, prefers_dark);
    }

    fn sync_subscription(&self) {
        let (wants, holds, signal) = {
            let inner = self.inner.borrow();
            (
                inner.preference == ThemePreference::System,
                inner.subscription.is_some(),
                Rc::clone(&inner.signal),
            )
        };
        if wants && !holds {
            let weak = Rc::downgrade(&self.inner);
            let subscription = signal.subscribe(Box::new(move |prefers_dark| {
                if let Some(inner) = weak.upgrade() {
                    on_os_change(&inner, prefers_dark);
                }
            }));
            self.inner.borrow_mut().subscription = Some(subscription);
        } else if !wants && holds {
            let released = self.inner.borrow_mut().subscription.take();
            drop(released);
        }
    }
}

fn load_preference(store: &dyn KeyValueStore) -> ThemePreference {
    match store.load(STORAGE_KEY) {
        Ok(Some(raw)) => ThemePreference::parse(&raw).unwrap_or_else(|| {
            log::warn!("ignoring unrecognized stored theme preference: {raw:?}");
            ThemePreference::default()
        }),
        Ok(None) => ThemePreference::default(),
        Err(err) => {
            log::warn!("theme preference unreadable, following system: {err}");
            ThemePreference::default()
        }
    }
}

fn on_os_change(inner: &Rc<RefCell<Inner>>, prefers_dark: bool) {
    if inner.borrow().preference != ThemePreference::System {
        return;
    }
    apply(inner, prefers_dark);
}

/// Recompute the effective theme, write it to the render target, then notify
/// the observer outside the borrow so it may read the controller.
fn apply(inner: &Rc<RefCell<Inner>>, prefers_dark: bool) {
    let (state, hook) = {
        let mut inner = inner.borrow_mut();
        let effective = inner.preference.resolve(prefers_dark);
        inner.effective = effective;
        inner.target.apply(effective);
        (ThemeState { preference: inner.preference, effective }, inner.on_change.clone())
    };
    if let Some(hook) = hook {
        hook(state);
    }
}
