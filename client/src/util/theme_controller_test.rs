use std::cell::Cell;

use super::*;
use crate::util::storage::MemoryStore;
use crate::util::theme_ports::{MemoryRenderTarget, MemorySchemeSignal};

struct Harness {
    store: MemoryStore,
    target: MemoryRenderTarget,
    signal: MemorySchemeSignal,
    controller: ThemeController,
}

fn harness(store: MemoryStore, os_dark: bool) -> Harness {
    let target = MemoryRenderTarget::default();
    let signal = MemorySchemeSignal::new(os_dark);
    let controller = ThemeController::new(store.clone(), target.clone(), signal.clone());
    Harness { store, target, signal, controller }
}

const ALL: [ThemePreference; 3] = [ThemePreference::Light, ThemePreference::Dark, ThemePreference::System];

// =============================================================
// Initialization
// =============================================================

#[test]
fn init_without_stored_value_follows_system() {
    let h = harness(MemoryStore::default(), true);
    assert_eq!(h.controller.preference(), ThemePreference::System);
    assert_eq!(h.controller.effective(), EffectiveTheme::Dark);
    assert_eq!(h.target.markers(), vec!["dark"]);
    assert_eq!(h.signal.listener_count(), 1);
}

#[test]
fn init_with_stored_dark_ignores_os_signal() {
    let h = harness(MemoryStore::default().with_entry(STORAGE_KEY, "dark"), false);
    assert_eq!(h.controller.preference(), ThemePreference::Dark);
    assert_eq!(h.controller.effective(), EffectiveTheme::Dark);
    assert_eq!(h.target.markers(), vec!["dark"]);
    assert_eq!(h.signal.listener_count(), 0);
}

#[test]
fn init_with_garbage_stored_value_falls_back_to_system() {
    let h = harness(MemoryStore::default().with_entry(STORAGE_KEY, "purple"), false);
    assert_eq!(h.controller.preference(), ThemePreference::System);
    assert_eq!(h.controller.effective(), EffectiveTheme::Light);
}

#[test]
fn init_with_unavailable_storage_falls_back_to_system() {
    let h = harness(MemoryStore::unavailable(), true);
    assert_eq!(h.controller.preference(), ThemePreference::System);
    assert_eq!(h.controller.effective(), EffectiveTheme::Dark);
}

// =============================================================
// set_preference / toggle
// =============================================================

#[test]
fn set_preference_round_trips_for_every_value() {
    let h = harness(MemoryStore::default(), false);
    for pref in ALL {
        h.controller.set_preference(pref);
        assert_eq!(h.controller.preference(), pref);
        assert_eq!(h.store.get(STORAGE_KEY).as_deref(), Some(pref.as_str()));
    }
}

#[test]
fn set_preference_applies_effective_theme() {
    let h = harness(MemoryStore::default(), false);
    h.controller.set_preference(ThemePreference::Dark);
    assert_eq!(h.target.markers(), vec!["dark"]);
    h.controller.set_preference(ThemePreference::Light);
    assert_eq!(h.target.markers(), vec!["light"]);
}

#[test]
fn toggle_three_times_returns_to_start() {
    for start in ALL {
        let h = harness(MemoryStore::default().with_entry(STORAGE_KEY, start.as_str()), true);
        h.controller.toggle();
        h.controller.toggle();
        h.controller.toggle();
        assert_eq!(h.controller.preference(), start);
    }
}

#[test]
fn toggle_follows_cycle_order() {
    let h = harness(MemoryStore::default().with_entry(STORAGE_KEY, "light"), false);
    h.controller.toggle();
    assert_eq!(h.controller.preference(), ThemePreference::Dark);
    h.controller.toggle();
    assert_eq!(h.controller.preference(), ThemePreference::System);
    h.controller.toggle();
    assert_eq!(h.controller.preference(), ThemePreference::Light);
}

#[test]
fn storage_write_failure_still_applies_in_memory() {
    let h = harness(MemoryStore::default(), false);
    h.store.set_available(false);
    h.controller.set_preference(ThemePreference::Dark);
    assert_eq!(h.controller.preference(), ThemePreference::Dark);
    assert_eq!(h.target.markers(), vec!["dark"]);
    assert_eq!(h.store.get(STORAGE_KEY), None);
}

// =============================================================
// OS signal subscription
// =============================================================

#[test]
fn os_change_in_system_mode_switches_to_dark() {
    let h = harness(MemoryStore::default(), false);
    assert_eq!(h.target.markers(), vec!["light"]);

    h.signal.set_prefers_dark(true);

    assert_eq!(h.controller.effective(), EffectiveTheme::Dark);
    assert_eq!(h.controller.preference(), ThemePreference::System);
    assert_eq!(h.target.markers(), vec!["dark"]);
}

#[test]
fn os_change_outside_system_mode_is_ignored() {
    let h = harness(MemoryStore::default(), false);
    h.controller.set_preference(ThemePreference::Light);
    let applied = h.target.history().len();

    h.signal.set_prefers_dark(true);

    assert_eq!(h.controller.effective(), EffectiveTheme::Light);
    assert_eq!(h.target.history().len(), applied);
    assert_eq!(h.signal.listener_count(), 0);
}

#[test]
fn leaving_and_reentering_system_keeps_single_subscription() {
    let h = harness(MemoryStore::default(), false);
    assert_eq!(h.signal.listener_count(), 1);

    h.controller.set_preference(ThemePreference::System);
    assert_eq!(h.signal.listener_count(), 1);

    h.controller.set_preference(ThemePreference::Dark);
    assert_eq!(h.signal.listener_count(), 0);
    assert!(!h.controller.is_following_system());

    h.controller.set_preference(ThemePreference::System);
    assert_eq!(h.signal.listener_count(), 1);
    assert!(h.controller.is_following_system());
}

#[test]
fn reentering_system_picks_up_current_os_value() {
    let h = harness(MemoryStore::default().with_entry(STORAGE_KEY, "light"), false);
    h.signal.set_prefers_dark(true);
    assert_eq!(h.controller.effective(), EffectiveTheme::Light);

    h.controller.set_preference(ThemePreference::System);
    assert_eq!(h.controller.effective(), EffectiveTheme::Dark);
}

#[test]
fn dropping_controller_releases_subscription() {
    let h = harness(MemoryStore::default(), false);
    let signal = h.signal.clone();
    assert_eq!(signal.listener_count(), 1);

    drop(h);

    assert_eq!(signal.listener_count(), 0);
    signal.set_prefers_dark(true);
}

// =============================================================
// Change observer
// =============================================================

#[test]
fn on_change_reports_explicit_and_os_driven_updates() {
    let h = harness(MemoryStore::default(), false);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    h.controller.on_change(move |state| sink.borrow_mut().push(state));

    h.signal.set_prefers_dark(true);
    h.controller.set_preference(ThemePreference::Light);

    assert_eq!(
        *seen.borrow(),
        vec![
            ThemeState { preference: ThemePreference::System, effective: EffectiveTheme::Dark },
            ThemeState { preference: ThemePreference::Light, effective: EffectiveTheme::Light },
        ]
    );
}

#[test]
fn on_change_hook_may_read_controller() {
    let h = harness(MemoryStore::default(), false);
    let controller = Rc::new(h.controller);
    let reads = Rc::new(Cell::new(0));
    let weak = Rc::downgrade(&controller);
    let counter = Rc::clone(&reads);
    controller.on_change(move |state| {
        if let Some(c) = weak.upgrade() {
            assert_eq!(c.state(), state);
            counter.set(counter.get() + 1);
        }
    });

    controller.toggle();
    h.signal.set_prefers_dark(true);

    assert_eq!(reads.get(), 1);
}
