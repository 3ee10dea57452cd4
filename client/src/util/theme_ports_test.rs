use std::cell::Cell;

use super::*;

// =============================================================
// Subscription
// =============================================================

#[test]
fn subscription_runs_release_once_on_drop() {
    let released = Rc::new(Cell::new(0));
    let counter = Rc::clone(&released);
    let sub = Subscription::new(move || counter.set(counter.get() + 1));
    assert_eq!(released.get(), 0);
    drop(sub);
    assert_eq!(released.get(), 1);
}

#[test]
fn detached_subscription_drops_quietly() {
    let sub = Subscription::detached();
    assert_eq!(format!("{sub:?}"), "Subscription { attached: false }");
}

// =============================================================
// MemoryRenderTarget
// =============================================================

#[test]
fn render_target_holds_exactly_one_marker() {
    let target = MemoryRenderTarget::default();
    target.apply(EffectiveTheme::Light);
    assert_eq!(target.markers(), vec!["light"]);
    target.apply(EffectiveTheme::Dark);
    assert_eq!(target.markers(), vec!["dark"]);
    assert_eq!(target.history(), vec![EffectiveTheme::Light, EffectiveTheme::Dark]);
}

// =============================================================
// MemorySchemeSignal
// =============================================================

#[test]
fn signal_notifies_subscribers_with_new_value() {
    let signal = MemorySchemeSignal::new(false);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _sub = signal.subscribe(Box::new(move |dark| sink.borrow_mut().push(dark)));

    signal.set_prefers_dark(true);
    signal.set_prefers_dark(false);

    assert_eq!(*seen.borrow(), vec![true, false]);
    assert!(!signal.prefers_dark());
}

#[test]
fn dropping_subscription_removes_listener() {
    let signal = MemorySchemeSignal::new(false);
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    let sub = signal.subscribe(Box::new(move |_| counter.set(counter.get() + 1)));
    assert_eq!(signal.listener_count(), 1);

    drop(sub);
    signal.set_prefers_dark(true);

    assert_eq!(signal.listener_count(), 0);
    assert_eq!(hits.get(), 0);
}

#[test]
fn subscription_outliving_signal_is_harmless() {
    let signal = MemorySchemeSignal::new(true);
    let sub = signal.subscribe(Box::new(|_| {}));
    drop(signal);
    drop(sub);
}
