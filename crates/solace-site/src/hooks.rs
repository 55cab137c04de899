//! Bridges from core observables to Leptos signals

use crate::browser::scroll_offset;
use leptos::*;
use solace_core::{Observable, ScrollWatcher};

/// Mirror an observable into a signal for the lifetime of the current owner.
pub fn use_observable<T>(source: &Observable<T>) -> ReadSignal<T>
where
    T: Clone + PartialEq + 'static,
{
    let (value, set_value) = create_signal(source.get());
    let subscription = source.subscribe(move |next| set_value.set(next.clone()));
    on_cleanup(move || drop(subscription));
    value
}

/// `true` while the window is scrolled strictly past `threshold` pixels.
pub fn use_scroll_watcher(threshold: f64) -> ReadSignal<bool> {
    let offsets = Observable::new(scroll_offset());
    let watcher = ScrollWatcher::attach(&offsets, threshold);
    let active = use_observable(watcher.active());

    let listener = window_event_listener(ev::scroll, move |_| offsets.set(scroll_offset()));
    on_cleanup(move || {
        listener.remove();
        drop(watcher);
    });
    active
}
