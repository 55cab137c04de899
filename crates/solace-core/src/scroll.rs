//! Scroll threshold watcher

use crate::observable::{Observable, Subscription};
use tracing::trace;

/// Boolean derived from the vertical scroll offset: `offset > threshold`.
///
/// Used for the compact navbar (50 px) and the scroll-to-top button (500 px).
#[derive(Debug)]
pub struct ScrollWatcher {
    threshold: f64,
    active: Observable<bool>,
    subscription: Option<Subscription>,
}

impl ScrollWatcher {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            active: Observable::new(false),
            subscription: None,
        }
    }

    /// Follow an offset signal until the watcher is dropped.
    ///
    /// The current offset is applied immediately.
    pub fn attach(offsets: &Observable<f64>, threshold: f64) -> Self {
        let mut watcher = Self::new(threshold);
        watcher.on_scroll(offsets.get());

        let active = watcher.active.clone();
        watcher.subscription = Some(offsets.subscribe(move |offset| {
            active.set(*offset > threshold);
        }));
        watcher
    }

    pub fn active(&self) -> &Observable<bool> {
        &self.active
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn on_scroll(&mut self, offset: f64) {
        trace!(offset, threshold = self.threshold, "scroll");
        self.active.set(offset > self.threshold);
    }
}
