//! Delayed reveal for transient overlays

use crate::observable::Observable;
use crate::schedule::{Scheduler, TaskHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use tracing::debug;

/// Visibility state with at most one pending timed reveal.
///
/// Dropping the timer drops the pending [`TaskHandle`], which cancels it.
#[derive(Debug)]
pub struct RevealTimer {
    visible: Observable<bool>,
    pending: RefCell<Option<TaskHandle>>,
    armed: Rc<Cell<bool>>,
}

impl Default for RevealTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealTimer {
    pub fn new() -> Self {
        Self {
            visible: Observable::new(false),
            pending: RefCell::new(None),
            armed: Rc::new(Cell::new(false)),
        }
    }

    pub fn visible(&self) -> &Observable<bool> {
        &self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// True while a reveal is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.armed.get()
    }

    /// Reveal after `delay` if `guard` still holds at that moment.
    ///
    /// Replaces any reveal already pending.
    pub fn schedule(
        &self,
        scheduler: &dyn Scheduler,
        delay: Duration,
        guard: impl Fn() -> bool + 'static,
    ) {
        let visible = self.visible.clone();
        let armed = Rc::clone(&self.armed);
        let handle = scheduler.schedule_once(
            delay,
            Box::new(move || {
                armed.set(false);
                if guard() {
                    visible.set(true);
                } else {
                    debug!("timed reveal suppressed by guard");
                }
            }),
        );
        self.armed.set(true);
        let previous = self.pending.replace(Some(handle));
        drop(previous);
    }

    /// Drop any pending reveal without changing visibility.
    pub fn cancel(&self) {
        self.armed.set(false);
        if let Some(handle) = self.pending.borrow_mut().take() {
            handle.cancel();
        }
    }

    pub fn hide(&self) {
        self.cancel();
        self.visible.set(false);
    }
}
