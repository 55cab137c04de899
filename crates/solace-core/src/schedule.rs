//! Cancellable scheduled tasks
//!
//! Controllers never talk to a timer API directly. They ask a
//! [`Scheduler`] for a one-shot or repeating task and keep the returned
//! [`TaskHandle`]; dropping the handle cancels the task, so a controller
//! that is torn down can never be called back.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Source of timer callbacks.
pub trait Scheduler {
    /// Run `task` once after `delay`.
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle;

    /// Run `task` every `period` until the handle is cancelled or dropped.
    fn schedule_repeating(&self, period: Duration, task: Box<dyn FnMut()>) -> TaskHandle;
}

/// Owner of a scheduled task. Cancels on drop.
#[must_use = "dropping a TaskHandle cancels the task"]
pub struct TaskHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Handle for a task the host could not schedule; cancelling does nothing.
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    pub fn cancel(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskHandle")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

enum Job {
    Once(Box<dyn FnOnce()>),
    Repeating {
        period: Duration,
        task: Box<dyn FnMut()>,
    },
}

struct Entry {
    due: Duration,
    job: Job,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    tasks: BTreeMap<u64, Entry>,
    running: Option<u64>,
    running_cancelled: bool,
}

impl ClockState {
    fn next_due(&self, limit: Duration) -> Option<u64> {
        self.tasks
            .iter()
            .filter(|(_, entry)| entry.due <= limit)
            .min_by_key(|(id, entry)| (entry.due, **id))
            .map(|(id, _)| *id)
    }
}

/// Virtual-clock scheduler. Time only moves when [`advance`](Self::advance)
/// is called, which makes every timer path deterministic.
///
/// Clones share the same clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ClockState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since creation
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of tasks still scheduled
    pub fn pending(&self) -> usize {
        self.state.borrow().tasks.len()
    }

    /// Move the clock forward, running every task that falls due in order.
    pub fn advance(&self, by: Duration) {
        let target = self.state.borrow().now + by;

        loop {
            let (id, entry) = {
                let mut state = self.state.borrow_mut();
                let Some(id) = state.next_due(target) else {
                    break;
                };
                let Some(entry) = state.tasks.remove(&id) else {
                    break;
                };
                state.now = entry.due;
                state.running = Some(id);
                state.running_cancelled = false;
                (id, entry)
            };

            // The borrow is released so tasks may schedule or cancel.
            match entry.job {
                Job::Once(task) => task(),
                Job::Repeating { period, mut task } => {
                    task();
                    let mut state = self.state.borrow_mut();
                    if !state.running_cancelled {
                        let due = entry.due + period;
                        state.tasks.insert(
                            id,
                            Entry {
                                due,
                                job: Job::Repeating { period, task },
                            },
                        );
                    }
                }
            }

            let mut state = self.state.borrow_mut();
            state.running = None;
            state.running_cancelled = false;
        }

        self.state.borrow_mut().now = target;
    }

    fn insert(&self, delay: Duration, job: Job) -> TaskHandle {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            let due = state.now + delay;
            state.tasks.insert(id, Entry { due, job });
            id
        };

        let weak: Weak<RefCell<ClockState>> = Rc::downgrade(&self.state);
        TaskHandle::new(move || {
            if let Some(state) = weak.upgrade() {
                let mut state = state.borrow_mut();
                state.tasks.remove(&id);
                if state.running == Some(id) {
                    state.running_cancelled = true;
                }
            }
        })
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        self.insert(delay, Job::Once(task))
    }

    fn schedule_repeating(&self, period: Duration, task: Box<dyn FnMut()>) -> TaskHandle {
        // A zero period would never let `advance` finish.
        let period = period.max(Duration::from_millis(1));
        self.insert(period, Job::Repeating { period, task })
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ManualScheduler")
            .field("now", &state.now)
            .field("pending", &state.tasks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() -> u32) {
        let hits = Rc::new(Cell::new(0));
        let read = Rc::clone(&hits);
        (hits, move || read.get())
    }

    #[test]
    fn test_once_fires_at_deadline() {
        let clock = ManualScheduler::new();
        let (hits, count) = counter();
        let _handle = clock.schedule_once(
            Duration::from_millis(1500),
            Box::new(move || hits.set(hits.get() + 1)),
        );

        clock.advance(Duration::from_millis(1499));
        assert_eq!(count(), 0);
        clock.advance(Duration::from_millis(1));
        assert_eq!(count(), 1);
        clock.advance(Duration::from_secs(10));
        assert_eq!(count(), 1);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_dropped_handle_never_fires() {
        let clock = ManualScheduler::new();
        let (hits, count) = counter();
        let handle = clock.schedule_once(
            Duration::from_secs(1),
            Box::new(move || hits.set(hits.get() + 1)),
        );
        drop(handle);

        clock.advance(Duration::from_secs(5));
        assert_eq!(count(), 0);
    }

    #[test]
    fn test_repeating_fires_each_period() {
        let clock = ManualScheduler::new();
        let (hits, count) = counter();
        let handle = clock.schedule_repeating(
            Duration::from_secs(6),
            Box::new(move || hits.set(hits.get() + 1)),
        );

        clock.advance(Duration::from_secs(18));
        assert_eq!(count(), 3);

        handle.cancel();
        clock.advance(Duration::from_secs(60));
        assert_eq!(count(), 3);
    }

    #[test]
    fn test_task_may_schedule_follow_up() {
        let clock = ManualScheduler::new();
        let (hits, count) = counter();
        let slot: Rc<RefCell<Option<TaskHandle>>> = Rc::new(RefCell::new(None));

        let inner_clock = clock.clone();
        let inner_slot = Rc::clone(&slot);
        let _first = clock.schedule_once(
            Duration::from_secs(1),
            Box::new(move || {
                let hits = Rc::clone(&hits);
                let follow_up = inner_clock.schedule_once(
                    Duration::from_secs(1),
                    Box::new(move || hits.set(hits.get() + 1)),
                );
                *inner_slot.borrow_mut() = Some(follow_up);
            }),
        );

        clock.advance(Duration::from_secs(1));
        assert_eq!(count(), 0);
        clock.advance(Duration::from_secs(1));
        assert_eq!(count(), 1);
    }

    #[test]
    fn test_repeating_task_cancelled_from_inside_stops() {
        let clock = ManualScheduler::new();
        let slot: Rc<RefCell<Option<TaskHandle>>> = Rc::new(RefCell::new(None));
        let (hits, count) = counter();

        let inner_slot = Rc::clone(&slot);
        let handle = clock.schedule_repeating(
            Duration::from_secs(1),
            Box::new(move || {
                hits.set(hits.get() + 1);
                if hits.get() == 2 {
                    if let Some(handle) = inner_slot.borrow_mut().take() {
                        handle.cancel();
                    }
                }
            }),
        );
        *slot.borrow_mut() = Some(handle);

        clock.advance(Duration::from_secs(10));
        assert_eq!(count(), 2);
        assert_eq!(clock.pending(), 0);
    }
}
