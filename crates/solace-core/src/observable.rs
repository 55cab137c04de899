//! Single-threaded observable state holder
//!
//! Every controller in this crate keeps its view-facing state in an
//! [`Observable`]. Views read the current value and register a callback;
//! the returned [`Subscription`] unregisters it when dropped.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Observer<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: RefCell<T>,
    observers: RefCell<Vec<(u64, Observer<T>)>>,
    next_id: Cell<u64>,
    /// Bumped on every change
    generation: Cell<u64>,
}

/// Shared value cell that notifies subscribers when it changes.
///
/// Clones share the same value and subscriber list.
pub struct Observable<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &*self.inner.value.borrow())
            .field("observers", &self.inner.observers.borrow().len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                observers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                generation: Cell::new(0),
            }),
        }
    }

    /// Current value
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Replace the value. Subscribers run only if it actually changed.
    pub fn set(&self, value: T) {
        {
            let mut current = self.inner.value.borrow_mut();
            if *current == value {
                return;
            }
            *current = value;
        }
        self.inner.generation.set(self.inner.generation.get() + 1);
        self.notify();
    }

    /// Mutate the value in place, notifying if the result differs.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut next = self.get();
        f(&mut next);
        self.set(next);
    }

    /// Register a change callback. It is not called for the current value.
    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .observers
            .borrow_mut()
            .push((id, Rc::new(observer)));

        let weak: Weak<Inner<T>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.observers.borrow_mut().retain(|(other, _)| *other != id);
            }
        })
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }

    fn notify(&self) {
        // Snapshot so observers may subscribe or unsubscribe. An observer that
        // sets again starts a newer pass, which supersedes this one.
        let generation = self.inner.generation.get();
        let value = self.get();
        let observers: Vec<Observer<T>> = self
            .inner
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in observers {
            if self.inner.generation.get() != generation {
                break;
            }
            observer(&value);
        }
    }
}

/// Guard for a registered observer; dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Unsubscribe now.
    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifies_only_on_change() {
        let cell = Observable::new(false);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = cell.subscribe(move |v| sink.borrow_mut().push(*v));

        cell.set(false);
        cell.set(true);
        cell.set(true);
        cell.set(false);

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let cell = Observable::new(0u32);
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let sub = cell.subscribe(move |_| counter.set(counter.get() + 1));
        assert_eq!(cell.subscriber_count(), 1);

        cell.set(1);
        drop(sub);
        cell.set(2);

        assert_eq!(hits.get(), 1);
        assert_eq!(cell.subscriber_count(), 0);
    }

    #[test]
    fn test_observer_can_set_reentrantly() {
        let cell = Observable::new(0u32);
        let echo = cell.clone();
        let _sub = cell.subscribe(move |v| {
            if *v == 1 {
                echo.set(2);
            }
        });

        cell.set(1);
        assert_eq!(cell.get(), 2);
    }

    #[test]
    fn test_reentrant_set_leaves_every_observer_current() {
        let cell = Observable::new(0u32);
        let echo = cell.clone();
        let first_seen = Rc::new(Cell::new(0));
        let second_seen = Rc::new(Cell::new(0));

        let first = Rc::clone(&first_seen);
        let _first = cell.subscribe(move |v| {
            first.set(*v);
            if *v == 1 {
                echo.set(2);
            }
        });
        let second = Rc::clone(&second_seen);
        let _second = cell.subscribe(move |v| second.set(*v));

        cell.set(1);
        assert_eq!(cell.get(), 2);
        assert_eq!(first_seen.get(), cell.get());
        assert_eq!(second_seen.get(), cell.get());
    }

    #[test]
    fn test_subscription_outlives_observable() {
        let cell = Observable::new(String::from("a"));
        let sub = cell.subscribe(|_| {});
        drop(cell);
        sub.cancel();
    }
}
