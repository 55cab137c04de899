//! Selected-index controllers for the case-study carousel and product tabs

use crate::observable::Observable;
use crate::schedule::{Scheduler, TaskHandle};
use crate::{CoreError, CoreResult};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;
use tracing::debug;

/// Circular slide index with optional autoplay that pauses on hover.
///
/// Leaving the carousel and manual navigation both restart the full
/// autoplay period.
#[derive(Debug)]
pub struct Carousel {
    len: usize,
    index: Observable<usize>,
    hovered: Rc<Cell<bool>>,
    autoplay: RefCell<Option<Autoplay>>,
}

struct Autoplay {
    start: Box<dyn Fn() -> TaskHandle>,
    running: Option<TaskHandle>,
}

impl fmt::Debug for Autoplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Autoplay")
            .field("running", &self.running.is_some())
            .finish()
    }
}

impl Carousel {
    pub fn new(len: usize) -> CoreResult<Self> {
        if len == 0 {
            return Err(CoreError::EmptyCollection);
        }
        Ok(Self {
            len,
            index: Observable::new(0),
            hovered: Rc::new(Cell::new(false)),
            autoplay: RefCell::new(None),
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn index(&self) -> &Observable<usize> {
        &self.index
    }

    pub fn current(&self) -> usize {
        self.index.get()
    }

    /// Jump to a slide; out-of-range indices wrap.
    pub fn select(&self, index: usize) {
        self.index.set(index % self.len);
        self.restart();
    }

    pub fn next(&self) {
        let len = self.len;
        self.index.update(|i| *i = (*i + 1) % len);
        self.restart();
    }

    pub fn prev(&self) {
        let len = self.len;
        self.index.update(|i| *i = (*i + len - 1) % len);
        self.restart();
    }

    /// One autoplay step; skipped while the pointer is over the carousel.
    pub fn tick(&self) {
        advance(&self.index, self.len, &self.hovered);
    }

    /// Pointer entered or left. Entering stops the autoplay timer, leaving
    /// starts a fresh period.
    pub fn set_hovered(&self, hovered: bool) {
        if self.hovered.replace(hovered) == hovered {
            return;
        }
        if hovered {
            if let Some(autoplay) = self.autoplay.borrow_mut().as_mut() {
                autoplay.running = None;
            }
        } else {
            self.restart();
        }
    }

    pub fn is_paused(&self) -> bool {
        self.hovered.get()
    }

    /// Tick every `period` until stopped or dropped. Restarting replaces the
    /// running timer.
    pub fn start_autoplay<S>(&self, scheduler: &S, period: Duration)
    where
        S: Scheduler + Clone + 'static,
    {
        let scheduler = scheduler.clone();
        let index = self.index.clone();
        let hovered = Rc::clone(&self.hovered);
        let len = self.len;
        let start = move || {
            let index = index.clone();
            let hovered = Rc::clone(&hovered);
            scheduler.schedule_repeating(
                period,
                Box::new(move || advance(&index, len, &hovered)),
            )
        };

        let running = (!self.hovered.get()).then(&start);
        let previous = self.autoplay.replace(Some(Autoplay {
            start: Box::new(start),
            running,
        }));
        drop(previous);
        debug!(slides = len, ?period, "carousel autoplay started");
    }

    pub fn stop_autoplay(&self) {
        let previous = self.autoplay.borrow_mut().take();
        drop(previous);
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.borrow().is_some()
    }

    /// Begin a full autoplay period from now, unless hovered or stopped.
    fn restart(&self) {
        if self.hovered.get() {
            return;
        }
        if let Some(autoplay) = self.autoplay.borrow_mut().as_mut() {
            autoplay.running = None;
            autoplay.running = Some((autoplay.start)());
        }
    }
}

fn advance(index: &Observable<usize>, len: usize, hovered: &Cell<bool>) {
    if hovered.get() {
        return;
    }
    index.update(|i| *i = (*i + 1) % len);
}

/// Manually driven tab selection, bounded to `[0, len)`.
#[derive(Debug)]
pub struct TabSet {
    len: usize,
    index: Observable<usize>,
}

impl TabSet {
    pub fn new(len: usize) -> CoreResult<Self> {
        if len == 0 {
            return Err(CoreError::EmptyCollection);
        }
        Ok(Self {
            len,
            index: Observable::new(0),
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn index(&self) -> &Observable<usize> {
        &self.index
    }

    pub fn selected(&self) -> usize {
        self.index.get()
    }

    pub fn select(&self, index: usize) -> CoreResult<()> {
        if index >= self.len {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.index.set(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ManualScheduler;
    use proptest::prelude::*;

    #[test]
    fn test_four_slides_wrap_after_four_ticks() {
        let carousel = Carousel::new(4).unwrap();
        for _ in 0..3 {
            carousel.tick();
        }
        assert_eq!(carousel.current(), 3);
        carousel.tick();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_manual_navigation_wraps_both_ways() {
        let carousel = Carousel::new(4).unwrap();
        carousel.prev();
        assert_eq!(carousel.current(), 3);
        carousel.next();
        assert_eq!(carousel.current(), 0);
        carousel.select(6);
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_autoplay_runs_on_schedule_and_pauses_on_hover() {
        let clock = ManualScheduler::new();
        let carousel = Carousel::new(4).unwrap();
        carousel.start_autoplay(&clock, Duration::from_secs(6));

        clock.advance(Duration::from_secs(12));
        assert_eq!(carousel.current(), 2);

        carousel.set_hovered(true);
        assert!(carousel.is_paused());
        assert_eq!(clock.pending(), 0);
        clock.advance(Duration::from_secs(30));
        assert_eq!(carousel.current(), 2);

        carousel.set_hovered(false);
        clock.advance(Duration::from_secs(6));
        assert_eq!(carousel.current(), 3);
    }

    #[test]
    fn test_leaving_restarts_full_period() {
        let clock = ManualScheduler::new();
        let carousel = Carousel::new(4).unwrap();
        carousel.start_autoplay(&clock, Duration::from_secs(6));

        clock.advance(Duration::from_secs(5));
        carousel.set_hovered(true);
        clock.advance(Duration::from_secs(2));
        carousel.set_hovered(false);
        assert!(!carousel.is_paused());

        clock.advance(Duration::from_millis(5999));
        assert_eq!(carousel.current(), 0);
        clock.advance(Duration::from_millis(1));
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_manual_navigation_restarts_period() {
        let clock = ManualScheduler::new();
        let carousel = Carousel::new(4).unwrap();
        carousel.start_autoplay(&clock, Duration::from_secs(6));

        clock.advance(Duration::from_secs(5));
        carousel.next();
        assert_eq!(carousel.current(), 1);

        clock.advance(Duration::from_secs(5));
        assert_eq!(carousel.current(), 1);
        clock.advance(Duration::from_secs(1));
        assert_eq!(carousel.current(), 2);

        carousel.select(0);
        clock.advance(Duration::from_secs(5));
        assert_eq!(carousel.current(), 0);
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn test_navigation_while_hovered_stays_paused() {
        let clock = ManualScheduler::new();
        let carousel = Carousel::new(4).unwrap();
        carousel.start_autoplay(&clock, Duration::from_secs(6));
        carousel.set_hovered(true);

        carousel.next();
        assert_eq!(clock.pending(), 0);
        clock.advance(Duration::from_secs(20));
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_drop_stops_autoplay() {
        let clock = ManualScheduler::new();
        let carousel = Carousel::new(3).unwrap();
        carousel.start_autoplay(&clock, Duration::from_secs(6));
        assert_eq!(clock.pending(), 1);

        drop(carousel);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_restart_replaces_timer() {
        let clock = ManualScheduler::new();
        let carousel = Carousel::new(4).unwrap();
        carousel.start_autoplay(&clock, Duration::from_secs(6));
        carousel.start_autoplay(&clock, Duration::from_secs(6));
        assert_eq!(clock.pending(), 1);

        carousel.stop_autoplay();
        assert!(!carousel.is_autoplaying());
        clock.advance(Duration::from_secs(60));
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(Carousel::new(0), Err(CoreError::EmptyCollection)));
        assert!(matches!(TabSet::new(0), Err(CoreError::EmptyCollection)));
    }

    #[test]
    fn test_tabs_are_bounded() {
        let tabs = TabSet::new(3).unwrap();
        tabs.select(2).unwrap();
        assert_eq!(tabs.selected(), 2);
        assert!(matches!(
            tabs.select(3),
            Err(CoreError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(tabs.selected(), 2);
    }

    proptest! {
        #[test]
        fn prop_ticks_advance_modulo_len(len in 1usize..20, start in 0usize..40, ticks in 0usize..100) {
            let carousel = Carousel::new(len).unwrap();
            carousel.select(start);
            let initial = carousel.current();
            for _ in 0..ticks {
                carousel.tick();
            }
            prop_assert_eq!(carousel.current(), (initial + ticks) % len);
        }

        #[test]
        fn prop_autoplay_matches_manual_ticks(len in 1usize..10, periods in 0u64..30) {
            let clock = ManualScheduler::new();
            let carousel = Carousel::new(len).unwrap();
            carousel.start_autoplay(&clock, Duration::from_millis(6000));
            clock.advance(Duration::from_millis(6000 * periods));
            prop_assert_eq!(carousel.current(), periods as usize % len);
        }
    }
}
