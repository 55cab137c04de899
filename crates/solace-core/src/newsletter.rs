//! Newsletter signup popup

use crate::config::SiteConfig;
use crate::form::{is_valid_email, FieldError};
use crate::observable::Observable;
use crate::schedule::{Scheduler, TaskHandle};
use crate::storage::{recorded, KeyValueStore, SharedStore};
use crate::visibility::RevealTimer;
use crate::CoreResult;
use std::cell::RefCell;
use std::time::Duration;
use tracing::{debug, info, warn};

const SUBSCRIBED: &str = "true";

/// Whether a subscription has been recorded under `key`.
fn subscribed(store: &dyn KeyValueStore, key: &str) -> CoreResult<bool> {
    Ok(recorded(store, key)?.is_some())
}

/// Popup that opens once after a long delay unless the visitor already
/// subscribed, and closes itself a few seconds after a successful signup.
pub struct NewsletterPopup {
    store: SharedStore,
    key: String,
    close_delay: Duration,
    reveal: RevealTimer,
    email: RefCell<String>,
    submitted: Observable<bool>,
    error: Observable<Option<String>>,
    auto_close: RefCell<Option<TaskHandle>>,
}

impl NewsletterPopup {
    pub fn mount(
        store: SharedStore,
        config: &SiteConfig,
        scheduler: &dyn Scheduler,
    ) -> CoreResult<Self> {
        let key = config.newsletter_key.clone();
        let reveal = RevealTimer::new();

        if subscribed(&*store, &key)? {
            debug!("newsletter already subscribed, popup disabled");
        } else {
            // Checked again on fire: another instance may have subscribed meanwhile.
            let guard_store = store.clone();
            let guard_key = key.clone();
            reveal.schedule(scheduler, config.newsletter_delay(), move || {
                match subscribed(&*guard_store, &guard_key) {
                    Ok(done) => !done,
                    Err(err) => {
                        warn!(error = %err, "could not read newsletter flag");
                        true
                    }
                }
            });
        }

        Ok(Self {
            store,
            key,
            close_delay: config.newsletter_close_delay(),
            reveal,
            email: RefCell::new(String::new()),
            submitted: Observable::new(false),
            error: Observable::new(None),
            auto_close: RefCell::new(None),
        })
    }

    pub fn visible(&self) -> &Observable<bool> {
        self.reveal.visible()
    }

    pub fn submitted(&self) -> &Observable<bool> {
        &self.submitted
    }

    pub fn error(&self) -> &Observable<Option<String>> {
        &self.error
    }

    pub fn is_visible(&self) -> bool {
        self.reveal.is_visible()
    }

    pub fn is_subscribed(&self) -> CoreResult<bool> {
        subscribed(&*self.store, &self.key)
    }

    /// Update the typed address; any shown error is cleared.
    pub fn set_email(&self, value: &str) {
        *self.email.borrow_mut() = value.to_string();
        self.error.set(None);
    }

    /// Validate and record the signup, then close after the configured delay.
    pub fn submit(&self, scheduler: &dyn Scheduler) -> Result<(), FieldError> {
        let email = self.email.borrow().clone();

        let problem = if email.is_empty() {
            Some("Email is required")
        } else if !is_valid_email(&email) {
            Some("Please enter a valid email address")
        } else {
            None
        };
        if let Some(message) = problem {
            self.error.set(Some(message.to_string()));
            return Err(FieldError::new("email", message));
        }

        info!(%email, "newsletter signup");
        if let Err(err) = self.store.set(&self.key, SUBSCRIBED) {
            warn!(error = %err, "could not persist newsletter subscription");
        }
        self.submitted.set(true);

        let visible = self.reveal.visible().clone();
        let handle = scheduler.schedule_once(
            self.close_delay,
            Box::new(move || visible.set(false)),
        );
        self.reveal.cancel();
        let previous = self.auto_close.replace(Some(handle));
        drop(previous);
        Ok(())
    }

    /// Close button or backdrop click
    pub fn close(&self) {
        self.reveal.hide();
        if let Some(handle) = self.auto_close.borrow_mut().take() {
            handle.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ManualScheduler;
    use crate::storage::MemoryStore;
    use crate::test_utils::{init_tracing, FailingStore};
    use std::rc::Rc;

    fn mount(store: &MemoryStore, clock: &ManualScheduler) -> NewsletterPopup {
        NewsletterPopup::mount(store.shared(), &SiteConfig::default(), clock).unwrap()
    }

    #[test]
    fn test_opens_after_45_seconds() {
        init_tracing();
        let clock = ManualScheduler::new();
        let store = MemoryStore::new();
        let popup = mount(&store, &clock);

        clock.advance(Duration::from_secs(44));
        assert!(!popup.is_visible());
        clock.advance(Duration::from_secs(1));
        assert!(popup.is_visible());
    }

    #[test]
    fn test_validation_messages() {
        let clock = ManualScheduler::new();
        let store = MemoryStore::new();
        let popup = mount(&store, &clock);

        let err = popup.submit(&clock).unwrap_err();
        assert_eq!(err.message, "Email is required");
        assert_eq!(popup.error().get().as_deref(), Some("Email is required"));

        popup.set_email("not-an-email");
        assert_eq!(popup.error().get(), None);
        let err = popup.submit(&clock).unwrap_err();
        assert_eq!(err.message, "Please enter a valid email address");
        assert!(!popup.is_subscribed().unwrap());
    }

    #[test]
    fn test_blank_email_is_invalid_not_missing() {
        let clock = ManualScheduler::new();
        let store = MemoryStore::new();
        let popup = mount(&store, &clock);

        popup.set_email("   ");
        let err = popup.submit(&clock).unwrap_err();
        assert_eq!(err.message, "Please enter a valid email address");

        popup.set_email(" user@example.com ");
        assert!(popup.submit(&clock).is_err());
        assert!(!popup.is_subscribed().unwrap());
    }

    #[test]
    fn test_signup_persists_and_auto_closes() {
        let clock = ManualScheduler::new();
        let store = MemoryStore::new();
        let popup = mount(&store, &clock);
        clock.advance(Duration::from_secs(45));

        popup.set_email("user@example.com");
        popup.submit(&clock).unwrap();
        assert!(popup.submitted().get());
        assert!(popup.is_subscribed().unwrap());
        assert!(popup.is_visible());

        clock.advance(Duration::from_millis(2999));
        assert!(popup.is_visible());
        clock.advance(Duration::from_millis(1));
        assert!(!popup.is_visible());
    }

    #[test]
    fn test_subscribed_visitor_never_sees_popup() {
        let clock = ManualScheduler::new();
        let store = MemoryStore::new();
        store.set("solacevr_newsletter_subscribed", "true").unwrap();

        let popup = mount(&store, &clock);
        assert_eq!(clock.pending(), 0);
        clock.advance(Duration::from_secs(120));
        assert!(!popup.is_visible());
    }

    #[test]
    fn test_subscription_elsewhere_suppresses_pending_reveal() {
        let clock = ManualScheduler::new();
        let store = MemoryStore::new();
        let first = mount(&store, &clock);
        let second = mount(&store, &clock);

        clock.advance(Duration::from_secs(10));
        second.set_email("user@example.com");
        second.submit(&clock).unwrap();

        clock.advance(Duration::from_secs(60));
        assert!(!first.is_visible());
    }

    #[test]
    fn test_close_cancels_everything() {
        let clock = ManualScheduler::new();
        let store = MemoryStore::new();
        let popup = mount(&store, &clock);
        popup.close();

        clock.advance(Duration::from_secs(60));
        assert!(!popup.is_visible());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_storage_failure_still_thanks_visitor() {
        let clock = ManualScheduler::new();
        let popup =
            NewsletterPopup::mount(Rc::new(FailingStore), &SiteConfig::default(), &clock).unwrap();
        popup.set_email("user@example.com");

        assert!(popup.submit(&clock).is_ok());
        assert!(popup.submitted().get());
    }
}
