//! SolaceVR Site Core
//!
//! This crate provides the client-side state controllers behind the
//! marketing site: delayed overlays gated on persisted flags, scroll
//! thresholds, the multi-step lead form and the carousel/tab indices.
//! Everything here is target independent; the site crate binds it to
//! the browser.

pub mod carousel;
pub mod config;
pub mod consent;
pub mod form;
pub mod newsletter;
pub mod observable;
pub mod schedule;
pub mod scroll;
pub mod storage;
pub mod visibility;

#[cfg(test)]
pub(crate) mod test_utils;

use thiserror::Error;

pub use carousel::{Carousel, TabSet};
pub use config::SiteConfig;
pub use consent::{ConsentScope, CookieBanner};
pub use form::{
    FieldError, FieldKind, FieldMap, FieldSpec, FieldValue, FormSpec, FormStep, LogSink,
    MultiStepForm, StepSpec, StepStatus, SubmissionSink, ValidationErrors,
};
pub use newsletter::NewsletterPopup;
pub use observable::{Observable, Subscription};
pub use schedule::{ManualScheduler, Scheduler, TaskHandle};
pub use scroll::ScrollWatcher;
pub use storage::{KeyValueStore, MemoryStore, SharedStore};
pub use visibility::RevealTimer;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown field for the current step: {0}")]
    UnknownField(String),

    #[error("Form has already been submitted")]
    FormClosed,

    #[error("Index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Collection must contain at least one item")]
    EmptyCollection,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
