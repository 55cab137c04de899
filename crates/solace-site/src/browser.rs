//! Browser bindings for the core storage and timer seams

use leptos::{set_interval_with_handle, set_timeout_with_handle, window};
use solace_core::{CoreError, CoreResult, KeyValueStore, Scheduler, SharedStore, TaskHandle};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tracing::warn;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollToOptions, Storage};

fn storage_error(err: JsValue) -> CoreError {
    CoreError::Storage(format!("{err:?}"))
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn shared() -> SharedStore {
        Rc::new(BrowserStorage)
    }

    fn storage() -> CoreResult<Storage> {
        window()
            .local_storage()
            .map_err(storage_error)?
            .ok_or_else(|| CoreError::Storage("localStorage is not available".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(storage_error)
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        Self::storage()?.set_item(key, value).map_err(storage_error)
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        Self::storage()?.remove_item(key).map_err(storage_error)
    }
}

/// `setTimeout` / `setInterval`, cleared when the handle drops.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule_once(&self, delay: Duration, job: Box<dyn FnOnce()>) -> TaskHandle {
        match set_timeout_with_handle(job, delay) {
            Ok(handle) => TaskHandle::new(move || handle.clear()),
            Err(err) => {
                warn!(?err, "could not schedule timeout");
                TaskHandle::detached()
            }
        }
    }

    fn schedule_repeating(&self, period: Duration, job: Box<dyn FnMut()>) -> TaskHandle {
        let job = RefCell::new(job);
        match set_interval_with_handle(move || (&mut *job.borrow_mut())(), period) {
            Ok(handle) => TaskHandle::new(move || handle.clear()),
            Err(err) => {
                warn!(?err, "could not schedule interval");
                TaskHandle::detached()
            }
        }
    }
}

pub fn scroll_offset() -> f64 {
    window().scroll_y().unwrap_or_default()
}

pub fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}
