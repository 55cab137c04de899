//! Shared helpers for unit tests

use crate::storage::KeyValueStore;
use crate::{CoreError, CoreResult};
use std::sync::Once;

static INIT: Once = Once::new();

/// Install a fmt subscriber once so `RUST_LOG=debug cargo test` shows controller logs.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Store whose writes always fail, for exercising storage error paths.
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> CoreResult<Option<String>> {
        Ok(None)
    }

    fn set(&self, key: &str, _value: &str) -> CoreResult<()> {
        Err(CoreError::Storage(format!("quota exceeded writing {key}")))
    }

    fn remove(&self, _key: &str) -> CoreResult<()> {
        Ok(())
    }
}
