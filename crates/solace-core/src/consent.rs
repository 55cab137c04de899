//! Cookie consent banner

use crate::config::SiteConfig;
use crate::observable::Observable;
use crate::schedule::Scheduler;
use crate::storage::{recorded, KeyValueStore, SharedStore};
use crate::visibility::RevealTimer;
use crate::CoreResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

/// Cookie usage the visitor agreed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentScope {
    /// No choice recorded yet
    #[default]
    None,
    Essential,
    All,
}

impl ConsentScope {
    /// Stored representation; `None` is never written.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentScope::None => "none",
            ConsentScope::Essential => "essential",
            ConsentScope::All => "all",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "essential" => Some(ConsentScope::Essential),
            "all" => Some(ConsentScope::All),
            "none" => Some(ConsentScope::None),
            _ => None,
        }
    }

    pub fn is_decided(&self) -> bool {
        !matches!(self, ConsentScope::None)
    }

    /// Read the persisted scope.
    ///
    /// Any non-empty value is a recorded answer. Values that do not name a
    /// scope are read as essential only.
    pub fn load(store: &SharedStore, key: &str) -> CoreResult<Self> {
        let Some(raw) = recorded(&**store, key)? else {
            return Ok(ConsentScope::None);
        };
        match ConsentScope::parse(&raw) {
            Some(scope) if scope.is_decided() => Ok(scope),
            _ => {
                warn!(key, value = %raw, "unrecognised consent value, reading as essential");
                Ok(ConsentScope::Essential)
            }
        }
    }
}

impl fmt::Display for ConsentScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Banner that slides in shortly after load until the visitor picks a scope.
pub struct CookieBanner {
    store: SharedStore,
    key: String,
    reveal: RevealTimer,
}

impl CookieBanner {
    /// Read the persisted scope and schedule the reveal if nothing is recorded.
    pub fn mount(
        store: SharedStore,
        config: &SiteConfig,
        scheduler: &dyn Scheduler,
    ) -> CoreResult<Self> {
        let key = config.consent_key.clone();
        let reveal = RevealTimer::new();

        let scope = ConsentScope::load(&store, &key)?;
        if scope.is_decided() {
            debug!(%scope, "cookie consent already recorded");
        } else {
            reveal.schedule(scheduler, config.cookie_banner_delay(), || true);
        }

        Ok(Self { store, key, reveal })
    }

    pub fn visible(&self) -> &Observable<bool> {
        self.reveal.visible()
    }

    pub fn is_visible(&self) -> bool {
        self.reveal.is_visible()
    }

    pub fn consent(&self) -> CoreResult<ConsentScope> {
        ConsentScope::load(&self.store, &self.key)
    }

    pub fn accept_all(&self) -> CoreResult<()> {
        self.record(ConsentScope::All)
    }

    pub fn accept_essential(&self) -> CoreResult<()> {
        self.record(ConsentScope::Essential)
    }

    /// "Cookie Policy" link. There is no detailed settings dialog yet.
    pub fn open_settings(&self) {
        info!("cookie settings requested");
    }

    fn record(&self, scope: ConsentScope) -> CoreResult<()> {
        // Hidden even if the write fails; the visitor has answered.
        self.reveal.hide();
        self.store.set(&self.key, scope.as_str())?;
        info!(%scope, "cookie consent recorded");
        Ok(())
    }
}
