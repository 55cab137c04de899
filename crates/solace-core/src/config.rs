//! Site configuration

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delays, thresholds and storage keys used by the controllers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Delay before the cookie banner slides in (ms)
    pub cookie_banner_delay_ms: u64,
    /// Delay before the newsletter popup opens (ms)
    pub newsletter_delay_ms: u64,
    /// How long the "thank you" state stays up after subscribing (ms)
    pub newsletter_close_delay_ms: u64,
    /// Scroll offset past which the navbar compacts (px)
    pub navbar_compact_threshold: f64,
    /// Scroll offset past which the scroll-to-top button shows (px)
    pub scroll_top_threshold: f64,
    /// Case-study autoplay period (ms)
    pub carousel_autoplay_ms: u64,
    /// Local storage key for the cookie consent scope
    pub consent_key: String,
    /// Local storage key for the newsletter subscription flag
    pub newsletter_key: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cookie_banner_delay_ms: 1_500,
            newsletter_delay_ms: 45_000,
            newsletter_close_delay_ms: 3_000,
            navbar_compact_threshold: 50.0,
            scroll_top_threshold: 500.0,
            carousel_autoplay_ms: 6_000,
            consent_key: "solacevr_cookies_accepted".to_string(),
            newsletter_key: "solacevr_newsletter_subscribed".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON document; absent fields keep their defaults.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CoreResult<()> {
        for (name, value) in [
            ("navbar_compact_threshold", self.navbar_compact_threshold),
            ("scroll_top_threshold", self.scroll_top_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        if self.carousel_autoplay_ms == 0 {
            return Err(CoreError::Config(
                "carousel_autoplay_ms must be greater than zero".to_string(),
            ));
        }

        for (name, key) in [
            ("consent_key", &self.consent_key),
            ("newsletter_key", &self.newsletter_key),
        ] {
            if key.trim().is_empty() {
                return Err(CoreError::Config(format!("{name} must not be empty")));
            }
        }

        if self.consent_key == self.newsletter_key {
            return Err(CoreError::Config(
                "consent_key and newsletter_key must differ".to_string(),
            ));
        }

        Ok(())
    }

    pub fn cookie_banner_delay(&self) -> Duration {
        Duration::from_millis(self.cookie_banner_delay_ms)
    }

    pub fn newsletter_delay(&self) -> Duration {
        Duration::from_millis(self.newsletter_delay_ms)
    }

    pub fn newsletter_close_delay(&self) -> Duration {
        Duration::from_millis(self.newsletter_close_delay_ms)
    }

    pub fn carousel_autoplay(&self) -> Duration {
        Duration::from_millis(self.carousel_autoplay_ms)
    }
}
