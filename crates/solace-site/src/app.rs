//! Main application component

use crate::browser::BrowserStorage;
use crate::pages::*;
use leptos::*;
use leptos_router::*;
use solace_core::{SharedStore, SiteConfig};
use tracing::{info, warn};

const SITE_CONFIG: &str = include_str!("../site.json");

fn load_config() -> SiteConfig {
    match SiteConfig::from_json(SITE_CONFIG) {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "invalid site.json, falling back to defaults");
            SiteConfig::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    info!(?config, "site configuration loaded");

    provide_context(config);
    provide_context::<SharedStore>(BrowserStorage::shared());

    view! {
        <Router>
            <div class="App">
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </div>
        </Router>
    }
}
