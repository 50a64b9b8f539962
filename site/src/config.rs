//! ==============================================================================
//! config.rs - build time configuration
//! ==============================================================================
//!
//! a csr bundle has no process environment, so settings are baked in when
//! the wasm is compiled:
//!     API_URL       base url of the launchpad api
//!     PAGE_CONTENT  optional json overriding the static page copy
//!
//! ==============================================================================

use shared::PageContent;

/// used when API_URL is unset at build time
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// settings shared with every page through context
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub api_url: String,
    pub content: PageContent,
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        let api_url = option_env!("API_URL")
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .to_string();

        let content = match option_env!("PAGE_CONTENT") {
            Some(json) => serde_json::from_str(json).unwrap_or_else(|e| {
                log::warn!("ignoring invalid PAGE_CONTENT: {}", e);
                PageContent::default()
            }),
            None => PageContent::default(),
        };

        log::info!("using api at {}", api_url);
        Self { api_url, content }
    }
}
