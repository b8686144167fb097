//! Page configuration loading.

use gloo_console as console;
use iv_page_core::PageConfig;

use crate::dom;

const CONFIG_ELEMENT_ID: &str = "pageConfig";

/// Read `#pageConfig` if the page provides it. Any problem is logged and the
/// defaults are used.
pub fn load() -> PageConfig {
    let Some(el) = dom::by_id(CONFIG_ELEMENT_ID) else {
        return PageConfig::default();
    };
    let raw = el.text_content().unwrap_or_default();
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            console::error!(format!("#{CONFIG_ELEMENT_ID}: {e}; using defaults"));
            PageConfig::default()
        }
    }
}
