//! Page configuration.
//!
//! Every field has a default so a page can ship without any configuration.
//! A page overrides values by embedding a JSON object, e.g.
//! `<script type="application/json" id="pageConfig">{"endpoint_suffix": ".php"}</script>`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid page config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    /// Prefix for every API path, without a trailing slash.
    pub api_base: String,
    /// Appended to endpoint names, e.g. `.php`.
    pub endpoint_suffix: String,
    /// Local date-time understood by the browser's `Date` parser.
    pub countdown_target: String,
    pub notification_duration_ms: u32,
    pub loading_screen_delay_ms: u32,
    pub strings: Strings,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            endpoint_suffix: String::new(),
            countdown_target: "2026-01-07T08:00:00".to_string(),
            notification_duration_ms: crate::notification::DEFAULT_DURATION_MS,
            loading_screen_delay_ms: 2000,
            strings: Strings::default(),
        }
    }
}

/// User-visible text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Strings {
    pub success_title: String,
    pub error_title: String,
    pub rsvp_failed: String,
    pub wish_failed: String,
    pub wish_submitting: String,
    pub no_wishes: String,
    pub copied: String,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            success_title: "Berhasil!".to_string(),
            error_title: "Terjadi Kesalahan".to_string(),
            rsvp_failed: "Gagal mengirim RSVP. Periksa koneksi internet Anda.".to_string(),
            wish_failed: "Gagal mengirim ucapan. Periksa koneksi internet Anda.".to_string(),
            wish_submitting: "Mengirim...".to_string(),
            no_wishes: "Belum ada ucapan. Jadilah yang pertama!".to_string(),
            copied: "Tersalin".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    pub fn endpoint(&self, name: &str) -> String {
        format!(
            "{}/{}{}",
            self.api_base.trim_end_matches('/'),
            name,
            self.endpoint_suffix
        )
    }

    pub fn wishes_url(&self, page: u32) -> String {
        format!("{}?page={}", self.endpoint("get_wishes"), page.max(1))
    }

    pub fn submit_wish_url(&self) -> String {
        self.endpoint("submit_wish")
    }

    pub fn submit_rsvp_url(&self) -> String {
        self.endpoint("submit_rsvp")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoints() {
        let config = PageConfig::default();
        assert_eq!(config.wishes_url(3), "/api/get_wishes?page=3");
        assert_eq!(config.submit_wish_url(), "/api/submit_wish");
        assert_eq!(config.submit_rsvp_url(), "/api/submit_rsvp");
    }

    #[test]
    fn page_zero_requests_first_page() {
        assert_eq!(PageConfig::default().wishes_url(0), "/api/get_wishes?page=1");
    }

    #[test]
    fn partial_override_keeps_other_defaults() -> anyhow::Result<()> {
        let config = PageConfig::from_json(
            r#"{"api_base": "api/", "endpoint_suffix": ".php", "strings": {"copied": "Copied"}}"#,
        )?;
        assert_eq!(config.wishes_url(1), "api/get_wishes.php?page=1");
        assert_eq!(config.strings.copied, "Copied");
        assert_eq!(config.strings.no_wishes, Strings::default().no_wishes);
        assert_eq!(config.notification_duration_ms, 3000);
        Ok(())
    }

    #[test]
    fn blank_source_is_default() -> anyhow::Result<()> {
        assert_eq!(PageConfig::from_json("  \n")?, PageConfig::default());
        Ok(())
    }

    #[test]
    fn malformed_source_is_rejected() {
        assert!(matches!(
            PageConfig::from_json("{api_base:"),
            Err(ConfigError::Json(_))
        ));
    }
}
