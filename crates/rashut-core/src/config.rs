//! Dashboard configuration
//!
//! Loaded from TOML; every field has a default so an empty file is valid.
//!
//! ```toml
//! server_base = "https://ppm.example:8043"
//! initial_year = 2025
//! selectable_years = [2024, 2025]
//! ```

use crate::error::ConfigError;
use rashut_model::Year;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Query code of the dashboard's backend query
pub const DEFAULT_QUERY_CODE: &str = "dash_rashut_pm";
/// Path segment that marks the PPM application in page URLs
pub const DEFAULT_PAGE_MARKER: &str = "niku";
const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 250;
const MAX_RESIZE_DEBOUNCE_MS: u64 = 10_000;

/// Shell configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashConfig {
    /// Base URL of the PPM server; derived from `page_url` when empty
    pub server_base: String,
    /// URL of the hosting page
    pub page_url: Option<String>,
    /// Path segment preceding the application in `page_url`
    pub page_marker: String,
    /// Backend query code
    pub query_code: String,
    /// XOG session id
    pub session_id: Option<String>,
    /// Year selected at startup
    pub initial_year: Year,
    /// Years offered in the year filter
    pub selectable_years: Vec<Year>,
    /// Quiet period after the last resize before re-rendering
    pub resize_debounce_ms: u64,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            server_base: String::new(),
            page_url: None,
            page_marker: DEFAULT_PAGE_MARKER.to_string(),
            query_code: DEFAULT_QUERY_CODE.to_string(),
            session_id: None,
            initial_year: Year(2025),
            selectable_years: (2019..=2028).map(Year).collect(),
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
        }
    }
}

impl DashConfig {
    /// Default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With server base
    #[inline]
    #[must_use]
    pub fn with_server_base(mut self, server_base: impl Into<String>) -> Self {
        self.server_base = server_base.into();
        self
    }

    /// With session id
    #[inline]
    #[must_use]
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// With initial year
    #[inline]
    #[must_use]
    pub fn with_initial_year(mut self, year: Year) -> Self {
        self.initial_year = year;
        self
    }

    /// With resize debounce
    #[inline]
    #[must_use]
    pub fn with_resize_debounce_ms(mut self, millis: u64) -> Self {
        self.resize_debounce_ms = millis;
        self
    }

    /// Parse TOML
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` on syntax errors or unknown fields.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Read and validate a TOML file
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&input)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Check cross-field consistency
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` describing the first problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.query_code.trim().is_empty() {
            return Err(ConfigError::Invalid("query_code is empty".into()));
        }
        if self.selectable_years.is_empty() {
            return Err(ConfigError::Invalid("selectable_years is empty".into()));
        }
        if !self.selectable_years.contains(&self.initial_year) {
            return Err(ConfigError::Invalid(format!(
                "initial_year {} is not selectable",
                self.initial_year
            )));
        }
        if self.resize_debounce_ms > MAX_RESIZE_DEBOUNCE_MS {
            return Err(ConfigError::Invalid(format!(
                "resize_debounce_ms {} exceeds {MAX_RESIZE_DEBOUNCE_MS}",
                self.resize_debounce_ms
            )));
        }
        if !self.server_base.is_empty()
            && !(self.server_base.starts_with("http://") || self.server_base.starts_with("https://"))
        {
            return Err(ConfigError::Invalid(format!(
                "server_base {:?} is not an http(s) URL",
                self.server_base
            )));
        }
        Ok(())
    }

    /// Server base, falling back to the one embedded in `page_url`
    #[must_use]
    pub fn resolved_server_base(&self) -> String {
        if !self.server_base.is_empty() {
            return self.server_base.trim_end_matches('/').to_string();
        }
        self.page_url
            .as_deref()
            .and_then(|url| rashut_nav::server_base_from_page_url(url, &self.page_marker))
            .unwrap_or_default()
            .to_string()
    }

    /// Resize debounce as a duration
    #[inline]
    #[must_use]
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = DashConfig::default();
        assert_eq!(config.query_code, "dash_rashut_pm");
        assert_eq!(config.initial_year, Year(2025));
        assert_eq!(config.selectable_years.len(), 10);
        assert_eq!(config.selectable_years[0], Year(2019));
        assert_eq!(config.resize_debounce(), Duration::from_millis(250));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(DashConfig::from_toml_str("").unwrap(), DashConfig::default());
    }

    #[test]
    fn parses_fields() {
        let config = DashConfig::from_toml_str(
            r#"
            server_base = "https://ppm.example:8043"
            session_id = "abc"
            initial_year = 2024
            selectable_years = [2024, 2025]
            resize_debounce_ms = 100
            "#,
        )
        .unwrap();

        assert_eq!(config.server_base, "https://ppm.example:8043");
        assert_eq!(config.session_id.as_deref(), Some("abc"));
        assert_eq!(config.initial_year, Year(2024));
        assert_eq!(config.selectable_years, vec![Year(2024), Year(2025)]);
        assert_eq!(config.resize_debounce_ms, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_field_rejected() {
        assert!(matches!(
            DashConfig::from_toml_str("colour = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn initial_year_must_be_selectable() {
        let config = DashConfig::new().with_initial_year(Year(2030));
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn server_base_must_be_http() {
        let config = DashConfig::new().with_server_base("ftp://x");
        assert!(config.validate().is_err());
    }

    #[test]
    fn server_base_from_page_url() {
        let mut config = DashConfig::new();
        config.page_url = Some("https://ppm.example:8043/niku/nu#action:npt.overview".into());
        assert_eq!(config.resolved_server_base(), "https://ppm.example:8043");

        let config = config.with_server_base("https://other/");
        assert_eq!(config.resolved_server_base(), "https://other");
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "initial_year = 2026").unwrap();
        let config = DashConfig::load(file.path()).unwrap();
        assert_eq!(config.initial_year, Year(2026));

        let missing = DashConfig::load("/definitely/not/here.toml");
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }
}
