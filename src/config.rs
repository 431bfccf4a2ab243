//! Application configuration resolved at build time.
//!
//! A WASM bundle has no process environment, so values are captured with
//! `option_env!` when the crate is compiled and parsed once at startup.

use crate::error::ConfigError;

/// Storage key for the persisted theme mode.
pub const THEME_STORAGE_KEY: &str = "theme-mode";
pub const DEFAULT_TITLE: &str = "Leptos Starter";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub title: String,
    pub theme_storage_key: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            theme_storage_key: THEME_STORAGE_KEY.to_owned(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Build typed config from variables present when the crate was compiled.
    ///
    /// Optional:
    /// - `APP_TITLE`: document title, default `Leptos Starter`
    /// - `APP_THEME_STORAGE_KEY`: default `theme-mode`
    /// - `APP_LOG_LEVEL`: `error`, `warn`, `info` (default), `debug`, `trace`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but unusable.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("APP_TITLE"),
            option_env!("APP_THEME_STORAGE_KEY"),
            option_env!("APP_LOG_LEVEL"),
        )
    }

    /// Build config from raw optional values. Unset values take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for blank strings or an unknown log level.
    pub fn from_values(
        title: Option<&str>,
        theme_storage_key: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            title: non_empty("APP_TITLE", title, DEFAULT_TITLE)?,
            theme_storage_key: non_empty("APP_THEME_STORAGE_KEY", theme_storage_key, THEME_STORAGE_KEY)?,
            log_level: parse_log_level(log_level)?,
        })
    }
}

fn non_empty(name: &'static str, raw: Option<&str>, default: &str) -> Result<String, ConfigError> {
    match raw.map(str::trim) {
        None => Ok(default.to_owned()),
        Some("") => Err(ConfigError::Empty { name }),
        Some(value) => Ok(value.to_owned()),
    }
}

fn parse_log_level(raw: Option<&str>) -> Result<log::Level, ConfigError> {
    match raw.map(str::trim) {
        None => Ok(DEFAULT_LOG_LEVEL),
        Some(value) => value
            .parse::<log::Level>()
            .map_err(|_| ConfigError::LogLevel(value.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
