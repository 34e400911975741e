//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with environment variable overrides
//! for the backend credentials (`FOLIO_API_URL`, `FOLIO_API_KEY`).

use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

/// Connection settings for the hosted table store.
///
/// The publishable API key is safe to keep in the config file; row-level
/// policies on the backend decide what it can read. Admin credentials are
/// never stored here (see `FOLIO_ADMIN_EMAIL` / `FOLIO_ADMIN_PASSWORD`).
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the project, e.g. `https://abc123.supabase.co`.
    #[serde(default)]
    pub api_url: String,
    /// Publishable (anon) API key sent with every request.
    #[serde(default)]
    pub api_key: String,
    /// Overall request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connection establishment timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl BackendConfig {
    /// Checks that the backend is fully configured.
    ///
    /// Commands that talk to the table store call this up front so a missing
    /// endpoint or key fails at startup instead of mid-render.
    #[allow(clippy::result_large_err)]
    pub fn require(&self) -> Result<()> {
        if self.api_url.is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        if self.api_key.is_empty() {
            return Err(ConfigError::MissingField { field: "api_key" }.into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Static site copy rendered in the hero section.
///
/// These strings never come from the backend; they are the fixed identity of
/// the page and only change with a config edit.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_site_greeting")]
    pub greeting: String,
    #[serde(default = "default_site_headline")]
    pub headline: String,
    /// Short value propositions cycled under the headline.
    #[serde(default = "default_site_taglines")]
    pub taglines: Vec<String>,
    #[serde(default = "default_site_intro")]
    pub intro: String,
    /// Availability badge shown next to the avatar.
    #[serde(default = "default_site_status")]
    pub status: String,
}

fn default_site_name() -> String {
    "Your Name".to_string()
}

fn default_site_greeting() -> String {
    "Hi, I'm".to_string()
}

fn default_site_headline() -> String {
    "Full-Stack Developer".to_string()
}

fn default_site_taglines() -> Vec<String> {
    vec![
        "Clean code".to_string(),
        "Fast delivery".to_string(),
        "Scalable solutions".to_string(),
    ]
}

fn default_site_intro() -> String {
    "I design and ship reliable web applications, from first commit to production.".to_string()
}

fn default_site_status() -> String {
    "Available for hire".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            greeting: default_site_greeting(),
            headline: default_site_headline(),
            taglines: default_site_taglines(),
            intro: default_site_intro(),
            status: default_site_status(),
        }
    }
}

impl Config {
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let mut config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads the file at `path` if it exists, otherwise starts from defaults.
    ///
    /// Either way the environment overrides apply, so a fully env-configured
    /// deployment needs no config file at all.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("FOLIO_API_URL") {
            if !url.is_empty() {
                self.backend.api_url = url;
            }
        }
        if let Ok(key) = std::env::var("FOLIO_API_KEY") {
            if !key.is_empty() {
                self.backend.api_key = key;
            }
        }
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if !self.backend.api_url.is_empty() {
            let url = Url::parse(&self.backend.api_url).map_err(|e| ConfigError::InvalidValue {
                field: "api_url",
                reason: e.to_string(),
            })?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(ConfigError::InvalidValue {
                    field: "api_url",
                    reason: format!("unsupported scheme '{}'", url.scheme()),
                }
                .into());
            }
        }
        if self.backend.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            logging: LoggingConfig::default(),
            site: SiteConfig::default(),
        }
    }
}

impl Config {
    /// Logs go to stderr so `--json` output on stdout stays parseable.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}
