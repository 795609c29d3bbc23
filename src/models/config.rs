//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{Site, SiteSelectors};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP fetching behavior settings
    #[serde(default)]
    pub fetcher: FetcherConfig,

    /// Input/output locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Email dispatch settings
    #[serde(default)]
    pub email: EmailConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Per-site settings
    #[serde(default)]
    pub sites: SitesConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.fetcher.user_agent.trim().is_empty() {
            return Err(AppError::config("fetcher.user_agent is empty"));
        }
        if self.fetcher.timeout_secs == 0 {
            return Err(AppError::config("fetcher.timeout_secs must be > 0"));
        }
        if self.enabled_sites().is_empty() {
            return Err(AppError::config("no sites enabled"));
        }
        if self.email.enabled {
            self.email.validate()?;
        }
        Ok(())
    }

    /// Sites enabled for this run, in the fixed query order.
    pub fn enabled_sites(&self) -> Vec<(Site, &SiteConfig)> {
        [
            (Site::GoogleShopping, &self.sites.google_shopping),
            (Site::MercadoLivre, &self.sites.mercado_livre),
            (Site::Amazon, &self.sites.amazon),
        ]
        .into_iter()
        .filter(|(_, site)| site.enabled)
        .collect()
    }
}

/// HTTP client and fetching behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Delay between requests in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            request_delay_ms: defaults::request_delay(),
        }
    }
}

/// Input/output locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// CSV file with the search specifications
    #[serde(default = "defaults::input_file")]
    pub input_file: String,

    /// Directory where result files are written
    #[serde(default = "defaults::output_dir")]
    pub output_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_file: defaults::input_file(),
            output_dir: defaults::output_dir(),
        }
    }
}

/// Email dispatch settings.
///
/// SMTP credentials are not config data; they come from the
/// `SMTP_USERNAME` / `SMTP_PASSWORD` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Whether to send the results file at the end of a run
    #[serde(default)]
    pub enabled: bool,

    /// Destination address
    #[serde(default)]
    pub recipient: String,

    /// Sender address
    #[serde(default)]
    pub sender: String,

    /// Message subject
    #[serde(default = "defaults::email_subject")]
    pub subject: String,

    /// Message body
    #[serde(default = "defaults::email_body")]
    pub body: String,

    /// SMTP relay host
    #[serde(default)]
    pub smtp_host: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            recipient: String::new(),
            sender: String::new(),
            subject: defaults::email_subject(),
            body: defaults::email_body(),
            smtp_host: String::new(),
        }
    }
}

impl EmailConfig {
    /// Validate fields required for dispatch.
    pub fn validate(&self) -> Result<()> {
        if self.recipient.trim().is_empty() {
            return Err(AppError::config("email.recipient is empty"));
        }
        if self.sender.trim().is_empty() {
            return Err(AppError::config("email.sender is empty"));
        }
        if self.smtp_host.trim().is_empty() {
            return Err(AppError::config("email.smtp_host is empty"));
        }
        Ok(())
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter ("debug", "info", "warn", "error")
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

/// Per-site settings container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitesConfig {
    #[serde(default = "defaults::google_shopping")]
    pub google_shopping: SiteConfig,

    #[serde(default = "defaults::mercado_livre")]
    pub mercado_livre: SiteConfig,

    #[serde(default = "defaults::amazon")]
    pub amazon: SiteConfig,
}

impl Default for SitesConfig {
    fn default() -> Self {
        Self {
            google_shopping: defaults::google_shopping(),
            mercado_livre: defaults::mercado_livre(),
            amazon: defaults::amazon(),
        }
    }
}

/// Settings for one listing source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Whether this site is queried
    #[serde(default = "defaults::enabled")]
    pub enabled: bool,

    /// Search URL template; `{query}` is replaced with the encoded term
    pub search_url: String,

    /// Selector overrides; site defaults apply when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selectors: Option<SiteSelectors>,
}

impl SiteConfig {
    /// Effective selectors for a site: config override or built-in defaults.
    pub fn selectors_for(&self, site: Site) -> SiteSelectors {
        self.selectors
            .clone()
            .unwrap_or_else(|| SiteSelectors::defaults_for(site))
    }
}

mod defaults {
    use super::SiteConfig;

    // Fetcher defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; pricescout/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn request_delay() -> u64 {
        250
    }

    // Path defaults
    pub fn input_file() -> String {
        "data/search.csv".into()
    }
    pub fn output_dir() -> String {
        "results".into()
    }

    // Email defaults
    pub fn email_subject() -> String {
        "Results of pricing research script".into()
    }
    pub fn email_body() -> String {
        "Attached are the offers found in today's run.".into()
    }

    // Logging defaults
    pub fn log_level() -> String {
        "info".into()
    }

    // Site defaults
    pub fn enabled() -> bool {
        true
    }
    pub fn google_shopping() -> SiteConfig {
        SiteConfig {
            enabled: enabled(),
            search_url: "https://www.google.com/search?tbm=shop&q={query}".into(),
            selectors: None,
        }
    }
    pub fn mercado_livre() -> SiteConfig {
        SiteConfig {
            enabled: enabled(),
            search_url: "https://lista.mercadolivre.com.br/{query}".into(),
            selectors: None,
        }
    }
    pub fn amazon() -> SiteConfig {
        SiteConfig {
            enabled: enabled(),
            search_url: "https://www.amazon.com.br/s?k={query}".into(),
            selectors: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.fetcher.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_all_sites_disabled() {
        let mut config = Config::default();
        config.sites.google_shopping.enabled = false;
        config.sites.mercado_livre.enabled = false;
        config.sites.amazon.enabled = false;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_requires_email_fields_when_enabled() {
        let mut config = Config::default();
        config.email.enabled = true;
        assert!(config.validate().is_err());

        config.email.recipient = "buyer@example.com".into();
        config.email.sender = "robot@example.com".into();
        config.email.smtp_host = "smtp.example.com".into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn enabled_sites_preserve_query_order() {
        let mut config = Config::default();
        config.sites.mercado_livre.enabled = false;
        let sites: Vec<Site> = config.enabled_sites().iter().map(|(s, _)| *s).collect();
        assert_eq!(sites, vec![Site::GoogleShopping, Site::Amazon]);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [fetcher]
            timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.fetcher.timeout_secs, 5);
        assert!(!config.fetcher.user_agent.is_empty());
        assert_eq!(config.paths.output_dir, "results");
        assert!(config.sites.amazon.enabled);
    }
}
