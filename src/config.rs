use boxline_notification::EmailConfig;
use boxline_shared::geo::Location;
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
        }
    }
}

fn default_site_name() -> String {
    "Boxline Packaging".to_owned()
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatsConfig {
    /// Spreadsheet `values` endpoint. Empty means always serve the fallback.
    #[serde(default)]
    pub source_url: String,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            source_url: String::new(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

fn default_cache_ttl_secs() -> u64 {
    3600
}

#[derive(Debug, Deserialize, Clone)]
pub struct MapConfig {
    #[serde(default)]
    pub offices: Vec<Location>,
    #[serde(default)]
    pub markets: Vec<Location>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            offices: vec![
                Location::new("Rotterdam", 51.9244, 4.4777),
                Location::new("Chicago", 41.8781, -87.6298),
                Location::new("Singapore", 1.3521, 103.8198),
                Location::new("São Paulo", -23.5505, -46.6333),
            ],
            markets: vec![
                Location::new("London", 51.5074, -0.1278),
                Location::new("Milan", 45.4642, 9.19),
                Location::new("Toronto", 43.6532, -79.3832),
                Location::new("Mexico City", 19.4326, -99.1332),
                Location::new("Tokyo", 35.6762, 139.6503),
                Location::new("Sydney", -33.8688, 151.2093),
                Location::new("Buenos Aires", -34.6037, -58.3816),
                Location::new("Johannesburg", -26.2041, 28.0473),
            ],
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// `json` or `pretty`
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}

fn default_log_format() -> String {
    "pretty".to_owned()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy secrets (SMTP_USERNAME, SMTP_PASSWORD, CONTACT_EMAIL)
    /// 2. Environment variables (BOXLINE__EMAIL__SMTP_HOST, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_owned());

        // Optional, ignored if missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("BOXLINE")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(username) = env::var("SMTP_USERNAME") {
            builder = builder.set_override("email.smtp_username", username)?;
        }
        if let Ok(password) = env::var("SMTP_PASSWORD") {
            builder = builder.set_override("email.smtp_password", password)?;
        }
        if let Ok(contact_email) = env::var("CONTACT_EMAIL") {
            builder = builder.set_override("email.contact_address", contact_email)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_owned());
        }
        if self.email.contact_address.is_empty() {
            return Err("Contact address (email.contact_address) must be set".to_owned());
        }
        if !self.email.contact_address.contains('@') {
            return Err(format!(
                "Contact address '{}' is not an email address",
                self.email.contact_address
            ));
        }
        if self.email.sender().is_empty() {
            return Err("Either email.from_address or email.smtp_username must be set".to_owned());
        }
        if self.stats.cache_ttl_secs == 0 {
            return Err("Stats cache_ttl_secs must be greater than 0".to_owned());
        }
        Ok(())
    }
}
