/// Server configuration
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | SERVER_HOST | 0.0.0.0 | Listen address |
/// | SERVER_PORT | 8080 | HTTP port |
/// | ENVIRONMENT | development | Runtime environment |
/// | CATALOG_PATH | data/catalog.json | Catalog seed file |
/// | LOG_LEVEL | info | Log level |
/// | LOG_JSON | false | JSON log output |
/// | LOG_DIR | (unset) | Daily rolling log directory |
/// | LEAD_WEBHOOK_URL | (unset) | Lead notification webhook |
/// | LEAD_WEBHOOK_TIMEOUT_MS | 5000 | Webhook request timeout |
///
/// # Example
///
/// ```ignore
/// CATALOG_PATH=/srv/catalog.json SERVER_PORT=3000 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address
    pub host: String,
    /// HTTP API port
    pub port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Path to the catalog seed file
    pub catalog_path: String,
    /// Log level passed to the subscriber
    pub log_level: String,
    /// Emit JSON logs instead of the human-readable format
    pub log_json: bool,
    /// Directory for daily rolling log files, stdout only when unset
    pub log_dir: Option<String>,
    /// Webhook that receives rendered lead notifications. Leads are
    /// logged locally when unset.
    pub lead_webhook_url: Option<String>,
    /// Webhook request timeout in milliseconds
    pub lead_webhook_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            catalog_path: std::env::var("CATALOG_PATH")
                .unwrap_or_else(|_| "data/catalog.json".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok(),
            lead_webhook_url: std::env::var("LEAD_WEBHOOK_URL").ok(),
            lead_webhook_timeout_ms: std::env::var("LEAD_WEBHOOK_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
        }
    }

    /// Override the catalog path and port on top of `from_env`
    ///
    /// Mostly used by tests
    pub fn with_overrides(catalog_path: impl Into<String>, port: u16) -> Self {
        let mut config = Self::from_env();
        config.catalog_path = catalog_path.into();
        config.port = port;
        config
    }

    /// Whether this is a production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether this is a development environment
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
