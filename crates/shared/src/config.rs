//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Session token configuration.
    pub session: SessionConfig,
    /// Report generation settings.
    #[serde(default)]
    pub reports: ReportsConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Session token configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Session lifetime in seconds.
    #[serde(default = "default_session_expiry")]
    pub expiry_secs: u32,
    /// Where unauthenticated report requests are redirected.
    #[serde(default = "default_login_path")]
    pub login_path: String,
}

fn default_session_expiry() -> u32 {
    86_400 // 1 day
}

fn default_login_path() -> String {
    "/login".to_string()
}

/// Report generation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportsConfig {
    /// Upper bound for a single ledger query, in milliseconds.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
    /// Accounts always classified as equity on the monthly balance sheet.
    #[serde(default = "default_monthly_equity_accounts")]
    pub monthly_equity_accounts: Vec<String>,
    /// Accounts always classified as equity on the cumulative balance sheet.
    #[serde(default = "default_cumulative_equity_accounts")]
    pub cumulative_equity_accounts: Vec<String>,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            query_timeout_ms: default_query_timeout_ms(),
            monthly_equity_accounts: default_monthly_equity_accounts(),
            cumulative_equity_accounts: default_cumulative_equity_accounts(),
        }
    }
}

fn default_query_timeout_ms() -> u64 {
    5_000
}

fn default_monthly_equity_accounts() -> Vec<String> {
    vec!["Capital Social".to_string()]
}

fn default_cumulative_equity_accounts() -> Vec<String> {
    vec!["Capital Social".to_string(), "Lucros acumulados".to_string()]
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("LIVRO")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("reports.monthly_equity_accounts")
                    .with_list_parse_key("reports.cumulative_equity_accounts")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
