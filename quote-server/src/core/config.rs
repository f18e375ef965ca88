/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTP port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | PRICING_RULES_PATH | - | JSON pricing rule snapshot; unset means built-in prices |
/// | LOG_LEVEL | info | trace \| debug \| info \| warn \| error |
/// | LOG_JSON | false | JSON log lines (`true` / `1`) |
/// | LOG_DIR | - | daily rolling log files; unset means stdout |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request timeout (ms) |
///
/// # Example
///
/// ```ignore
/// PRICING_RULES_PATH=./pricing_rules.json HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment
    pub environment: String,
    /// Pricing rule snapshot exported from the admin table
    pub pricing_rules_path: Option<String>,
    /// Level used when `RUST_LOG` is unset
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// Request timeout (ms)
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset or unparsable variables use their defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            pricing_rules_path: std::env::var("PRICING_RULES_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON").is_ok_and(|v| parse_flag(&v)),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// Override the port and rule file
    ///
    /// Used by tests
    pub fn with_overrides(http_port: u16, pricing_rules_path: Option<String>) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.pricing_rules_path = pricing_rules_path;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
