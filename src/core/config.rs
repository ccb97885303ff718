// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use log::LevelFilter;

// Configuration for the generator service and its form client
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Form client
    pub server_url: String,

    // Session
    pub history_limit: usize,
    pub session_lifetime: Duration,
    pub session_cookie_secure: bool,
    pub session_cleanup_interval: Duration,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "0.0.0.0".to_string(),
            web_port: 5050,

            // Form client
            server_url: "http://127.0.0.1:5050".to_string(),

            // Session
            history_limit: 100,
            session_lifetime: Duration::from_secs(6 * 60 * 60), // 6 hours
            session_cookie_secure: false,
            session_cleanup_interval: Duration::from_secs(300),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Web Interface
        if let Ok(address) = env::var("WEB_ADDRESS") {
            config.web_address = address;
        }

        if let Ok(val) = env::var("WEB_PORT") {
            if let Ok(port) = val.parse() {
                config.web_port = port;
            }
        }

        // Form client
        if let Ok(url) = env::var("SERVER_URL") {
            config.server_url = url;
        }

        // Session
        if let Ok(val) = env::var("HISTORY_LIMIT") {
            if let Ok(limit) = val.parse() {
                config.history_limit = limit;
            }
        }

        if let Ok(val) = env::var("SESSION_LIFETIME_SECS") {
            if let Ok(secs) = val.parse() {
                config.session_lifetime = Duration::from_secs(secs);
            }
        }

        if let Ok(val) = env::var("SESSION_COOKIE_SECURE") {
            if let Ok(secure) = val.parse() {
                config.session_cookie_secure = secure;
            }
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            config.log_level = parse_level(&level).unwrap_or_else(|| {
                log::warn!("Unknown log level '{}', keeping {}", level, config.log_level);
                config.log_level
            });
        }

        if let Ok(file) = env::var("LOG_FILE") {
            config.log_file = Some(PathBuf::from(file));
        }

        config
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_address.clone(), self.web_port)
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.to_lowercase().as_str() {
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}
