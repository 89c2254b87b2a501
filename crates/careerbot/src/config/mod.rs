use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub advisor: AdvisorConfig,
    pub reports: ReportConfig,
    pub sessions: SessionConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(&var_or("APP_ENV", "development"));

        let host = var_or("APP_HOST", "127.0.0.1");
        let port = var_or("APP_PORT", "3000")
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = var_or("APP_LOG_LEVEL", "info");

        let advisor = AdvisorConfig {
            enabled: parse_flag("APP_ADVISOR_ENABLED", true)?,
            endpoint: var_or("APP_ADVISOR_URL", "http://localhost:11434"),
            model: var_or("APP_ADVISOR_MODEL", "gemma:2b"),
            timeout: Duration::from_secs(parse_number("APP_ADVISOR_TIMEOUT_SECS", 60)?),
        };

        let url_prefix = var_or("APP_REPORTS_URL_PREFIX", "/reports");
        if !url_prefix.starts_with('/') {
            return Err(ConfigError::InvalidReportsPrefix { value: url_prefix });
        }
        let reports = ReportConfig {
            directory: PathBuf::from(var_or("APP_REPORTS_DIR", "static/reports")),
            url_prefix,
        };

        let ttl_minutes = parse_number("APP_SESSION_TTL_MINUTES", 60)?;
        if ttl_minutes == 0 {
            return Err(ConfigError::InvalidNumber {
                var: "APP_SESSION_TTL_MINUTES",
            });
        }

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                ansi: environment == AppEnvironment::Development,
            },
            advisor,
            reports,
            sessions: SessionConfig {
                idle_ttl: Duration::from_secs(ttl_minutes * 60),
            },
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_number(key: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidNumber { var: key }),
        Err(_) => Ok(default),
    }
}

fn parse_flag(key: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidFlag { var: key }),
        },
        Err(_) => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

/// Connection settings for the advisory text generator.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub model: String,
    pub timeout: Duration,
}

/// Where finished PDF reports are written and how they are addressed.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub directory: PathBuf,
    pub url_prefix: String,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub idle_ttl: Duration,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { var: &'static str },
    InvalidFlag { var: &'static str },
    InvalidReportsPrefix { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { var } => {
                write!(f, "{var} must be a positive whole number")
            }
            ConfigError::InvalidFlag { var } => write!(f, "{var} must be true or false"),
            ConfigError::InvalidReportsPrefix { value } => write!(
                f,
                "APP_REPORTS_URL_PREFIX must be an absolute path such as /reports (got {value:?})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidNumber { .. }
            | ConfigError::InvalidFlag { .. }
            | ConfigError::InvalidReportsPrefix { .. } => None,
        }
    }
}
