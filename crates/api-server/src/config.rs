//! Server configuration read from the environment

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::Uri;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATA_DIR: &str = ".tasks-data";

/// Every problem found while loading configuration
#[derive(Debug, thiserror::Error)]
#[error("Invalid configuration: {}", .0.join("; "))]
pub struct ConfigError(pub Vec<String>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Test,
}

impl Environment {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" => Some(Self::Development),
            "production" => Some(Self::Production),
            "test" => Some(Self::Test),
            _ => None,
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub environment: Environment,
    pub port: u16,
    /// Browser origin allowed by CORS, `scheme://authority`
    pub client_origin: Option<String>,
    pub data_dir: PathBuf,
    pub seed: bool,
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_origin(raw: &str) -> Option<String> {
    let uri: Uri = raw.trim().parse().ok()?;
    let scheme = uri.scheme_str()?;
    if scheme != "http" && scheme != "https" {
        return None;
    }
    let authority = uri.authority()?;
    Some(format!("{scheme}://{authority}"))
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from `lookup`, reporting all invalid variables at once
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut problems = Vec::new();

        let environment = match lookup("APP_ENV") {
            Some(raw) => Environment::parse(&raw).unwrap_or_else(|| {
                problems.push(format!(
                    "APP_ENV must be one of development, production, test (got {raw:?})"
                ));
                Environment::Development
            }),
            None => Environment::Development,
        };

        let port = match lookup("PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => {
                    problems.push(format!("PORT must be between 1 and 65535 (got {raw:?})"));
                    DEFAULT_PORT
                }
            },
            None => DEFAULT_PORT,
        };

        let client_origin = match lookup("CLIENT_URL").filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => match parse_origin(&raw) {
                Some(origin) => Some(origin),
                None => {
                    problems.push(format!("CLIENT_URL must be an http(s) URL (got {raw:?})"));
                    None
                }
            },
            None => {
                if environment.is_production() {
                    problems.push("CLIENT_URL is required in production".to_string());
                }
                None
            }
        };

        let data_dir = lookup("TASKS_DATA_DIR")
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let seed = match lookup("TASKS_SEED") {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                problems.push(format!("TASKS_SEED must be a boolean flag (got {raw:?})"));
                false
            }),
            None => false,
        };

        if !problems.is_empty() {
            return Err(ConfigError(problems));
        }

        Ok(Self {
            environment,
            port,
            client_origin,
            data_dir,
            seed,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
