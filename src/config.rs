//! Service configuration loaded from environment variables.
//!
//! Required:
//! - `WEBHOOK_URL` — alert webhook that receives notifications
//!
//! Optional:
//! - `HOST` — bind address (default: `0.0.0.0`)
//! - `PORT` — bind port (default: `4000`)
//! - `WEBHOOK_TIMEOUT_SECS` — outbound request timeout (default: `10`)
//! - `CORS_ALLOWED_ORIGINS` — comma-separated origin allow-list
//!
//! A `.env` file in the working directory is loaded first if present.

use std::env;
use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use axum::http::HeaderValue;
use reqwest::Url;

use crate::error::{ConfigError, ConfigResult};

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://gauthumj.in",
    "https://www.gauthumj.in",
    "https://v0-gauthumj.vercel.app",
    "http://localhost:3000",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub webhook_url: Url,
    pub host: IpAddr,
    pub port: u16,
    pub webhook_timeout: Duration,
    pub cors: CorsConfig,
}

/// Browser origins allowed to call the API with credentials.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<HeaderValue>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .copied()
                .map(HeaderValue::from_static)
                .collect(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        check_dotenv(dotenvy::dotenv().map(|_| ()))?;
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let raw_url = get("WEBHOOK_URL")
            .ok_or_else(|| ConfigError::MissingVar("WEBHOOK_URL".to_string()))?;
        let webhook_url = parse_webhook_url(raw_url.trim())?;

        let host = match get("HOST") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| invalid("HOST", format!("not an IP address: {}", raw)))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| invalid("PORT", format!("must be a port number, got: {}", raw)))?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match get("WEBHOOK_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                invalid(
                    "WEBHOOK_TIMEOUT_SECS",
                    format!("must be a positive number, got: {}", raw),
                )
            })?,
            None => DEFAULT_WEBHOOK_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(invalid("WEBHOOK_TIMEOUT_SECS", "must be greater than zero"));
        }

        let cors = match get("CORS_ALLOWED_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => CorsConfig::default(),
        };

        Ok(Config {
            webhook_url,
            host,
            port,
            webhook_timeout: Duration::from_secs(timeout_secs),
            cors,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// A missing `.env` is fine; an unreadable or malformed one is not.
fn check_dotenv(loaded: Result<(), dotenvy::Error>) -> ConfigResult<()> {
    match loaded {
        Ok(()) => Ok(()),
        Err(dotenvy::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(invalid(".env", e.to_string())),
    }
}

fn invalid(var: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        var: var.to_string(),
        reason: reason.into(),
    }
}

fn parse_webhook_url(raw: &str) -> ConfigResult<Url> {
    let url = Url::parse(raw).map_err(|e| invalid("WEBHOOK_URL", e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(
            "WEBHOOK_URL",
            format!("must use http or https, got: {}", other),
        )),
    }
}

fn parse_origins(raw: &str) -> ConfigResult<CorsConfig> {
    let mut allowed_origins = Vec::new();
    for origin in raw.split(',').map(str::trim).filter(|o| !o.is_empty()) {
        // Credentialed CORS cannot use a wildcard origin.
        if origin == "*" {
            return Err(invalid(
                "CORS_ALLOWED_ORIGINS",
                "wildcard origin is not allowed with credentials",
            ));
        }
        let value = HeaderValue::from_str(origin).map_err(|_| {
            invalid(
                "CORS_ALLOWED_ORIGINS",
                format!("not a valid origin: {}", origin),
            )
        })?;
        allowed_origins.push(value);
    }
    Ok(CorsConfig { allowed_origins })
}
