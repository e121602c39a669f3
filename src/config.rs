// src/config.rs
use crate::errors::ConfigError;
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend REST root. Always ends with '/', so relative joins append.
    pub api_base_url: Url,
    pub bind_addr: SocketAddr,
    pub cache_path: String,
    /// Seconds a cached GET stays fresh. Bounded to `i64` for timestamp math.
    pub cache_ttl_secs: i64,
    pub http_timeout: Duration,
    pub max_workers: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_base = lookup("REFERRAL_API_BASE_URL")
            .ok_or(ConfigError::Missing("REFERRAL_API_BASE_URL"))?;

        let bind_addr = lookup("REFERRAL_BIND_ADDR")
            .unwrap_or_else(|| "127.0.0.1:3000".to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "REFERRAL_BIND_ADDR",
                reason: e.to_string(),
            })?;

        let ttl = parse_number(&lookup, "REFERRAL_CACHE_TTL_SECS", 60)?;
        let cache_ttl_secs = i64::try_from(ttl).map_err(|_| ConfigError::Invalid {
            name: "REFERRAL_CACHE_TTL_SECS",
            reason: format!("{ttl} exceeds {}", i64::MAX),
        })?;

        let max_workers = parse_number(&lookup, "REFERRAL_MAX_WORKERS", 8)?;
        if max_workers == 0 {
            return Err(ConfigError::Invalid {
                name: "REFERRAL_MAX_WORKERS",
                reason: "at least one worker is required".into(),
            });
        }
        let max_workers = usize::try_from(max_workers).map_err(|e| ConfigError::Invalid {
            name: "REFERRAL_MAX_WORKERS",
            reason: e.to_string(),
        })?;

        Ok(Self {
            api_base_url: parse_base_url(&raw_base)?,
            bind_addr,
            cache_path: lookup("REFERRAL_CACHE_PATH")
                .unwrap_or_else(|| "referral_cache.sqlite3".to_string()),
            cache_ttl_secs,
            http_timeout: Duration::from_secs(parse_number(&lookup, "REFERRAL_HTTP_TIMEOUT_SECS", 30)?),
            max_workers,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }

    Url::parse(&normalized).map_err(|e| ConfigError::Invalid {
        name: "REFERRAL_API_BASE_URL",
        reason: e.to_string(),
    })
}

fn parse_number<F>(lookup: &F, name: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(v) => v.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
    }
}
