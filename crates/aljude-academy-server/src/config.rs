use aljude_academy_core::{
    ENV_ACADEMY_BIND, ENV_ACADEMY_CACHE_MAX_AGE_SECS, ENV_ACADEMY_LOG_JSON,
    ENV_ACADEMY_REQUEST_BODY_LIMIT_BYTES,
};
use std::env;
use std::time::Duration;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_REQUEST_BODY_LIMIT_BYTES: usize = 64 * 1024;
pub const DEFAULT_CACHE_MAX_AGE_SECS: u64 = 3600;

/// Server runtime settings, read once from `ACADEMY_*` at startup. A
/// malformed value is a startup error, not a silent fallback.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: String,
    pub log_json: bool,
    pub request_body_limit_bytes: usize,
    pub cache_max_age: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            log_json: false,
            request_body_limit_bytes: DEFAULT_REQUEST_BODY_LIMIT_BYTES,
            cache_max_age: Duration::from_secs(DEFAULT_CACHE_MAX_AGE_SECS),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            bind: env::var(ENV_ACADEMY_BIND).unwrap_or_else(|_| DEFAULT_BIND.to_string()),
            log_json: env_bool(ENV_ACADEMY_LOG_JSON, false)?,
            request_body_limit_bytes: usize::try_from(env_u64(
                ENV_ACADEMY_REQUEST_BODY_LIMIT_BYTES,
                DEFAULT_REQUEST_BODY_LIMIT_BYTES as u64,
            )?)
            .map_err(|_| format!("{ENV_ACADEMY_REQUEST_BODY_LIMIT_BYTES} out of range"))?,
            cache_max_age: Duration::from_secs(env_u64(
                ENV_ACADEMY_CACHE_MAX_AGE_SECS,
                DEFAULT_CACHE_MAX_AGE_SECS,
            )?),
        })
    }
}

pub(crate) fn env_bool(name: &str, default: bool) -> Result<bool, String> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => match raw.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Ok(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Ok(false),
            other => Err(format!("{name} must be a boolean, got '{other}'")),
        },
    }
}

pub(crate) fn env_u64(name: &str, default: u64) -> Result<u64, String> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|_| format!("{name} must be an unsigned integer, got '{raw}'")),
    }
}
