#![forbid(unsafe_code)]

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

pub const CRATE_NAME: &str = "aljude-academy-core";

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    Usage = 2,
    Validation = 3,
    Internal = 10,
}

pub const ENV_ACADEMY_LOG_LEVEL: &str = "ACADEMY_LOG_LEVEL";
pub const ENV_ACADEMY_LOG_JSON: &str = "ACADEMY_LOG_JSON";
pub const ENV_ACADEMY_BIND: &str = "ACADEMY_BIND";
pub const ENV_ACADEMY_REQUEST_BODY_LIMIT_BYTES: &str = "ACADEMY_REQUEST_BODY_LIMIT_BYTES";
pub const ENV_ACADEMY_CACHE_MAX_AGE_SECS: &str = "ACADEMY_CACHE_MAX_AGE_SECS";

#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineError {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: BTreeMap<String, String>,
}

impl MachineError {
    #[must_use]
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_detail(mut self, key: &str, value: &str) -> Self {
        self.details.insert(key.to_string(), value.to_string());
        self
    }
}
