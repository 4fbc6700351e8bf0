//! Server configuration
//!
//! Read once at startup from the environment (after `.env` is loaded).
//!
//! | Variable           | Default                     |
//! |--------------------|-----------------------------|
//! | `LLM_MODEL`        | `gpt-4o-mini`               |
//! | `LLM_TEMPERATURE`  | `0.3`                       |
//! | `LLM_TIMEOUT_SECS` | `60`                        |
//! | `OPENAI_API_KEY`   | unset                       |
//! | `OPENAI_BASE_URL`  | `https://api.openai.com/v1` |
//! | `BIND_ADDR`        | `127.0.0.1:8501`            |

use std::net::SocketAddr;
use std::time::Duration;

use expert_chat::DomainError;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8501";

/// Process-wide settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub model: String,
    pub temperature: f32,
    /// Timeout for one completion request. There is no retry.
    pub timeout: Duration,
    pub api_key: Option<String>,
    pub base_url: String,
    pub bind_addr: SocketAddr,
}

impl Settings {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let model = get("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let temperature = match get("LLM_TEMPERATURE") {
            Some(raw) => parse_temperature(&raw)?,
            None => DEFAULT_TEMPERATURE,
        };

        let timeout_secs = match get("LLM_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().ok().filter(|s| *s > 0).ok_or_else(|| {
                DomainError::Config(format!(
                    "LLM_TIMEOUT_SECS must be a positive integer, got '{raw}'"
                ))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let base_url = get("OPENAI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse::<SocketAddr>().map_err(|e| {
            DomainError::Config(format!("BIND_ADDR '{bind_raw}' is not a socket address: {e}"))
        })?;

        Ok(Self {
            model,
            temperature,
            timeout: Duration::from_secs(timeout_secs),
            api_key: get("OPENAI_API_KEY"),
            base_url,
            bind_addr,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8501)),
        }
    }
}

fn parse_temperature(raw: &str) -> Result<f32, DomainError> {
    let value: f32 = raw.parse().map_err(|_| {
        DomainError::Config(format!("LLM_TEMPERATURE must be a number, got '{raw}'"))
    })?;

    if !(0.0..=2.0).contains(&value) {
        return Err(DomainError::Config(format!(
            "LLM_TEMPERATURE must be between 0.0 and 2.0, got {value}"
        )));
    }

    Ok(value)
}
