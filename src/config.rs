// src/config.rs
use std::path::PathBuf;
use std::str::FromStr;

use crate::services::thinking::ThinkingDelay;

#[derive(Clone, Debug)]
pub struct Config {
    /// Address for the HTTP listener.
    pub bind_addr: String,
    /// Directory holding the chat page and its assets.
    pub static_dir: PathBuf,
    pub thinking: ThinkingDelay,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            static_dir: PathBuf::from("public"),
            thinking: ThinkingDelay::default(),
        }
    }
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// | Variable             | Default        |
    /// |----------------------|----------------|
    /// | `BIND_ADDR`          | `0.0.0.0:3000` |
    /// | `STATIC_DIR`         | `public`       |
    /// | `THINK_DELAY_MIN_MS` | `500`          |
    /// | `THINK_DELAY_MAX_MS` | `1500`         |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            thinking: ThinkingDelay {
                min_ms: parse_or(&lookup, "THINK_DELAY_MIN_MS", defaults.thinking.min_ms),
                max_ms: parse_or(&lookup, "THINK_DELAY_MAX_MS", defaults.thinking.max_ms),
            },
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {key}={raw:?}, using default");
            default
        }),
    }
}
