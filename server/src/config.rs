//! Server configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` through `dotenvy` before `from_env` runs, so
//! values may come from either place. Unparseable values fall back to the
//! defaults rather than aborting startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PAGE_SIZE_MAX: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Populate the in-memory store with demo data at startup.
    pub seed_fixtures: bool,
    /// Upper bound applied to every `page_size`/`pageSize` parameter.
    pub page_size_max: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, seed_fixtures: true, page_size_max: DEFAULT_PAGE_SIZE_MAX }
    }
}

impl ServerConfig {
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ACI_SEED_FIXTURES`: default true
    /// - `ACI_PAGE_SIZE_MAX`: default 100, at least 1
    pub fn from_env() -> Self {
        Self {
            port: env_parse("PORT", DEFAULT_PORT),
            seed_fixtures: env_bool("ACI_SEED_FIXTURES").unwrap_or(true),
            page_size_max: env_parse("ACI_PAGE_SIZE_MAX", DEFAULT_PAGE_SIZE_MAX).max(1),
        }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}
