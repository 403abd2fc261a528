use std::time::Duration;

use anyhow::{Context, Result};

use crate::matching::aggregator::{MatchOptions, MatchWeights, DEFAULT_TOP_N};

/// Application configuration loaded from environment variables.
/// Startup fails if a present variable cannot be parsed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Unset runs the API against the seeded in-memory demo store.
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub match_options: MatchOptions,
    pub match_cache_capacity: u64,
    pub match_cache_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let weights = MatchWeights {
            riasec: parse_or(&lookup, "MATCH_WEIGHT_RIASEC", 1.0)?,
            aptitude: parse_or(&lookup, "MATCH_WEIGHT_APTITUDE", 1.0)?,
            ocean: parse_or(&lookup, "MATCH_WEIGHT_OCEAN", 1.0)?,
        };
        weights.validate()?;

        let top_n: usize = parse_or(&lookup, "MATCH_TOP_N", DEFAULT_TOP_N)?;
        if top_n == 0 {
            anyhow::bail!("MATCH_TOP_N must be at least 1");
        }

        Ok(Config {
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            match_options: MatchOptions { top_n, weights },
            match_cache_capacity: parse_or(&lookup, "MATCH_CACHE_CAPACITY", 10_000)?,
            match_cache_ttl: Duration::from_secs(parse_or(&lookup, "MATCH_CACHE_TTL_SECS", 900)?),
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
