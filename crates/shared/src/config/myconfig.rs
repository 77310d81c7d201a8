use anyhow::{Context, Result, anyhow};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub run_migrations: bool,
    pub port: u16,
    pub is_dev: bool,
    pub otel_endpoint: Option<String>,
}

impl Config {
    pub fn init() -> Result<Self> {
        let run_migrations = parse_bool(
            "RUN_MIGRATIONS",
            &env_or("RUN_MIGRATIONS", "true"),
        )?;

        let port = env_or("PORT", "8080")
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let is_dev = std::env::var("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        Ok(Self {
            database: DatabaseConfig::from_env()?,
            run_migrations,
            port,
            is_dev,
            otel_endpoint: env_opt("OTEL_EXPORTER_OTLP_ENDPOINT"),
        })
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub connect_attempts: u32,
    pub connect_delay: Duration,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        let url = match std::env::var("DATABASE_URL") {
            Ok(url) if !url.is_empty() => url,
            _ => format!(
                "postgres://{user}:{password}@{host}:{port}/{name}?sslmode=disable&options=-c%20TimeZone%3D{tz}",
                user = env_or("DB_USER", "subsuser"),
                password = env_or("DB_PASSWORD", "subspass"),
                host = env_or("DB_HOST", "postgres"),
                port = env_or("DB_PORT", "5432"),
                name = env_or("DB_NAME", "subsdb"),
                tz = env_or("DB_TZ", "UTC"),
            ),
        };

        let connect_attempts = env_or("DB_CONNECT_ATTEMPTS", "5")
            .parse::<u32>()
            .context("DB_CONNECT_ATTEMPTS must be a valid u32 integer")?;

        if connect_attempts == 0 {
            return Err(anyhow!("DB_CONNECT_ATTEMPTS must be at least 1"));
        }

        let connect_delay = env_or("DB_CONNECT_DELAY_SECS", "5")
            .parse::<u64>()
            .map(Duration::from_secs)
            .context("DB_CONNECT_DELAY_SECS must be a valid u64 integer")?;

        Ok(Self {
            url,
            connect_attempts,
            connect_delay,
        })
    }
}

fn env_or(key: &str, fallback: &str) -> String {
    match std::env::var(key) {
        Ok(v) if !v.is_empty() => v,
        _ => fallback.to_string(),
    }
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(anyhow!("{key} must be 'true' or 'false', got '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_accepts_only_literal_values() {
        assert!(parse_bool("RUN_MIGRATIONS", "true").unwrap());
        assert!(!parse_bool("RUN_MIGRATIONS", "false").unwrap());

        let err = parse_bool("RUN_MIGRATIONS", "yes").unwrap_err();
        assert_eq!(
            err.to_string(),
            "RUN_MIGRATIONS must be 'true' or 'false', got 'yes'"
        );
    }

    #[test]
    fn env_or_falls_back_for_unset_keys() {
        assert_eq!(
            env_or("SUBSCRIPTION_SERVICE_TEST_UNSET_KEY", "fallback"),
            "fallback"
        );
        assert_eq!(env_opt("SUBSCRIPTION_SERVICE_TEST_UNSET_KEY"), None);
    }
}
