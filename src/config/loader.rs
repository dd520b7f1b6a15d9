//! Load settings from the environment (after `.env`) or from any key lookup.

use crate::config::types::*;
use crate::error::ConfigError;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

/// Read settings from the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
pub fn from_env() -> Result<AppConfig, ConfigError> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Read settings through `lookup`; empty values count as unset.
pub fn from_lookup<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let dialect = match get("DB_DIALECT") {
        Some(d) => d.parse()?,
        None => Dialect::Postgres,
    };
    let url = get("DATABASE_URL");
    let (name, user) = if url.is_some() {
        (get("DB_NAME").unwrap_or_default(), get("DB_USER").unwrap_or_default())
    } else {
        (
            get("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?,
            get("DB_USER").ok_or(ConfigError::Missing("DB_USER"))?,
        )
    };
    let db = DbConfig {
        url,
        name,
        user,
        password: get("DB_PASSWORD").unwrap_or_default(),
        host: get("DB_HOST").unwrap_or_else(|| "localhost".into()),
        port: parse_or("DB_PORT", get("DB_PORT"), DEFAULT_DB_PORT)?,
        dialect,
    };

    let host: IpAddr = parse_or("HOST", get("HOST"), IpAddr::from([0, 0, 0, 0]))?;
    let port: u16 = parse_or("PORT", get("PORT"), DEFAULT_LISTEN_PORT)?;
    let max_connections: u32 = parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), DEFAULT_MAX_CONNECTIONS)?;
    if max_connections == 0 {
        return Err(ConfigError::Invalid {
            key: "DB_MAX_CONNECTIONS",
            value: "0".into(),
        });
    }
    let server = ServerConfig {
        listen: SocketAddr::new(host, port),
        max_connections,
        body_limit: parse_or("BODY_LIMIT_BYTES", get("BODY_LIMIT_BYTES"), DEFAULT_BODY_LIMIT)?,
    };

    Ok(AppConfig { db, server })
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid { key, value: v }),
    }
}
