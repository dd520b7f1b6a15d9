//! Runtime settings for the database connection and the HTTP listener.

use crate::error::ConfigError;
use sqlx::postgres::PgConnectOptions;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_LISTEN_PORT: u16 = 80;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

/// SQL engine variant. Only PostgreSQL is wired up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
}

impl FromStr for Dialect {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            other => Err(ConfigError::UnsupportedDialect(other.to_string())),
        }
    }
}

/// Where the Dog table lives. A full `url` wins over the individual parts.
#[derive(Clone, Debug)]
pub struct DbConfig {
    pub url: Option<String>,
    pub name: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub dialect: Dialect,
}

impl DbConfig {
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url).map_err(|_| ConfigError::Invalid {
                key: "DATABASE_URL",
                value: redact_url(url),
            });
        }
        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name))
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub listen: SocketAddr,
    pub max_connections: u32,
    pub body_limit: usize,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub db: DbConfig,
    pub server: ServerConfig,
}

/// Keep credentials out of logs and error messages.
fn redact_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_string(),
    }
}
