//! Runtime settings read from the environment (a `.env` file is honoured by the binary).

use crate::error::ConfigError;
use regex::Regex;
use std::net::SocketAddr;
use std::str::FromStr;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/drinks";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_SCHEMA: &str = "public";
const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

/// Which backend holds the drinks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl FromStr for StoreKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub store: StoreKind,
    pub listen_addr: SocketAddr,
    pub max_connections: u32,
    /// Schema holding the drinks table. Must be a plain PostgreSQL identifier.
    pub schema: String,
    pub create_database: bool,
    pub body_limit: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);
        let store = parse_or("DRINKS_STORE", &lookup, defaults.store)?;
        let listen_addr = parse_or("DRINKS_LISTEN_ADDR", &lookup, defaults.listen_addr)?;
        let max_connections = parse_or("DRINKS_MAX_CONNECTIONS", &lookup, defaults.max_connections)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DRINKS_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }
        let schema = lookup("DRINKS_SCHEMA").unwrap_or(defaults.schema);
        validate_identifier("DRINKS_SCHEMA", &schema)?;
        let create_database = parse_or("DRINKS_CREATE_DATABASE", &lookup, defaults.create_database)?;
        let body_limit = parse_or("DRINKS_BODY_LIMIT", &lookup, defaults.body_limit)?;

        Ok(Settings {
            database_url,
            store,
            listen_addr,
            max_connections,
            schema,
            create_database,
            body_limit,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_url: DEFAULT_DATABASE_URL.into(),
            store: StoreKind::Postgres,
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            schema: DEFAULT_SCHEMA.into(),
            create_database: true,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

fn parse_or<T, F>(key: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

fn validate_identifier(key: &'static str, value: &str) -> Result<(), ConfigError> {
    let re = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,62}$").map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })?;
    if !re.is_match(value) {
        return Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        });
    }
    Ok(())
}
