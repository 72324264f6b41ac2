use actix_web::cookie::Key;
use log::info;
use std::{env, fmt, str::FromStr};

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
/// Lower bound imposed by the cookie key derivation.
pub const MIN_SESSION_SECRET_LEN: usize = 64;

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, reason } => write!(f, "{} is invalid: {}", key, reason),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_address: String,
    pub session_key: Key,
    pub cookie_secure: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = required(&lookup, "DATABASE_URL")?;

        let secret = required(&lookup, "SESSION_SECRET")?;
        if secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "SESSION_SECRET",
                reason: format!("needs at least {} bytes", MIN_SESSION_SECRET_LEN),
            });
        }

        Ok(Config {
            database_url,
            database_max_connections: optional(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            session_key: Key::from(secret.as_bytes()),
            cookie_secure: optional(&lookup, "COOKIE_SECURE", false)?,
        })
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn optional<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + fmt::Display,
    T::Err: fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|err: T::Err| ConfigError::Invalid {
            key,
            reason: err.to_string(),
        }),
        None => {
            info!("{} not set, using default: {}", key, default);
            Ok(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SECRET: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/reggie"),
            ("SESSION_SECRET", SECRET),
        ]))
        .unwrap();
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.database_max_connections, DEFAULT_MAX_CONNECTIONS);
        assert!(!config.cookie_secure);
    }

    #[test]
    fn requires_database_url() {
        let err = Config::from_lookup(lookup(&[("SESSION_SECRET", SECRET)])).err().unwrap();
        assert_eq!(err.to_string(), "DATABASE_URL must be set");
    }

    #[test]
    fn rejects_short_session_secret() {
        let err = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/reggie"),
            ("SESSION_SECRET", "too-short"),
        ]))
        .err()
        .unwrap();
        assert!(matches!(err, ConfigError::Invalid { key: "SESSION_SECRET", .. }));
    }

    #[test]
    fn rejects_unparseable_numbers() {
        let err = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/reggie"),
            ("SESSION_SECRET", SECRET),
            ("DATABASE_MAX_CONNECTIONS", "many"),
        ]))
        .err()
        .unwrap();
        assert!(err.to_string().starts_with("DATABASE_MAX_CONNECTIONS is invalid"));
    }
}
