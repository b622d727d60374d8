//! Central module for application-wide configuration settings.
//!
//! This module loads the server bind address, the JWT signing secret, token
//! lifetime, bcrypt cost and the optimistic-write retry budget from the
//! environment (optionally seeded from a `.env` file). The signing secret has
//! no default: startup fails if it is missing.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

pub const JWT_SECRET_VAR: &str = "BEDWATCH_JWT_SECRET";
pub const BIND_ADDR_VAR: &str = "BEDWATCH_BIND_ADDR";
pub const TOKEN_TTL_VAR: &str = "BEDWATCH_TOKEN_TTL_SECS";
pub const BCRYPT_COST_VAR: &str = "BEDWATCH_BCRYPT_COST";
pub const WRITE_RETRIES_VAR: &str = "BEDWATCH_WRITE_RETRIES";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_TOKEN_TTL_SECS: u64 = 60 * 60 * 24;
pub const MAX_TOKEN_TTL_SECS: u64 = 60 * 60 * 24 * 365;
const DEFAULT_BCRYPT_COST: u32 = 10;
const DEFAULT_WRITE_RETRIES: u32 = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set to a non-empty value")]
    Missing(&'static str),
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
    pub write_retries: u32,
}

impl Config {
    /// Reads configuration from the process environment after loading `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup(JWT_SECRET_VAR)
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing(JWT_SECRET_VAR))?;

        let bind_addr = lookup(BIND_ADDR_VAR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: BIND_ADDR_VAR,
                reason: e.to_string(),
            })?;

        let token_ttl = parse_or(&lookup, TOKEN_TTL_VAR, DEFAULT_TOKEN_TTL_SECS)?;
        if !(1..=MAX_TOKEN_TTL_SECS).contains(&token_ttl) {
            return Err(ConfigError::Invalid {
                var: TOKEN_TTL_VAR,
                reason: format!("{token_ttl} is outside 1..={MAX_TOKEN_TTL_SECS}"),
            });
        }

        let bcrypt_cost = parse_or(&lookup, BCRYPT_COST_VAR, DEFAULT_BCRYPT_COST)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                var: BCRYPT_COST_VAR,
                reason: format!("{bcrypt_cost} is outside 4..=31"),
            });
        }

        let write_retries = parse_or(&lookup, WRITE_RETRIES_VAR, DEFAULT_WRITE_RETRIES)?;

        Ok(Self {
            bind_addr,
            jwt_secret,
            token_ttl: Duration::from_secs(token_ttl),
            bcrypt_cost,
            write_retries,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
