//! Environment-driven server configuration.
//!
//! Required: `DATABASE_URL`, `JWT_SECRET`. Optional: `HOST` (127.0.0.1),
//! `PORT` (5000), `ADMIN_SETUP_KEY` (enables `POST /api/user/admin`),
//! `SENTRY_DSN`.
//!
//! Secrets are refused when they are short, low-entropy, or look like an
//! unedited template value, so a deployment cannot come up signing tokens
//! with `changeme`.

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Secrets shorter than this are rejected outright.
const MIN_SECRET_LENGTH: usize = 32;

/// Minimum Shannon entropy, in bits per character, for a configured secret.
const MIN_SECRET_ENTROPY: f64 = 3.3;

/// Substrings that mark a secret as an unedited template value.
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Errors raised while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingEnvVar(String),
    #[error("environment variable {0} is invalid: {1}")]
    InvalidEnvVar(String, String),
    #[error("{0} looks insecure: {1}")]
    InsecureSecret(String, String),
}

/// Server configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `PostgreSQL` connection string (contains credentials).
    pub database_url: SecretString,
    /// Bind address.
    pub host: IpAddr,
    /// Listen port.
    pub port: u16,
    /// HS256 signing secret for auth tokens.
    pub jwt_secret: SecretString,
    /// Shared secret gating `POST /api/user/admin`; `None` disables the route.
    pub admin_setup_key: Option<SecretString>,
    /// Sentry DSN; error tracking is off when unset.
    pub sentry_dsn: Option<String>,
}

impl ServerConfig {
    /// Load and validate the configuration from the environment, reading a
    /// `.env` file first when one is present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a required variable is absent, a value
    /// fails to parse, or a secret fails the strength checks.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let admin_setup_key = match std::env::var("ADMIN_SETUP_KEY") {
            Ok(value) => Some(checked_secret("ADMIN_SETUP_KEY", value)?),
            Err(_) => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL").map(SecretString::from)?,
            host: parsed_or_default("HOST", "127.0.0.1")?,
            port: parsed_or_default("PORT", "5000")?,
            jwt_secret: checked_secret("JWT_SECRET", required("JWT_SECRET")?)?,
            admin_setup_key,
            sentry_dsn: std::env::var("SENTRY_DSN").ok(),
        })
    }

    /// The address the listener binds to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parsed_or_default<T>(name: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    std::env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar(name.to_string(), e.to_string()))
}

/// Reject short, template-looking, or low-entropy secrets.
fn checked_secret(name: &str, value: String) -> Result<SecretString, ConfigError> {
    let insecure = |reason: String| ConfigError::InsecureSecret(name.to_string(), reason);

    if value.len() < MIN_SECRET_LENGTH {
        return Err(insecure(format!(
            "shorter than {MIN_SECRET_LENGTH} characters"
        )));
    }

    let lower = value.to_lowercase();
    if let Some(pattern) = PLACEHOLDER_PATTERNS.iter().find(|p| lower.contains(*p)) {
        return Err(insecure(format!(
            "looks like a placeholder (contains '{pattern}')"
        )));
    }

    let entropy = shannon_entropy(&value);
    if entropy < MIN_SECRET_ENTROPY {
        return Err(insecure(format!(
            "entropy {entropy:.2} bits/char is below {MIN_SECRET_ENTROPY}; generate it randomly"
        )));
    }

    Ok(SecretString::from(value))
}

/// Shannon entropy of the character distribution, in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut counts: HashMap<char, f64> = HashMap::new();
    for c in s.chars() {
        *counts.entry(c).or_insert(0.0) += 1.0;
    }

    let len: f64 = counts.values().sum();
    counts
        .values()
        .map(|count| {
            let p = count / len;
            -p * p.log2()
        })
        .sum()
}
