//! Typed configuration from environment variables.
//!
//! Resolved once at startup and passed to whatever needs it. Every variable
//! has a fallback except the Gemini API key, so resolution never fails.
//! Sensitive values are wrapped in secrecy::SecretString to prevent log leaks.

pub mod constants;
pub mod env_file;
pub mod secrets;

use std::fmt;

use crate::error::{Error, Result};
use constants::{
    DEFAULT_ENVIRONMENT, DEFAULT_PORT, DEFAULT_SERVER_URL, DEVELOPMENT_ENVIRONMENT, ENV_VAR,
    GEMINI_API_KEY_VAR, PORT_VAR, SERVER_URL_VAR,
};
use secrecy::SecretString;
use serde::Serialize;

#[derive(Debug)]
pub struct Config {
    pub server_url: String,
    /// Kept as text; see [`Config::port_number`] for the typed value.
    pub port: String,
    pub environment: String,
    pub gemini_api_key: Option<SecretString>,
}

impl Config {
    /// Resolve configuration from the process environment.
    ///
    /// Call [`env_file::load_default`] (or [`env_file::load`]) first if a
    /// `.env` file should seed the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration against an arbitrary variable source.
    ///
    /// Empty values fall back to the default for the defaulted fields. The
    /// API key has no default, so an empty key is kept as set.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());

        Self {
            server_url: var(SERVER_URL_VAR).unwrap_or_else(|| DEFAULT_SERVER_URL.to_string()),
            port: var(PORT_VAR).unwrap_or_else(|| DEFAULT_PORT.to_string()),
            environment: var(ENV_VAR).unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            gemini_api_key: lookup(GEMINI_API_KEY_VAR).map(SecretString::from),
        }
    }

    /// `host:port` suitable for a socket bind.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_url, self.port)
    }

    /// Parse the textual port.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if `PORT` is not a number in `0..=65535`.
    pub fn port_number(&self) -> Result<u16> {
        self.port
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("invalid {PORT_VAR} {:?}: {e}", self.port)))
    }

    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case(DEVELOPMENT_ENVIRONMENT)
    }

    /// Redacted view that is safe to log or print.
    pub fn summary(&self) -> ConfigSummary {
        ConfigSummary {
            server_url: self.server_url.clone(),
            port: self.port.clone(),
            environment: self.environment.clone(),
            gemini_api_key_set: self.gemini_api_key.is_some(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSummary {
    pub server_url: String,
    pub port: String,
    pub environment: String,
    pub gemini_api_key_set: bool,
}

impl fmt::Display for ConfigSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.gemini_api_key_set {
            secrets::REDACTED
        } else {
            secrets::UNSET
        };
        writeln!(f, "Server URL:      {}", self.server_url)?;
        writeln!(f, "Port:            {}", self.port)?;
        writeln!(f, "Environment:     {}", self.environment)?;
        write!(f, "Gemini API Key:  {key}")
    }
}
