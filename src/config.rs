use crate::constants::{WILDCARD, defaults, env};
use crate::util::split_list;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{variable} must be a boolean (true/false/1/0/yes/no/on/off), got `{value}`")]
    InvalidBool { variable: &'static str, value: String },
    #[error("{variable} must be a non-negative integer, got `{value}`")]
    InvalidNumber { variable: &'static str, value: String },
}

/// Externally supplied CORS settings, resolved once at process start.
///
/// `Default` reproduces the task manager's original policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub path_pattern: String,
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub exposed_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age: Option<u64>,
    pub options_success_status: u16,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            path_pattern: defaults::PATH_PATTERN.to_string(),
            allowed_origins: vec![defaults::ALLOWED_ORIGIN.to_string()],
            allowed_methods: defaults::ALLOWED_METHODS.map(String::from).to_vec(),
            allowed_headers: vec![WILDCARD.to_string()],
            exposed_headers: Vec::new(),
            allow_credentials: true,
            max_age: Some(defaults::MAX_AGE_SECS),
            options_success_status: defaults::OPTIONS_SUCCESS_STATUS,
        }
    }
}

impl CorsConfig {
    /// Reads the `CORS_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup`, falling back to defaults for
    /// unset or blank variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = read(env::PATH_PATTERN) {
            config.path_pattern = value.trim().to_string();
        }
        if let Some(value) = read(env::ALLOWED_ORIGINS) {
            config.allowed_origins = split_owned(&value);
        }
        if let Some(value) = read(env::ALLOWED_METHODS) {
            config.allowed_methods = split_owned(&value);
        }
        if let Some(value) = read(env::ALLOWED_HEADERS) {
            config.allowed_headers = split_owned(&value);
        }
        if let Some(value) = read(env::EXPOSED_HEADERS) {
            config.exposed_headers = split_owned(&value);
        }
        if let Some(value) = read(env::ALLOW_CREDENTIALS) {
            config.allow_credentials = parse_bool(env::ALLOW_CREDENTIALS, &value)?;
        }
        // Set-but-blank disables the header, unlike the other variables.
        if let Some(value) = lookup(env::MAX_AGE) {
            config.max_age = parse_max_age(&value)?;
        }

        Ok(config)
    }
}

fn split_owned(value: &str) -> Vec<String> {
    split_list(value).map(str::to_string).collect()
}

fn parse_bool(variable: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            variable,
            value: value.to_string(),
        }),
    }
}

fn parse_max_age(value: &str) -> Result<Option<u64>, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<u64>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidNumber {
            variable: env::MAX_AGE,
            value: value.to_string(),
        })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
