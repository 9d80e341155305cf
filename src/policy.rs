use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::config::CorsConfig;
use crate::constants::defaults;
use crate::origin::AllowedOrigins;
use crate::path_pattern::PathPattern;
use crate::pattern::PatternError;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error(
        "allowed origins cannot be `*` while credentials are allowed; list the origins explicitly"
    )]
    CredentialsRequireSpecificOrigin,
    #[error("at least one allowed origin is required")]
    NoAllowedOrigins,
    #[error("at least one allowed method is required")]
    NoAllowedMethods,
    #[error("`{0}` is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("preflight success status must be 2xx, got {0}")]
    InvalidSuccessStatus(u16),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// Immutable CORS policy, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    path_pattern: PathPattern,
    allowed_origins: AllowedOrigins,
    allowed_methods: AllowedMethods,
    allowed_headers: AllowedHeaders,
    exposed_headers: Vec<String>,
    allow_credentials: bool,
    max_age: Option<u64>,
    options_success_status: u16,
}

impl CorsPolicy {
    pub fn from_config(config: &CorsConfig) -> Result<Self, PolicyError> {
        let path_pattern = PathPattern::parse(&config.path_pattern)?;

        let allowed_origins = AllowedOrigins::parse(&config.allowed_origins)?;
        if allowed_origins.is_empty() {
            return Err(PolicyError::NoAllowedOrigins);
        }
        if allowed_origins.is_any() && config.allow_credentials {
            return Err(PolicyError::CredentialsRequireSpecificOrigin);
        }

        let allowed_methods = AllowedMethods::list(config.allowed_methods.iter().cloned());
        if allowed_methods.is_empty() {
            return Err(PolicyError::NoAllowedMethods);
        }
        if let Some(invalid) = allowed_methods.invalid_method() {
            return Err(PolicyError::InvalidMethod(invalid.to_string()));
        }

        if !(200..=299).contains(&config.options_success_status) {
            return Err(PolicyError::InvalidSuccessStatus(
                config.options_success_status,
            ));
        }

        Ok(Self {
            path_pattern,
            allowed_origins,
            allowed_methods,
            allowed_headers: AllowedHeaders::list(config.allowed_headers.iter().cloned()),
            exposed_headers: dedupe_header_names(&config.exposed_headers),
            allow_credentials: config.allow_credentials,
            max_age: config.max_age,
            options_success_status: config.options_success_status,
        })
    }

    pub fn path_pattern(&self) -> &PathPattern {
        &self.path_pattern
    }

    pub fn allowed_origins(&self) -> &AllowedOrigins {
        &self.allowed_origins
    }

    pub fn allowed_methods(&self) -> &AllowedMethods {
        &self.allowed_methods
    }

    pub fn allowed_headers(&self) -> &AllowedHeaders {
        &self.allowed_headers
    }

    pub fn exposed_headers(&self) -> &[String] {
        &self.exposed_headers
    }

    pub fn allow_credentials(&self) -> bool {
        self.allow_credentials
    }

    pub fn max_age(&self) -> Option<u64> {
        self.max_age
    }

    pub fn options_success_status(&self) -> u16 {
        self.options_success_status
    }

    pub fn applies_to(&self, path: &str) -> bool {
        self.path_pattern.matches(path)
    }
}

impl Default for CorsPolicy {
    /// The task manager frontend policy: `http://localhost:3000` on every path.
    fn default() -> Self {
        Self {
            path_pattern: PathPattern::any(),
            allowed_origins: AllowedOrigins::exact(defaults::ALLOWED_ORIGIN),
            allowed_methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            exposed_headers: Vec::new(),
            allow_credentials: true,
            max_age: Some(defaults::MAX_AGE_SECS),
            options_success_status: defaults::OPTIONS_SUCCESS_STATUS,
        }
    }
}

fn dedupe_header_names(values: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .filter(|value| seen.insert(value.to_ascii_lowercase()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
