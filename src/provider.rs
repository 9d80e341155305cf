use crate::config::{ConfigError, CorsConfig};
use crate::policy::{CorsPolicy, PolicyError};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

static GLOBAL: OnceCell<CorsPolicyProvider> = OnceCell::new();

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("invalid CORS configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid CORS policy: {0}")]
    Policy(#[from] PolicyError),
}

/// Supplies the immutable [`CorsPolicy`] to the request-handling layer.
#[derive(Debug, Clone)]
pub struct CorsPolicyProvider {
    policy: Arc<CorsPolicy>,
}

impl CorsPolicyProvider {
    pub fn new(config: &CorsConfig) -> Result<Self, ProviderError> {
        let policy = CorsPolicy::from_config(config)?;
        Ok(Self::from_policy(policy))
    }

    pub fn from_env() -> Result<Self, ProviderError> {
        let config = CorsConfig::from_env()?;
        Self::new(&config)
    }

    pub fn from_policy(policy: CorsPolicy) -> Self {
        info!(
            path_pattern = policy.path_pattern().as_str(),
            origins = ?policy.allowed_origins(),
            methods = ?policy.allowed_methods(),
            headers = ?policy.allowed_headers(),
            credentials = policy.allow_credentials(),
            "registered CORS policy"
        );
        Self {
            policy: Arc::new(policy),
        }
    }

    /// Process-wide provider, resolved from the environment on first use.
    pub fn global() -> Result<&'static CorsPolicyProvider, ProviderError> {
        GLOBAL.get_or_try_init(Self::from_env)
    }

    pub fn get_policy(&self) -> &CorsPolicy {
        &self.policy
    }

    /// Handle for the HTTP layer; clones share one policy.
    pub fn shared(&self) -> Arc<CorsPolicy> {
        Arc::clone(&self.policy)
    }
}

impl Default for CorsPolicyProvider {
    fn default() -> Self {
        Self::from_policy(CorsPolicy::default())
    }
}

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;
