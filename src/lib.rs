//! CORS policy for the task manager backend.
//!
//! [`CorsPolicyProvider`] builds one immutable [`CorsPolicy`] at startup, by
//! default allowing `http://localhost:3000` to call every endpoint with
//! `GET`, `POST`, `PUT` and `DELETE`, any request header, and credentials.
//! [`CorsPolicy::check`] evaluates a request and returns the headers to emit;
//! with the `axum` feature, [`with_cors`] registers the policy on a router.

mod allowed_headers;
mod allowed_methods;
mod config;
pub mod constants;
mod context;
mod cors;
mod header_builder;
mod headers;
#[cfg(feature = "axum")]
mod middleware;
mod origin;
mod path_pattern;
mod pattern;
mod policy;
mod provider;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use config::{ConfigError, CorsConfig};
pub use context::RequestContext;
pub use headers::Headers;
#[cfg(feature = "axum")]
pub use middleware::{INVALID_CORS_REQUEST, cors_middleware, with_cors};
pub use origin::{AllowedOrigins, OriginMatcher};
pub use path_pattern::PathPattern;
pub use pattern::PatternError;
pub use policy::{CorsPolicy, PolicyError};
pub use provider::{CorsPolicyProvider, ProviderError};
pub use result::{
    CorsDecision, PreflightRejection, PreflightRejectionReason, SimpleRejection,
    SimpleRejectionReason,
};
