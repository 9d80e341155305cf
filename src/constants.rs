pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
    pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
    pub const ORIGIN: &str = "Origin";
    pub const VARY: &str = "Vary";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

/// Values the task manager frontend was originally configured with.
pub mod defaults {
    use super::method;

    pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";
    pub const ALLOWED_METHODS: [&str; 4] = [method::GET, method::POST, method::PUT, method::DELETE];
    pub const PATH_PATTERN: &str = "/**";
    pub const MAX_AGE_SECS: u64 = 1800;
    pub const OPTIONS_SUCCESS_STATUS: u16 = 200;
}

/// Environment variables read by [`crate::CorsConfig::from_env`].
pub mod env {
    pub const ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    pub const ALLOWED_METHODS: &str = "CORS_ALLOWED_METHODS";
    pub const ALLOWED_HEADERS: &str = "CORS_ALLOWED_HEADERS";
    pub const EXPOSED_HEADERS: &str = "CORS_EXPOSED_HEADERS";
    pub const ALLOW_CREDENTIALS: &str = "CORS_ALLOW_CREDENTIALS";
    pub const MAX_AGE: &str = "CORS_MAX_AGE";
    pub const PATH_PATTERN: &str = "CORS_PATH_PATTERN";
}

pub const WILDCARD: &str = "*";
