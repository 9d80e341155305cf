use taskmanager_cors::constants::method;
use taskmanager_cors::{CorsConfig, CorsDecision, CorsPolicy, RequestContext};

pub const FRONTEND: &str = "http://localhost:3000";
pub const TASKS_PATH: &str = "/api/tasks";

#[derive(Default)]
pub struct PolicyBuilder {
    config: CorsConfig,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.path_pattern = pattern.into();
        self
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.allowed_origins = origins.into_iter().map(Into::into).collect();
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.allowed_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.allowed_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.exposed_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.config.allow_credentials = enabled;
        self
    }

    pub fn max_age(mut self, seconds: Option<u64>) -> Self {
        self.config.max_age = seconds;
        self
    }

    pub fn success_status(mut self, status: u16) -> Self {
        self.config.options_success_status = status;
        self
    }

    pub fn build(self) -> CorsPolicy {
        CorsPolicy::from_config(&self.config).expect("valid CORS configuration")
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    path: String,
    origin: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            path: TASKS_PATH.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn check(self, policy: &CorsPolicy) -> CorsDecision {
        let ctx = RequestContext {
            method: &self.method,
            path: &self.path,
            origin: self.origin.as_deref(),
            access_control_request_method: None,
            access_control_request_headers: None,
        };
        policy.check(&ctx)
    }
}

pub struct PreflightRequestBuilder {
    path: String,
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self {
            path: TASKS_PATH.into(),
            origin: None,
            request_method: None,
            request_headers: None,
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn check(self, policy: &CorsPolicy) -> CorsDecision {
        let ctx = RequestContext {
            method: method::OPTIONS,
            path: &self.path,
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        };
        policy.check(&ctx)
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
