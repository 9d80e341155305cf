use crate::constants::header;
use crate::headers::HeaderCollection;
use crate::policy::CorsPolicy;

pub(crate) struct HeaderBuilder<'a> {
    policy: &'a CorsPolicy,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a CorsPolicy) -> Self {
        Self { policy }
    }

    /// Responses differ per origin and per preflight request, so caches must key on them.
    pub(crate) fn build_vary_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.add_vary(header::ORIGIN);
        headers.add_vary(header::ACCESS_CONTROL_REQUEST_METHOD);
        headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
        headers
    }

    /// Echoes the matched request origin, never `*`.
    pub(crate) fn build_origin_header(&self, origin: &str) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.to_string());
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.policy.allow_credentials() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true".to_string());
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_methods_header(&self, requested_method: &str) -> HeaderCollection {
        if let Some(value) = self.policy.allowed_methods().header_value(requested_method) {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        if let Some(value) = self.policy.allowed_headers().header_value() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        if let Some(seconds) = self.policy.max_age() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_MAX_AGE, seconds.to_string());
            return headers;
        }
        HeaderCollection::new()
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        let exposed = self.policy.exposed_headers();
        if exposed.is_empty() {
            return HeaderCollection::new();
        }

        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, exposed.join(", "));
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
