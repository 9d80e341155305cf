use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::policy::CorsPolicy;
use crate::result::{
    CorsDecision, PreflightRejection, PreflightRejectionReason, SimpleRejection,
    SimpleRejectionReason,
};
use tracing::debug;

impl CorsPolicy {
    /// Evaluates one request against the policy.
    ///
    /// Requests without an `Origin` header, or on paths outside the policy's
    /// pattern, are [`CorsDecision::NotApplicable`]. Evaluation never fails:
    /// a disallowed request is a rejection decision, not an error.
    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        if !self.applies_to(request.path) {
            return CorsDecision::NotApplicable;
        }
        let Some(origin) = request.origin() else {
            return CorsDecision::NotApplicable;
        };

        let decision = if request.is_preflight() {
            self.process_preflight(request, origin)
        } else {
            self.process_simple(origin)
        };

        debug!(
            method = request.method,
            path = request.path,
            origin,
            accepted = decision.is_accepted(),
            "evaluated CORS request"
        );
        decision
    }

    fn process_preflight(&self, request: &RequestContext<'_>, origin: &str) -> CorsDecision {
        let builder = HeaderBuilder::new(self);
        let mut headers = builder.build_vary_headers();
        let requested_method = request.requested_method().unwrap_or_default();
        let requested_headers = request.requested_headers();

        let rejection = if !self.allowed_origins().allows(origin) {
            Some(PreflightRejectionReason::OriginNotAllowed)
        } else if !self.allowed_methods().allows_method(requested_method) {
            Some(PreflightRejectionReason::MethodNotAllowed {
                requested_method: requested_method.to_string(),
            })
        } else if !self.allowed_headers().allows_headers(requested_headers) {
            Some(PreflightRejectionReason::HeadersNotAllowed {
                requested_headers: requested_headers.to_string(),
            })
        } else {
            None
        };

        if let Some(reason) = rejection {
            return CorsDecision::PreflightRejected(PreflightRejection {
                headers: headers.into_headers(),
                reason,
            });
        }

        headers.extend(builder.build_origin_header(origin));
        headers.extend(builder.build_methods_header(requested_method));
        headers.extend(builder.build_allowed_headers());
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_max_age_header());

        CorsDecision::PreflightAccepted {
            headers: headers.into_headers(),
            status: self.options_success_status(),
        }
    }

    fn process_simple(&self, origin: &str) -> CorsDecision {
        let builder = HeaderBuilder::new(self);
        let mut headers = builder.build_vary_headers();

        if !self.allowed_origins().allows(origin) {
            return CorsDecision::SimpleRejected(SimpleRejection {
                headers: headers.into_headers(),
                reason: SimpleRejectionReason::OriginNotAllowed,
            });
        }

        headers.extend(builder.build_origin_header(origin));
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_exposed_headers());

        CorsDecision::SimpleAccepted {
            headers: headers.into_headers(),
        }
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
