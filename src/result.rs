use crate::headers::Headers;

/// Overall decision returned by [`crate::CorsPolicy::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// Answer the preflight directly with `status` and `headers`.
    PreflightAccepted { headers: Headers, status: u16 },
    PreflightRejected(PreflightRejection),
    /// Let the request through and add `headers` to the handler's response.
    SimpleAccepted { headers: Headers },
    /// Let the request through without permissive headers; the browser blocks the script.
    SimpleRejected(SimpleRejection),
    /// Not a CORS request, or the path is not covered by the policy.
    NotApplicable,
}

impl CorsDecision {
    pub fn is_accepted(&self) -> bool {
        matches!(
            self,
            Self::PreflightAccepted { .. } | Self::SimpleAccepted { .. }
        )
    }

    /// Headers to attach to the response, whatever the outcome.
    pub fn headers(&self) -> Option<&Headers> {
        match self {
            Self::PreflightAccepted { headers, .. } | Self::SimpleAccepted { headers } => {
                Some(headers)
            }
            Self::PreflightRejected(rejection) => Some(&rejection.headers),
            Self::SimpleRejected(rejection) => Some(&rejection.headers),
            Self::NotApplicable => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightRejection {
    pub headers: Headers,
    pub reason: PreflightRejectionReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreflightRejectionReason {
    OriginNotAllowed,
    MethodNotAllowed { requested_method: String },
    HeadersNotAllowed { requested_headers: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRejection {
    pub headers: Headers,
    pub reason: SimpleRejectionReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleRejectionReason {
    OriginNotAllowed,
}
