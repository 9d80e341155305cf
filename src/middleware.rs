//! axum integration: evaluates every request against the policy before routing.

use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::{HeaderCollection, Headers};
use crate::policy::CorsPolicy;
use crate::result::{CorsDecision, PreflightRejectionReason};
use axum::{
    Router,
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::{Next, from_fn_with_state},
    response::Response,
};
use std::sync::Arc;
use tracing::warn;

pub const INVALID_CORS_REQUEST: &str = "Invalid CORS request";

/// Registers the policy with `router`.
///
/// Installed as a layer rather than a route layer so preflights for paths
/// without an `OPTIONS` handler still reach the middleware.
pub fn with_cors<S>(router: Router<S>, policy: Arc<CorsPolicy>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(from_fn_with_state(policy, cors_middleware))
}

pub async fn cors_middleware(
    State(policy): State<Arc<CorsPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let decision = {
        let facts = RequestFacts::from_request(&request);
        policy.check(&facts.as_request_context())
    };

    match decision {
        CorsDecision::PreflightAccepted { headers, status } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::OK);
            empty_response(status, &headers)
        }
        CorsDecision::PreflightRejected(rejection) => {
            warn!(
                reason = %rejection_message(&rejection.reason),
                "rejected CORS preflight"
            );
            let mut response = empty_response(StatusCode::FORBIDDEN, &rejection.headers);
            *response.body_mut() = Body::from(INVALID_CORS_REQUEST);
            response
        }
        CorsDecision::SimpleAccepted { headers } => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &headers);
            response
        }
        CorsDecision::SimpleRejected(rejection) => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &rejection.headers);
            response
        }
        CorsDecision::NotApplicable => next.run(request).await,
    }
}

fn empty_response(status: StatusCode, headers: &Headers) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = status;
    apply_headers(response.headers_mut(), headers);
    response
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers {
        let Ok(header_name) = HeaderName::try_from(name.as_str()) else {
            continue;
        };
        let header_value = if header_name.as_str().eq_ignore_ascii_case(header::VARY) {
            merged_vary(map, value)
        } else {
            HeaderValue::from_str(value).ok()
        };

        if let Some(header_value) = header_value {
            map.insert(header_name, header_value);
        }
    }
}

/// Folds the handler's own `Vary` lines into one value without repeats.
fn merged_vary(map: &HeaderMap, incoming: &str) -> Option<HeaderValue> {
    let mut vary = HeaderCollection::with_estimate(1);
    for present in map
        .get_all(header::VARY)
        .iter()
        .filter_map(|value| value.to_str().ok())
    {
        vary.add_vary(present);
    }
    vary.add_vary(incoming);

    vary.into_headers()
        .get(header::VARY)
        .and_then(|value| HeaderValue::from_str(value).ok())
}

fn rejection_message(reason: &PreflightRejectionReason) -> String {
    match reason {
        PreflightRejectionReason::OriginNotAllowed => "origin not allowed".into(),
        PreflightRejectionReason::MethodNotAllowed { requested_method } => {
            format!("method '{requested_method}' not allowed")
        }
        PreflightRejectionReason::HeadersNotAllowed { requested_headers } => {
            format!("headers '{requested_headers}' not allowed")
        }
    }
}

struct RequestFacts {
    method: String,
    path: String,
    origin: Option<String>,
    access_control_request_method: Option<String>,
    access_control_request_headers: Option<String>,
}

impl RequestFacts {
    fn from_request(request: &Request) -> Self {
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_string(),
            path: request.uri().path().to_string(),
            origin: header_value(headers, header::ORIGIN),
            access_control_request_method: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: joined_header_values(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            path: &self.path,
            origin: self.origin.as_deref(),
            access_control_request_method: self.access_control_request_method.as_deref(),
            access_control_request_headers: self.access_control_request_headers.as_deref(),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

/// Browsers may split `Access-Control-Request-Headers` across several lines.
fn joined_header_values(headers: &HeaderMap, name: &str) -> Option<String> {
    let values: Vec<&str> = headers
        .get_all(name)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect();

    (!values.is_empty()).then(|| values.join(","))
}
