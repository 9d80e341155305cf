use crate::constants::method;

/// Request facts needed to evaluate CORS, borrowed from whatever HTTP stack is in use.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    /// Request path without the query string.
    pub path: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub(crate) fn origin(&self) -> Option<&'a str> {
        non_blank(self.origin)
    }

    pub(crate) fn requested_method(&self) -> Option<&'a str> {
        non_blank(self.access_control_request_method)
    }

    pub(crate) fn requested_headers(&self) -> &'a str {
        self.access_control_request_headers.unwrap_or_default()
    }

    pub(crate) fn is_preflight(&self) -> bool {
        self.method.eq_ignore_ascii_case(method::OPTIONS) && self.requested_method().is_some()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
