use crate::constants::WILDCARD;
use crate::util::split_list;
use std::collections::HashSet;

/// Configuration for the `Access-Control-Allow-Headers` response value.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum AllowedHeaders {
    /// Wildcard: every requested header is allowed and `*` is emitted on preflight.
    #[default]
    Any,
    List(Vec<String>),
}

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let trimmed = value.into().trim().to_string();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed == WILDCARD {
                return Self::Any;
            }
            if seen.insert(trimmed.to_ascii_lowercase()) {
                deduped.push(trimmed);
            }
        }

        Self::List(deduped)
    }

    pub fn parse(raw: &str) -> Self {
        Self::list(split_list(raw))
    }

    pub fn any() -> Self {
        Self::Any
    }

    /// Checks a raw `Access-Control-Request-Headers` value.
    pub fn allows_headers(&self, request_headers: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(allowed) => split_list(request_headers).all(|header| {
                allowed
                    .iter()
                    .any(|allowed_header| allowed_header.eq_ignore_ascii_case(header))
            }),
        }
    }

    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::Any => Some(WILDCARD.to_string()),
            Self::List(values) if values.is_empty() => None,
            Self::List(values) => Some(values.join(", ")),
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
