use crate::constants::{WILDCARD, defaults};
use crate::util::{is_http_token, split_list};

/// Configuration for the `Access-Control-Allow-Methods` response header.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedMethods {
    /// Any method. The preflight response echoes the requested method because
    /// `*` is taken literally by browsers on credentialed requests.
    Any,
    /// Case-sensitive list of method tokens, emitted in configuration order.
    List(Vec<String>),
}

impl AllowedMethods {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let method = value.into().trim().to_string();
            if method.is_empty() {
                continue;
            }
            if method == WILDCARD {
                return Self::Any;
            }
            if !deduped.contains(&method) {
                deduped.push(method);
            }
        }

        Self::List(deduped)
    }

    /// Parses a comma-separated configuration value such as `GET,POST`.
    pub fn parse(raw: &str) -> Self {
        Self::list(split_list(raw))
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::List(values) if values.is_empty())
    }

    pub fn allows_method(&self, method: &str) -> bool {
        let method = method.trim();
        if method.is_empty() {
            return false;
        }

        match self {
            Self::Any => true,
            Self::List(values) => values.iter().any(|allowed| allowed == method),
        }
    }

    /// First configured entry that is not a valid HTTP method token.
    pub fn invalid_method(&self) -> Option<&str> {
        match self {
            Self::Any => None,
            Self::List(values) => values
                .iter()
                .map(String::as_str)
                .find(|value| !is_http_token(value)),
        }
    }

    pub fn header_value(&self, requested_method: &str) -> Option<String> {
        match self {
            Self::Any => {
                let requested = requested_method.trim();
                (!requested.is_empty()).then(|| requested.to_string())
            }
            Self::List(values) if values.is_empty() => None,
            Self::List(values) => Some(values.join(", ")),
        }
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list(defaults::ALLOWED_METHODS)
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
