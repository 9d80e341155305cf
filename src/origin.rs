use crate::constants::WILDCARD;
use crate::pattern::{PatternError, compile_wildcard, push_escaped};
use crate::util::equals_ignore_case;
use regex_automata::meta::Regex;
use std::fmt;

const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Origins permitted to issue cross-origin requests.
#[derive(Clone, Debug)]
pub enum AllowedOrigins {
    /// Wildcard. Never valid together with credentials.
    Any,
    List(Vec<OriginMatcher>),
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn exact<S: AsRef<str>>(value: S) -> Self {
        Self::List(vec![OriginMatcher::exact(value)])
    }

    /// Builds the allow-list from configuration entries.
    ///
    /// A lone `*` entry yields [`AllowedOrigins::Any`]; entries containing `*`
    /// elsewhere become origin patterns; everything else is matched exactly.
    pub fn parse<I, S>(values: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matchers = Vec::new();
        for value in values {
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }
            if value == WILDCARD {
                return Ok(Self::Any);
            }

            let matcher = if value.contains('*') {
                OriginMatcher::pattern(value)?
            } else {
                OriginMatcher::exact(value)
            };
            if !matchers.contains(&matcher) {
                matchers.push(matcher);
            }
        }

        Ok(Self::List(matchers))
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::List(matchers) if matchers.is_empty())
    }

    pub fn allows(&self, origin: &str) -> bool {
        if origin.is_empty() || origin.len() > MAX_ORIGIN_LENGTH {
            return false;
        }

        match self {
            Self::Any => true,
            Self::List(matchers) => matchers.iter().any(|matcher| matcher.matches(origin)),
        }
    }
}

#[derive(Clone)]
pub enum OriginMatcher {
    Exact(String),
    Pattern { source: String, regex: Regex },
}

impl OriginMatcher {
    /// Exact origin, stored without surrounding whitespace or a trailing `/`.
    pub fn exact<S: AsRef<str>>(value: S) -> Self {
        Self::Exact(normalize_origin(value.as_ref()).to_owned())
    }

    /// Origin pattern such as `https://*.example.com` or `http://localhost:*`.
    pub fn pattern(value: &str) -> Result<Self, PatternError> {
        let source = normalize_origin(value).to_owned();
        let regex = compile_wildcard(&source, true, translate)?;
        Ok(Self::Pattern { source, regex })
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Exact(value) => value,
            Self::Pattern { source, .. } => source,
        }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::Exact(value) => equals_ignore_case(value, candidate),
            Self::Pattern { regex, .. } => regex.is_match(candidate.as_bytes()),
        }
    }
}

impl PartialEq for OriginMatcher {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Exact(a), Self::Exact(b)) => equals_ignore_case(a, b),
            (Self::Pattern { source: a, .. }, Self::Pattern { source: b, .. }) => {
                equals_ignore_case(a, b)
            }
            _ => false,
        }
    }
}

impl fmt::Debug for OriginMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(value) => f.debug_tuple("Exact").field(value).finish(),
            Self::Pattern { source, .. } => f.debug_tuple("Pattern").field(source).finish(),
        }
    }
}

fn normalize_origin(value: &str) -> &str {
    let trimmed = value.trim();
    trimmed.strip_suffix('/').unwrap_or(trimmed)
}

fn translate(pattern: &str) -> String {
    let mut regex = String::with_capacity(pattern.len() * 2);
    for ch in pattern.chars() {
        if ch == '*' {
            regex.push_str("[^/]*");
        } else {
            push_escaped(&mut regex, ch);
        }
    }
    regex
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
