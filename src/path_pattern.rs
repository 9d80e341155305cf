use crate::constants::defaults;
use crate::pattern::{PatternError, compile_wildcard, push_escaped};
use regex_automata::meta::Regex;
use std::fmt;

/// Ant-style request path matcher.
///
/// `?` matches one character, `*` matches within a single path segment and
/// `**` matches zero or more whole segments. `/**` matches every path.
#[derive(Clone)]
pub struct PathPattern {
    source: String,
    matcher: PathMatcher,
}

#[derive(Clone)]
enum PathMatcher {
    Any,
    Literal,
    Regex(Regex),
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let source = pattern.trim().to_owned();

        let matcher = if source == "/**" || source == "**" {
            PathMatcher::Any
        } else if !source.contains(['*', '?']) {
            PathMatcher::Literal
        } else {
            PathMatcher::Regex(compile_wildcard(&source, false, translate)?)
        };

        Ok(Self { source, matcher })
    }

    pub fn any() -> Self {
        Self {
            source: defaults::PATH_PATTERN.to_owned(),
            matcher: PathMatcher::Any,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, path: &str) -> bool {
        match &self.matcher {
            PathMatcher::Any => true,
            PathMatcher::Literal => self.source == path,
            PathMatcher::Regex(regex) => regex.is_match(path.as_bytes()),
        }
    }
}

impl Default for PathPattern {
    fn default() -> Self {
        Self::any()
    }
}

impl fmt::Debug for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PathPattern").field(&self.source).finish()
    }
}

fn translate(pattern: &str) -> String {
    let mut regex = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;

    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix("/**")
            && (tail.is_empty() || tail.starts_with('/'))
        {
            regex.push_str("(?:/.*)?");
            rest = tail;
            continue;
        }

        if let Some(tail) = rest.strip_prefix("**")
            && (tail.is_empty() || tail.starts_with('/'))
        {
            regex.push_str(".*");
            rest = tail;
            continue;
        }

        let mut chars = rest.chars();
        match chars.next() {
            Some('*') => regex.push_str("[^/]*"),
            Some('?') => regex.push_str("[^/]"),
            Some(ch) => push_escaped(&mut regex, ch),
            None => break,
        }
        rest = chars.as_str();
    }

    regex
}

#[cfg(test)]
#[path = "path_pattern_test.rs"]
mod path_pattern_test;
