use regex_automata::meta::{BuildError, Regex};
use std::time::{Duration, Instant};
use thiserror::Error;

const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
const MAX_PATTERN_LENGTH: usize = 2_048;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile pattern `{pattern}`")]
    Build {
        pattern: String,
        #[source]
        source: Box<BuildError>,
    },
    #[error("compiling pattern `{pattern}` took {elapsed:?}, over the {budget:?} budget")]
    Timeout {
        pattern: String,
        elapsed: Duration,
        budget: Duration,
    },
    #[error("pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

/// Translates a wildcard pattern into an anchored regex and compiles it.
///
/// `translate` receives the raw pattern and returns the regex body without anchors.
pub(crate) fn compile_wildcard(
    pattern: &str,
    case_insensitive: bool,
    translate: impl FnOnce(&str) -> String,
) -> Result<Regex, PatternError> {
    compile_with_budget(pattern, case_insensitive, translate, PATTERN_COMPILE_BUDGET)
}

pub(crate) fn compile_with_budget(
    pattern: &str,
    case_insensitive: bool,
    translate: impl FnOnce(&str) -> String,
    budget: Duration,
) -> Result<Regex, PatternError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(PatternError::TooLong {
            length: pattern.len(),
            max: MAX_PATTERN_LENGTH,
        });
    }

    let body = translate(pattern);
    let source = if case_insensitive {
        format!("^(?i:{body})$")
    } else {
        format!("^(?:{body})$")
    };

    let started = Instant::now();
    let regex = Regex::new(&source).map_err(|err| PatternError::Build {
        pattern: pattern.to_owned(),
        source: Box::new(err),
    })?;
    let elapsed = started.elapsed();
    if elapsed > budget {
        return Err(PatternError::Timeout {
            pattern: pattern.to_owned(),
            elapsed,
            budget,
        });
    }

    Ok(regex)
}

pub(crate) fn push_escaped(regex: &mut String, ch: char) {
    if matches!(
        ch,
        '\\' | '.'
            | '+'
            | '*'
            | '?'
            | '('
            | ')'
            | '|'
            | '['
            | ']'
            | '{'
            | '}'
            | '^'
            | '$'
            | '#'
            | '&'
            | '-'
            | '~'
    ) {
        regex.push('\\');
    }
    regex.push(ch);
}

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;
