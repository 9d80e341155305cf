use crate::constants::header;
use indexmap::IndexMap;

/// Response headers in the order they were produced.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(8)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    pub(crate) fn push(&mut self, name: &str, value: String) {
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
        } else {
            self.headers.insert(name.to_string(), value);
        }
    }

    /// Appends to `Vary`, skipping entries already present in any case.
    pub(crate) fn add_vary<S: AsRef<str>>(&mut self, value: S) {
        let incoming: Vec<&str> = value
            .as_ref()
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        if incoming.is_empty() {
            return;
        }

        let existing = self.headers.entry(header::VARY.to_string()).or_default();
        for entry in incoming {
            let duplicate = existing
                .split(',')
                .map(str::trim)
                .any(|present| present.eq_ignore_ascii_case(entry));
            if duplicate {
                continue;
            }
            if !existing.is_empty() {
                existing.push_str(", ");
            }
            existing.push_str(entry);
        }
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for (name, value) in other.headers {
            self.push(&name, value);
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
