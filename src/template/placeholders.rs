//! Placeholder extraction.

use std::collections::BTreeSet;

use regex::Regex;

use crate::template::patterns::{BACKEND_PLACEHOLDER, ENDPOINT_PLACEHOLDER};

/// Which placeholder grammar applies to a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// Public endpoint path: `/{name}` must be a full segment.
    Endpoint,
    /// Backend URL pattern: `{name}` anywhere.
    Backend,
}

impl Grammar {
    fn matcher(self) -> &'static Regex {
        match self {
            Grammar::Endpoint => &ENDPOINT_PLACEHOLDER,
            Grammar::Backend => &BACKEND_PLACEHOLDER,
        }
    }
}

/// Names of every placeholder in `subject`, in order of appearance.
///
/// Duplicates are kept.
pub fn extract_placeholders(subject: &str, grammar: Grammar) -> Vec<String> {
    grammar
        .matcher()
        .captures_iter(subject)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Distinct placeholder names.
pub fn placeholder_set(params: &[String]) -> BTreeSet<String> {
    params.iter().cloned().collect()
}
