//! Precompiled matchers.
//!
//! Every pattern here is a literal, compiled on first use and then shared
//! by every compilation in the process.

use once_cell::sync::Lazy;
use regex::Regex;

/// Source of the reserved debug namespace rule.
///
/// Matches anything not starting with `/`, and `/__debug` or any sub-path
/// of it.
pub const DEBUG_PATH_PATTERN: &str = r"^[^/]|/__debug(/.*)?$";

/// Bare `{name}` placeholder, anywhere in a backend URL pattern.
pub static BACKEND_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([a-zA-Z\-_0-9]+)\}").unwrap());

/// `/{name}` placeholder occupying a whole endpoint path segment.
pub static ENDPOINT_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\{([a-zA-Z\-_0-9]+)\}").unwrap());

/// Host grammar: optional scheme, authority, optional port, optional trailing slash.
pub static HOST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(https?://)?([a-zA-Z0-9\._\-]+)(:[0-9]{2,6})?/?").unwrap());

/// Compiled form of [`DEBUG_PATH_PATTERN`].
pub static DEBUG_PATH: Lazy<Regex> = Lazy::new(|| Regex::new(DEBUG_PATH_PATTERN).unwrap());
