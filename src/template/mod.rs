//! Placeholder templates subsystem.
//!
//! # Data Flow
//! ```text
//! endpoint path "/users/{user}"
//!     → placeholders.rs (segment grammar) → input params [user]
//!
//! backend url_pattern "/posts/{user}?p={user}"
//!     → placeholders.rs (bare grammar) → output params [user, user]
//!     → url.rs (subset check, rewrite) → "/posts/{{.User}}?p={{.User}}"
//! ```
//!
//! # Design Decisions
//! - Matchers are compiled once (patterns.rs) and shared read-only
//! - Two grammars: endpoint placeholders must fill a whole path segment,
//!   backend placeholders may appear anywhere
//! - Compiled templates carry their ordered key list so the proxy never
//!   has to parse a pattern per request

pub mod patterns;
pub mod placeholders;
pub mod url;

pub use placeholders::{extract_placeholders, Grammar};
pub use self::url::{RenderError, UrlTemplate};
