//! Routing-engine path syntax.
//!
//! # Data Flow
//! ```text
//! cleaned endpoint path "/users/{user}" + input params [user]
//!     → path_style.rs (RoutingStyle chosen by the caller)
//!     → Colon: "/users/:user"   Brace: "/users/{user}"
//! ```
//!
//! # Design Decisions
//! - The style is an explicit compiler argument, never process state
//! - One style per service; every endpoint is rewritten the same way
//! - Only endpoint paths are rewritten; backend patterns have their own
//!   template syntax

pub mod path_style;

pub use path_style::RoutingStyle;
