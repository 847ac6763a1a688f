//! API gateway configuration compiler.
//!
//! Turns a declarative service description into a validated execution
//! plan for the router and proxy.

pub mod config;
pub mod observability;
pub mod routing;
pub mod template;

pub use config::{compile, ConfigError, ServiceCompiler, ServiceConfig};
pub use routing::RoutingStyle;
