//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML/JSON/YAML)
//!     → loader.rs (parse & deserialize into schema.rs types)
//!     → compiler.rs
//!         → validation.rs (version, reserved paths, backends)
//!         → hosts.rs (scheme default, trailing slash)
//!         → defaults.rs (service → endpoint → backend)
//!         → template (placeholders, URL templates)
//!         → routing (endpoint path style)
//!     → ServiceConfig (validated, immutable)
//!     → shared via Arc with the router and proxy
//! ```
//!
//! # Design Decisions
//! - Config is immutable once compiled; changes require a full reload
//! - All fields have defaults to allow minimal configs
//! - Unknown fields are rejected at load time
//! - The first error aborts the whole compilation

pub mod compiler;
pub mod defaults;
pub mod duration;
pub mod error;
pub mod hosts;
pub mod loader;
pub mod schema;
pub mod service;
pub mod validation;

pub use compiler::{compile, ServiceCompiler};
pub use error::ConfigError;
pub use loader::{load_config, load_raw};
pub use schema::{RawBackend, RawEndpointConfig, RawServiceConfig};
pub use service::{Backend, Encoding, EndpointConfig, ServiceConfig};
