//! Raw configuration schema.
//!
//! These types mirror the configuration file one-to-one. They carry no
//! guarantees beyond being well-typed; [`crate::config::compiler`] turns
//! them into a [`crate::config::ServiceConfig`].
//!
//! Unknown fields are rejected so that a misspelt key fails the load
//! instead of silently taking its default.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

use crate::config::duration;

/// Root of a gateway description.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawServiceConfig {
    /// Public endpoints, in declaration order.
    pub endpoints: Vec<RawEndpointConfig>,

    /// Default timeout for every endpoint.
    #[serde(deserialize_with = "duration::deserialize")]
    pub timeout: Duration,

    /// Default cache TTL for every endpoint.
    #[serde(deserialize_with = "duration::deserialize")]
    pub cache_ttl: Duration,

    /// Default backend hosts.
    pub host: Vec<String>,

    /// Port to bind; 0 means the default.
    pub port: u16,

    /// Configuration format version.
    pub version: u32,

    /// Enable the debug namespace.
    pub debug: bool,
}

/// One public endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawEndpointConfig {
    /// Path pattern exposed to clients, e.g. `/users/{user}`.
    pub endpoint: String,

    /// HTTP method; empty means GET.
    pub method: String,

    /// Backends queried for this endpoint.
    pub backend: Vec<RawBackend>,

    /// Number of concurrent calls per backend; 0 means 1.
    pub concurrent_calls: u32,

    #[serde(deserialize_with = "duration::deserialize")]
    pub timeout: Duration,

    #[serde(deserialize_with = "duration::deserialize")]
    pub cache_ttl: Duration,

    /// Query string parameters forwarded to the backends.
    pub querystring_params: Vec<String>,
}

/// One upstream call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawBackend {
    /// Name of the group the response is moved into.
    pub group: String,

    pub method: String,

    pub host: Vec<String>,

    /// Upstream path pattern, e.g. `/posts/{user}`.
    pub url_pattern: String,

    /// Response fields to remove.
    pub blacklist: Vec<String>,

    /// Response fields to keep.
    pub whitelist: Vec<String>,

    /// Response field renames, old name to new name.
    pub mapping: BTreeMap<String, String>,

    /// Response format: json, xml, toml or yaml.
    pub encoding: String,

    /// Field extracted to the root of the response.
    pub target: String,
}
