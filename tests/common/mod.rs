//! Shared fixtures for integration tests.

use std::time::Duration;

use api_gateway::config::{RawBackend, RawEndpointConfig, RawServiceConfig};

/// Service with the defaults most tests rely on.
pub fn service(endpoints: Vec<RawEndpointConfig>) -> RawServiceConfig {
    RawServiceConfig {
        version: 1,
        timeout: Duration::from_secs(5),
        cache_ttl: Duration::from_secs(30 * 60),
        host: vec!["http://127.0.0.1:8080".into()],
        endpoints,
        ..Default::default()
    }
}

/// Endpoint at `path` with one backend per URL pattern.
pub fn endpoint(path: &str, url_patterns: &[&str]) -> RawEndpointConfig {
    RawEndpointConfig {
        endpoint: path.into(),
        backend: url_patterns.iter().map(|p| backend(p)).collect(),
        ..Default::default()
    }
}

pub fn backend(url_pattern: &str) -> RawBackend {
    RawBackend {
        url_pattern: url_pattern.into(),
        ..Default::default()
    }
}
