//! Default cascading.
//!
//! ```text
//! service (timeout, cache_ttl, host)
//!     → endpoint (method, timeout, cache_ttl, concurrent_calls)
//!         → backend (method, host, timeout, concurrent_calls, encoding)
//! ```
//!
//! A more specific value wins when set; otherwise it is inherited, and
//! failing that a hard default applies. Backends inherit the *resolved*
//! endpoint values, so endpoint defaults must be applied first.

use std::time::Duration;

use crate::config::error::ConfigError;
use crate::config::hosts::clean_hosts;
use crate::config::schema::{RawBackend, RawEndpointConfig};
use crate::config::service::Encoding;

pub const DEFAULT_METHOD: &str = "GET";
pub const DEFAULT_CONCURRENT_CALLS: u32 = 1;

/// Service-level values endpoints inherit from.
#[derive(Debug, Clone)]
pub struct ServiceDefaults {
    pub timeout: Duration,
    pub cache_ttl: Duration,
    /// Already cleaned.
    pub host: Vec<String>,
}

/// Resolved endpoint values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDefaults {
    pub method: String,
    pub timeout: Duration,
    pub cache_ttl: Duration,
    pub concurrent_calls: u32,
}

/// Resolved backend values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendDefaults {
    pub method: String,
    pub host: Vec<String>,
    pub timeout: Duration,
    pub concurrent_calls: u32,
    pub encoding: Encoding,
}

/// Uppercase `method`, or `fallback` when it is empty.
pub fn canonical_method(method: &str, fallback: &str) -> String {
    if method.is_empty() {
        fallback.to_string()
    } else {
        method.to_uppercase()
    }
}

fn or_inherit(own: Duration, inherited: Duration) -> Duration {
    if own.is_zero() {
        inherited
    } else {
        own
    }
}

pub fn endpoint_defaults(
    service: &ServiceDefaults,
    endpoint: &RawEndpointConfig,
) -> EndpointDefaults {
    EndpointDefaults {
        method: canonical_method(&endpoint.method, DEFAULT_METHOD),
        timeout: or_inherit(endpoint.timeout, service.timeout),
        cache_ttl: or_inherit(endpoint.cache_ttl, service.cache_ttl),
        concurrent_calls: match endpoint.concurrent_calls {
            0 => DEFAULT_CONCURRENT_CALLS,
            n => n,
        },
    }
}

/// Timeout and concurrency always come from the endpoint; a backend
/// cannot set them.
pub fn backend_defaults(
    service: &ServiceDefaults,
    endpoint: &EndpointDefaults,
    backend: &RawBackend,
) -> Result<BackendDefaults, ConfigError> {
    let host = if backend.host.is_empty() {
        service.host.clone()
    } else {
        clean_hosts(&backend.host)?
    };

    Ok(BackendDefaults {
        method: canonical_method(&backend.method, &endpoint.method),
        host,
        timeout: endpoint.timeout,
        concurrent_calls: endpoint.concurrent_calls,
        encoding: select_encoding(&backend.encoding),
    })
}

/// Pick the decoder format, falling back to YAML.
pub fn select_encoding(name: &str) -> Encoding {
    match Encoding::parse(name) {
        Some(encoding) => encoding,
        None => {
            if !name.is_empty() {
                tracing::warn!(encoding = %name, fallback = %Encoding::default(), "Unrecognised backend encoding");
            }
            Encoding::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ServiceDefaults {
        ServiceDefaults {
            timeout: Duration::from_secs(5),
            cache_ttl: Duration::from_secs(1800),
            host: vec!["http://127.0.0.1:8080".into()],
        }
    }

    #[test]
    fn test_endpoint_inherits_service_values() {
        let resolved = endpoint_defaults(&service(), &RawEndpointConfig::default());
        assert_eq!(
            resolved,
            EndpointDefaults {
                method: "GET".into(),
                timeout: Duration::from_secs(5),
                cache_ttl: Duration::from_secs(1800),
                concurrent_calls: 1,
            }
        );
    }

    #[test]
    fn test_endpoint_keeps_own_values() {
        let raw = RawEndpointConfig {
            method: "post".into(),
            timeout: Duration::from_millis(1500),
            cache_ttl: Duration::from_secs(6 * 3600),
            concurrent_calls: 3,
            ..Default::default()
        };
        let resolved = endpoint_defaults(&service(), &raw);
        assert_eq!(resolved.method, "POST");
        assert_eq!(resolved.timeout, Duration::from_millis(1500));
        assert_eq!(resolved.cache_ttl, Duration::from_secs(6 * 3600));
        assert_eq!(resolved.concurrent_calls, 3);
    }

    #[test]
    fn test_backend_inherits_resolved_endpoint() {
        let endpoint = EndpointDefaults {
            method: "PUT".into(),
            timeout: Duration::from_millis(1500),
            cache_ttl: Duration::ZERO,
            concurrent_calls: 2,
        };
        let resolved = backend_defaults(&service(), &endpoint, &RawBackend::default()).unwrap();
        assert_eq!(resolved.method, "PUT");
        assert_eq!(resolved.host, vec!["http://127.0.0.1:8080"]);
        assert_eq!(resolved.timeout, Duration::from_millis(1500));
        assert_eq!(resolved.concurrent_calls, 2);
        assert_eq!(resolved.encoding, Encoding::Yaml);
    }

    #[test]
    fn test_backend_cleans_own_hosts() {
        let endpoint = endpoint_defaults(&service(), &RawEndpointConfig::default());
        let raw = RawBackend {
            method: "delete".into(),
            host: vec!["api.github.com/".into()],
            encoding: "XML".into(),
            ..Default::default()
        };
        let resolved = backend_defaults(&service(), &endpoint, &raw).unwrap();
        assert_eq!(resolved.method, "DELETE");
        assert_eq!(resolved.host, vec!["http://api.github.com"]);
        assert_eq!(resolved.encoding, Encoding::Xml);

        let bad = RawBackend {
            host: vec!["".into()],
            ..Default::default()
        };
        assert!(matches!(
            backend_defaults(&service(), &endpoint, &bad),
            Err(ConfigError::InvalidHost(_))
        ));
    }

    #[test]
    fn test_unknown_encoding_falls_back_to_yaml() {
        assert_eq!(select_encoding(""), Encoding::Yaml);
        assert_eq!(select_encoding("msgpack"), Encoding::Yaml);
        assert_eq!(select_encoding("Json"), Encoding::Json);
    }
}
