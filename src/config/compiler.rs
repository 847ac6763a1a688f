//! Service compilation.
//!
//! # Data Flow
//! ```text
//! RawServiceConfig
//!     → version check, port default, host cleaning
//!     → per endpoint: clean path → validate → defaults
//!                     → input placeholders → routing style
//!         → per backend: defaults → URL template
//!     → ServiceConfig (immutable)
//! ```
//!
//! # Design Decisions
//! - Pure function of (raw config, routing style); no process-wide state
//! - Stops at the first error; partial results are never returned
//! - Synchronous and run once, before any traffic is served

use std::collections::BTreeSet;

use crate::config::defaults::{
    backend_defaults, endpoint_defaults, BackendDefaults, ServiceDefaults,
};
use crate::config::error::ConfigError;
use crate::config::hosts::clean_hosts;
use crate::config::schema::{RawBackend, RawEndpointConfig, RawServiceConfig};
use crate::config::service::{Backend, EndpointConfig, ServiceConfig, DEFAULT_PORT};
use crate::config::validation::{check_version, validate_endpoint, ReservedPaths};
use crate::routing::RoutingStyle;
use crate::template::placeholders::{extract_placeholders, placeholder_set, Grammar};
use crate::template::url::{clean_path, UrlTemplate};

/// Compile `raw` with the given routing style and the default debug rule.
pub fn compile(raw: RawServiceConfig, style: RoutingStyle) -> Result<ServiceConfig, ConfigError> {
    ServiceCompiler::new(style).compile(raw)
}

/// Turns a raw gateway description into a [`ServiceConfig`].
#[derive(Debug, Clone)]
pub struct ServiceCompiler {
    style: RoutingStyle,
    reserved_pattern: Option<String>,
}

impl ServiceCompiler {
    pub fn new(style: RoutingStyle) -> Self {
        Self {
            style,
            reserved_pattern: None,
        }
    }

    /// Replace the reserved debug namespace rule with another regex.
    pub fn with_reserved_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.reserved_pattern = Some(pattern.into());
        self
    }

    pub fn compile(&self, raw: RawServiceConfig) -> Result<ServiceConfig, ConfigError> {
        check_version(raw.version)?;

        let reserved = match &self.reserved_pattern {
            Some(pattern) => ReservedPaths::new(pattern)?,
            None => ReservedPaths::default(),
        };

        let service = ServiceDefaults {
            timeout: raw.timeout,
            cache_ttl: raw.cache_ttl,
            host: clean_hosts(&raw.host)?,
        };

        let endpoints = raw
            .endpoints
            .iter()
            .map(|endpoint| self.compile_endpoint(&service, &reserved, endpoint))
            .collect::<Result<Vec<_>, _>>()?;

        let port = match raw.port {
            0 => DEFAULT_PORT,
            port => port,
        };

        tracing::debug!(
            endpoints = endpoints.len(),
            port,
            routing_style = %self.style,
            "Service configuration compiled"
        );

        Ok(ServiceConfig {
            endpoints,
            timeout: service.timeout,
            cache_ttl: service.cache_ttl,
            host: service.host,
            port,
            version: raw.version,
            debug: raw.debug,
            routing_style: self.style,
        })
    }

    fn compile_endpoint(
        &self,
        service: &ServiceDefaults,
        reserved: &ReservedPaths,
        raw: &RawEndpointConfig,
    ) -> Result<EndpointConfig, ConfigError> {
        let path = clean_path(&raw.endpoint);
        validate_endpoint(&path, raw, reserved)?;

        let resolved = endpoint_defaults(service, raw);
        if resolved.timeout.is_zero() {
            return Err(ConfigError::MissingTimeout(path));
        }

        let input_params = extract_placeholders(&path, Grammar::Endpoint);
        let input_set = placeholder_set(&input_params);
        let endpoint = self.style.translate(&path, &input_params);

        let backend = raw
            .backend
            .iter()
            .map(|b| {
                let defaults = backend_defaults(service, &resolved, b).map_err(|e| match e {
                    ConfigError::InvalidHost(host) => ConfigError::InvalidBackendHost {
                        endpoint: path.clone(),
                        backend: b.url_pattern.clone(),
                        host,
                    },
                    other => other,
                })?;
                compile_backend(&path, &input_set, b, defaults)
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            endpoint = %endpoint,
            method = %resolved.method,
            backends = backend.len(),
            "Endpoint compiled"
        );

        Ok(EndpointConfig {
            endpoint,
            method: resolved.method,
            backend,
            concurrent_calls: resolved.concurrent_calls,
            timeout: resolved.timeout,
            cache_ttl: resolved.cache_ttl,
            querystring_params: raw.querystring_params.clone(),
        })
    }
}

fn compile_backend(
    endpoint: &str,
    input: &BTreeSet<String>,
    raw: &RawBackend,
    defaults: BackendDefaults,
) -> Result<Backend, ConfigError> {
    if defaults.host.is_empty() {
        return Err(ConfigError::NoHosts {
            endpoint: endpoint.to_string(),
            backend: raw.url_pattern.clone(),
        });
    }

    let url_pattern =
        UrlTemplate::compile(&raw.url_pattern, input).map_err(|source| ConfigError::Template {
            endpoint: endpoint.to_string(),
            backend: raw.url_pattern.clone(),
            source,
        })?;

    tracing::debug!(
        endpoint = %endpoint,
        url_pattern = %url_pattern.pattern(),
        host = ?defaults.host,
        encoding = %defaults.encoding,
        "Backend compiled"
    );

    Ok(Backend {
        group: raw.group.clone(),
        method: defaults.method,
        host: defaults.host,
        url_pattern,
        blacklist: raw.blacklist.clone(),
        whitelist: raw.whitelist.clone(),
        mapping: raw.mapping.clone(),
        encoding: defaults.encoding,
        target: raw.target.clone(),
        concurrent_calls: defaults.concurrent_calls,
        timeout: defaults.timeout,
    })
}
