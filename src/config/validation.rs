//! Configuration validation.
//!
//! # Responsibilities
//! - Reject unsupported format versions
//! - Keep the debug namespace free of ordinary routes
//! - Reject endpoints with a query string or without backends
//!
//! # Design Decisions
//! - First failure wins; the compiler stops at the first error
//! - Validation is pure: no defaults are applied here

use regex::Regex;

use crate::config::error::ConfigError;
use crate::config::schema::RawEndpointConfig;
use crate::config::service::SUPPORTED_VERSION;
use crate::template::patterns::DEBUG_PATH;

pub fn check_version(version: u32) -> Result<(), ConfigError> {
    if version == SUPPORTED_VERSION {
        Ok(())
    } else {
        Err(ConfigError::UnsupportedVersion(version))
    }
}

/// Rule deciding which endpoint paths are reserved.
#[derive(Debug, Clone)]
pub struct ReservedPaths {
    pattern: Regex,
}

impl ReservedPaths {
    /// Use a custom rule instead of the debug namespace.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn is_reserved(&self, path: &str) -> bool {
        self.pattern.is_match(path)
    }
}

impl Default for ReservedPaths {
    fn default() -> Self {
        Self {
            pattern: (*DEBUG_PATH).clone(),
        }
    }
}

/// Validate an endpoint whose path has already been cleaned.
pub fn validate_endpoint(
    path: &str,
    endpoint: &RawEndpointConfig,
    reserved: &ReservedPaths,
) -> Result<(), ConfigError> {
    if reserved.is_reserved(path) {
        return Err(ConfigError::ReservedPath(path.to_string()));
    }
    if path.contains('?') {
        return Err(ConfigError::QueryInEndpointPath(path.to_string()));
    }
    if endpoint.backend.is_empty() {
        return Err(ConfigError::NoBackends(path.to_string()));
    }
    Ok(())
}
