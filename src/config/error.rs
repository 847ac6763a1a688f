//! Configuration error taxonomy.
//!
//! Every failure aborts the whole load: a gateway never starts with a
//! subset of its routes.

use std::path::PathBuf;

use thiserror::Error;

use crate::template::url::TemplateError;

/// Error type for configuration loading and compilation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unsupported version: {0}")]
    UnsupportedVersion(u32),

    #[error("the endpoint url path [{0}] is reserved")]
    ReservedPath(String),

    #[error("the [{0}] endpoint has 0 backends defined")]
    NoBackends(String),

    #[error("the endpoint url path [{0}] must not carry a query string")]
    QueryInEndpointPath(String),

    #[error("invalid host [{0}]")]
    InvalidHost(String),

    #[error("backend [{backend}] of the [{endpoint}] endpoint: invalid host [{host}]")]
    InvalidBackendHost {
        endpoint: String,
        backend: String,
        host: String,
    },

    #[error("backend [{backend}] of the [{endpoint}] endpoint has no hosts")]
    NoHosts { endpoint: String, backend: String },

    #[error("the [{0}] endpoint has no timeout and the service defines none")]
    MissingTimeout(String),

    #[error("backend [{backend}] of the [{endpoint}] endpoint: {source}")]
    Template {
        endpoint: String,
        backend: String,
        #[source]
        source: TemplateError,
    },

    #[error("invalid path pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown configuration format for {0}")]
    UnknownFormat(PathBuf),
}
