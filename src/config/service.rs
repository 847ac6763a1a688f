//! Compiled service model.
//!
//! Produced once by [`crate::config::compiler::ServiceCompiler`] and never
//! mutated afterwards. Share it behind an `Arc` with every request worker.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::time::Duration;

use serde::Serialize;
use url::Url;

use crate::routing::RoutingStyle;
use crate::template::url::{RenderError, UrlTemplate};

/// The only configuration format version understood.
pub const SUPPORTED_VERSION: u32 = 1;

/// Port used when the configuration leaves it unset.
pub const DEFAULT_PORT: u16 = 8080;

/// A fully resolved gateway description.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceConfig {
    pub endpoints: Vec<EndpointConfig>,
    pub timeout: Duration,
    pub cache_ttl: Duration,
    /// Cleaned default hosts.
    pub host: Vec<String>,
    pub port: u16,
    pub version: u32,
    pub debug: bool,
    /// Path syntax every endpoint was rewritten into.
    pub routing_style: RoutingStyle,
}

/// One public route.
#[derive(Debug, Clone, Serialize)]
pub struct EndpointConfig {
    /// Path in the selected routing style.
    pub endpoint: String,
    /// Uppercase HTTP method.
    pub method: String,
    /// Never empty.
    pub backend: Vec<Backend>,
    pub concurrent_calls: u32,
    pub timeout: Duration,
    pub cache_ttl: Duration,
    pub querystring_params: Vec<String>,
}

/// One upstream call.
#[derive(Debug, Clone, Serialize)]
pub struct Backend {
    pub group: String,
    pub method: String,
    /// Cleaned hosts, never empty; the first one is the primary.
    pub host: Vec<String>,
    pub url_pattern: UrlTemplate,
    pub blacklist: Vec<String>,
    pub whitelist: Vec<String>,
    pub mapping: BTreeMap<String, String>,
    pub encoding: Encoding,
    pub target: String,
    /// Inherited from the endpoint.
    pub concurrent_calls: u32,
    /// Inherited from the endpoint.
    pub timeout: Duration,
}

impl Backend {
    /// Ordered keys bound by the URL template.
    pub fn url_keys(&self) -> &[String] {
        self.url_pattern.keys()
    }

    /// Build the upstream URL for one request against `host[host_index]`.
    pub fn upstream_url(
        &self,
        host_index: usize,
        params: &HashMap<String, String>,
    ) -> Result<Url, RenderError> {
        let host = self
            .host
            .get(host_index)
            .ok_or(RenderError::NoHost(host_index))?;
        let path = self.url_pattern.render(params)?;
        Ok(Url::parse(&format!("{host}{path}"))?)
    }
}

/// Response format of a backend, selecting its decoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    Json,
    Xml,
    Toml,
    #[default]
    Yaml,
}

impl Encoding {
    /// Case-insensitive lookup; `None` for anything unrecognised.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Some(Encoding::Json),
            "xml" => Some(Encoding::Xml),
            "toml" => Some(Encoding::Toml),
            "yaml" => Some(Encoding::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Encoding::Json => "json",
            Encoding::Xml => "xml",
            Encoding::Toml => "toml",
            Encoding::Yaml => "yaml",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_encoding_parse() {
        assert_eq!(Encoding::parse("XML"), Some(Encoding::Xml));
        assert_eq!(Encoding::parse("json"), Some(Encoding::Json));
        assert_eq!(Encoding::parse("Toml"), Some(Encoding::Toml));
        assert_eq!(Encoding::parse("protobuf"), None);
        assert_eq!(Encoding::default(), Encoding::Yaml);
    }

    #[test]
    fn test_upstream_url() {
        let input: BTreeSet<String> = ["user".to_string()].into();
        let backend = Backend {
            group: String::new(),
            method: "GET".into(),
            host: vec!["https://jsonplaceholder.typicode.com".into()],
            url_pattern: UrlTemplate::compile("/posts/{user}", &input).unwrap(),
            blacklist: vec![],
            whitelist: vec![],
            mapping: BTreeMap::new(),
            encoding: Encoding::Json,
            target: String::new(),
            concurrent_calls: 1,
            timeout: Duration::from_secs(1),
        };
        let params = HashMap::from([("User".to_string(), "7".to_string())]);

        let url = backend.upstream_url(0, &params).unwrap();
        assert_eq!(url.as_str(), "https://jsonplaceholder.typicode.com/posts/7");

        let hostile = HashMap::from([("User".to_string(), "../admin?x=".to_string())]);
        let url = backend.upstream_url(0, &hostile).unwrap();
        assert_eq!(url.path(), "/posts/..%2Fadmin%3Fx%3D");
        assert_eq!(url.query(), None);

        assert!(matches!(
            backend.upstream_url(3, &params),
            Err(RenderError::NoHost(3))
        ));
    }
}
