//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::compiler::compile;
use crate::config::error::ConfigError;
use crate::config::schema::RawServiceConfig;
use crate::config::service::ServiceConfig;
use crate::routing::RoutingStyle;

/// File formats a gateway description can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
    Yaml,
}

impl Format {
    /// Guess the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Format::Toml),
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }
}

/// Parse a raw gateway description from text.
pub fn parse_raw(content: &str, format: Format) -> Result<RawServiceConfig, ConfigError> {
    let raw: RawServiceConfig = match format {
        Format::Toml => toml::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
        Format::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(raw)
}

/// Read a raw gateway description, picking the format by extension.
pub fn load_raw(path: &Path) -> Result<RawServiceConfig, ConfigError> {
    let format =
        Format::from_path(path).ok_or_else(|| ConfigError::UnknownFormat(path.to_path_buf()))?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_raw(&content, format)
}

/// Load and compile a gateway description.
pub fn load_config(path: &Path, style: RoutingStyle) -> Result<ServiceConfig, ConfigError> {
    let raw = load_raw(path)?;
    tracing::info!(path = %path.display(), endpoints = raw.endpoints.len(), "Configuration loaded");
    compile(raw, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("a/gateway.toml")), Some(Format::Toml));
        assert_eq!(Format::from_path(Path::new("gateway.JSON")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("gateway.yml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("gateway.ini")), None);
        assert_eq!(Format::from_path(Path::new("gateway")), None);
    }

    #[test]
    fn test_unknown_format() {
        let err = load_raw(Path::new("gateway.ini")).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownFormat(ref p) if *p == PathBuf::from("gateway.ini")));
    }

    #[test]
    fn test_missing_file() {
        let err = load_raw(Path::new("/nonexistent/gateway.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_parse_json_and_yaml() {
        let json = r#"{"version": 1, "timeout": "2s", "endpoints": [{"endpoint": "/a"}]}"#;
        let raw = parse_raw(json, Format::Json).unwrap();
        assert_eq!(raw.endpoints[0].endpoint, "/a");

        let yaml = "version: 1\ntimeout: 2000\nhost:\n  - supu\n";
        let raw = parse_raw(yaml, Format::Yaml).unwrap();
        assert_eq!(raw.host, vec!["supu"]);
        assert_eq!(raw.timeout, std::time::Duration::from_secs(2));
    }
}
