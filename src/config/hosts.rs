//! Host normalisation.
//!
//! # Responsibilities
//! - Default the scheme to `http://`
//! - Strip the trailing slash
//! - Reject anything that is not exactly one host-grammar match
//!
//! Order is preserved; callers treat the first host as the primary one.

use crate::config::error::ConfigError;
use crate::template::patterns::HOST;

const DEFAULT_SCHEME: &str = "http://";

/// Clean every host in the list.
pub fn clean_hosts(hosts: &[String]) -> Result<Vec<String>, ConfigError> {
    hosts.iter().map(|h| clean_host(h)).collect()
}

/// Clean a single host.
pub fn clean_host(host: &str) -> Result<String, ConfigError> {
    let mut matches = HOST.captures_iter(host);
    let (Some(caps), None) = (matches.next(), matches.next()) else {
        return Err(ConfigError::InvalidHost(host.to_string()));
    };

    let scheme = caps.get(1).map_or(DEFAULT_SCHEME, |m| m.as_str());
    let authority = caps.get(2).map_or("", |m| m.as_str());
    let port = caps.get(3).map_or("", |m| m.as_str());
    Ok(format!("{scheme}{authority}{port}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clean_hosts() {
        let samples: Vec<String> = [
            "supu",
            "127.0.0.1",
            "https://supu.local/",
            "http://127.0.0.1",
            "supu_42.local:8080/",
            "http://127.0.0.1:8080",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let expected = [
            "http://supu",
            "http://127.0.0.1",
            "https://supu.local",
            "http://127.0.0.1",
            "http://supu_42.local:8080",
            "http://127.0.0.1:8080",
        ];

        assert_eq!(clean_hosts(&samples).unwrap(), expected);
    }

    #[test]
    fn test_invalid_hosts() {
        for host in ["", "http://127.0.0.1:8080 http://127.0.0.1:8080", "supu:8", "ftp://supu"] {
            let err = clean_host(host).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidHost(ref h) if h == host), "{host}");
        }
    }

    #[test]
    fn test_first_bad_host_fails_the_list() {
        let hosts = vec!["supu".to_string(), "".to_string()];
        assert!(clean_hosts(&hosts).is_err());
    }

    proptest! {
        #[test]
        fn prop_clean_host_is_idempotent(
            scheme in prop::option::of(prop_oneof!["http://", "https://"]),
            name in "[a-z][a-z0-9_\\-]{0,12}(\\.[a-z]{1,6}){0,2}",
            port in prop::option::of(10u32..65535),
            slash in any::<bool>(),
        ) {
            let raw = format!(
                "{}{}{}{}",
                scheme.unwrap_or_default(),
                name,
                port.map(|p| format!(":{p}")).unwrap_or_default(),
                if slash { "/" } else { "" },
            );
            let once = clean_host(&raw).unwrap();
            prop_assert!(once.starts_with("http://") || once.starts_with("https://"));
            prop_assert!(!once.ends_with('/'));
            prop_assert_eq!(clean_host(&once).unwrap(), once);
        }
    }
}
