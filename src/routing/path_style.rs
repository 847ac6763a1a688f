//! Endpoint path rewriting for the selected routing engine.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Placeholder syntax expected by the routing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingStyle {
    /// `/{name}` stays as is.
    Brace,
    /// `/{name}` becomes `/:name`.
    Colon,
}

impl RoutingStyle {
    /// Rewrite every `/{param}` segment of `path`.
    pub fn translate(self, path: &str, params: &[String]) -> String {
        match self {
            RoutingStyle::Brace => path.to_string(),
            RoutingStyle::Colon => params.iter().fold(path.to_string(), |acc, p| {
                acc.replace(&format!("/{{{p}}}"), &format!("/:{p}"))
            }),
        }
    }
}

impl FromStr for RoutingStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "brace" | "brackets" => Ok(RoutingStyle::Brace),
            "colon" => Ok(RoutingStyle::Colon),
            other => Err(format!("unknown routing style: {other}")),
        }
    }
}

impl fmt::Display for RoutingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingStyle::Brace => f.write_str("brace"),
            RoutingStyle::Colon => f.write_str("colon"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::placeholders::{extract_placeholders, Grammar};

    const SAMPLES: [&str; 4] = [
        "supu/{tupu}",
        "/supu/{tupu}",
        "/supu.local/",
        "supu/{tupu}/{supu}?a={s}&b=2",
    ];

    #[test]
    fn test_colon_style() {
        let expected = [
            "supu/:tupu",
            "/supu/:tupu",
            "/supu.local/",
            "supu/:tupu/:supu?a={s}&b=2",
        ];
        for (sample, want) in SAMPLES.iter().zip(expected) {
            let params = extract_placeholders(sample, Grammar::Endpoint);
            assert_eq!(RoutingStyle::Colon.translate(sample, &params), want);
        }
    }

    #[test]
    fn test_brace_style_is_identity() {
        for sample in SAMPLES {
            let params = extract_placeholders(sample, Grammar::Endpoint);
            assert_eq!(RoutingStyle::Brace.translate(sample, &params), sample);
        }
    }

    #[test]
    fn test_parse_style() {
        assert_eq!("colon".parse::<RoutingStyle>(), Ok(RoutingStyle::Colon));
        assert_eq!("Brace".parse::<RoutingStyle>(), Ok(RoutingStyle::Brace));
        assert!("gorilla".parse::<RoutingStyle>().is_err());
    }
}
