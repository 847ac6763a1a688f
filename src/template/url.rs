//! Backend URL template compilation.
//!
//! # Responsibilities
//! - Check that a backend only asks for parameters its endpoint supplies
//! - Rewrite `{name}` into the `{{.Name}}` field-reference syntax
//! - Record the ordered key list the proxy binds per request
//! - Materialise a request path in one pass, percent-encoding values
//!
//! # Design Decisions
//! - The distinct-count pre-check runs before the per-name subset check,
//!   so a backend asking for more names than exist gets the coarser error
//! - Key names are title-cased the same way for the rewrite and the key list
//! - The pattern is split into literal and key parts at compile time, so a
//!   bound value is never scanned for further keys

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use thiserror::Error;

use crate::template::patterns::BACKEND_PLACEHOLDER;
use crate::template::placeholders::{extract_placeholders, placeholder_set, Grammar};

/// Why a backend URL pattern could not be compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("too many output params! input: {input:?}, output: {output:?}")]
    TooManyOutputParams {
        input: BTreeSet<String>,
        output: Vec<String>,
    },

    #[error("undefined output param [{param}]! input: {input:?}, output: {output:?}")]
    UndefinedOutputParam {
        param: String,
        input: BTreeSet<String>,
        output: Vec<String>,
    },

    #[error("output params [{first}] and [{second}] both bind key [{key}]")]
    KeyCollision {
        key: String,
        first: String,
        second: String,
    },
}

/// Why a compiled template could not be materialised.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("missing value for url param [{0}]")]
    MissingParam(String),

    #[error("value for url param [{0}] is a dot segment")]
    DotSegment(String),

    #[error("no host at index {0}")]
    NoHost(usize),

    #[error("invalid upstream url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Literal(String),
    Key(String),
}

/// A backend URL pattern bound to its endpoint's placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlTemplate {
    pattern: String,
    keys: Vec<String>,
    #[serde(skip)]
    parts: Vec<Part>,
}

impl UrlTemplate {
    /// Compile `raw` against the endpoint's input placeholder set.
    pub fn compile(raw: &str, input: &BTreeSet<String>) -> Result<Self, TemplateError> {
        let pattern = clean_path(raw);
        let output = extract_placeholders(&pattern, Grammar::Backend);

        if placeholder_set(&output).len() > input.len() {
            return Err(TemplateError::TooManyOutputParams {
                input: input.clone(),
                output,
            });
        }

        let mut bound: HashMap<String, &str> = HashMap::new();
        for param in &output {
            if !input.contains(param) {
                return Err(TemplateError::UndefinedOutputParam {
                    param: param.clone(),
                    input: input.clone(),
                    output: output.clone(),
                });
            }
            let key = title_case(param);
            match bound.get(key.as_str()).copied() {
                Some(first) if first != param.as_str() => {
                    return Err(TemplateError::KeyCollision {
                        key,
                        first: first.to_string(),
                        second: param.clone(),
                    });
                }
                Some(_) => {}
                None => {
                    bound.insert(key, param);
                }
            }
        }

        let mut rewritten = String::with_capacity(pattern.len());
        let mut parts = Vec::new();
        let mut keys = Vec::with_capacity(output.len());
        let mut last = 0;
        for caps in BACKEND_PLACEHOLDER.captures_iter(&pattern) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let literal = &pattern[last..whole.start()];
            if !literal.is_empty() {
                parts.push(Part::Literal(literal.to_string()));
            }
            rewritten.push_str(literal);

            let key = title_case(name.as_str());
            rewritten.push_str(&format!("{{{{.{key}}}}}"));
            parts.push(Part::Key(key.clone()));
            keys.push(key);
            last = whole.end();
        }
        let tail = &pattern[last..];
        if !tail.is_empty() {
            parts.push(Part::Literal(tail.to_string()));
        }
        rewritten.push_str(tail);

        Ok(Self {
            pattern: rewritten,
            keys,
            parts,
        })
    }

    /// The rewritten pattern, e.g. `/users/{{.User}}`.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Bound key names in order of appearance, duplicates included.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Materialise the path for one request.
    ///
    /// `params` is keyed by the title-cased names in [`keys`](Self::keys).
    /// Values are percent-encoded; `.` and `..` are refused since they
    /// would be resolved as dot segments.
    pub fn render(&self, params: &HashMap<String, String>) -> Result<String, RenderError> {
        let mut rendered = String::with_capacity(self.pattern.len());
        for part in &self.parts {
            match part {
                Part::Literal(literal) => rendered.push_str(literal),
                Part::Key(key) => {
                    let value = params
                        .get(key)
                        .ok_or_else(|| RenderError::MissingParam(key.clone()))?;
                    if value == "." || value == ".." {
                        return Err(RenderError::DotSegment(key.clone()));
                    }
                    rendered.push_str(&urlencoding::encode(value));
                }
            }
        }
        Ok(rendered)
    }
}

/// Guarantee a single leading slash.
pub fn clean_path(path: &str) -> String {
    format!("/{}", path.strip_prefix('/').unwrap_or(path))
}

/// Uppercase the first letter of every word.
///
/// Letters, digits and `_` continue a word; anything else starts a new one.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_boundary = true;
    for c in name.chars() {
        if at_boundary {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_boundary = !(c.is_alphanumeric() || c == '_');
    }
    out
}
