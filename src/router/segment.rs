use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::node::NodeType;

const PARAM_CHARS: &str = "[0-9A-Za-z_]+";

lazy_static! {
    static ref TOKEN: Regex = Regex::new(&format!(":{PARAM_CHARS}|[^:]+")).unwrap();
}

#[derive(Error, Debug)]
pub enum InsertError {
    #[error("invalid segment {segment:?}: missing parameter name")]
    InvalidSegment { segment: String },
    #[error("invalid pattern for segment {segment:?}")]
    InvalidPattern {
        segment: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug)]
pub enum Kind {
    Static,
    Placeholder(String),
    /// `*`, named when its node is created.
    Anonymous,
    Mixed(Regex),
    Wildcard(String),
}

impl Kind {
    pub fn node_type(&self) -> NodeType {
        match self {
            Kind::Static => NodeType::Static,
            Kind::Placeholder(_) | Kind::Anonymous => NodeType::Placeholder,
            Kind::Mixed(_) => NodeType::Mixed,
            Kind::Wildcard(_) => NodeType::Wildcard,
        }
    }
}

#[derive(Debug)]
pub struct Segment<'p> {
    pub text: &'p str,
    pub kind: Kind,
}

impl Segment<'_> {
    pub fn is_static(&self) -> bool {
        matches!(self.kind, Kind::Static)
    }
}

/// Parses every segment of a declaration up front, so a bad segment is
/// reported before the tree is touched.
pub fn parse_path(path: &str) -> Result<Vec<Segment<'_>>, InsertError> {
    path.split('/')
        .map(|text| {
            let kind = parse_segment(text)?;
            Ok(Segment { text, kind })
        })
        .collect()
}

fn parse_segment(text: &str) -> Result<Kind, InsertError> {
    if text == "**" {
        return Ok(Kind::Wildcard("_".to_owned()));
    }
    if text.starts_with("**") {
        let name = text
            .strip_prefix("**:")
            .ok_or_else(|| InsertError::InvalidSegment {
                segment: text.to_owned(),
            })?;
        let name = if name.is_empty() { "_" } else { name };
        return Ok(Kind::Wildcard(name.to_owned()));
    }

    if text == "*" {
        return Ok(Kind::Anonymous);
    }

    if !text.contains(':') {
        return Ok(Kind::Static);
    }

    let tokens: Vec<&str> = TOKEN.find_iter(text).map(|m| m.as_str()).collect();
    if tokens.iter().map(|token| token.len()).sum::<usize>() != text.len() {
        return Err(InsertError::InvalidSegment {
            segment: text.to_owned(),
        });
    }

    // Full coverage means a lone token is `:name`.
    if let [token] = tokens.as_slice() {
        return Ok(Kind::Placeholder(token[1..].to_owned()));
    }

    compile_mixed(text, &tokens).map(Kind::Mixed)
}

fn compile_mixed(text: &str, tokens: &[&str]) -> Result<Regex, InsertError> {
    let mut pattern = String::from("^");
    for token in tokens {
        match token.strip_prefix(':') {
            Some(name) => pattern.push_str(&format!("(?P<{name}>{PARAM_CHARS})")),
            None => pattern.push_str(&regex::escape(token)),
        }
    }
    pattern.push('$');

    Regex::new(&pattern).map_err(|source| InsertError::InvalidPattern {
        segment: text.to_owned(),
        source,
    })
}
