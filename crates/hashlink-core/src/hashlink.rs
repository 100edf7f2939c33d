//! The `hl:` identifier grammar.
//!
//! ```text
//! hashlink = "hl:" digest-segment [ ":" metadata-segment ]
//! ```
//!
//! Both segments are encoding-tagged printable strings that never contain
//! `:` or whitespace. Parsing only splits and validates the grammar; it does
//! not decode or verify anything.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{HashlinkError, Result};

/// Scheme prefix of every hashlink.
pub const SCHEME: &str = "hl:";

/// Segment separator.
pub const SEPARATOR: char = ':';

/// A hashlink split into its segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParsedHashlink {
    digest: String,
    metadata: Option<String>,
}

impl ParsedHashlink {
    /// Assemble from already-encoded segments.
    pub fn from_segments(digest: String, metadata: Option<String>) -> Result<Self> {
        check_segment(&digest, "digest")?;
        if let Some(m) = &metadata {
            check_segment(m, "metadata")?;
        }
        Ok(Self { digest, metadata })
    }

    /// The encoded digest segment.
    pub fn digest_segment(&self) -> &str {
        &self.digest
    }

    /// The encoded metadata segment, if present.
    pub fn metadata_segment(&self) -> Option<&str> {
        self.metadata.as_deref()
    }
}

/// Split a hashlink into its digest and optional metadata segments.
pub fn parse(identifier: &str) -> Result<ParsedHashlink> {
    let rest = identifier.strip_prefix(SCHEME).ok_or_else(|| {
        HashlinkError::MalformedHashlink(format!("missing {SCHEME} scheme prefix"))
    })?;

    let (digest, metadata) = match rest.split_once(SEPARATOR) {
        Some((digest, metadata)) => (digest, Some(metadata)),
        None => (rest, None),
    };

    ParsedHashlink::from_segments(digest.to_string(), metadata.map(str::to_string))
}

fn check_segment(segment: &str, what: &str) -> Result<()> {
    if segment.is_empty() {
        return Err(HashlinkError::MalformedHashlink(format!("empty {what} segment")));
    }
    if segment.contains(SEPARATOR) {
        return Err(HashlinkError::MalformedHashlink(format!(
            "{what} segment contains '{SEPARATOR}'"
        )));
    }
    if segment.chars().any(char::is_whitespace) {
        return Err(HashlinkError::MalformedHashlink(format!(
            "{what} segment contains whitespace"
        )));
    }
    Ok(())
}

impl fmt::Display for ParsedHashlink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SCHEME}{}", self.digest)?;
        if let Some(m) = &self.metadata {
            write!(f, "{SEPARATOR}{m}")?;
        }
        Ok(())
    }
}

impl FromStr for ParsedHashlink {
    type Err = HashlinkError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl TryFrom<String> for ParsedHashlink {
    type Error = HashlinkError;

    fn try_from(s: String) -> Result<Self> {
        parse(&s)
    }
}

impl From<ParsedHashlink> for String {
    fn from(h: ParsedHashlink) -> Self {
        h.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGEST: &str = "zQmWvQxTqbG2Z9HPJgG57jjwR154cKhbtJenbyYTWkjgF3e";
    const META: &str = "z3TSgXTuaHxY2tsArhUreJ4ixgw9NW7DYuQ9QTPQyLHy";

    #[test]
    fn test_parse_digest_only() {
        let parsed = parse(&format!("hl:{DIGEST}")).unwrap();
        assert_eq!(parsed.digest_segment(), DIGEST);
        assert_eq!(parsed.metadata_segment(), None);
    }

    #[test]
    fn test_parse_with_metadata() {
        let id = format!("hl:{DIGEST}:{META}");
        let parsed: ParsedHashlink = id.parse().unwrap();
        assert_eq!(parsed.digest_segment(), DIGEST);
        assert_eq!(parsed.metadata_segment(), Some(META));
        assert_eq!(parsed.to_string(), id);
    }

    #[test]
    fn test_parse_rejects_bad_grammar() {
        let cases = [
            format!("HL:{DIGEST}"),
            DIGEST.to_string(),
            "hl:".to_string(),
            format!("hl:{DIGEST}:"),
            format!("hl::{META}"),
            format!("hl:{DIGEST}:{META}:extra"),
            format!("hl:{DIGEST} :{META}"),
            format!("hl:{DIGEST}\n"),
        ];

        for case in cases {
            assert!(
                matches!(parse(&case), Err(HashlinkError::MalformedHashlink(_))),
                "expected {case:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_serde_as_string() {
        let id = format!("hl:{DIGEST}:{META}");
        let parsed = parse(&id).unwrap();

        let json = serde_json::to_string(&parsed).unwrap();
        assert_eq!(json, format!("\"{id}\""));

        let back: ParsedHashlink = serde_json::from_str(&json).unwrap();
        assert_eq!(back, parsed);

        assert!(serde_json::from_str::<ParsedHashlink>("\"nope\"").is_err());
    }
}
