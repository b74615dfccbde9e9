//! Leaf values of an expression graph.
//!
//! Upstream grammars hand literals around in the quepy text encoding:
//!
//! - `"Paris"@en`: a language-tagged string,
//! - `"42"`: a plain string (quotes are stripped),
//! - `freebase:film.film`: a bare namespaced identifier.
//!
//! Parsing is strict. A stray `@` outside a quoted value, an empty or
//! non-alphanumeric language code, or trailing text after the closing quote is
//! rejected instead of being silently truncated.

use std::fmt;

use crate::error::ExprError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    pub lexical: String,
    pub language: Option<String>,
}

impl Literal {
    pub fn plain(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            language: None,
        }
    }

    pub fn tagged(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            language: Some(language.into()),
        }
    }

    /// Parse the quepy text encoding of a literal.
    pub fn parse_encoded(raw: &str) -> Result<Self, ExprError> {
        if let Some(rest) = raw.strip_prefix('"') {
            let Some(close) = rest.rfind('"') else {
                return Err(ExprError::malformed(raw, "unterminated quoted value"));
            };
            let value = &rest[..close];
            let suffix = &rest[close + 1..];
            if suffix.is_empty() {
                return Ok(Self::plain(value));
            }
            let Some(lang) = suffix.strip_prefix('@') else {
                return Err(ExprError::malformed(
                    raw,
                    format!("unexpected `{suffix}` after the closing quote"),
                ));
            };
            if !is_valid_language_tag(lang) {
                return Err(ExprError::malformed(
                    raw,
                    format!("invalid language tag `{lang}`"),
                ));
            }
            return Ok(Self::tagged(value, lang));
        }

        if raw.contains('@') {
            return Err(ExprError::malformed(
                raw,
                "language separator `@` outside a quoted value",
            ));
        }
        Ok(Self::plain(raw))
    }

    /// The quepy text encoding; `parse_encoded` reads it back.
    pub fn encoded(&self) -> String {
        match &self.language {
            Some(lang) => format!("\"{}\"@{}", self.lexical, lang),
            None if self.is_identifier() => self.lexical.clone(),
            None => format!("\"{}\"", self.lexical),
        }
    }

    /// True for untagged `namespace:local` values (type names, entity ids).
    pub fn is_identifier(&self) -> bool {
        if self.language.is_some() {
            return false;
        }
        match self.lexical.find(':') {
            Some(idx) if idx > 0 => !self
                .lexical
                .chars()
                .any(|c| c.is_whitespace() || c == '"' || c == '@'),
            _ => false,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded())
    }
}

/// Language tags are `alpha{1,8}` followed by `-alnum{1,8}` subtags (`en`, `pt-BR`).
pub fn is_valid_language_tag(tag: &str) -> bool {
    let mut parts = tag.split('-');
    let Some(primary) = parts.next() else {
        return false;
    };
    if primary.is_empty() || primary.len() > 8 || !primary.chars().all(|c| c.is_ascii_alphabetic())
    {
        return false;
    }
    parts.all(|sub| {
        !sub.is_empty() && sub.len() <= 8 && sub.chars().all(|c| c.is_ascii_alphanumeric())
    })
}
