//! Literal matching on top of the `regex` crate.
//!
//! Version strings are full of regex metacharacters (`1.2.3`, `v2+beta`), so
//! both sides of the substitution are escaped before they reach the engine.

use crate::error::{EngineError, Result};
use regex::bytes::Regex;
use std::borrow::Cow;

/// Escape `s` so that, compiled as a pattern, it matches exactly `s`.
#[must_use]
pub fn escape_pattern(s: &str) -> String {
    regex::escape(s)
}

/// Escape `s` so that, used as a replacement, it is inserted verbatim.
///
/// `$` introduces capture-group expansion in replacement strings; doubling it
/// yields a literal dollar sign.
#[must_use]
pub fn escape_replacement(s: &str) -> String {
    s.replace('$', "$$")
}

/// Compiled global literal replacement of one string by another.
///
/// Works on raw bytes so that files which are not valid UTF-8 are rewritten
/// without lossy decoding.
#[derive(Debug, Clone)]
pub struct LiteralReplacer {
    pattern: Regex,
    replacement: String,
}

impl LiteralReplacer {
    /// # Errors
    /// Returns [`EngineError::Config`] when `original` is empty, or
    /// [`EngineError::Regex`] if the escaped pattern fails to compile.
    pub fn new(original: &str, replacement: &str) -> Result<Self> {
        if original.is_empty() {
            return Err(EngineError::Config(
                "search string must not be empty".to_string(),
            ));
        }

        Ok(Self {
            pattern: Regex::new(&escape_pattern(original))?,
            replacement: escape_replacement(replacement),
        })
    }

    /// Replace every non-overlapping occurrence, left to right.
    ///
    /// Returns `Cow::Borrowed` when nothing matched.
    #[must_use]
    pub fn replace_all<'h>(&self, haystack: &'h [u8]) -> Cow<'h, [u8]> {
        self.pattern
            .replace_all(haystack, self.replacement.as_bytes())
    }
}
