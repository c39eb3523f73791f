//! # Field Parser
//!
//! Decodes one `{declared_length}[base64]` unit into a [`Field`]. The declared
//! length counts Unicode scalar values of the decoded text, never bytes, so a
//! payload of `"è"` must declare `1` even though it is two UTF-8 bytes.
//!
//! Decoding steps, each with its own failure:
//!
//! ```text
//! "{N}[B]" → shape check → N as usize → base64(B) → UTF-8 → chars == N
//!              Malformed    InvalidLength   InvalidEncoding    LengthMismatch
//! ```

use crate::error::{FieldError, FieldResult};
use crate::grammar;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// A decoded field whose content is known to match its declared length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    declared_length: usize,
    content: String,
}

impl Field {
    /// Number of scalar values the sender declared, equal to `content().chars().count()`
    pub fn declared_length(&self) -> usize {
        self.declared_length
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.declared_length == 0
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Len: {}, Content: '{}'", self.declared_length, self.content)
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> FieldResult<Self> {
        parse_field(s)
    }
}

/// Parse a single field, validating its declared length against the decoded text
pub fn parse_field(input: &str) -> FieldResult<Field> {
    let (digits, payload) = grammar::match_field(input).ok_or_else(|| FieldError::malformed(input))?;

    let declared_length: usize = digits
        .parse()
        .map_err(|_| FieldError::invalid_length(digits))?;

    let bytes = STANDARD.decode(payload)?;
    let content = String::from_utf8(bytes)?;

    let actual = content.chars().count();
    if actual != declared_length {
        return Err(FieldError::length_mismatch(declared_length, actual));
    }

    trace!(declared_length, "field decoded");
    Ok(Field {
        declared_length,
        content,
    })
}
