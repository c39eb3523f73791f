//! Parsed message value and its diagnostic rendering

use crate::error::{ProtocolError, ProtocolResult};
use crate::field::Field;
use std::fmt;
use std::str::FromStr;

/// Magic value of every message decoded from text; no wire form sets it
pub const MAGIC_UNSET: u64 = 0;

/// A fully validated message: optional header fields, then key and content
///
/// Only produced by [`crate::parse_message`]; there is no partially populated
/// form. A header block declaring zero fields and no header block at all both
/// give an empty [`Message::header`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    magic: u64,
    header: Vec<Field>,
    key: Field,
    content: Field,
}

impl Message {
    pub(crate) fn new(header: Vec<Field>, key: Field, content: Field) -> Self {
        Self {
            magic: MAGIC_UNSET,
            header,
            key,
            content,
        }
    }

    /// Reserved identifier, currently always [`MAGIC_UNSET`]
    pub fn magic(&self) -> u64 {
        self.magic
    }

    /// Header fields in the order they appeared
    pub fn header(&self) -> &[Field] {
        &self.header
    }

    pub fn has_header(&self) -> bool {
        !self.header.is_empty()
    }

    pub fn key(&self) -> &Field {
        &self.key
    }

    pub fn content(&self) -> &Field {
        &self.content
    }

    /// Split into `(header, key, content)`
    pub fn into_parts(self) -> (Vec<Field>, Field, Field) {
        (self.header, self.key, self.content)
    }
}

impl FromStr for Message {
    type Err = ProtocolError;

    fn from_str(s: &str) -> ProtocolResult<Self> {
        crate::parser::parse_message(s)
    }
}

/// Multi-line dump for logs and debugging; not a wire format
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Magic: {}", self.magic)?;

        if self.header.is_empty() {
            writeln!(f, "Header: none")?;
        } else {
            writeln!(f, "Header:")?;
            for (index, field) in self.header.iter().enumerate() {
                writeln!(f, "  [{}] {}", index, field)?;
            }
        }

        writeln!(f, "Key: {}", self.key)?;
        writeln!(f, "Content: {}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(text: &str) -> Field {
        use base64::{engine::general_purpose::STANDARD, Engine as _};
        crate::parse_field(&format!(
            "{{{}}}[{}]",
            text.chars().count(),
            STANDARD.encode(text)
        ))
        .unwrap()
    }

    #[test]
    fn test_render_with_header() {
        let message = Message::new(
            vec![field("client"), field("header prova")],
            field("chiave_123"),
            field("è"),
        );

        let expected = "Magic: 0\n\
                        Header:\n  [0] Len: 6, Content: 'client'\n  [1] Len: 12, Content: 'header prova'\n\
                        Key: Len: 10, Content: 'chiave_123'\n\
                        Content: Len: 1, Content: 'è'\n";
        assert_eq!(message.to_string(), expected);
    }

    #[test]
    fn test_render_without_header() {
        let message = Message::new(Vec::new(), field("key"), field(""));
        assert!(!message.has_header());
        assert_eq!(
            message.to_string(),
            "Magic: 0\nHeader: none\nKey: Len: 3, Content: 'key'\nContent: Len: 0, Content: ''\n"
        );
    }

    #[test]
    fn test_into_parts() {
        let message = Message::new(vec![field("h")], field("k"), field("c"));
        assert_eq!(message.magic(), MAGIC_UNSET);
        let (header, key, content) = message.into_parts();
        assert_eq!(header.len(), 1);
        assert_eq!(key.content(), "k");
        assert_eq!(content.content(), "c");
    }
}
