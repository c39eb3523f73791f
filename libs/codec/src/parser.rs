//! # Message Parser
//!
//! ## Purpose
//!
//! Turns a complete message string into a [`Message`], or a [`ProtocolError`]
//! naming the stage and field that failed. Parsing is one pass and all-or-nothing:
//! the first failure aborts and nothing partial is returned.
//!
//! ```text
//! input ──► split_header ──► header fields ──► remainder fields ──► Message
//!               │                 │                    │
//!          absent: whole     count == N?          count == 2?
//!          input is body     parse_field each     key, content
//! ```
//!
//! ## Thread Safety
//!
//! Pure function of its input; the compiled patterns are shared read-only, so
//! concurrent calls need no coordination.

use crate::error::{ProtocolError, ProtocolResult};
use crate::field::{parse_field, Field};
use crate::grammar;
use crate::message::Message;
use tracing::debug;

/// Parse a full message: optional `|N...|` header, then key and content fields
pub fn parse_message(input: &str) -> ProtocolResult<Message> {
    let result = parse_message_inner(input);
    if let Err(err) = &result {
        debug!(input_len = input.len(), error = %err, "message rejected");
    }
    result
}

fn parse_message_inner(input: &str) -> ProtocolResult<Message> {
    let (header, body) = match grammar::split_header(input) {
        Some(block) => (parse_header_block(&block)?, block.remainder),
        None => (Vec::new(), input),
    };

    let fields = grammar::find_fields(body);
    let [key_text, content_text] = fields.as_slice() else {
        return Err(ProtocolError::field_count(fields.len()));
    };

    let key = parse_field(key_text).map_err(ProtocolError::key_field)?;
    let content = parse_field(content_text).map_err(ProtocolError::content_field)?;

    Ok(Message::new(header, key, content))
}

/// Validate the declared count of a header block and decode its fields in order
pub fn parse_header_block(block: &grammar::HeaderBlock<'_>) -> ProtocolResult<Vec<Field>> {
    let declared: usize = block
        .count_digits
        .parse()
        .map_err(|_| ProtocolError::InvalidHeaderCount {
            digits: block.count_digits.to_string(),
        })?;

    let texts = grammar::find_fields(block.inner);
    if texts.len() != declared {
        return Err(ProtocolError::header_count_mismatch(declared, texts.len()));
    }

    texts
        .into_iter()
        .enumerate()
        .map(|(index, text)| parse_field(text).map_err(|e| ProtocolError::header_field(index, e)))
        .collect()
}
