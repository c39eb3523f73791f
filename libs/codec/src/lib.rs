//! # Frame Codec - Length-Tagged Field Messages
//!
//! ## Purpose
//!
//! Decodes self-describing text messages in which every field declares its own
//! character length and carries a base64 payload, so truncation, corruption or
//! a wrong encoding is caught before the content is used:
//!
//! ```text
//! |2{6}[Y2xpZW50]{12}[aGVhZGVyIHByb3Zh]|{3}[a2V5]{7}[Y29udGVudA==]
//! └──────────── optional header ───────┘└─ key ─┘└──── content ───┘
//! ```
//!
//! ## Architecture Role
//!
//! ```text
//! transport ──► [frame_codec] ──► consumers
//!  raw &str      parse_message      Message / ProtocolError
//! ```
//!
//! ## What This Crate Does NOT Contain
//! - Transport, framing of the byte stream, or input size limits (see `frame_config`)
//! - Encoding of messages; decoding only
//!
//! ## Usage
//!
//! ```rust
//! use frame_codec::{parse_message, ProtocolError};
//!
//! let message = parse_message("{3}[a2V5]{5}[aGVsbG8=]").unwrap();
//! assert_eq!(message.key().content(), "key");
//! assert_eq!(message.content().content(), "hello");
//!
//! let err = parse_message("{3}[a2V5]").unwrap_err();
//! assert!(matches!(err, ProtocolError::FieldCountError { found: 1, .. }));
//! ```

pub mod error;
pub mod field;
pub mod grammar;
pub mod message;
pub mod parser;
pub mod response;

pub use error::{EncodingCause, FieldError, FieldResult, ProtocolError, ProtocolResult};
pub use field::{parse_field, Field};
pub use grammar::{HeaderBlock, BODY_FIELD_COUNT};
pub use message::{Message, MAGIC_UNSET};
pub use parser::{parse_header_block, parse_message};
pub use response::{Response, StatusResponse};
