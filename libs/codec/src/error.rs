//! Parse errors for length-tagged field messages
//!
//! Two layers mirror the two parsing stages: [`FieldError`] is produced by the
//! field parser for a single `{N}[B]` unit, [`ProtocolError`] by the message
//! parser and wraps field failures with their position. Every variant carries
//! the offending values so a rejected message can be diagnosed from the error
//! alone.

use thiserror::Error;

/// Maximum number of characters of a malformed field kept for display
pub const SNIPPET_MAX_CHARS: usize = 48;

/// Why a field payload could not be turned into text
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingCause {
    /// Bracket content is not standard padded base64
    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded bytes are not UTF-8 text
    #[error("decoded payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Failure to decode a single `{declared_length}[base64]` field
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Text does not have the `{digits}[payload]` shape
    #[error("Malformed field: expected {{digits}}[base64], got '{snippet}'")]
    MalformedField { snippet: String },

    /// Declared length does not fit the platform integer
    #[error("Invalid declared length '{digits}': value out of range")]
    InvalidLength { digits: String },

    /// Payload is not base64, or decodes to something other than UTF-8
    #[error("Invalid field encoding: {cause}")]
    InvalidEncoding {
        #[source]
        cause: EncodingCause,
    },

    /// Declared scalar-value count disagrees with the decoded text
    #[error("Length mismatch: declared {declared} characters, decoded {actual}")]
    LengthMismatch { declared: usize, actual: usize },
}

impl FieldError {
    /// Create MalformedField keeping a bounded preview of the rejected text
    pub fn malformed(input: &str) -> Self {
        let mut snippet: String = input.chars().take(SNIPPET_MAX_CHARS).collect();
        if input.chars().nth(SNIPPET_MAX_CHARS).is_some() {
            snippet.push_str("...");
        }
        Self::MalformedField { snippet }
    }

    pub fn invalid_length(digits: impl Into<String>) -> Self {
        Self::InvalidLength {
            digits: digits.into(),
        }
    }

    pub fn length_mismatch(declared: usize, actual: usize) -> Self {
        Self::LengthMismatch { declared, actual }
    }

    /// Short stable name of the failure kind, used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedField { .. } => "malformed_field",
            Self::InvalidLength { .. } => "invalid_length",
            Self::InvalidEncoding { .. } => "invalid_encoding",
            Self::LengthMismatch { .. } => "length_mismatch",
        }
    }
}

impl From<EncodingCause> for FieldError {
    fn from(cause: EncodingCause) -> Self {
        Self::InvalidEncoding { cause }
    }
}

impl From<base64::DecodeError> for FieldError {
    fn from(err: base64::DecodeError) -> Self {
        EncodingCause::from(err).into()
    }
}

impl From<std::string::FromUtf8Error> for FieldError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        EncodingCause::from(err).into()
    }
}

/// Failure to parse a complete message
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Header count digits do not fit the platform integer
    #[error("Invalid header count '{digits}': value out of range")]
    InvalidHeaderCount { digits: String },

    /// Header block declares a different number of fields than it contains
    #[error("Header field count mismatch: declared {declared}, found {found}")]
    HeaderCountMismatch { declared: usize, found: usize },

    /// Remainder after the header does not hold exactly key and content
    #[error("Expected exactly {expected} fields (key and content), found {found}")]
    FieldCountError { found: usize, expected: usize },

    /// A header field failed to decode
    #[error("Header field {index} rejected: {source}")]
    HeaderFieldError { index: usize, source: FieldError },

    /// The key field failed to decode
    #[error("Key field rejected: {source}")]
    KeyFieldError { source: FieldError },

    /// The content field failed to decode
    #[error("Content field rejected: {source}")]
    ContentFieldError { source: FieldError },
}

impl ProtocolError {
    pub fn header_count_mismatch(declared: usize, found: usize) -> Self {
        Self::HeaderCountMismatch { declared, found }
    }

    /// Create FieldCountError against the fixed key + content pair
    pub fn field_count(found: usize) -> Self {
        Self::FieldCountError {
            found,
            expected: crate::grammar::BODY_FIELD_COUNT,
        }
    }

    pub fn header_field(index: usize, source: FieldError) -> Self {
        Self::HeaderFieldError { index, source }
    }

    pub fn key_field(source: FieldError) -> Self {
        Self::KeyFieldError { source }
    }

    pub fn content_field(source: FieldError) -> Self {
        Self::ContentFieldError { source }
    }

    /// Underlying field failure, if this error wraps one
    pub fn field_error(&self) -> Option<&FieldError> {
        match self {
            Self::HeaderFieldError { source, .. }
            | Self::KeyFieldError { source }
            | Self::ContentFieldError { source } => Some(source),
            _ => None,
        }
    }
}

/// Result type for field decoding
pub type FieldResult<T> = std::result::Result<T, FieldError>;

/// Result type for message parsing
pub type ProtocolResult<T> = std::result::Result<T, ProtocolError>;
