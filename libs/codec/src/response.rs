//! Accept/reject outcome reported back to the sender of a message

use crate::error::ProtocolResult;
use crate::message::Message;
use std::fmt;

/// Two-state status of a processed message
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusResponse {
    Ok = 0,
    Ko = 1,
}

impl StatusResponse {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Ko => "KO",
        }
    }
}

impl fmt::Display for StatusResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status plus a human-readable explanation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: StatusResponse,
    message: String,
}

impl Response {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: StatusResponse::Ok,
            message: message.into(),
        }
    }

    pub fn ko(message: impl Into<String>) -> Self {
        Self {
            status: StatusResponse::Ko,
            message: message.into(),
        }
    }

    /// OK with the message dump, or KO with the parse error
    pub fn from_result(result: &ProtocolResult<Message>) -> Self {
        match result {
            Ok(message) => Self::ok(message.to_string()),
            Err(err) => Self::ko(err.to_string()),
        }
    }

    pub fn status(&self) -> StatusResponse {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_ok(&self) -> bool {
        self.status == StatusResponse::Ok
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_message;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(StatusResponse::Ok as u8, 0);
        assert_eq!(StatusResponse::Ko as u8, 1);
    }

    #[test]
    fn test_from_parse_result() {
        let accepted = Response::from_result(&parse_message("{3}[YWJj]{0}[]"));
        assert!(accepted.is_ok());
        assert!(accepted.message().starts_with("Magic: 0\n"));

        let rejected = Response::from_result(&parse_message("{3}[YWJj]"));
        assert_eq!(rejected.status(), StatusResponse::Ko);
        assert_eq!(
            rejected.to_string(),
            "KO Expected exactly 2 fields (key and content), found 1"
        );
    }
}
