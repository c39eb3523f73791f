//! Common test utilities for message parsing
//!
//! Test inputs are written with readable bracket payloads and encoded here, so
//! `{6}[client]` in a test reads as the wire text `{6}[Y2xpZW50]`.

#![allow(dead_code)]

use base64::{engine::general_purpose::STANDARD, Engine as _};
use regex::Regex;

/// Replace every `[text]` in a template with `[base64(text)]`
pub fn encode_brackets(template: &str) -> String {
    let brackets = Regex::new(r"\[([^\]]*)\]").unwrap();
    brackets
        .replace_all(template, |caps: &regex::Captures<'_>| {
            format!("[{}]", STANDARD.encode(&caps[1]))
        })
        .into_owned()
}

/// Encode `text` as a field declaring its true scalar-value count
pub fn field_text(text: &str) -> String {
    field_text_declaring(text.chars().count(), text)
}

/// Encode `text` as a field declaring an arbitrary length
pub fn field_text_declaring(declared: usize, text: &str) -> String {
    format!("{{{}}}[{}]", declared, STANDARD.encode(text))
}

/// Assemble a message from an optional header and body fields
pub fn message_text(header: Option<(usize, &[String])>, body: &[String]) -> String {
    let mut out = String::new();
    if let Some((declared, fields)) = header {
        out.push('|');
        out.push_str(&declared.to_string());
        for field in fields {
            out.push_str(field);
        }
        out.push('|');
    }
    for field in body {
        out.push_str(field);
    }
    out
}
