//! # Frame Inspector
//!
//! Diagnostic front end for the message codec: takes raw message strings,
//! applies the configured input limits, parses them and reports one
//! `OK`/`KO` [`Response`] per message with the decoded dump or the reason for
//! rejection.
//!
//! ```text
//! stdin / args ──► InputLimits::check ──► parse_message ──► Response ──► stdout
//! ```

use anyhow::{Context, Result};
use frame_codec::{parse_message, Response};
use frame_config::{InputLimits, InspectorConfig, LimitError, LoggingConfig};
use std::io::{self, BufRead, Read, Write};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Counts of processed messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub accepted: usize,
    pub rejected: usize,
}

impl Summary {
    pub fn all_accepted(&self) -> bool {
        self.rejected == 0
    }
}

/// Checks and parses messages, writing one response per input
#[derive(Debug, Clone)]
pub struct Inspector {
    limits: InputLimits,
    fail_fast: bool,
}

impl Inspector {
    pub fn new(limits: InputLimits, fail_fast: bool) -> Self {
        Self { limits, fail_fast }
    }

    pub fn from_config(config: &InspectorConfig) -> Self {
        Self::new(config.limits, config.fail_fast)
    }

    /// Check and parse one message
    pub fn inspect(&self, input: &str) -> Response {
        if let Err(err) = self.limits.check(input) {
            return Response::ko(err.to_string());
        }
        Response::from_result(&parse_message(input))
    }

    /// Inspect each message of `inputs` in order
    pub fn run_inputs<I, S, W>(&self, inputs: I, mut out: W) -> Result<Summary>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: Write,
    {
        let mut summary = Summary::default();
        for (index, input) in inputs.into_iter().enumerate() {
            let response = self.inspect(input.as_ref());
            if self.report(index, &response, &mut out, &mut summary)? {
                break;
            }
        }
        Ok(summary)
    }

    /// Inspect one message per non-empty line of `reader` as it arrives
    ///
    /// At most `max_input_len` bytes of a line are buffered; longer lines are
    /// rejected and skipped without being held in memory.
    pub fn run_lines<R: BufRead, W: Write>(&self, mut reader: R, mut out: W) -> Result<Summary> {
        let mut summary = Summary::default();
        let mut index = 0;
        let mut number = 0;

        loop {
            number += 1;
            let line = read_bounded_line(&mut reader, self.limits.max_input_len)
                .with_context(|| format!("Failed to read line {}", number))?;

            let response = match line {
                None => break,
                Some(Line::Text(text)) if text.is_empty() => {
                    debug!(line = number, "skipping empty line");
                    continue;
                }
                Some(Line::Text(text)) => self.inspect(&text),
                Some(Line::Oversized(size)) => Response::ko(
                    LimitError::InputTooLarge {
                        size,
                        limit: self.limits.max_input_len,
                    }
                    .to_string(),
                ),
            };

            let stop = self.report(index, &response, &mut out, &mut summary)?;
            index += 1;
            if stop {
                break;
            }
        }
        Ok(summary)
    }

    /// Write one response and update counts; returns true when inspection should stop
    fn report<W: Write>(
        &self,
        index: usize,
        response: &Response,
        out: &mut W,
        summary: &mut Summary,
    ) -> Result<bool> {
        writeln!(out, "{}", response.to_string().trim_end()).context("Failed to write response")?;
        out.flush().context("Failed to flush output")?;

        if response.is_ok() {
            summary.accepted += 1;
            return Ok(false);
        }

        summary.rejected += 1;
        warn!(index, reason = response.message(), "message rejected");
        if self.fail_fast {
            info!("Stopping at first rejected message");
            return Ok(true);
        }
        Ok(false)
    }
}

/// One line of input, or the byte length of a line too long to keep
#[derive(Debug, PartialEq, Eq)]
enum Line {
    Text(String),
    Oversized(usize),
}

/// Read the next line without buffering more than `limit` bytes of it
///
/// Returns `None` at end of input. The line terminator (`\n` or `\r\n`) is
/// stripped.
fn read_bounded_line<R: BufRead>(reader: &mut R, limit: usize) -> io::Result<Option<Line>> {
    // Room for the line, "\r\n", and one byte to detect overflow
    let cap = limit.saturating_add(3);
    let mut buf = Vec::new();
    let read = reader
        .by_ref()
        .take(u64::try_from(cap).unwrap_or(u64::MAX))
        .read_until(b'\n', &mut buf)?;
    if read == 0 {
        return Ok(None);
    }

    let terminated = buf.last() == Some(&b'\n');
    if !terminated && read == cap {
        let skipped = discard_line(reader)?;
        return Ok(Some(Line::Oversized(buf.len() + skipped)));
    }

    if terminated {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
    if buf.len() > limit {
        return Ok(Some(Line::Oversized(buf.len())));
    }

    let text = String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(Some(Line::Text(text)))
}

/// Consume the rest of the current line, returning how many bytes were dropped
fn discard_line<R: BufRead>(reader: &mut R) -> io::Result<usize> {
    let mut skipped = 0;
    loop {
        let available = reader.fill_buf()?;
        if available.is_empty() {
            return Ok(skipped);
        }
        match available.iter().position(|&b| b == b'\n') {
            Some(end) => {
                let dropped = if end > 0 && available[end - 1] == b'\r' { end - 1 } else { end };
                reader.consume(end + 1);
                return Ok(skipped + dropped);
            }
            None => {
                let len = available.len();
                reader.consume(len);
                skipped += len;
            }
        }
    }
}

/// Build the log filter for `config`, rejecting directives that do not parse
pub fn log_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.level)
        .with_context(|| format!("Invalid log filter '{}'", config.level))
}
