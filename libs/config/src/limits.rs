//! Size limits applied to raw input before parsing

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default cap on a single message, in bytes
pub const DEFAULT_MAX_INPUT_LEN: usize = 64 * 1024;

/// Input rejected before it reaches the parser
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LimitError {
    #[error("Input too large: {size} bytes exceeds limit {limit}")]
    InputTooLarge { size: usize, limit: usize },
}

/// Bounds on incoming message text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    /// Maximum message length in bytes
    pub max_input_len: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

impl InputLimits {
    pub fn check(&self, input: &str) -> Result<(), LimitError> {
        if input.len() > self.max_input_len {
            return Err(LimitError::InputTooLarge {
                size: input.len(),
                limit: self.max_input_len,
            });
        }
        Ok(())
    }
}
