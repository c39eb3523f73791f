//! # Frame Configuration
//!
//! Settings for processes that receive raw message strings and hand them to
//! `frame_codec`. The codec itself is unbounded; the size cap on incoming text
//! is enforced here, at the transport boundary.
//!
//! ## Usage
//!
//! ```rust
//! use frame_config::InputLimits;
//!
//! let limits = InputLimits::default();
//! assert!(limits.check("{3}[a2V5]{0}[]").is_ok());
//! ```

pub mod limits;
pub mod service_config;

// Re-export commonly used types
pub use limits::{InputLimits, LimitError};
pub use service_config::{ConfigSource, InspectorConfig, LoggingConfig, DEFAULT_CONFIG_PATH, ENV_PREFIX};
