//! Logging utilities.
//!
//! Logger initialization plus the once-per-message warning reporter used for
//! recoverable conditions such as the WebGL to 2D fallback. Everything else in
//! the engine talks to the `log` facade directly.

mod init;
mod report;

pub use init::{init_logging, LoggingConfig};
pub use report::warn_once;
