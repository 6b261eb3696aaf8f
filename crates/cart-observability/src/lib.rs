//! Logging setup for the storefront cart tools.
//!
//! Library crates only emit `tracing` events; binaries call
//! [`init_logging`] once at startup to decide where those go.

mod logging;

pub use logging::*;
