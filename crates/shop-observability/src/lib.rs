//! Structured logging for the storefront.
//!
//! This crate provides:
//! - `SessionId` - Identifier correlating every log line of one session
//! - `StructuredLogger` - Structured logging with session context
//! - `LogSink` - Where formatted lines go (stderr, browser console, memory)

mod logging;
mod session;
mod sink;

pub use logging::*;
pub use session::*;
pub use sink::*;
