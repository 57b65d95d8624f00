//! Observability infrastructure for the till register.
//!
//! This crate provides:
//! - `SessionId` - Identifier correlating every log line of one register run
//! - `StructuredLogger` - Structured logging with session context

mod logging;
mod session;

pub use logging::*;
pub use session::*;
