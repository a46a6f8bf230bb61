//! Host-facing abstractions for the stagehook build hook
//!
//! This crate provides the pieces that talk to the machine the hook runs on:
//! - External process invocation behind a substitutable runner
//! - Host interpreter version probing and parsing

mod error;
mod interpreter;
mod process;

pub use error::PlatformError;
pub use interpreter::InterpreterVersion;
pub use process::{CommandRunner, ProcessOutput, SystemRunner};
