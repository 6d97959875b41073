//! Command handlers for CLI operations
//!
//! This module contains handlers for different CLI commands,
//! separating command execution logic from parsing and validation.

pub mod demo;
pub mod send;

pub use demo::{DemoCommandHandler, DemoOutcome};
pub use send::SendCommandHandler;
