//! Deterministic, pure logic for registration validation.
//!
//! Core modules must be free of I/O side effects. Diagnostics are handed to a
//! caller-supplied sink; nothing here installs or reaches a global logger.

pub mod diagnostic;
pub mod record;
pub mod rules;
pub mod service;
