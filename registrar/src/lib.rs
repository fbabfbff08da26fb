//! Course-registration validation built on injected, short-circuiting rules.
//!
//! The crate keeps the same split the rest of the workspace follows:
//!
//! - **[`core`]**: Pure, deterministic logic (records, rules, the validation
//!   service). Diagnostics leave through the [`core::diagnostic::DiagnosticSink`]
//!   trait so results can be tested without capturing logs.
//! - **[`io`]**: Side-effecting adapters (TOML config, the `tracing` sink).
//!
//! [`demo`] wires both together for the `registrar demo` command.

pub mod core;
pub mod demo;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
