//! I/O adapters for the registrar.

pub mod config;
pub mod tracing_sink;
