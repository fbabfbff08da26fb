//! Process-wide tracing setup for the `registrar` binary.
//!
//! # Separation of Concerns
//!
//! - **Core ([`crate::core`])**: never touches the global subscriber. Rules and
//!   the service only see a [`crate::core::diagnostic::DiagnosticSink`].
//!
//! - **Tracing (this module)**: installs the subscriber once at startup so the
//!   [`crate::io::tracing_sink::TracingSink`] has somewhere to write.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG` env var. Defaults to `registrar=info` if unset, so rule
/// outcomes are visible without extra flags and dependencies stay quiet.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=registrar=warn cargo run -- demo
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("registrar=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
