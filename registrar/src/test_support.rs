//! Test-only helpers for records, sinks, and instrumented rules.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Result;
use tempfile::TempDir;

use crate::core::diagnostic::{Diagnostic, DiagnosticSink, Event, Outcome, RuleContext};
use crate::core::record::RegistrationRecord;
use crate::core::rules::ValidationRule;
use crate::io::config::{RegistrarConfig, write_config};

/// Create a record, panicking on an invalid name.
pub fn record(name: &str, credits_taken: u32, prerequisite_completed: bool) -> RegistrationRecord {
    RegistrationRecord::new(name, credits_taken, prerequisite_completed).expect("valid record")
}

/// Sink that keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    /// Drain and return everything recorded so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        self.lock().push(diagnostic);
    }
}

/// Shared view of how often a [`ProbeRule`] ran.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Rule with a fixed answer that counts its invocations.
pub struct ProbeRule {
    name: &'static str,
    result: bool,
    calls: CallCounter,
}

impl ProbeRule {
    pub fn new(name: &'static str, result: bool) -> (Self, CallCounter) {
        let calls = CallCounter::default();
        let rule = Self {
            name,
            result,
            calls: calls.clone(),
        };
        (rule, calls)
    }
}

impl ValidationRule for ProbeRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn validate(&self, record: &RegistrationRecord, sink: &dyn DiagnosticSink) -> bool {
        self.calls.0.fetch_add(1, Ordering::SeqCst);
        sink.emit(Diagnostic::new(
            self.name,
            record.name(),
            Event::Rule {
                outcome: Outcome::from_passed(self.result),
                context: RuleContext::Prerequisite,
            },
        ));
        self.result
    }
}

/// Rule that panics, standing in for a broken implementation.
pub struct PanickingRule;

impl ValidationRule for PanickingRule {
    fn name(&self) -> &'static str {
        "PanickingRule"
    }

    fn validate(&self, _record: &RegistrationRecord, _sink: &dyn DiagnosticSink) -> bool {
        panic!("misconfigured rule");
    }
}

/// Temporary directory holding a `registrar.toml`.
pub struct TempConfig {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TempConfig {
    /// Write `cfg` to a fresh temp directory.
    pub fn new(cfg: &RegistrarConfig) -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("registrar.toml");
        write_config(&path, cfg)?;
        Ok(Self { _dir: dir, path })
    }

    /// Write raw TOML without validating it.
    pub fn raw(contents: &str) -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("registrar.toml");
        std::fs::write(&path, contents)?;
        Ok(Self { _dir: dir, path })
    }
}
