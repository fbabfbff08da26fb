//! [`DiagnosticSink`] that forwards diagnostics to `tracing`.
//!
//! Info diagnostics become `info!` events and warnings become `warn!` events.
//! Rule context is attached as structured fields alongside the rendered line.

use tracing::{info, warn};

use crate::core::diagnostic::{Diagnostic, DiagnosticSink, Event, RuleContext, Severity};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        let source = diagnostic.source;
        let student = diagnostic.student.as_str();
        let severity = diagnostic.severity();

        macro_rules! at_severity {
            ($($fields:tt)*) => {
                match severity {
                    Severity::Info => info!($($fields)*),
                    Severity::Warning => warn!($($fields)*),
                }
            };
        }

        match &diagnostic.event {
            Event::Rule { outcome, context } => {
                let outcome = outcome.label();
                match *context {
                    RuleContext::CreditCeiling {
                        credits_taken,
                        max_credits,
                    } => at_severity!(
                        source,
                        student,
                        credits_taken,
                        max_credits,
                        outcome,
                        "{diagnostic}"
                    ),
                    RuleContext::CreditFloor {
                        credits_taken,
                        min_credits,
                    } => at_severity!(
                        source,
                        student,
                        credits_taken,
                        min_credits,
                        outcome,
                        "{diagnostic}"
                    ),
                    RuleContext::Prerequisite => {
                        at_severity!(source, student, outcome, "{diagnostic}")
                    }
                }
            }
            Event::Rejected { failed_rule } => {
                let failed_rule = *failed_rule;
                at_severity!(source, student, failed_rule, "{diagnostic}")
            }
            Event::Started | Event::Approved => at_severity!(source, student, "{diagnostic}"),
        }
    }
}
