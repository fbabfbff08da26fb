//! Short-circuiting evaluation of an injected rule list.

use crate::core::diagnostic::{Diagnostic, DiagnosticSink, Event};
use crate::core::record::RegistrationRecord;
use crate::core::rules::ValidationRule;

const SERVICE_TAG: &str = "RegistrationService";

/// Result of evaluating one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// True when every rule passed.
    pub approved: bool,
    /// Rule names in the order they ran. Rules after a failure never appear.
    pub evaluated: Vec<&'static str>,
    /// Name of the rule that rejected the record, if any.
    pub failed_rule: Option<&'static str>,
}

/// Runs registration records through an ordered rule list.
///
/// The rule list is fixed at construction and evaluated in exactly that
/// order. The service keeps no per-call state and can be reused.
pub struct RegistrationService<S: DiagnosticSink> {
    rules: Vec<Box<dyn ValidationRule>>,
    sink: S,
}

impl<S: DiagnosticSink> RegistrationService<S> {
    pub fn new(rules: Vec<Box<dyn ValidationRule>>, sink: S) -> Self {
        Self { rules, sink }
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Validate `record`, stopping at the first failing rule.
    ///
    /// An empty rule list approves every record.
    pub fn run_validation(&self, record: &RegistrationRecord) -> bool {
        self.evaluate(record).approved
    }

    /// Same as [`Self::run_validation`], but reports which rules ran.
    pub fn evaluate(&self, record: &RegistrationRecord) -> ValidationReport {
        self.emit(record, Event::Started);

        let mut evaluated = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            evaluated.push(rule.name());
            if !rule.validate(record, &self.sink) {
                self.emit(
                    record,
                    Event::Rejected {
                        failed_rule: rule.name(),
                    },
                );
                return ValidationReport {
                    approved: false,
                    evaluated,
                    failed_rule: Some(rule.name()),
                };
            }
        }

        self.emit(record, Event::Approved);
        ValidationReport {
            approved: true,
            evaluated,
            failed_rule: None,
        }
    }

    fn emit(&self, record: &RegistrationRecord, event: Event) {
        self.sink
            .emit(Diagnostic::new(SERVICE_TAG, record.name(), event));
    }
}
