//! Validation rules applied to a [`RegistrationRecord`].
//!
//! Each rule is a pure predicate over its own configuration and the record.
//! Every call emits exactly one diagnostic (pass or fail) to the sink it is
//! given; the returned bool is the only thing that drives control flow.

use crate::core::diagnostic::{Diagnostic, DiagnosticSink, Event, Outcome, RuleContext};
use crate::core::record::RegistrationRecord;

/// Default upper bound on credits per registration.
pub const DEFAULT_MAX_CREDITS: u32 = 24;
/// Default lower bound on credits per registration.
pub const DEFAULT_MIN_CREDITS: u32 = 12;

/// A single pass/fail check over a registration record.
pub trait ValidationRule: Send + Sync {
    /// Stable tag used in diagnostics and reports.
    fn name(&self) -> &'static str;

    /// Return `true` if `record` satisfies the rule.
    fn validate(&self, record: &RegistrationRecord, sink: &dyn DiagnosticSink) -> bool;
}

/// Fails when a student takes more than `max_credits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditCeilingRule {
    max_credits: u32,
}

impl CreditCeilingRule {
    pub fn new(max_credits: u32) -> Self {
        Self { max_credits }
    }

    pub fn max_credits(&self) -> u32 {
        self.max_credits
    }
}

impl Default for CreditCeilingRule {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CREDITS)
    }
}

impl ValidationRule for CreditCeilingRule {
    fn name(&self) -> &'static str {
        "CreditCeilingRule"
    }

    fn validate(&self, record: &RegistrationRecord, sink: &dyn DiagnosticSink) -> bool {
        let passed = record.credits_taken() <= self.max_credits;
        let context = RuleContext::CreditCeiling {
            credits_taken: record.credits_taken(),
            max_credits: self.max_credits,
        };
        report(sink, self.name(), record, passed, context);
        passed
    }
}

/// Fails when a student takes fewer than `min_credits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditFloorRule {
    min_credits: u32,
}

impl CreditFloorRule {
    pub fn new(min_credits: u32) -> Self {
        Self { min_credits }
    }

    pub fn min_credits(&self) -> u32 {
        self.min_credits
    }
}

impl Default for CreditFloorRule {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_CREDITS)
    }
}

impl ValidationRule for CreditFloorRule {
    fn name(&self) -> &'static str {
        "CreditFloorRule"
    }

    fn validate(&self, record: &RegistrationRecord, sink: &dyn DiagnosticSink) -> bool {
        let passed = record.credits_taken() >= self.min_credits;
        let context = RuleContext::CreditFloor {
            credits_taken: record.credits_taken(),
            min_credits: self.min_credits,
        };
        report(sink, self.name(), record, passed, context);
        passed
    }
}

/// Fails when the prerequisite coursework is not completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrerequisiteRule;

impl ValidationRule for PrerequisiteRule {
    fn name(&self) -> &'static str {
        "PrerequisiteRule"
    }

    fn validate(&self, record: &RegistrationRecord, sink: &dyn DiagnosticSink) -> bool {
        let passed = record.prerequisite_completed();
        report(sink, self.name(), record, passed, RuleContext::Prerequisite);
        passed
    }
}

/// The rule list used when nothing else is configured: floor, ceiling, prerequisite.
pub fn default_rules() -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(CreditFloorRule::default()),
        Box::new(CreditCeilingRule::default()),
        Box::new(PrerequisiteRule),
    ]
}

fn report(
    sink: &dyn DiagnosticSink,
    source: &'static str,
    record: &RegistrationRecord,
    passed: bool,
    context: RuleContext,
) {
    sink.emit(Diagnostic::new(
        source,
        record.name(),
        Event::Rule {
            outcome: Outcome::from_passed(passed),
            context,
        },
    ));
}
