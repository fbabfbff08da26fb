//! Diagnostics emitted by rules and the validation service.
//!
//! Diagnostics are observability only. Nothing in [`crate::core`] reads them
//! back, so a sink can drop, log, or record them without changing any result.

use std::fmt;

/// Severity classification carried by every diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// Pass/fail outcome of a single rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    pub fn from_passed(passed: bool) -> Self {
        if passed { Self::Pass } else { Self::Fail }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        }
    }
}

/// Rule-specific values attached to a rule outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleContext {
    CreditCeiling { credits_taken: u32, max_credits: u32 },
    CreditFloor { credits_taken: u32, min_credits: u32 },
    Prerequisite,
}

/// What happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Service began evaluating a record.
    Started,
    /// One rule finished evaluating.
    Rule {
        outcome: Outcome,
        context: RuleContext,
    },
    /// Every rule passed.
    Approved,
    /// `failed_rule` returned false; later rules were skipped.
    Rejected { failed_rule: &'static str },
}

/// A single diagnostic record handed to a [`DiagnosticSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Rule name or service tag that produced the diagnostic.
    pub source: &'static str,
    /// Student the diagnostic is about.
    pub student: String,
    pub event: Event,
}

impl Diagnostic {
    pub fn new(source: &'static str, student: &str, event: Event) -> Self {
        Self {
            source,
            student: student.to_string(),
            event,
        }
    }

    /// Severity follows from the event: failures and rejections warn.
    pub fn severity(&self) -> Severity {
        match self.event {
            Event::Started | Event::Approved => Severity::Info,
            Event::Rule {
                outcome: Outcome::Pass,
                ..
            } => Severity::Info,
            Event::Rule {
                outcome: Outcome::Fail,
                ..
            }
            | Event::Rejected { .. } => Severity::Warning,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let student = &self.student;
        match &self.event {
            Event::Started => write!(f, "=== validating registration for {student} ==="),
            Event::Approved => write!(f, "registration for {student} APPROVED"),
            Event::Rejected { failed_rule } => {
                write!(f, "registration for {student} REJECTED by {failed_rule}")
            }
            Event::Rule { outcome, context } => {
                let label = outcome.label();
                match context {
                    RuleContext::CreditCeiling {
                        credits_taken,
                        max_credits,
                    } => write!(
                        f,
                        "[{}] {student} takes {credits_taken} credits (max {max_credits}) -> {label}",
                        self.source
                    ),
                    RuleContext::CreditFloor {
                        credits_taken,
                        min_credits,
                    } => write!(
                        f,
                        "[{}] {student} takes {credits_taken} credits (min {min_credits}) -> {label}",
                        self.source
                    ),
                    RuleContext::Prerequisite => {
                        let state = match outcome {
                            Outcome::Pass => "completed",
                            Outcome::Fail => "not completed",
                        };
                        write!(
                            f,
                            "[{}] {student} prerequisite {state} -> {label}",
                            self.source
                        )
                    }
                }
            }
        }
    }
}

/// Destination for diagnostics.
///
/// Implementations must not panic; a sink failure is not a validation outcome.
pub trait DiagnosticSink {
    fn emit(&self, diagnostic: Diagnostic);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn emit(&self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _diagnostic: Diagnostic) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_event(outcome: Outcome, context: RuleContext) -> Event {
        Event::Rule { outcome, context }
    }

    #[test]
    fn failing_rule_and_rejection_warn() {
        let fail = Diagnostic::new(
            "PrerequisiteRule",
            "Cici",
            rule_event(Outcome::Fail, RuleContext::Prerequisite),
        );
        let rejected = Diagnostic::new(
            "RegistrationService",
            "Cici",
            Event::Rejected {
                failed_rule: "PrerequisiteRule",
            },
        );
        assert_eq!(fail.severity(), Severity::Warning);
        assert_eq!(rejected.severity(), Severity::Warning);
    }

    #[test]
    fn passing_rule_start_and_approval_are_info() {
        let pass = Diagnostic::new(
            "CreditFloorRule",
            "Andi",
            rule_event(
                Outcome::Pass,
                RuleContext::CreditFloor {
                    credits_taken: 20,
                    min_credits: 12,
                },
            ),
        );
        assert_eq!(pass.severity(), Severity::Info);
        assert_eq!(
            Diagnostic::new("RegistrationService", "Andi", Event::Started).severity(),
            Severity::Info
        );
        assert_eq!(
            Diagnostic::new("RegistrationService", "Andi", Event::Approved).severity(),
            Severity::Info
        );
    }

    #[test]
    fn display_includes_name_and_values() {
        let diagnostic = Diagnostic::new(
            "CreditCeilingRule",
            "Budi",
            rule_event(
                Outcome::Fail,
                RuleContext::CreditCeiling {
                    credits_taken: 28,
                    max_credits: 24,
                },
            ),
        );
        assert_eq!(
            diagnostic.to_string(),
            "[CreditCeilingRule] Budi takes 28 credits (max 24) -> FAIL"
        );
    }

    #[test]
    fn prerequisite_display_has_no_numbers() {
        let diagnostic = Diagnostic::new(
            "PrerequisiteRule",
            "Cici",
            rule_event(Outcome::Fail, RuleContext::Prerequisite),
        );
        let text = diagnostic.to_string();
        assert!(text.contains("Cici"));
        assert!(!text.chars().any(|c| c.is_ascii_digit()));
    }
}
