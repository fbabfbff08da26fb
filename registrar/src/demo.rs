//! Canned registration scenarios run by `registrar demo`.

use anyhow::Result;

use crate::core::diagnostic::DiagnosticSink;
use crate::core::record::RegistrationRecord;
use crate::core::service::{RegistrationService, ValidationReport};

/// Four attempts covering approval and each rejection path of the default rules.
pub fn scenario_records() -> Result<Vec<RegistrationRecord>> {
    Ok(vec![
        RegistrationRecord::new("Andi", 20, true)?,
        // over the ceiling
        RegistrationRecord::new("Budi", 28, true)?,
        // prerequisite missing
        RegistrationRecord::new("Cici", 18, false)?,
        // under the floor
        RegistrationRecord::new("Dodi", 9, true)?,
    ])
}

/// Outcome of one demo record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoLine {
    pub name: String,
    pub report: ValidationReport,
}

impl DemoLine {
    pub fn verdict(&self) -> &'static str {
        if self.report.approved {
            "APPROVED"
        } else {
            "REJECTED"
        }
    }
}

/// Run every record through `service` in order.
pub fn run_demo<S: DiagnosticSink>(
    service: &RegistrationService<S>,
    records: &[RegistrationRecord],
) -> Vec<DemoLine> {
    records
        .iter()
        .map(|record| DemoLine {
            name: record.name().to_string(),
            report: service.evaluate(record),
        })
        .collect()
}
