//! Immutable snapshot of one student's registration attempt.

use anyhow::{Result, bail};

/// A single registration attempt.
///
/// Fields are private so a record cannot change once built; rules only ever
/// read it through the accessors below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRecord {
    name: String,
    credits_taken: u32,
    prerequisite_completed: bool,
}

impl RegistrationRecord {
    /// Build a record, rejecting an empty or whitespace-only student name.
    pub fn new(
        name: impl Into<String>,
        credits_taken: u32,
        prerequisite_completed: bool,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            bail!("student name must be non-empty");
        }
        Ok(Self {
            name,
            credits_taken,
            prerequisite_completed,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credits_taken(&self) -> u32 {
        self.credits_taken
    }

    pub fn prerequisite_completed(&self) -> bool {
        self.prerequisite_completed
    }
}
