//! Input validation for process sets.
//!
//! The scheduler trusts its input. These checks enforce the caller's side
//! of that contract before data reaches the engine. Detects:
//! - Duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times

use std::collections::HashSet;
use std::fmt;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs zero or negative CPU time.
    NonPositiveBurst,
    /// No identifier is left to assign after this one.
    IdExhausted,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Checks a single process's time values.
///
/// Returns every problem found, in field order.
pub fn validate_process(process: &Process) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if process.arrival_time < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeArrival,
            format!(
                "Process P{} has negative arrival time {}",
                process.id, process.arrival_time
            ),
        ));
    }

    if process.burst_time < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveBurst,
            format!(
                "Process P{} has non-positive burst time {}",
                process.id, process.burst_time
            ),
        ));
    }

    errors
}

/// Validates a process set before scheduling.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. All arrival times >= 0
/// 3. All burst times >= 1
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for process in processes {
        if !ids.insert(process.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: P{}", process.id),
            ));
        }
        errors.extend(validate_process(process));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
