//! Input validation for schedule verification.
//!
//! Checks that a schedule and its terminal configuration are consistent
//! before any feasibility checking. Detects:
//! - Duplicate vessel IDs
//! - Vessels without a minimum crane requirement
//! - Terminals with no cranes configured
//! - Negative crane reach
//!
//! These are caller errors, not schedule findings: a schedule that fails
//! here cannot be certified either way.

use crate::models::{TerminalConfig, VesselAssignment};
use std::collections::HashSet;

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
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two vessels share the same ID.
    DuplicateId,
    /// A vessel ID has no entry in the minimum crane table.
    MissingRequirement,
    /// The terminal has no cranes.
    NoCranes,
    /// Crane reach is negative.
    NegativeRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a schedule against its terminal configuration.
///
/// Checks:
/// 1. No duplicate vessel IDs
/// 2. Every vessel ID has a minimum crane requirement
/// 3. At least one crane is configured
/// 4. Crane reach is not negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(vessels: &[VesselAssignment], config: &TerminalConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.crane_count() == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoCranes,
            "Terminal configuration has no crane base positions",
        ));
    }

    if config.crane_range < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeRange,
            format!("Crane range must not be negative: {}", config.crane_range),
        ));
    }

    let mut vessel_ids = HashSet::new();
    for vessel in vessels {
        if !vessel_ids.insert(vessel.vessel_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate vessel ID: {}", vessel.vessel_id),
            ));
        }
    }

    for vessel in vessels {
        if config.minimum_cranes_for(vessel.vessel_id).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingRequirement,
                format!(
                    "Vessel {} has no minimum crane requirement ({} configured)",
                    vessel.vessel_id,
                    config.minimum_crane_requirements.len()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
