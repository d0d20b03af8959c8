//! Schedule feasibility checking.
//!
//! Certifies a proposed berth and quay crane assignment against three
//! constraint families:
//! - No two vessels share quay space during overlapping service windows
//! - Every vessel has at least its minimum number of cranes
//! - Every assigned crane can reach the vessel's whole berth span
//!
//! # Algorithm
//! All unordered vessel pairs are tested once for a simultaneous berth and
//! time overlap (O(V²)). Crane count and coverage are checked per vessel.
//! No violation stops the run; every pair and every vessel is examined.

use crate::models::{
    Finding, TerminalConfig, VerificationReport, VerificationResult, VesselAssignment, VesselId,
};

/// Caller-side inconsistency between a schedule and its configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    /// A vessel id has no entry in the minimum crane table.
    #[error(
        "vessel {vessel} has no minimum crane requirement (table covers vessels 1..={table_len})"
    )]
    MissingRequirement {
        /// Vessel without an entry.
        vessel: VesselId,
        /// Length of the requirement table.
        table_len: usize,
    },
}

/// Checks schedules against a fixed terminal configuration.
///
/// Stateless beyond the borrowed configuration: repeated checks of the same
/// schedule yield identical results.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintChecker<'a> {
    config: &'a TerminalConfig,
}

impl<'a> ConstraintChecker<'a> {
    /// Creates a checker for `config`.
    pub fn new(config: &'a TerminalConfig) -> Self {
        Self { config }
    }

    /// Checks `vessels` and returns the verdict with every finding.
    ///
    /// Unknown crane references are logged at `warn` level as they are found.
    ///
    /// # Errors
    /// Returns [`CheckError::MissingRequirement`] before any checking if a
    /// vessel id is outside the minimum crane table.
    pub fn check(&self, vessels: &[VesselAssignment]) -> Result<VerificationReport, CheckError> {
        let requirements = vessels
            .iter()
            .map(|v| {
                self.config
                    .minimum_cranes_for(v.vessel_id)
                    .ok_or(CheckError::MissingRequirement {
                        vessel: v.vessel_id,
                        table_len: self.config.minimum_crane_requirements.len(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut report = VerificationReport::new();

        for (i, vessel) in vessels.iter().enumerate() {
            for other in &vessels[i + 1..] {
                if vessel.conflicts_with(other) {
                    let finding = Finding::conflict(vessel.vessel_id, other.vessel_id);
                    tracing::debug!(%finding, "berth/time conflict");
                    report.add_finding(finding);
                }
            }
        }

        for (vessel, required) in vessels.iter().zip(requirements) {
            self.check_cranes(vessel, required, &mut report);
        }

        tracing::info!(
            vessels = vessels.len(),
            findings = report.findings.len(),
            feasible = report.is_feasible(),
            "schedule checked"
        );
        Ok(report)
    }

    /// Checks `vessels` and returns only the verdict.
    ///
    /// # Errors
    /// See [`ConstraintChecker::check`].
    pub fn verify(&self, vessels: &[VesselAssignment]) -> Result<VerificationResult, CheckError> {
        self.check(vessels).map(|report| report.result)
    }

    fn check_cranes(&self, vessel: &VesselAssignment, required: u32, report: &mut VerificationReport) {
        let assigned = vessel.crane_count();
        if assigned < required as usize {
            let finding = Finding::CraneShortfall {
                vessel: vessel.vessel_id,
                assigned,
                required,
            };
            tracing::debug!(%finding, "crane shortfall");
            report.add_finding(finding);
        }

        for &crane in &vessel.cranes {
            match self.config.covers(crane, &vessel.berth) {
                Some(true) => {}
                Some(false) => {
                    let finding = Finding::CraneOutOfReach {
                        vessel: vessel.vessel_id,
                        crane,
                    };
                    tracing::debug!(%finding, "crane out of reach");
                    report.add_finding(finding);
                }
                None => {
                    let finding = Finding::UnknownCrane {
                        vessel: vessel.vessel_id,
                        crane,
                    };
                    tracing::warn!(
                        crane = crane.get(),
                        vessel = vessel.vessel_id.get(),
                        "{finding}"
                    );
                    report.add_finding(finding);
                }
            }
        }
    }
}

/// Checks `vessels` against `config` and returns the verdict.
///
/// Shorthand for `ConstraintChecker::new(config).verify(vessels)`.
///
/// # Errors
/// Returns [`CheckError::MissingRequirement`] if a vessel id has no entry in
/// `config.minimum_crane_requirements`.
pub fn verify(
    vessels: &[VesselAssignment],
    config: &TerminalConfig,
) -> Result<VerificationResult, CheckError> {
    ConstraintChecker::new(config).verify(vessels)
}
