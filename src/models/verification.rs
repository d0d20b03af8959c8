//! Verification verdict and findings.
//!
//! A verdict carries one flag per constraint family. Findings record which
//! vessels (and cranes) caused a flag to be cleared.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{CraneId, VesselId};

/// Feasibility verdict for a schedule.
///
/// Every flag starts `true` and is cleared on the first violation of its
/// kind. A cleared flag is never set again.
///
/// `non_overlapping_berths` and `time_overlap_ok` are always cleared
/// together: a spatio-temporal conflict between two vessels taints both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerificationResult {
    /// No two vessels share quay space at the same time.
    pub non_overlapping_berths: bool,
    /// Cleared together with `non_overlapping_berths`.
    pub time_overlap_ok: bool,
    /// Every vessel has enough cranes and every crane reaches its vessel.
    pub crane_assignments_ok: bool,
}

impl Default for VerificationResult {
    fn default() -> Self {
        Self {
            non_overlapping_berths: true,
            time_overlap_ok: true,
            crane_assignments_ok: true,
        }
    }
}

impl VerificationResult {
    /// Creates a verdict with all flags set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every constraint family holds.
    pub fn is_feasible(&self) -> bool {
        self.non_overlapping_berths && self.time_overlap_ok && self.crane_assignments_ok
    }

    /// Clears the flags affected by `finding`.
    pub(crate) fn record(&mut self, finding: &Finding) {
        match finding {
            Finding::BerthTimeConflict { .. } => {
                self.non_overlapping_berths = false;
                self.time_overlap_ok = false;
            }
            Finding::CraneShortfall { .. }
            | Finding::CraneOutOfReach { .. }
            | Finding::UnknownCrane { .. } => {
                self.crane_assignments_ok = false;
            }
        }
    }
}

impl fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "non_overlapping_berths: {}, time_overlap: {}, crane_assignments: {}",
            self.non_overlapping_berths, self.time_overlap_ok, self.crane_assignments_ok
        )
    }
}

/// A single constraint violation found in a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// Two vessels share quay space during overlapping service windows.
    BerthTimeConflict {
        /// First vessel of the pair.
        first: VesselId,
        /// Second vessel of the pair.
        second: VesselId,
    },
    /// A vessel has fewer cranes than it requires.
    CraneShortfall {
        /// Affected vessel.
        vessel: VesselId,
        /// Distinct cranes assigned.
        assigned: usize,
        /// Minimum required.
        required: u32,
    },
    /// An assigned crane cannot reach the whole berth span.
    CraneOutOfReach {
        /// Affected vessel.
        vessel: VesselId,
        /// Crane that falls short.
        crane: CraneId,
    },
    /// An assigned crane id has no configured base position.
    UnknownCrane {
        /// Affected vessel.
        vessel: VesselId,
        /// Unconfigured crane id.
        crane: CraneId,
    },
}

impl Finding {
    /// Creates a conflict finding with the pair in ascending id order.
    pub fn conflict(a: VesselId, b: VesselId) -> Self {
        Self::BerthTimeConflict {
            first: a.min(b),
            second: a.max(b),
        }
    }

    /// Whether this finding is an unknown crane reference.
    pub fn is_unknown_crane(&self) -> bool {
        matches!(self, Self::UnknownCrane { .. })
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BerthTimeConflict { first, second } => write!(
                f,
                "vessels {first} and {second} overlap in berth and time"
            ),
            Self::CraneShortfall {
                vessel,
                assigned,
                required,
            } => write!(
                f,
                "vessel {vessel} has {assigned} crane(s), requires {required}"
            ),
            Self::CraneOutOfReach { vessel, crane } => {
                write!(f, "crane {crane} cannot reach the berth of vessel {vessel}")
            }
            Self::UnknownCrane { vessel, crane } => {
                write!(f, "crane ID {crane} for vessel {vessel} is out of range")
            }
        }
    }
}

/// Verdict plus the findings behind it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Aggregated verdict.
    pub result: VerificationResult,
    /// Every violation found, in discovery order.
    pub findings: Vec<Finding>,
}

impl VerificationReport {
    /// Creates an empty (feasible) report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finding and clears the matching flags.
    pub fn add_finding(&mut self, finding: Finding) {
        self.result.record(&finding);
        self.findings.push(finding);
    }

    /// Whether the schedule is feasible.
    pub fn is_feasible(&self) -> bool {
        self.result.is_feasible()
    }

    /// Unknown crane references (the non-fatal diagnostics of a run).
    pub fn diagnostics(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_unknown_crane())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vessel(id: u32) -> VesselId {
        VesselId::new(id).unwrap()
    }

    fn crane(id: u32) -> CraneId {
        CraneId::new(id).unwrap()
    }

    #[test]
    fn test_default_is_feasible() {
        let r = VerificationResult::new();
        assert!(r.is_feasible());
        assert!(VerificationReport::new().is_feasible());
    }

    #[test]
    fn test_conflict_clears_coupled_flags() {
        let mut report = VerificationReport::new();
        report.add_finding(Finding::conflict(vessel(2), vessel(1)));

        assert!(!report.result.non_overlapping_berths);
        assert!(!report.result.time_overlap_ok);
        assert!(report.result.crane_assignments_ok);
        assert_eq!(
            report.findings[0],
            Finding::BerthTimeConflict {
                first: vessel(1),
                second: vessel(2)
            }
        );
    }

    #[test]
    fn test_crane_findings_clear_crane_flag_only() {
        for finding in [
            Finding::CraneShortfall {
                vessel: vessel(1),
                assigned: 0,
                required: 2,
            },
            Finding::CraneOutOfReach {
                vessel: vessel(1),
                crane: crane(3),
            },
            Finding::UnknownCrane {
                vessel: vessel(1),
                crane: crane(999),
            },
        ] {
            let mut report = VerificationReport::new();
            report.add_finding(finding);
            assert!(report.result.non_overlapping_berths);
            assert!(report.result.time_overlap_ok);
            assert!(!report.result.crane_assignments_ok);
        }
    }

    #[test]
    fn test_flags_never_reset() {
        let mut report = VerificationReport::new();
        report.add_finding(Finding::UnknownCrane {
            vessel: vessel(1),
            crane: crane(999),
        });
        report.add_finding(Finding::conflict(vessel(1), vessel(2)));
        assert!(!report.result.crane_assignments_ok);
        assert!(!report.is_feasible());
        assert_eq!(report.diagnostics().count(), 1);
    }

    #[test]
    fn test_display() {
        let r = VerificationResult::new();
        assert_eq!(
            r.to_string(),
            "non_overlapping_berths: true, time_overlap: true, crane_assignments: true"
        );
        let f = Finding::UnknownCrane {
            vessel: vessel(4),
            crane: crane(999),
        };
        assert_eq!(f.to_string(), "crane ID 999 for vessel 4 is out of range");
    }

    #[test]
    fn test_finding_serializes_with_kind_tag() {
        let json = serde_json::to_value(Finding::conflict(vessel(3), vessel(1))).unwrap();
        assert_eq!(json["kind"], "berth_time_conflict");
        assert_eq!(json["first"], 1);
        assert_eq!(json["second"], 3);
    }
}
