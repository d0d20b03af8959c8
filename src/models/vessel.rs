//! Vessel assignment model.
//!
//! One record per vessel in a proposed schedule: where it moors, when it
//! is served, and which quay cranes work it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{CraneId, Interval, VesselId};

/// A vessel's berth, service window and crane assignment.
///
/// # Space and Time
/// `berth` is measured in metres along the quay, `service` in the
/// schedule's time unit (hours in most terminal plans). Both are half-open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VesselAssignment {
    /// Unique vessel identifier, also the key into the per-vessel
    /// minimum crane table.
    pub vessel_id: VesselId,
    /// Occupied quay span `[berth_start, berth_end)`.
    pub berth: Interval,
    /// Service window `[time_start, time_end)`.
    pub service: Interval,
    /// Cranes assigned to this vessel. May be empty.
    pub cranes: BTreeSet<CraneId>,
}

impl VesselAssignment {
    /// Creates an assignment with no cranes.
    pub fn new(vessel_id: VesselId, berth: Interval, service: Interval) -> Self {
        Self {
            vessel_id,
            berth,
            service,
            cranes: BTreeSet::new(),
        }
    }

    /// Adds a crane.
    pub fn with_crane(mut self, crane: CraneId) -> Self {
        self.cranes.insert(crane);
        self
    }

    /// Adds several cranes.
    pub fn with_cranes(mut self, cranes: impl IntoIterator<Item = CraneId>) -> Self {
        self.cranes.extend(cranes);
        self
    }

    /// Number of distinct cranes assigned.
    ///
    /// A crane listed twice in the input counts once toward the minimum.
    pub fn crane_count(&self) -> usize {
        self.cranes.len()
    }

    /// Whether this vessel and `other` use the same quay space at the same time.
    ///
    /// Requires both the berth spans and the service windows to overlap.
    pub fn conflicts_with(&self, other: &VesselAssignment) -> bool {
        self.berth.overlaps(&other.berth) && self.service.overlaps(&other.service)
    }
}
