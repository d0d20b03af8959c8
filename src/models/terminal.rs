//! Terminal configuration.
//!
//! Fixed quay crane layout plus the per-vessel crane requirements for a
//! verification run. Read-only once loaded.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{CraneId, Interval, VesselId};

/// Quay crane layout and vessel requirements.
///
/// Crane `k` (1-based) sits at `crane_base_positions[k - 1]` and reaches
/// `crane_range` metres in the direction of increasing quay position.
/// Vessel `v` needs at least `minimum_crane_requirements[v - 1]` cranes.
///
/// # Examples
///
/// ```
/// use quay_verify::models::{CraneId, Interval, TerminalConfig, VesselId};
///
/// let config = TerminalConfig::new(vec![21, 50, 79], 400).with_minimum_cranes(vec![2, 2]);
/// let berth = Interval::new(248, 421).unwrap();
/// assert_eq!(config.covers(CraneId::new(1).unwrap(), &berth), Some(true));
/// assert_eq!(config.minimum_cranes_for(VesselId::new(2).unwrap()), Some(2));
/// assert_eq!(config.minimum_cranes_for(VesselId::new(3).unwrap()), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Base position (metres) of each crane, crane 1 first.
    pub crane_base_positions: Vec<i64>,
    /// One-sided reach of every crane from its base (metres).
    pub crane_range: i64,
    /// Minimum number of cranes per vessel, vessel 1 first.
    #[serde(default)]
    pub minimum_crane_requirements: Vec<u32>,
    /// Minimum clearance between moored vessels (metres).
    ///
    /// Carried for configuration compatibility. No check reads it.
    #[serde(default)]
    pub min_safety_distance: i64,
    /// Maximum shift allowed for flexible berthing (hours).
    ///
    /// Carried for configuration compatibility. No check reads it.
    #[serde(default)]
    pub max_shift_hours: i64,
}

/// Failure to load a [`TerminalConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration is not valid JSON or has the wrong shape.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl TerminalConfig {
    /// Creates a configuration with no vessel requirements.
    pub fn new(crane_base_positions: Vec<i64>, crane_range: i64) -> Self {
        Self {
            crane_base_positions,
            crane_range,
            minimum_crane_requirements: Vec::new(),
            min_safety_distance: 0,
            max_shift_hours: 0,
        }
    }

    /// Parses a JSON configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] if the JSON is malformed or incomplete.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a JSON configuration file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            cranes = config.crane_count(),
            vessels = config.minimum_crane_requirements.len(),
            "loaded terminal config"
        );
        Ok(config)
    }

    /// Sets the per-vessel minimum crane table.
    pub fn with_minimum_cranes(mut self, requirements: Vec<u32>) -> Self {
        self.minimum_crane_requirements = requirements;
        self
    }

    /// Sets the minimum safety distance.
    pub fn with_min_safety_distance(mut self, metres: i64) -> Self {
        self.min_safety_distance = metres;
        self
    }

    /// Sets the maximum berthing shift.
    pub fn with_max_shift_hours(mut self, hours: i64) -> Self {
        self.max_shift_hours = hours;
        self
    }

    /// Number of configured cranes.
    pub fn crane_count(&self) -> usize {
        self.crane_base_positions.len()
    }

    /// Minimum cranes required by `vessel`, or `None` if the table has no
    /// entry for it.
    pub fn minimum_cranes_for(&self, vessel: VesselId) -> Option<u32> {
        self.minimum_crane_requirements.get(vessel.index()).copied()
    }

    /// Base position of `crane`, or `None` if no such crane is configured.
    pub fn crane_base_position(&self, crane: CraneId) -> Option<i64> {
        self.crane_base_positions.get(crane.index()).copied()
    }

    /// Whether `crane` can reach the whole of `berth`.
    ///
    /// The reach window is `[base, base + crane_range]`. Returns `None` if
    /// the crane is not configured.
    pub fn covers(&self, crane: CraneId, berth: &Interval) -> Option<bool> {
        self.crane_base_position(crane).map(|base| {
            base <= berth.start() && berth.end() <= base.saturating_add(self.crane_range)
        })
    }
}
