//! Berth and quay crane domain models.
//!
//! Provides the data types for a schedule under verification, the terminal
//! it is verified against, and the verdict.
//!
//! # Domain Mappings
//!
//! | quay-verify | Terminal Operations |
//! |-------------|---------------------|
//! | VesselAssignment | Berth plan line |
//! | Interval (berth) | Quay span in metres |
//! | Interval (service) | Handling window |
//! | CraneId | Quay crane (QC) number |
//! | TerminalConfig | Quay layout and service agreements |

mod ids;
mod interval;
mod terminal;
mod verification;
mod vessel;

pub use ids::{CraneId, VesselId};
pub use interval::{Interval, IntervalError};
pub use terminal::{ConfigError, TerminalConfig};
pub use verification::{Finding, VerificationReport, VerificationResult};
pub use vessel::VesselAssignment;
