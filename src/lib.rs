//! Feasibility checking for container terminal berth plans.
//!
//! Certifies a proposed berth allocation and quay crane assignment. It does
//! not produce or optimize schedules.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `VesselAssignment`, `Interval`, `VesselId`,
//!   `CraneId`, `TerminalConfig`, `VerificationResult`, `Finding`
//! - **`checker`**: Pairwise berth/time conflicts, crane count and crane reach
//! - **`validation`**: Input integrity checks (duplicate IDs, requirement table coverage)
//! - **`record`**: Line-oriented text encoding of vessel assignments
//!
//! # Example
//!
//! ```
//! use quay_verify::{checker::verify, models::TerminalConfig, record::parse_schedule};
//!
//! let config = TerminalConfig::new(vec![0, 100], 200).with_minimum_cranes(vec![1, 1]);
//! let vessels = parse_schedule("1:0-100;0..10;[1]\n2:100-200;0..10;[2]").unwrap();
//! let result = verify(&vessels, &config).unwrap();
//! assert!(result.is_feasible());
//! ```
//!
//! # References
//!
//! - Bierwirth & Meisel (2010), "A survey of berth allocation and quay crane
//!   scheduling problems in container terminals"

pub mod checker;
pub mod models;
pub mod record;
pub mod validation;
