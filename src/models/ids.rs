//! 1-based identifiers for vessels and quay cranes.
//!
//! Externally both ids start at 1. The conversion to a 0-based table
//! position happens only in [`VesselId::index`] and [`CraneId::index`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Identifier of a vessel in a schedule (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VesselId(NonZeroU32);

/// Identifier of a quay crane (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CraneId(NonZeroU32);

impl VesselId {
    /// Creates a vessel id. Returns `None` for `0`.
    pub fn new(id: u32) -> Option<Self> {
        NonZeroU32::new(id).map(Self)
    }

    /// The external (1-based) value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Position in per-vessel tables (0-based).
    #[inline]
    pub fn index(self) -> usize {
        (self.get() - 1) as usize
    }
}

impl CraneId {
    /// Creates a crane id. Returns `None` for `0`.
    pub fn new(id: u32) -> Option<Self> {
        NonZeroU32::new(id).map(Self)
    }

    /// The external (1-based) value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Position in per-crane tables (0-based).
    #[inline]
    pub fn index(self) -> usize {
        (self.get() - 1) as usize
    }
}

impl fmt::Display for VesselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CraneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_rejected() {
        assert!(VesselId::new(0).is_none());
        assert!(CraneId::new(0).is_none());
    }

    #[test]
    fn test_index_is_zero_based() {
        assert_eq!(VesselId::new(1).unwrap().index(), 0);
        assert_eq!(VesselId::new(20).unwrap().index(), 19);
        assert_eq!(CraneId::new(999).unwrap().index(), 998);
    }

    #[test]
    fn test_serde_transparent() {
        let id = CraneId::new(7).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let back: VesselId = serde_json::from_str("12").unwrap();
        assert_eq!(back.get(), 12);
        assert!(serde_json::from_str::<VesselId>("0").is_err());
    }
}
