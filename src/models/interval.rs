//! Half-open integer intervals.
//!
//! Berth spans (metres along the quay) and service windows (time units)
//! are both modelled as `[start, end)`. Intervals that merely touch at an
//! endpoint do not overlap.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-empty half-open interval `[start, end)`.
///
/// # Invariants
/// `start < end`. Enforced by [`Interval::new`]; there is no way to build
/// an empty or inverted interval.
///
/// # Examples
///
/// ```
/// use quay_verify::models::Interval;
///
/// let a = Interval::new(0, 100).unwrap();
/// let b = Interval::new(100, 200).unwrap();
/// assert!(!a.overlaps(&b)); // touching endpoints
/// assert!(Interval::new(10, 4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval", into = "RawInterval")]
pub struct Interval {
    start: i64,
    end: i64,
}

/// Error returned when interval bounds are inverted or equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid interval [{start}, {end}): start must be strictly less than end")]
pub struct IntervalError {
    /// Rejected start bound.
    pub start: i64,
    /// Rejected end bound.
    pub end: i64,
}

#[derive(Serialize, Deserialize)]
struct RawInterval {
    start: i64,
    end: i64,
}

impl TryFrom<RawInterval> for Interval {
    type Error = IntervalError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl From<Interval> for RawInterval {
    fn from(iv: Interval) -> Self {
        Self {
            start: iv.start,
            end: iv.end,
        }
    }
}

impl Interval {
    /// Creates `[start, end)`.
    ///
    /// # Errors
    /// Returns [`IntervalError`] if `start >= end`.
    pub fn new(start: i64, end: i64) -> Result<Self, IntervalError> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(IntervalError { start, end })
        }
    }

    /// Inclusive start.
    #[inline]
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Exclusive end.
    #[inline]
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Length (`end - start`), always positive.
    #[inline]
    pub fn length(&self) -> i64 {
        self.end - self.start
    }

    /// Whether the two intervals share at least one point.
    ///
    /// `[a,b)` and `[c,d)` overlap iff neither `b <= c` nor `a >= d`.
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: i64, end: i64) -> Interval {
        Interval::new(start, end).unwrap()
    }

    #[test]
    fn test_rejects_inverted_and_empty() {
        assert_eq!(
            Interval::new(138, 4),
            Err(IntervalError { start: 138, end: 4 })
        );
        assert!(Interval::new(5, 5).is_err());
        assert!(Interval::new(-3, 2).is_ok());
    }

    #[test]
    fn test_overlap_is_boundary_exclusive() {
        assert!(!iv(0, 100).overlaps(&iv(100, 200)));
        assert!(!iv(100, 200).overlaps(&iv(0, 100)));
        assert!(iv(0, 100).overlaps(&iv(99, 200)));
        assert!(iv(0, 100).overlaps(&iv(50, 150)));
    }

    #[test]
    fn test_overlap_nested() {
        assert!(iv(0, 100).overlaps(&iv(10, 20)));
        assert!(iv(10, 20).overlaps(&iv(0, 100)));
    }

    #[test]
    fn test_len_and_display() {
        let a = iv(248, 448);
        assert_eq!(a.length(), 200);
        assert_eq!(a.to_string(), "[248, 448)");
    }

    #[test]
    fn test_deserialize_rejects_inverted() {
        let ok: Interval = serde_json::from_str(r#"{"start":1,"end":2}"#).unwrap();
        assert_eq!(ok, iv(1, 2));
        assert!(serde_json::from_str::<Interval>(r#"{"start":2,"end":1}"#).is_err());
    }
}
