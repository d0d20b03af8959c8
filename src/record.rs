//! Text encoding of vessel assignments.
//!
//! One vessel per line:
//!
//! ```text
//! <id>:<berth_start>-<berth_end>;<time_start>..<time_end>;[<crane>,<crane>,...]
//! ```
//!
//! The crane list may be empty (`[]`) and may contain spaces after commas.
//! In a multi-line schedule, blank lines and lines starting with `#` are
//! ignored.

use std::num::ParseIntError;
use std::str::FromStr;

use crate::models::{CraneId, Interval, IntervalError, VesselAssignment, VesselId};

/// A single record that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// No `:` between vessel id and the rest of the record.
    #[error("missing ':' after vessel id")]
    MissingIdSeparator,
    /// The part after the id does not have exactly three `;`-separated sections.
    #[error("expected 3 ';'-separated sections (berth, time, cranes), found {found}")]
    SectionCount {
        /// Number of sections present.
        found: usize,
    },
    /// Berth section is not `<start>-<end>`.
    #[error("malformed berth range '{0}', expected '<start>-<end>'")]
    BerthRange(String),
    /// Time section is not `<start>..<end>`.
    #[error("malformed time range '{0}', expected '<start>..<end>'")]
    TimeRange(String),
    /// Crane section is not a bracketed list.
    #[error("malformed crane list '{0}', expected '[<id>,...]'")]
    CraneList(String),
    /// A numeric token failed to parse.
    #[error("invalid number '{token}': {source}")]
    Number {
        /// Offending token.
        token: String,
        /// Underlying parse failure.
        source: ParseIntError,
    },
    /// A berth or time range is empty or inverted.
    #[error(transparent)]
    Interval(#[from] IntervalError),
    /// Vessel or crane id `0`.
    #[error("{0} id must be positive")]
    ZeroId(&'static str),
}

/// A schedule line that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {source}")]
pub struct ScheduleParseError {
    /// 1-based line number in the input.
    pub line: usize,
    /// What went wrong.
    pub source: RecordError,
}

fn parse_number<T>(token: &str) -> Result<T, RecordError>
where
    T: FromStr<Err = ParseIntError>,
{
    let token = token.trim();
    token.parse().map_err(|source| RecordError::Number {
        token: token.to_string(),
        source,
    })
}

/// Splits `<start>-<end>` at the first `-` that is not a leading sign.
fn split_berth(section: &str) -> Option<(&str, &str)> {
    let sign = usize::from(section.starts_with('-'));
    let pos = section[sign..].find('-')? + sign;
    Some((&section[..pos], &section[pos + 1..]))
}

fn parse_cranes(section: &str) -> Result<Vec<CraneId>, RecordError> {
    let section = section.trim();
    let inner = section
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| RecordError::CraneList(section.to_string()))?;

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(|token| CraneId::new(parse_number(token)?).ok_or(RecordError::ZeroId("crane")))
        .collect()
}

impl FromStr for VesselAssignment {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, rest) = s.split_once(':').ok_or(RecordError::MissingIdSeparator)?;
        let sections: Vec<&str> = rest.split(';').collect();
        let [berth, time, cranes] = sections.as_slice() else {
            return Err(RecordError::SectionCount {
                found: sections.len(),
            });
        };

        let vessel_id = VesselId::new(parse_number(id)?).ok_or(RecordError::ZeroId("vessel"))?;

        let berth = berth.trim();
        let (berth_start, berth_end) =
            split_berth(berth).ok_or_else(|| RecordError::BerthRange(berth.to_string()))?;
        let berth = Interval::new(parse_number(berth_start)?, parse_number(berth_end)?)?;

        let time = time.trim();
        let (time_start, time_end) = time
            .split_once("..")
            .ok_or_else(|| RecordError::TimeRange(time.to_string()))?;
        let service = Interval::new(parse_number(time_start)?, parse_number(time_end)?)?;

        Ok(VesselAssignment::new(vessel_id, berth, service).with_cranes(parse_cranes(cranes)?))
    }
}

/// Parses a multi-line schedule.
///
/// Stops at the first malformed line.
///
/// # Errors
/// Returns [`ScheduleParseError`] with the 1-based line number of the
/// first record that fails to decode.
pub fn parse_schedule(text: &str) -> Result<Vec<VesselAssignment>, ScheduleParseError> {
    let mut vessels = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let vessel = line.parse().map_err(|source| ScheduleParseError {
            line: idx + 1,
            source,
        })?;
        vessels.push(vessel);
    }
    tracing::trace!(count = vessels.len(), "parsed schedule");
    Ok(vessels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record() {
        let v: VesselAssignment = "1:248-448;33..57;[3, 4, 6, 7, 8]".parse().unwrap();

        assert_eq!(v.vessel_id.get(), 1);
        assert_eq!((v.berth.start(), v.berth.end()), (248, 448));
        assert_eq!((v.service.start(), v.service.end()), (33, 57));
        assert_eq!(
            v.cranes.iter().map(|c| c.get()).collect::<Vec<_>>(),
            vec![3, 4, 6, 7, 8]
        );
    }

    #[test]
    fn test_parse_empty_crane_list() {
        let v: VesselAssignment = "7:0-100;0..10;[]".parse().unwrap();
        assert!(v.cranes.is_empty());

        let v: VesselAssignment = "7:0-100;0..10;[ ]".parse().unwrap();
        assert!(v.cranes.is_empty());
    }

    #[test]
    fn test_parse_rejects_inverted_time() {
        let err = "2:559-626;138..4;[8, 9]"
            .parse::<VesselAssignment>()
            .unwrap_err();
        assert_eq!(
            err,
            RecordError::Interval(IntervalError { start: 138, end: 4 })
        );
    }

    #[test]
    fn test_parse_structural_errors() {
        assert_eq!(
            "1 248-448;33..57;[]".parse::<VesselAssignment>(),
            Err(RecordError::MissingIdSeparator)
        );
        assert_eq!(
            "1:248-448;33..57".parse::<VesselAssignment>(),
            Err(RecordError::SectionCount { found: 2 })
        );
        assert!(matches!(
            "1:248..448;33..57;[]".parse::<VesselAssignment>(),
            Err(RecordError::BerthRange(_))
        ));
        assert!(matches!(
            "1:248-448;33-57;[]".parse::<VesselAssignment>(),
            Err(RecordError::TimeRange(_))
        ));
        assert!(matches!(
            "1:248-448;33..57;3,4".parse::<VesselAssignment>(),
            Err(RecordError::CraneList(_))
        ));
    }

    #[test]
    fn test_parse_negative_berth_bounds() {
        let v: VesselAssignment = "1:-50-100;0..10;[1]".parse().unwrap();
        assert_eq!((v.berth.start(), v.berth.end()), (-50, 100));

        let v: VesselAssignment = "1:-80--20;-5..10;[1]".parse().unwrap();
        assert_eq!((v.berth.start(), v.berth.end()), (-80, -20));
        assert_eq!(v.service.start(), -5);

        assert!(matches!(
            "1:-50;0..10;[1]".parse::<VesselAssignment>(),
            Err(RecordError::BerthRange(_))
        ));
    }

    #[test]
    fn test_parse_bad_numbers() {
        let err = "1:abc-448;33..57;[]".parse::<VesselAssignment>().unwrap_err();
        assert!(matches!(err, RecordError::Number { ref token, .. } if token == "abc"));

        let err = "1:248-448;33..57;[3,,4]".parse::<VesselAssignment>().unwrap_err();
        assert!(matches!(err, RecordError::Number { ref token, .. } if token.is_empty()));
    }

    #[test]
    fn test_parse_zero_ids() {
        assert_eq!(
            "0:248-448;33..57;[]".parse::<VesselAssignment>(),
            Err(RecordError::ZeroId("vessel"))
        );
        assert_eq!(
            "1:248-448;33..57;[0]".parse::<VesselAssignment>(),
            Err(RecordError::ZeroId("crane"))
        );
    }

    #[test]
    fn test_parse_schedule_skips_comments_and_blanks() {
        let text = "# sample\n1:248-448;33..57;[3, 4]\n\n  3:529-599;83..107;[11, 17]  \n";
        let vessels = parse_schedule(text).unwrap();
        assert_eq!(vessels.len(), 2);
        assert_eq!(vessels[1].vessel_id.get(), 3);
    }

    #[test]
    fn test_parse_schedule_reports_line_number() {
        let text = "1:248-448;33..57;[3, 4]\n2:559-626;138..4;[8]\n";
        let err = parse_schedule(text).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.to_string().starts_with("line 2: invalid interval"));
    }
}
