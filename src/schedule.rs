// Copyright (C) 2026 The parisplay authors
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//
use std::fs;
use std::path::Path;

use tracing::debug;

/// One contiguous interval of tone or silence on the playback timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// The length of the interval in milliseconds.
    pub duration_ms: u64,
    /// True while the tone is on.
    pub active: bool,
}

/// Typed error for schedule loading so callers can distinguish an unreadable
/// file from a file with no usable rows.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("no valid rows")]
    NoValidRows,
    #[error("error reading schedule: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses schedule text into an ordered list of segments.
///
/// Each data line is `duration_ms,value` with the second field coerced to a
/// boolean (nonzero means tone on). Blank lines, `#` comments, and a
/// case-insensitive `duration_ms` header are skipped, as is any line that
/// does not yield exactly two parseable integer fields. Malformed rows are
/// dropped rather than reported; only an entirely empty result is an error.
pub fn parse_schedule(text: &str) -> Result<Vec<Segment>, ScheduleError> {
    let mut segments: Vec<Segment> = Vec::new();

    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if is_header(line) {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 2 {
            debug!(line = number + 1, "Skipping row: expected two fields.");
            continue;
        }

        // A u64 parse also rejects negative durations.
        let duration_ms = match fields[0].parse::<u64>() {
            Ok(duration_ms) => duration_ms,
            Err(_) => {
                debug!(line = number + 1, "Skipping row: unparseable duration.");
                continue;
            }
        };
        let value = match fields[1].parse::<i64>() {
            Ok(value) => value,
            Err(_) => {
                debug!(line = number + 1, "Skipping row: unparseable value.");
                continue;
            }
        };

        segments.push(Segment {
            duration_ms,
            active: value != 0,
        });
    }

    if segments.is_empty() {
        return Err(ScheduleError::NoValidRows);
    }
    Ok(segments)
}

/// Reads and parses a schedule file.
pub fn load_schedule(path: &Path) -> Result<Vec<Segment>, ScheduleError> {
    parse_schedule(&fs::read_to_string(path)?)
}

/// Returns true for the optional `duration_ms,...` header line.
fn is_header(line: &str) -> bool {
    line.get(.."duration_ms".len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("duration_ms"))
}

#[cfg(test)]
mod test {
    use super::*;

    fn segment(duration_ms: u64, active: bool) -> Segment {
        Segment {
            duration_ms,
            active,
        }
    }

    #[test]
    fn test_parse_schedule() {
        let segments = parse_schedule(
            "# A PARIS word at 20 wpm.\n\
             duration_ms,value\n\
             60,1\n\
             60,0\n\
             180,1\n",
        )
        .expect("expected segments");

        assert_eq!(
            segments,
            vec![segment(60, true), segment(60, false), segment(180, true)]
        );
    }

    #[test]
    fn test_parse_schedule_is_idempotent() {
        let text = "100,1\n50,0\n\n# tail comment\n25,3\n";
        let first = parse_schedule(text).expect("expected segments");
        let second = parse_schedule(text).expect("expected segments");
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_schedule_lenient_skips() {
        let segments = parse_schedule(
            "DURATION_MS,value\n\
             \t 100 , 1 \n\
             not-a-number,1\n\
             100,not-a-number\n\
             100,1,extra\n\
             lonely-field\n\
             -5,1\n\
             0,0\n\
             40,-2\n",
        )
        .expect("expected segments");

        // Only the whitespace-padded row, the zero-duration row, and the
        // negative-value row survive. A negative value still means tone on.
        assert_eq!(
            segments,
            vec![segment(100, true), segment(0, false), segment(40, true)]
        );
    }

    #[test]
    fn test_parse_schedule_no_valid_rows() {
        let result = parse_schedule(
            "# only comments\n\
             duration_ms,value\n\
             \n\
             one,two\n",
        );
        assert!(matches!(result, Err(ScheduleError::NoValidRows)));
    }

    #[test]
    fn test_parse_schedule_empty_input() {
        assert!(matches!(
            parse_schedule(""),
            Err(ScheduleError::NoValidRows)
        ));
    }

    #[test]
    fn test_load_schedule_missing_file() {
        let result = load_schedule(Path::new("/nonexistent/schedule.paris"));
        assert!(matches!(result, Err(ScheduleError::Io(_))));
    }
}
