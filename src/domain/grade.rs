//! Grade rendering policy: pass/fail threshold and makeup-session detection.

use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Fixed pass mark on the 0–20 scale used by the backend. Domain convention,
/// not configurable.
pub const PASSING_GRADE: f64 = 10.0;

/// Session title identifying a makeup ("rattrapage") exam sitting. Matched
/// case-insensitively and exactly; spelling variants are deliberately not
/// handled until the backend exposes a proper session taxonomy.
pub const MAKEUP_SESSION_TITLE: &str = "rattrapage";

/// How a grade value renders, derived once so templates never compare floats.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
#[serde(tag = "status", content = "note", rename_all = "lowercase")]
pub enum GradeOutcome {
    Passing(f64),
    Failing(f64),
    /// No value but an explicit absence flag.
    Absent,
    /// No value and no absence flag; rendered as a dash.
    Missing,
}

impl GradeOutcome {
    pub fn from_note(note: Option<f64>, absent: bool) -> Self {
        match note {
            Some(value) if value >= PASSING_GRADE => GradeOutcome::Passing(value),
            Some(value) => GradeOutcome::Failing(value),
            None if absent => GradeOutcome::Absent,
            None => GradeOutcome::Missing,
        }
    }

    /// `Some(true)` for passing, `Some(false)` for failing, `None` when there
    /// is no numeric value to judge.
    pub fn passing(&self) -> Option<bool> {
        match self {
            GradeOutcome::Passing(_) => Some(true),
            GradeOutcome::Failing(_) => Some(false),
            GradeOutcome::Absent | GradeOutcome::Missing => None,
        }
    }
}

impl Display for GradeOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GradeOutcome::Passing(value) | GradeOutcome::Failing(value) => {
                write!(f, "{value:.2}")
            }
            GradeOutcome::Absent => write!(f, "Absent"),
            GradeOutcome::Missing => write!(f, "–"),
        }
    }
}

/// Whether a session title names the makeup session.
pub fn is_makeup_session(session_title: Option<&str>) -> bool {
    session_title.is_some_and(|title| title.eq_ignore_ascii_case(MAKEUP_SESSION_TITLE))
}

/// Unweighted average of one subject's three assessment scores.
pub fn subject_average(tp: f64, td: f64, exam: f64) -> f64 {
    (tp + td + exam) / 3.0
}

/// Mean of the per-subject averages; 0 when no subjects are listed.
pub fn overall_average(averages: &[f64]) -> f64 {
    if averages.is_empty() {
        return 0.0;
    }
    averages.iter().sum::<f64>() / averages.len() as f64
}
