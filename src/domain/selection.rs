//! Explicit selection state for the year → semester drill-down.
//!
//! Each history view resolves its selection fresh on every request: a query
//! parameter is an override, anything else falls back to the most recent
//! year/semester. Modeling `unset → defaulted → overridden` explicitly keeps
//! the reset-on-year-change rule out of the rendering code.

use serde::Serialize;

use crate::domain::history::{AcademicHistory, PeriodLabeled, SemesterEntry};
use crate::domain::types::CardId;

/// Selection state of one level of the drill-down.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "state", content = "key", rename_all = "lowercase")]
pub enum Selection<K> {
    /// Nothing selectable (no data at this level).
    Unset,
    /// Resolved to the most recent entry because no valid override was given.
    Defaulted(K),
    /// Resolved to a caller-supplied key that exists in the data.
    Overridden(K),
}

impl<K> Selection<K> {
    pub fn key(&self) -> Option<&K> {
        match self {
            Selection::Unset => None,
            Selection::Defaulted(key) | Selection::Overridden(key) => Some(key),
        }
    }

    pub fn is_overridden(&self) -> bool {
        matches!(self, Selection::Overridden(_))
    }
}

/// Resolves the active year and semester for a history view.
///
/// A year override must name an existing year; otherwise the most recent year
/// is defaulted. A semester override only survives if it exists under the
/// resolved year — switching years therefore implicitly resets the semester
/// to that year's latest one.
pub fn resolve<T: PeriodLabeled>(
    history: &AcademicHistory<T>,
    year_param: Option<CardId>,
    semester_param: Option<&str>,
) -> (Selection<CardId>, Selection<String>) {
    let year = match year_param {
        Some(card_id) if history.contains_year(card_id) => Selection::Overridden(card_id),
        _ => match history.default_year() {
            Some(card_id) => Selection::Defaulted(card_id),
            None => Selection::Unset,
        },
    };

    let semester = match year.key() {
        None => Selection::Unset,
        Some(&card_id) => match semester_param {
            Some(label) if history.contains_semester(card_id, label) => {
                Selection::Overridden(label.to_string())
            }
            _ => match history.default_semester(card_id) {
                Some(label) => Selection::Defaulted(label),
                None => Selection::Unset,
            },
        },
    };

    (year, semester)
}

/// Semester selector entries for the resolved year; empty when no year is
/// selectable.
pub fn semesters_of<T: PeriodLabeled>(
    history: &AcademicHistory<T>,
    year: &Selection<CardId>,
) -> Vec<SemesterEntry> {
    match year.key() {
        Some(&card_id) => history.semesters(card_id),
        None => Vec::new(),
    }
}
