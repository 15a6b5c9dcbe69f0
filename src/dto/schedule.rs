//! DTOs for the weekly timetable and exam schedule pages.

use serde::Serialize;

use crate::domain::history::{SemesterEntry, YearEntry};
use crate::domain::records::{ExamSession, ScheduleEntry};
use crate::domain::selection::Selection;
use crate::domain::types::CardId;

#[derive(Debug, Serialize)]
pub struct SchedulePageData {
    pub years: Vec<YearEntry>,
    pub semesters: Vec<SemesterEntry>,
    pub year: Selection<CardId>,
    pub semester: Selection<String>,
    /// Slots of the active selection, sorted by day then start time.
    pub entries: Vec<ScheduleEntry>,
}

#[derive(Debug, Default, Serialize)]
pub struct ExamSchedulePageData {
    /// Upcoming sittings across all periods of the current year, sorted
    /// chronologically.
    pub sessions: Vec<ExamSession>,
}
