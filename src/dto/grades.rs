//! DTOs for the exam and continuous-assessment grade pages.

use serde::Serialize;

use crate::domain::history::{SemesterEntry, YearEntry};
use crate::domain::selection::Selection;
use crate::domain::types::CardId;

/// One rendered exam grade row.
#[derive(Debug, Serialize, PartialEq)]
pub struct ExamGradeRow {
    pub subject: Option<String>,
    /// Display form of the grade ("12.50", "Absent", "–").
    pub note: String,
    /// `Some(true)` passing, `Some(false)` failing, `None` no numeric value.
    pub passing: Option<bool>,
    pub coefficient: Option<f64>,
    pub session_title: Option<String>,
}

/// One rendered continuous-assessment row.
#[derive(Debug, Serialize, PartialEq)]
pub struct CcGradeRow {
    pub subject: Option<String>,
    pub period: Option<String>,
    pub note: String,
    pub passing: Option<bool>,
    pub observation: Option<String>,
}

/// Exam grade history behind the year → semester selector.
#[derive(Debug, Serialize)]
pub struct ExamGradesPageData {
    pub years: Vec<YearEntry>,
    pub semesters: Vec<SemesterEntry>,
    pub year: Selection<CardId>,
    pub semester: Selection<String>,
    /// Regular-session rows of the active year/semester.
    pub rows: Vec<ExamGradeRow>,
    /// Makeup-session ("rattrapage") rows, listed separately.
    pub makeup_rows: Vec<ExamGradeRow>,
}

#[derive(Debug, Serialize)]
pub struct CcGradesPageData {
    pub years: Vec<YearEntry>,
    pub semesters: Vec<SemesterEntry>,
    pub year: Selection<CardId>,
    pub semester: Selection<String>,
    pub rows: Vec<CcGradeRow>,
}
