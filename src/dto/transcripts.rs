//! DTO for the transcripts page.

use serde::Serialize;

use crate::domain::history::{SemesterEntry, YearEntry};
use crate::domain::records::{AcademicDecision, Transcript};
use crate::domain::selection::Selection;
use crate::domain::types::CardId;

#[derive(Debug, Serialize)]
pub struct TranscriptsPageData {
    pub years: Vec<YearEntry>,
    pub semesters: Vec<SemesterEntry>,
    pub year: Selection<CardId>,
    pub semester: Selection<String>,
    /// Transcripts of the active year/semester, with their teaching units.
    pub transcripts: Vec<Transcript>,
    /// End-of-year decision for the active year; best-effort, omitted on error.
    pub decision: Option<AcademicDecision>,
}
