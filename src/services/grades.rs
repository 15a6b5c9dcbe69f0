//! Exam and continuous-assessment grade histories.
//!
//! Both views fetch every enrollment card, fan the per-card grade fetches out
//! in parallel and join them fail-fast: one failed card fails the whole view,
//! there are no partial histories. Association is by card id, never by
//! completion order.

use futures::future::try_join_all;

use crate::domain::grade::{GradeOutcome, is_makeup_session};
use crate::domain::history::AcademicHistory;
use crate::domain::records::{CcGrade, ExamGrade};
use crate::domain::selection;
use crate::domain::session::Session;
use crate::domain::types::CardId;
use crate::dto::grades::{CcGradeRow, CcGradesPageData, ExamGradeRow, ExamGradesPageData};
use crate::gateway::ProgresApi;
use crate::services::ServiceResult;

pub async fn exam_grades<A>(
    api: &A,
    session: &Session,
    year: Option<CardId>,
    semester: Option<&str>,
) -> ServiceResult<ExamGradesPageData>
where
    A: ProgresApi + ?Sized,
{
    let cards = api.student_cards(session.student_id, &session.token).await?;
    let per_card = try_join_all(cards.iter().map(|card| {
        let id = card.id;
        async move { api.exam_grades(id, &session.token).await.map(|rows| (id, rows)) }
    }))
    .await?;

    let history = AcademicHistory::build(cards, per_card);
    let (year_sel, semester_sel) = selection::resolve(&history, year, semester);

    let mut rows = Vec::new();
    let mut makeup_rows = Vec::new();
    if let (Some(&card_id), Some(label)) = (year_sel.key(), semester_sel.key()) {
        for tagged in history.visible(card_id, label) {
            let row = exam_row(&tagged.record);
            if is_makeup_session(tagged.record.session_title.as_deref()) {
                makeup_rows.push(row);
            } else {
                rows.push(row);
            }
        }
    }

    Ok(ExamGradesPageData {
        semesters: selection::semesters_of(&history, &year_sel),
        years: history.years,
        year: year_sel,
        semester: semester_sel,
        rows,
        makeup_rows,
    })
}

pub async fn cc_grades<A>(
    api: &A,
    session: &Session,
    year: Option<CardId>,
    semester: Option<&str>,
) -> ServiceResult<CcGradesPageData>
where
    A: ProgresApi + ?Sized,
{
    let cards = api.student_cards(session.student_id, &session.token).await?;
    let per_card = try_join_all(cards.iter().map(|card| {
        let id = card.id;
        async move { api.cc_grades(id, &session.token).await.map(|rows| (id, rows)) }
    }))
    .await?;

    let history = AcademicHistory::build(cards, per_card);
    let (year_sel, semester_sel) = selection::resolve(&history, year, semester);

    let mut rows = Vec::new();
    if let (Some(&card_id), Some(label)) = (year_sel.key(), semester_sel.key()) {
        rows = history
            .visible(card_id, label)
            .into_iter()
            .map(|tagged| cc_row(&tagged.record))
            .collect();
    }

    Ok(CcGradesPageData {
        semesters: selection::semesters_of(&history, &year_sel),
        years: history.years,
        year: year_sel,
        semester: semester_sel,
        rows,
    })
}

fn exam_row(grade: &ExamGrade) -> ExamGradeRow {
    let outcome = GradeOutcome::from_note(grade.note, false);
    ExamGradeRow {
        subject: grade.subject.clone(),
        note: outcome.to_string(),
        passing: outcome.passing(),
        coefficient: grade.coefficient,
        session_title: grade.session_title.clone(),
    }
}

fn cc_row(grade: &CcGrade) -> CcGradeRow {
    let outcome = GradeOutcome::from_note(grade.note, grade.is_absent());
    CcGradeRow {
        subject: grade.subject.clone(),
        period: grade.period_label.clone(),
        note: outcome.to_string(),
        passing: outcome.passing(),
        observation: grade.observation.clone(),
    }
}
