//! Weekly timetable history and the current exam schedule.

use futures::future::try_join_all;

use crate::domain::enrollment;
use crate::domain::history::AcademicHistory;
use crate::domain::selection;
use crate::domain::session::Session;
use crate::domain::types::CardId;
use crate::dto::schedule::{ExamSchedulePageData, SchedulePageData};
use crate::gateway::ProgresApi;
use crate::services::ServiceResult;

pub async fn week_schedule<A>(
    api: &A,
    session: &Session,
    year: Option<CardId>,
    semester: Option<&str>,
) -> ServiceResult<SchedulePageData>
where
    A: ProgresApi + ?Sized,
{
    let cards = api.student_cards(session.student_id, &session.token).await?;
    let per_card = try_join_all(cards.iter().map(|card| {
        let id = card.id;
        async move {
            api.week_schedule(id, &session.token)
                .await
                .map(|rows| (id, rows))
        }
    }))
    .await?;

    let history = AcademicHistory::build(cards, per_card);
    let (year_sel, semester_sel) = selection::resolve(&history, year, semester);

    let mut entries = Vec::new();
    if let (Some(&card_id), Some(label)) = (year_sel.key(), semester_sel.key()) {
        entries = history
            .visible(card_id, label)
            .into_iter()
            .map(|tagged| tagged.record.clone())
            .collect();
    }
    entries.sort_by(|a, b| {
        (a.day_id, a.starts_at.as_deref()).cmp(&(b.day_id, b.starts_at.as_deref()))
    });

    Ok(SchedulePageData {
        semesters: selection::semesters_of(&history, &year_sel),
        years: history.years,
        year: year_sel,
        semester: semester_sel,
        entries,
    })
}

/// Exam sittings of the current academic year, all periods merged.
///
/// Resolution chain: latest card → current year → that year's periods →
/// one sessions fetch per period, joined fail-fast. A latest card without a
/// level id cannot be matched to sessions; that is an empty state.
pub async fn exam_schedule<A>(api: &A, session: &Session) -> ServiceResult<ExamSchedulePageData>
where
    A: ProgresApi + ?Sized,
{
    let cards = api.student_cards(session.student_id, &session.token).await?;
    let Some(level_id) = enrollment::latest(&cards).and_then(|card| card.level_id) else {
        return Ok(ExamSchedulePageData::default());
    };

    let year = api.current_academic_year(&session.token).await?;
    let periods = api.academic_periods(year.id, &session.token).await?;
    let per_period = try_join_all(periods.iter().map(|period| {
        let id = period.id;
        async move { api.exam_sessions(id, level_id, &session.token).await }
    }))
    .await?;

    let mut sessions: Vec<_> = per_period.into_iter().flatten().collect();
    sessions.sort_by(|a, b| {
        (a.date.as_deref(), a.starts_at.as_deref())
            .cmp(&(b.date.as_deref(), b.starts_at.as_deref()))
    });
    Ok(ExamSchedulePageData { sessions })
}
