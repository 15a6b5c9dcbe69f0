//! Per-period transcripts and the end-of-year decision.

use futures::future::try_join_all;

use crate::domain::history::AcademicHistory;
use crate::domain::records::AcademicDecision;
use crate::domain::selection;
use crate::domain::session::Session;
use crate::domain::types::CardId;
use crate::dto::transcripts::TranscriptsPageData;
use crate::gateway::ProgresApi;
use crate::services::ServiceResult;

pub async fn transcripts<A>(
    api: &A,
    session: &Session,
    year: Option<CardId>,
    semester: Option<&str>,
) -> ServiceResult<TranscriptsPageData>
where
    A: ProgresApi + ?Sized,
{
    let cards = api.student_cards(session.student_id, &session.token).await?;
    let per_card = try_join_all(cards.iter().map(|card| {
        let id = card.id;
        async move {
            api.transcripts(session.student_id, id, &session.token)
                .await
                .map(|rows| (id, rows))
        }
    }))
    .await?;

    let history = AcademicHistory::build(cards, per_card);
    let (year_sel, semester_sel) = selection::resolve(&history, year, semester);

    let mut transcripts = Vec::new();
    if let (Some(&card_id), Some(label)) = (year_sel.key(), semester_sel.key()) {
        transcripts = history
            .visible(card_id, label)
            .into_iter()
            .map(|tagged| tagged.record.clone())
            .collect();
    }

    let decision = match year_sel.key() {
        Some(&card_id) => annual_decision(api, session, card_id).await,
        None => None,
    };

    Ok(TranscriptsPageData {
        semesters: selection::semesters_of(&history, &year_sel),
        years: history.years,
        year: year_sel,
        semester: semester_sel,
        transcripts,
        decision,
    })
}

/// Best-effort fetch of the end-of-year decision. The transcripts themselves
/// are the primary content, so a failure here is logged and the page renders
/// without a decision instead of erroring out.
async fn annual_decision<A>(
    api: &A,
    session: &Session,
    card_id: CardId,
) -> Option<AcademicDecision>
where
    A: ProgresApi + ?Sized,
{
    match api
        .annual_decision(session.student_id, card_id, &session.token)
        .await
    {
        Ok(decision) => decision,
        Err(err) => {
            log::warn!("annual decision for card {card_id} unavailable: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enrollment::card;
    use crate::domain::records::Transcript;
    use crate::domain::selection::Selection;
    use crate::domain::session::StudentProfile;
    use crate::gateway::errors::ApiError;
    use crate::gateway::mock::MockGateway;
    use uuid::Uuid;

    fn session() -> Session {
        Session {
            student_id: Uuid::nil(),
            token: "tok-1".into(),
            profile: StudentProfile {
                display_name: String::new(),
                establishment_id: None,
            },
        }
    }

    fn transcript(period: &str, average: f64) -> Transcript {
        serde_json::from_value(serde_json::json!({
            "periodeLibelleFr": period,
            "moyenne": average
        }))
        .unwrap()
    }

    #[actix_web::test]
    async fn shows_latest_semester_with_its_decision() {
        let mut api = MockGateway::new();
        api.expect_student_cards().returning(|_, _| {
            Ok(vec![card(5, Some("2021/2022")), card(9, Some("2023/2024"))])
        });
        api.expect_transcripts().returning(|_, id, _| {
            Ok(match id.get() {
                9 => vec![
                    transcript("Semestre 1", 10.5),
                    transcript("Semestre 2", 11.8),
                ],
                _ => vec![transcript("Semestre 1", 9.2)],
            })
        });
        api.expect_annual_decision()
            .withf(|_, id, _| id.get() == 9)
            .returning(|_, _, _| {
                Ok(Some(serde_json::from_value(serde_json::json!({
                    "typeDecisionLibelleFr": "Admis",
                    "moyenne": 11.15
                }))
                .unwrap()))
            });

        let data = transcripts(&api, &session(), None, None).await.unwrap();
        assert_eq!(data.year, Selection::Defaulted(CardId::new(9)));
        assert_eq!(data.transcripts.len(), 1);
        assert_eq!(
            data.transcripts[0].period_label.as_deref(),
            Some("Semestre 2")
        );
        assert_eq!(data.decision.unwrap().decision.as_deref(), Some("Admis"));
    }

    #[actix_web::test]
    async fn decision_failure_does_not_fail_the_page() {
        let mut api = MockGateway::new();
        api.expect_student_cards()
            .returning(|_, _| Ok(vec![card(9, Some("2023/2024"))]));
        api.expect_transcripts()
            .returning(|_, _, _| Ok(vec![transcript("Semestre 1", 10.5)]));
        api.expect_annual_decision()
            .returning(|_, _, _| Err(ApiError::Transport("timeout".into())));

        let data = transcripts(&api, &session(), None, None).await.unwrap();
        assert_eq!(data.transcripts.len(), 1);
        assert!(data.decision.is_none());
    }

    #[actix_web::test]
    async fn failed_transcript_fetch_fails_the_page() {
        let mut api = MockGateway::new();
        api.expect_student_cards().returning(|_, _| {
            Ok(vec![card(5, Some("2021/2022")), card(9, Some("2023/2024"))])
        });
        api.expect_transcripts().returning(|_, id, _| {
            if id.get() == 5 {
                Err(ApiError::Transport("connection reset".into()))
            } else {
                Ok(vec![transcript("Semestre 1", 10.5)])
            }
        });

        assert!(transcripts(&api, &session(), None, None).await.is_err());
    }
}
