//! Administrative status pages: transport, accommodation, discharge, debts.

use crate::domain::enrollment;
use crate::domain::records::DischargeState;
use crate::domain::session::Session;
use crate::dto::status::{
    AccommodationPageData, DebtsPageData, DischargePageData, DischargeRow, TransportPageData,
};
use crate::gateway::ProgresApi;
use crate::services::ServiceResult;

pub async fn transport<A>(api: &A, session: &Session) -> ServiceResult<TransportPageData>
where
    A: ProgresApi + ?Sized,
{
    let cards = api.student_cards(session.student_id, &session.token).await?;
    let Some(card) = enrollment::latest(&cards) else {
        return Ok(TransportPageData::default());
    };

    let state = api
        .transport_state(session.student_id, card.id, &session.token)
        .await?;
    Ok(TransportPageData { state })
}

pub async fn accommodation<A>(api: &A, session: &Session) -> ServiceResult<AccommodationPageData>
where
    A: ProgresApi + ?Sized,
{
    let requests = api
        .accommodation_requests(session.student_id, &session.token)
        .await?;
    Ok(AccommodationPageData { requests })
}

pub async fn discharge<A>(api: &A, session: &Session) -> ServiceResult<DischargePageData>
where
    A: ProgresApi + ?Sized,
{
    let Some(state) = api.discharge_state(session.student_id).await? else {
        return Ok(DischargePageData::default());
    };
    Ok(DischargePageData {
        rows: discharge_rows(&state),
    })
}

pub async fn debts<A>(api: &A, session: &Session) -> ServiceResult<DebtsPageData>
where
    A: ProgresApi + ?Sized,
{
    let entries = api.debts(session.student_id, &session.token).await?;
    Ok(DebtsPageData { entries })
}

/// One row per administrative desk, in the order the paper form lists them.
fn discharge_rows(state: &DischargeState) -> Vec<DischargeRow> {
    [
        ("Bibliothèque centrale", &state.central_library),
        ("Faculté", &state.faculty),
        ("Service des bourses", &state.scholarship_service),
        ("Département", &state.department),
        ("Résidence universitaire", &state.residence),
    ]
    .into_iter()
    .map(|(label, level)| DischargeRow {
        label,
        cleared: DischargeState::is_cleared(level),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enrollment::card;
    use crate::domain::session::StudentProfile;
    use crate::domain::types::CardId;
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

    #[actix_web::test]
    async fn transport_queries_the_latest_card() {
        let mut api = MockGateway::new();
        api.expect_student_cards()
            .returning(|_, _| Ok(vec![card(5, None), card(9, None)]));
        api.expect_transport_state()
            .withf(|_, id, _| *id == CardId::new(9))
            .returning(|_, _, _| {
                Ok(Some(serde_json::from_value(serde_json::json!({
                    "transportPaye": true,
                    "anneeAcademiqueCode": "2023/2024"
                }))
                .unwrap()))
            });

        let data = transport(&api, &session()).await.unwrap();
        assert_eq!(data.state.unwrap().paid, Some(true));
    }

    #[actix_web::test]
    async fn transport_without_any_card_is_an_empty_state() {
        let mut api = MockGateway::new();
        api.expect_student_cards().returning(|_, _| Ok(vec![]));

        let data = transport(&api, &session()).await.unwrap();
        assert!(data.state.is_none());
    }

    #[actix_web::test]
    async fn discharge_maps_mixed_level_types_to_rows() {
        let mut api = MockGateway::new();
        api.expect_discharge_state().returning(|_| {
            Ok(Some(serde_json::from_value(serde_json::json!({
                "centralLibraryLevel": true,
                "facultyLevel": "validé",
                "scholarshipServiceLevel": 0,
                "departmentLevel": null
            }))
            .unwrap()))
        });

        let data = discharge(&api, &session()).await.unwrap();
        let cleared: Vec<bool> = data.rows.iter().map(|row| row.cleared).collect();
        assert_eq!(cleared, vec![true, true, false, false, false]);
        assert_eq!(data.rows[0].label, "Bibliothèque centrale");
    }

    #[actix_web::test]
    async fn missing_discharge_record_yields_no_rows() {
        let mut api = MockGateway::new();
        api.expect_discharge_state().returning(|_| Ok(None));

        let data = discharge(&api, &session()).await.unwrap();
        assert!(data.rows.is_empty());
    }
}
