//! Student profile and baccalaureate pages, plus the two image endpoints.

use futures::try_join;

use crate::domain::enrollment;
use crate::domain::session::Session;
use crate::dto::profile::{BacPageData, ProfilePageData};
use crate::gateway::ProgresApi;
use crate::services::ServiceResult;

pub async fn profile<A>(api: &A, session: &Session) -> ServiceResult<ProfilePageData>
where
    A: ProgresApi + ?Sized,
{
    let (info, cards) = try_join!(
        api.individual_info(session.student_id, &session.token),
        api.student_cards(session.student_id, &session.token),
    )?;

    let latest = enrollment::latest(&cards);
    Ok(ProfilePageData {
        info,
        registration_number: latest.and_then(|card| card.registration_number.clone()),
        academic_year_label: latest.and_then(|card| card.academic_year_label.clone()),
    })
}

/// Baccalaureate record with its per-subject grades.
pub async fn bac<A>(api: &A, session: &Session) -> ServiceResult<BacPageData>
where
    A: ProgresApi + ?Sized,
{
    let (info, grades) = try_join!(
        api.bac_info(session.student_id, &session.token),
        api.bac_grades(session.student_id, &session.token),
    )?;

    Ok(BacPageData {
        series: info.series_label().map(str::to_string),
        info,
        grades,
    })
}

/// JPEG portrait of the student.
pub async fn photo<A>(api: &A, session: &Session) -> ServiceResult<Vec<u8>>
where
    A: ProgresApi + ?Sized,
{
    Ok(api.student_photo(session.student_id, &session.token).await?)
}

/// JPEG logo of the student's establishment; `None` when the login payload
/// carried no establishment id.
pub async fn logo<A>(api: &A, session: &Session) -> ServiceResult<Option<Vec<u8>>>
where
    A: ProgresApi + ?Sized,
{
    match session.profile.establishment_id {
        Some(id) => Ok(Some(api.establishment_logo(id, &session.token).await?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enrollment::card;
    use crate::domain::session::StudentProfile;
    use crate::domain::types::EstablishmentId;
    use crate::gateway::mock::MockGateway;
    use uuid::Uuid;

    fn session(establishment: Option<i64>) -> Session {
        Session {
            student_id: Uuid::nil(),
            token: "tok-1".into(),
            profile: StudentProfile {
                display_name: String::new(),
                establishment_id: establishment.map(EstablishmentId::new),
            },
        }
    }

    #[actix_web::test]
    async fn profile_joins_info_with_latest_registration() {
        let mut api = MockGateway::new();
        api.expect_individual_info().returning(|_, _| {
            Ok(serde_json::from_value(serde_json::json!({
                "prenomLatin": "Amine",
                "nomLatin": "Student"
            }))
            .unwrap())
        });
        api.expect_student_cards().returning(|_, _| {
            let mut old = card(5, Some("2021/2022"));
            old.registration_number = Some("UN39-2021-001".into());
            let mut latest = card(9, Some("2023/2024"));
            latest.registration_number = Some("UN39-2023-001".into());
            Ok(vec![old, latest])
        });

        let data = profile(&api, &session(None)).await.unwrap();
        assert_eq!(data.info.first_name.as_deref(), Some("Amine"));
        assert_eq!(data.registration_number.as_deref(), Some("UN39-2023-001"));
        assert_eq!(data.academic_year_label.as_deref(), Some("2023/2024"));
    }

    #[actix_web::test]
    async fn bac_joins_record_with_grades_and_series_label() {
        let mut api = MockGateway::new();
        api.expect_bac_info().returning(|_, _| {
            Ok(serde_json::from_value(serde_json::json!({
                "prenomFr": "Amine",
                "nomFr": "Student",
                "anneeBac": "2021",
                "refCodeSerieBac": "SE",
                "moyenneBac": 13.4
            }))
            .unwrap())
        });
        api.expect_bac_grades().returning(|_, _| {
            Ok(serde_json::from_value(serde_json::json!([
                {"refCodeMatiereLibelleFr": "Mathématiques", "note": 15.0},
                {"refCodeMatiereLibelleFr": "Physique", "note": null}
            ]))
            .unwrap())
        });

        let data = bac(&api, &session(None)).await.unwrap();
        assert_eq!(data.series.as_deref(), Some("SE"));
        assert_eq!(data.grades.len(), 2);
        assert_eq!(data.grades[1].note, None);
    }

    #[actix_web::test]
    async fn logo_without_establishment_id_is_none() {
        let api = MockGateway::new();
        assert!(logo(&api, &session(None)).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn logo_fetches_the_session_establishment() {
        let mut api = MockGateway::new();
        api.expect_establishment_logo()
            .withf(|id, _| *id == EstablishmentId::new(7))
            .returning(|_, _| Ok(vec![0xff, 0xd8]));

        let bytes = logo(&api, &session(Some(7))).await.unwrap().unwrap();
        assert_eq!(bytes, vec![0xff, 0xd8]);
    }
}
