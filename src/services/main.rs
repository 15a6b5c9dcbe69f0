//! Dashboard home page.

use crate::domain::enrollment;
use crate::domain::session::Session;
use crate::dto::main::HomePageData;
use crate::gateway::ProgresApi;
use crate::services::ServiceResult;

pub async fn home<A>(api: &A, session: &Session) -> ServiceResult<HomePageData>
where
    A: ProgresApi + ?Sized,
{
    let cards = api.student_cards(session.student_id, &session.token).await?;
    let latest = enrollment::latest(&cards).cloned();
    Ok(HomePageData {
        total_cards: cards.len(),
        holder_name: latest.as_ref().map(|card| card.holder_name()),
        latest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::StudentProfile;
    use crate::domain::types::CardId;
    use crate::gateway::mock::MockGateway;
    use uuid::Uuid;

    fn session() -> Session {
        Session {
            student_id: Uuid::nil(),
            token: "tok-1".into(),
            profile: StudentProfile {
                display_name: "A. Student".into(),
                establishment_id: None,
            },
        }
    }

    #[actix_web::test]
    async fn home_highlights_the_latest_card() {
        let mut api = MockGateway::new();
        api.expect_student_cards().returning(|_, _| {
            Ok(vec![
                crate::domain::enrollment::card(5, Some("2021/2022")),
                crate::domain::enrollment::card(9, Some("2023/2024")),
                crate::domain::enrollment::card(7, Some("2022/2023")),
            ])
        });

        let data = home(&api, &session()).await.unwrap();
        assert_eq!(data.total_cards, 3);
        assert_eq!(data.latest.unwrap().id, CardId::new(9));
    }

    #[actix_web::test]
    async fn home_with_no_cards_is_an_empty_state() {
        let mut api = MockGateway::new();
        api.expect_student_cards().returning(|_, _| Ok(vec![]));

        let data = home(&api, &session()).await.unwrap();
        assert_eq!(data.total_cards, 0);
        assert!(data.latest.is_none());
    }
}
