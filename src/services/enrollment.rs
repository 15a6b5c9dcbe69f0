//! Enrollment cards, subject catalog and pedagogic groups.
//!
//! The subjects and groups views are single-year: they resolve the latest
//! card first and query only it. A card missing the ids those endpoints need
//! is an empty state, not an error.

use crate::domain::enrollment::{self, EnrollmentCard};
use crate::domain::session::Session;
use crate::dto::enrollment::{CardsPageData, GroupsPageData, SubjectsPageData};
use crate::gateway::ProgresApi;
use crate::services::ServiceResult;

pub async fn cards<A>(api: &A, session: &Session) -> ServiceResult<CardsPageData>
where
    A: ProgresApi + ?Sized,
{
    let cards = api.student_cards(session.student_id, &session.token).await?;
    Ok(CardsPageData {
        cards: enrollment::sorted_most_recent_first(cards),
    })
}

pub async fn subjects<A>(api: &A, session: &Session) -> ServiceResult<SubjectsPageData>
where
    A: ProgresApi + ?Sized,
{
    let cards = api.student_cards(session.student_id, &session.token).await?;
    let Some(card) = enrollment::latest(&cards).cloned() else {
        return Ok(SubjectsPageData::default());
    };

    let subjects = match (card.training_offer_id, card.level_id) {
        (Some(offer_id), Some(level_id)) => {
            api.subjects(offer_id, level_id, &session.token).await?
        }
        _ => Vec::new(),
    };
    Ok(SubjectsPageData {
        card: Some(card),
        subjects,
    })
}

pub async fn groups<A>(api: &A, session: &Session) -> ServiceResult<GroupsPageData>
where
    A: ProgresApi + ?Sized,
{
    let cards = api.student_cards(session.student_id, &session.token).await?;
    let Some(card) = enrollment::latest(&cards).cloned() else {
        return Ok(GroupsPageData::default());
    };

    let groups = api.groups(card.id, &session.token).await?;
    Ok(GroupsPageData {
        card: Some(card),
        groups,
    })
}

#[cfg(test)]
pub(crate) fn card_with_ids(id: i64, offer: Option<i64>, level: Option<i64>) -> EnrollmentCard {
    use crate::domain::types::{LevelId, OfferId};

    let mut card = enrollment::card(id, Some("2023/2024"));
    card.training_offer_id = offer.map(OfferId::new);
    card.level_id = level.map(LevelId::new);
    card
}
