//! Enrollment cards and the "latest card" resolution used by single-year views.

use serde::{Deserialize, Serialize};

use crate::domain::types::{CardId, LevelId, OfferId};

/// One academic year's registration, as returned by `infos/bac/{uuid}/dias`.
///
/// Read-only projection of backend state. Ids are assigned monotonically by
/// the backend, so a higher `id` means a more recent enrollment.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EnrollmentCard {
    pub id: CardId,
    /// Free-text year label, e.g. `"2022/2023"`. May be absent or unparseable.
    #[serde(rename = "anneeAcademiqueCode")]
    pub academic_year_label: Option<String>,
    #[serde(rename = "niveauId")]
    pub level_id: Option<LevelId>,
    #[serde(rename = "niveauLibelleLongLt")]
    pub level_label: Option<String>,
    #[serde(rename = "ouvertureOffreFormationId")]
    pub training_offer_id: Option<OfferId>,
    #[serde(rename = "numeroInscription")]
    pub registration_number: Option<String>,
    #[serde(rename = "individuNomLatin")]
    pub last_name: Option<String>,
    #[serde(rename = "individuPrenomLatin")]
    pub first_name: Option<String>,
    #[serde(rename = "ofLlFiliere")]
    pub field_of_study: Option<String>,
    #[serde(rename = "ofLlSpecialite")]
    pub speciality: Option<String>,
    #[serde(rename = "llEtablissementLatin")]
    pub establishment: Option<String>,
}

impl EnrollmentCard {
    /// Latin full name of the card holder, empty when neither part is present.
    pub fn holder_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.to_string(),
            (None, Some(last)) => last.to_string(),
            (None, None) => String::new(),
        }
    }
}

/// Returns the card with the maximum `id`, the canonical "current" enrollment.
///
/// Stable under reordering of the input: the result depends only on ids.
pub fn latest(cards: &[EnrollmentCard]) -> Option<&EnrollmentCard> {
    cards.iter().max_by_key(|card| card.id)
}

/// Cards sorted most-recent-first, the order used by listing views.
pub fn sorted_most_recent_first(mut cards: Vec<EnrollmentCard>) -> Vec<EnrollmentCard> {
    cards.sort_by(|a, b| b.id.cmp(&a.id));
    cards
}

#[cfg(test)]
pub(crate) fn card(id: i64, year_label: Option<&str>) -> EnrollmentCard {
    EnrollmentCard {
        id: CardId::new(id),
        academic_year_label: year_label.map(str::to_string),
        level_id: None,
        level_label: None,
        training_offer_id: None,
        registration_number: None,
        last_name: None,
        first_name: None,
        field_of_study: None,
        speciality: None,
        establishment: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_returns_max_id_regardless_of_order() {
        let a = vec![card(5, None), card(9, None), card(7, None)];
        let b = vec![card(9, None), card(5, None), card(7, None)];
        assert_eq!(latest(&a).unwrap().id, CardId::new(9));
        assert_eq!(latest(&b).unwrap().id, CardId::new(9));
    }

    #[test]
    fn latest_of_empty_is_none() {
        assert!(latest(&[]).is_none());
    }

    #[test]
    fn listing_order_is_most_recent_first() {
        let cards = sorted_most_recent_first(vec![card(5, None), card(9, None), card(7, None)]);
        let ids: Vec<i64> = cards.iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, vec![9, 7, 5]);
    }

    #[test]
    fn card_deserializes_backend_field_names() {
        let card: EnrollmentCard = serde_json::from_value(serde_json::json!({
            "id": 9,
            "anneeAcademiqueCode": "2022/2023",
            "niveauId": 3,
            "numeroInscription": "UN39-2022-123",
            "individuNomLatin": "Student",
            "individuPrenomLatin": "Amine"
        }))
        .unwrap();
        assert_eq!(card.id, CardId::new(9));
        assert_eq!(card.academic_year_label.as_deref(), Some("2022/2023"));
        assert_eq!(card.holder_name(), "Amine Student");
        assert!(card.training_offer_id.is_none());
    }
}
