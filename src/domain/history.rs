//! Year/semester aggregation over per-card record sets.
//!
//! Every multi-year view follows the same shape: fetch all enrollment cards,
//! fetch one record list per card, then group the flattened records behind a
//! two-level year → semester selector. The fetching lives in the services;
//! this module is the pure part — deriving ordering keys from free-text
//! labels, tagging records with their owning card and grouping them so the
//! output is independent of network completion order.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::domain::enrollment::EnrollmentCard;
use crate::domain::types::CardId;

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").unwrap());
static INDEX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// A record type that may carry a free-text period/semester label.
pub trait PeriodLabeled {
    fn period_label(&self) -> Option<&str>;
}

/// First 4-digit group of an academic-year label, e.g. `2022` for
/// `"2022/2023"`. `None` when the label contains no 4-digit run.
pub fn parse_year_start(label: &str) -> Option<i32> {
    YEAR_RE.find(label).and_then(|m| m.as_str().parse().ok())
}

/// First integer embedded in a period label, e.g. `2` for `"Semestre 2"`.
/// Defaults to `1` when the label is absent or contains no integer.
pub fn semester_index(label: Option<&str>) -> i32 {
    label
        .and_then(|l| INDEX_RE.find(l))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(1)
}

/// A backend record tagged with its owning card and derived ordering keys.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TaggedRecord<T> {
    pub card_id: CardId,
    /// Parsed from the card's year label, or a synthetic 1-based position when
    /// the label yields nothing. An ordering key, not a display-safe year:
    /// synthetic values can collide with genuinely parsed years of sibling
    /// cards (known inconsistency, deliberately not deduplicated).
    pub academic_year_start: i32,
    pub semester_index: i32,
    /// Verbatim period label; empty when the record has none, so unlabeled
    /// records group together instead of being dropped.
    pub semester_label: String,
    pub record: T,
}

/// One entry of the year selector.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct YearEntry {
    pub card_id: CardId,
    pub year_start: i32,
    pub label: String,
}

/// One entry of the semester selector for a given year.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SemesterEntry {
    pub label: String,
    pub index: i32,
}

/// The grouped output of one aggregation run.
#[derive(Clone, Debug, Serialize)]
pub struct AcademicHistory<T> {
    /// Year selector, ascending by `year_start` (ties keep ascending card order).
    pub years: Vec<YearEntry>,
    records: Vec<TaggedRecord<T>>,
}

impl<T: PeriodLabeled> AcademicHistory<T> {
    /// Tags and groups per-card record lists.
    ///
    /// `per_card` associates results to cards by id, so the grouping is
    /// identical whatever order the parallel fetches completed in. Cards are
    /// iterated ascending by id; that fixes the positional fallback sequence
    /// 1, 2, 3, … for cards without a parseable year label.
    pub fn build(mut cards: Vec<EnrollmentCard>, per_card: Vec<(CardId, Vec<T>)>) -> Self {
        cards.sort_by_key(|card| card.id);
        let mut by_card: HashMap<CardId, Vec<T>> = per_card.into_iter().collect();

        let mut years = Vec::with_capacity(cards.len());
        let mut records = Vec::new();
        for (position, card) in cards.iter().enumerate() {
            let year_start = card
                .academic_year_label
                .as_deref()
                .and_then(parse_year_start)
                .unwrap_or(position as i32 + 1);
            let label = card
                .academic_year_label
                .clone()
                .unwrap_or_else(|| year_start.to_string());
            years.push(YearEntry {
                card_id: card.id,
                year_start,
                label,
            });

            for record in by_card.remove(&card.id).unwrap_or_default() {
                records.push(TaggedRecord {
                    card_id: card.id,
                    academic_year_start: year_start,
                    semester_index: semester_index(record.period_label()),
                    semester_label: record.period_label().unwrap_or("").to_string(),
                    record,
                });
            }
        }
        years.sort_by_key(|year| year.year_start);

        Self { years, records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_year(&self, card_id: CardId) -> bool {
        self.years.iter().any(|year| year.card_id == card_id)
    }

    /// Default year: greatest `year_start`, i.e. the last entry of the
    /// ascending selector.
    pub fn default_year(&self) -> Option<CardId> {
        self.years.last().map(|year| year.card_id)
    }

    /// Distinct semester labels under a year, ascending by parsed index.
    pub fn semesters(&self, card_id: CardId) -> Vec<SemesterEntry> {
        let mut entries: Vec<SemesterEntry> = Vec::new();
        for record in self.records.iter().filter(|r| r.card_id == card_id) {
            if !entries.iter().any(|e| e.label == record.semester_label) {
                entries.push(SemesterEntry {
                    label: record.semester_label.clone(),
                    index: record.semester_index,
                });
            }
        }
        entries.sort_by_key(|entry| entry.index);
        entries
    }

    pub fn contains_semester(&self, card_id: CardId, label: &str) -> bool {
        self.records
            .iter()
            .any(|r| r.card_id == card_id && r.semester_label == label)
    }

    /// Default semester of a year: greatest parsed index.
    pub fn default_semester(&self, card_id: CardId) -> Option<String> {
        self.semesters(card_id).pop().map(|entry| entry.label)
    }

    /// Records visible under the active year and semester selection.
    pub fn visible(&self, card_id: CardId, semester_label: &str) -> Vec<&TaggedRecord<T>> {
        self.records
            .iter()
            .filter(|r| r.card_id == card_id && r.semester_label == semester_label)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enrollment::card;

    #[derive(Clone, Debug, PartialEq, Serialize)]
    struct Row {
        period: Option<String>,
        value: u32,
    }

    impl PeriodLabeled for Row {
        fn period_label(&self) -> Option<&str> {
            self.period.as_deref()
        }
    }

    fn row(period: Option<&str>, value: u32) -> Row {
        Row {
            period: period.map(str::to_string),
            value,
        }
    }

    #[test]
    fn year_start_takes_first_four_digit_group() {
        assert_eq!(parse_year_start("2022/2023"), Some(2022));
        assert_eq!(parse_year_start("Année 2019-2020"), Some(2019));
        assert_eq!(parse_year_start("L2"), None);
        assert_eq!(parse_year_start(""), None);
    }

    #[test]
    fn semester_index_takes_first_integer_or_defaults() {
        assert_eq!(semester_index(Some("Semestre 2")), 2);
        assert_eq!(semester_index(Some("S1")), 1);
        assert_eq!(semester_index(Some("10e période")), 10);
        assert_eq!(semester_index(Some("période")), 1);
        assert_eq!(semester_index(None), 1);
    }

    #[test]
    fn unlabeled_cards_get_positional_year_starts() {
        let cards = vec![card(7, None), card(5, None), card(9, None)];
        let history = AcademicHistory::<Row>::build(cards, vec![]);
        let starts: Vec<i32> = history.years.iter().map(|y| y.year_start).collect();
        // Ascending card ids 5, 7, 9 receive positions 1, 2, 3.
        assert_eq!(starts, vec![1, 2, 3]);
        let ids: Vec<i64> = history.years.iter().map(|y| y.card_id.get()).collect();
        assert_eq!(ids, vec![5, 7, 9]);
    }

    #[test]
    fn grouping_is_independent_of_arrival_order() {
        let cards = vec![
            card(5, Some("2021/2022")),
            card(7, Some("2022/2023")),
            card(9, Some("2023/2024")),
        ];
        let first_arrival = vec![
            (CardId::new(9), vec![row(Some("Semestre 1"), 91)]),
            (CardId::new(5), vec![row(Some("Semestre 1"), 51)]),
            (CardId::new(7), vec![row(Some("Semestre 2"), 72)]),
        ];
        let second_arrival = vec![
            (CardId::new(7), vec![row(Some("Semestre 2"), 72)]),
            (CardId::new(5), vec![row(Some("Semestre 1"), 51)]),
            (CardId::new(9), vec![row(Some("Semestre 1"), 91)]),
        ];

        let a = AcademicHistory::build(cards.clone(), first_arrival);
        let b = AcademicHistory::build(cards, second_arrival);

        assert_eq!(a.years, b.years);
        assert_eq!(
            a.visible(CardId::new(7), "Semestre 2"),
            b.visible(CardId::new(7), "Semestre 2")
        );
        assert_eq!(a.default_year(), b.default_year());
    }

    #[test]
    fn default_selection_is_most_recent_year_and_semester() {
        let cards = vec![
            card(5, Some("2021/2022")),
            card(7, Some("2022/2023")),
            card(9, Some("2023/2024")),
        ];
        let per_card = vec![
            (CardId::new(5), vec![row(Some("Semestre 1"), 51)]),
            (CardId::new(7), vec![row(Some("Semestre 1"), 71)]),
            (
                CardId::new(9),
                vec![row(Some("Semestre 1"), 91), row(Some("Semestre 2"), 92)],
            ),
        ];
        let history = AcademicHistory::build(cards, per_card);

        assert_eq!(history.default_year(), Some(CardId::new(9)));
        assert_eq!(
            history.default_semester(CardId::new(9)).as_deref(),
            Some("Semestre 2")
        );
        let visible = history.visible(CardId::new(9), "Semestre 2");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].record.value, 92);
        assert_eq!(visible[0].academic_year_start, 2023);
    }

    #[test]
    fn unlabeled_records_group_under_empty_semester() {
        let cards = vec![card(5, Some("2021/2022"))];
        let per_card = vec![(
            CardId::new(5),
            vec![row(None, 1), row(Some("Semestre 2"), 2), row(None, 3)],
        )];
        let history = AcademicHistory::build(cards, per_card);

        let semesters = history.semesters(CardId::new(5));
        assert_eq!(semesters.len(), 2);
        // Unlabeled records parse to index 1 and sort before "Semestre 2".
        assert_eq!(semesters[0], SemesterEntry { label: String::new(), index: 1 });
        let unlabeled = history.visible(CardId::new(5), "");
        assert_eq!(unlabeled.len(), 2);
    }

    #[test]
    fn records_for_unknown_cards_are_ignored() {
        let cards = vec![card(5, Some("2021/2022"))];
        let per_card = vec![
            (CardId::new(5), vec![row(Some("Semestre 1"), 1)]),
            (CardId::new(99), vec![row(Some("Semestre 1"), 2)]),
        ];
        let history = AcademicHistory::build(cards, per_card);
        assert_eq!(history.visible(CardId::new(5), "Semestre 1").len(), 1);
        assert!(!history.contains_year(CardId::new(99)));
    }
}
