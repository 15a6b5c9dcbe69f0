//! DTOs for the cards, subjects and groups pages.

use serde::Serialize;

use crate::domain::enrollment::EnrollmentCard;
use crate::domain::records::{GroupAssignment, Subject};

#[derive(Debug, Serialize)]
pub struct CardsPageData {
    /// All enrollment cards, most recent first.
    pub cards: Vec<EnrollmentCard>,
}

#[derive(Debug, Default, Serialize)]
pub struct SubjectsPageData {
    /// The latest card the subject catalog was resolved from, if any.
    pub card: Option<EnrollmentCard>,
    pub subjects: Vec<Subject>,
}

#[derive(Debug, Default, Serialize)]
pub struct GroupsPageData {
    pub card: Option<EnrollmentCard>,
    pub groups: Vec<GroupAssignment>,
}
