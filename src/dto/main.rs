//! Data required to render the dashboard home page.

use serde::Serialize;

use crate::domain::enrollment::EnrollmentCard;

#[derive(Debug, Serialize)]
pub struct HomePageData {
    /// Most recent enrollment, highlighted at the top of the page.
    pub latest: Option<EnrollmentCard>,
    /// Latin full name from the latest card, used for the greeting.
    pub holder_name: Option<String>,
    /// Total number of cards on file, shown next to the cards shortcut.
    pub total_cards: usize,
}
