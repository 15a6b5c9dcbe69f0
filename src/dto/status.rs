//! DTOs for the transport, accommodation, discharge and debts pages.

use serde::Serialize;

use crate::domain::records::{AccommodationRequest, DebtEntry, TransportState};

#[derive(Debug, Default, Serialize)]
pub struct TransportPageData {
    /// `None` when the student never filed a transport request.
    pub state: Option<TransportState>,
}

#[derive(Debug, Serialize)]
pub struct AccommodationPageData {
    pub requests: Vec<AccommodationRequest>,
}

/// One administrative desk of the discharge form.
#[derive(Debug, Serialize, PartialEq)]
pub struct DischargeRow {
    pub label: &'static str,
    pub cleared: bool,
}

#[derive(Debug, Default, Serialize)]
pub struct DischargePageData {
    /// Empty when the backend has no discharge record for the student.
    pub rows: Vec<DischargeRow>,
}

#[derive(Debug, Serialize)]
pub struct DebtsPageData {
    pub entries: Vec<DebtEntry>,
}
