//! DTOs for the profile and baccalaureate pages.

use serde::Serialize;

use crate::domain::records::{BacGrade, BacInfo, StudentInfo};

#[derive(Debug, Serialize)]
pub struct ProfilePageData {
    pub info: StudentInfo,
    /// Registration number of the most recent enrollment, when available.
    pub registration_number: Option<String>,
    pub academic_year_label: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BacPageData {
    pub info: BacInfo,
    /// Display label of the series (falls back to the raw code).
    pub series: Option<String>,
    pub grades: Vec<BacGrade>,
}
