//! DTO for the grade average calculator page.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CalculatorRow {
    pub name: String,
    pub tp: f64,
    pub td: f64,
    pub exam: f64,
    pub average: f64,
}

#[derive(Debug, Serialize)]
pub struct CalculatorPageData {
    pub rows: Vec<CalculatorRow>,
    pub overall: f64,
}
