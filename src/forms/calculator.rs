//! Grade average calculator form.
//!
//! The form posts repeated `name`/`tp`/`td`/`exam` fields, one set per subject
//! row; `serde_html_form` collects the repeats into vectors.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CalculatorForm {
    #[serde(default)]
    pub name: Vec<String>,
    #[serde(default)]
    pub tp: Vec<String>,
    #[serde(default)]
    pub td: Vec<String>,
    #[serde(default)]
    pub exam: Vec<String>,
}

/// Lenient score parsing: anything that is not a finite number counts as 0.
pub fn parse_score(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

impl CalculatorForm {
    /// One `(name, tp, td, exam)` entry per subject row. Row count follows the
    /// `name` fields; a missing or unparseable score counts as 0.
    pub fn subjects(&self) -> Vec<(String, f64, f64, f64)> {
        self.name
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let score =
                    |fields: &[String]| fields.get(i).map(|raw| parse_score(raw)).unwrap_or(0.0);
                (
                    name.clone(),
                    score(&self.tp),
                    score(&self.td),
                    score(&self.exam),
                )
            })
            .collect()
    }
}
