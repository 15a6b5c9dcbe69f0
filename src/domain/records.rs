//! Typed projections of the loosely-shaped Progres record payloads.
//!
//! Every struct is a tolerant boundary type: fields the backend sometimes
//! omits are `Option`, and the French camelCase wire names are mapped once
//! here so the rest of the code never re-checks field presence.

use serde::{Deserialize, Serialize};

use crate::domain::history::PeriodLabeled;
use crate::domain::types::{PeriodId, YearId};

/// One exam grade row from `infos/planningSession/dia/{card}/noteExamens`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExamGrade {
    #[serde(rename = "mcLibelleFr")]
    pub subject: Option<String>,
    #[serde(rename = "noteExamen")]
    pub note: Option<f64>,
    #[serde(rename = "rattachementMcCoefficient")]
    pub coefficient: Option<f64>,
    /// Session title, e.g. `"session 1"` or `"Rattrapage"`.
    #[serde(rename = "planningSessionIntitule")]
    pub session_title: Option<String>,
    #[serde(rename = "llPeriode")]
    pub period_label: Option<String>,
}

impl PeriodLabeled for ExamGrade {
    fn period_label(&self) -> Option<&str> {
        self.period_label.as_deref()
    }
}

/// One continuous-assessment grade from `infos/controleContinue/dia/{card}/notesCC`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CcGrade {
    #[serde(rename = "rattachementMcMcLibelleFr")]
    pub subject: Option<String>,
    #[serde(rename = "llPeriode")]
    pub period_label: Option<String>,
    pub note: Option<f64>,
    pub absent: Option<bool>,
    pub observation: Option<String>,
}

impl CcGrade {
    pub fn is_absent(&self) -> bool {
        self.absent.unwrap_or(false)
    }
}

impl PeriodLabeled for CcGrade {
    fn period_label(&self) -> Option<&str> {
        self.period_label.as_deref()
    }
}

/// A per-period transcript ("bilan") with its teaching units.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Transcript {
    #[serde(rename = "periodeLibelleFr")]
    pub period_label: Option<String>,
    #[serde(rename = "niveauLibelleLongLt")]
    pub level_label: Option<String>,
    #[serde(rename = "moyenne")]
    pub average: Option<f64>,
    #[serde(rename = "creditAcquis")]
    pub credits_acquired: Option<f64>,
    #[serde(rename = "bilanUes", default)]
    pub units: Vec<TranscriptUnit>,
}

impl PeriodLabeled for Transcript {
    fn period_label(&self) -> Option<&str> {
        self.period_label.as_deref()
    }
}

/// A teaching unit ("UE") inside a transcript.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TranscriptUnit {
    #[serde(rename = "ueLibelleFr")]
    pub label: Option<String>,
    #[serde(rename = "moyenne")]
    pub average: Option<f64>,
    #[serde(rename = "credit")]
    pub credit: Option<f64>,
    #[serde(rename = "creditAcquis")]
    pub credit_acquired: Option<f64>,
    #[serde(rename = "bilanMcs", default)]
    pub subjects: Vec<TranscriptSubject>,
}

/// A subject-level grade entry inside a teaching unit.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TranscriptSubject {
    #[serde(rename = "mcLibelleFr")]
    pub label: Option<String>,
    pub coefficient: Option<f64>,
    #[serde(rename = "creditObtenu")]
    pub credit_obtained: Option<f64>,
    #[serde(rename = "moyenneGenerale")]
    pub average: Option<f64>,
}

/// End-of-year decision from `infos/bac/{uuid}/dia/{card}/annuel/bilan`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AcademicDecision {
    #[serde(rename = "typeDecisionLibelleFr")]
    pub decision: Option<String>,
    #[serde(rename = "moyenne")]
    pub average: Option<f64>,
    #[serde(rename = "creditAcquis")]
    pub credits_acquired: Option<f64>,
}

/// One weekly timetable slot from `infos/seanceEmploi/inscription/{card}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScheduleEntry {
    #[serde(rename = "jourId")]
    pub day_id: Option<i32>,
    #[serde(rename = "jourLibelleFr")]
    pub day_label: Option<String>,
    #[serde(rename = "plageHoraireHeureDebut")]
    pub starts_at: Option<String>,
    #[serde(rename = "plageHoraireHeureFin")]
    pub ends_at: Option<String>,
    #[serde(rename = "plageHoraireLibelleFr")]
    pub slot_label: Option<String>,
    #[serde(rename = "matiere")]
    pub subject: Option<String>,
    #[serde(rename = "groupe")]
    pub group: Option<String>,
    #[serde(rename = "prenomEnseignantLatin")]
    pub teacher_first_name: Option<String>,
    #[serde(rename = "nomEnseignantLatin")]
    pub teacher_last_name: Option<String>,
    #[serde(rename = "refLieuDesignation")]
    pub location: Option<String>,
    #[serde(rename = "periodeLibelleLongLt")]
    pub period_label: Option<String>,
}

impl PeriodLabeled for ScheduleEntry {
    fn period_label(&self) -> Option<&str> {
        self.period_label.as_deref()
    }
}

/// Pedagogic group/section assignment from `infos/dia/{card}/groups`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GroupAssignment {
    pub id: Option<i64>,
    #[serde(rename = "nomGroupePedagogique")]
    pub group_name: Option<String>,
    #[serde(rename = "nomSection")]
    pub section_name: Option<String>,
    #[serde(rename = "periodeLibelleLongLt")]
    pub period_label: Option<String>,
}

/// Subject with its assessment coefficients from the training-offer catalog.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Subject {
    #[serde(rename = "rattachementMcMcLibelleFr")]
    pub label: Option<String>,
    #[serde(rename = "coefficientControleContinu")]
    pub cc_coefficient: Option<f64>,
    #[serde(rename = "coefficientControleIntermediaire")]
    pub intermediate_coefficient: Option<f64>,
    #[serde(rename = "coefficientExamen")]
    pub exam_coefficient: Option<f64>,
}

/// The academic year currently open on the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AcademicYear {
    pub id: YearId,
    pub code: Option<String>,
}

/// A teaching period of an academic year.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AcademicPeriod {
    pub id: PeriodId,
    #[serde(rename = "libelleLongLt")]
    pub label: Option<String>,
}

/// One planned exam sitting from `infos/Examens/{period}/niveau/{level}/examens`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExamSession {
    #[serde(rename = "dateExamen")]
    pub date: Option<String>,
    #[serde(rename = "heureDebut")]
    pub starts_at: Option<String>,
    #[serde(rename = "heureFin")]
    pub ends_at: Option<String>,
    #[serde(rename = "mcLibelleFr")]
    pub subject: Option<String>,
    #[serde(rename = "libellePeriode")]
    pub period_label: Option<String>,
    #[serde(rename = "typeSession")]
    pub session_type: Option<String>,
}

/// Baccalaureate record from `infos/bac/{uuid}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BacInfo {
    #[serde(rename = "prenomFr")]
    pub first_name: Option<String>,
    #[serde(rename = "nomFr")]
    pub last_name: Option<String>,
    #[serde(rename = "matricule")]
    pub registration: Option<String>,
    #[serde(rename = "anneeBac")]
    pub bac_year: Option<String>,
    #[serde(rename = "libelleSerieBac")]
    pub series: Option<String>,
    #[serde(rename = "refCodeSerieBac")]
    pub series_code: Option<String>,
    #[serde(rename = "moyenneBac")]
    pub average: Option<f64>,
}

impl BacInfo {
    /// Series display label, falling back to the raw series code.
    pub fn series_label(&self) -> Option<&str> {
        self.series.as_deref().or(self.series_code.as_deref())
    }
}

/// One baccalaureate subject grade from `infos/bac/{uuid}/notes`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BacGrade {
    #[serde(rename = "refCodeMatiereLibelleFr")]
    pub subject: Option<String>,
    pub note: Option<f64>,
}

/// Personal details from `infos/bac/{uuid}/individu`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StudentInfo {
    #[serde(rename = "prenomLatin")]
    pub first_name: Option<String>,
    #[serde(rename = "nomLatin")]
    pub last_name: Option<String>,
    #[serde(rename = "dateNaissance")]
    pub birth_date: Option<String>,
    #[serde(rename = "lieuNaissance")]
    pub birth_place: Option<String>,
}

/// Transport payment status for one card.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TransportState {
    #[serde(rename = "transportPaye")]
    pub paid: Option<bool>,
    #[serde(rename = "anneeAcademiqueCode")]
    pub academic_year: Option<String>,
}

/// One accommodation request from `infos/bac/{uuid}/demandesHebregement`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AccommodationRequest {
    #[serde(rename = "llDouLatin")]
    pub dormitory: Option<String>,
    #[serde(rename = "llAffectation")]
    pub assignment: Option<String>,
}

/// Administrative discharge levels from the quitus endpoint.
///
/// The backend is inconsistent about the value type per desk (booleans,
/// strings, numbers have all been observed), so each level is kept as raw
/// JSON and interpreted through [`DischargeState::is_cleared`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DischargeState {
    #[serde(rename = "centralLibraryLevel")]
    pub central_library: Option<serde_json::Value>,
    #[serde(rename = "facultyLevel")]
    pub faculty: Option<serde_json::Value>,
    #[serde(rename = "scholarshipServiceLevel")]
    pub scholarship_service: Option<serde_json::Value>,
    #[serde(rename = "departmentLevel")]
    pub department: Option<serde_json::Value>,
    #[serde(rename = "residenceLevel")]
    pub residence: Option<serde_json::Value>,
}

impl DischargeState {
    /// Truthiness rule of the original client: null, `false`, `0` and the
    /// empty string mean "not cleared"; anything else means cleared.
    pub fn is_cleared(level: &Option<serde_json::Value>) -> bool {
        match level {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::Bool(b)) => *b,
            Some(serde_json::Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(serde_json::Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }
}

/// One outstanding debt entry from `infos/dettes/{uuid}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DebtEntry {
    #[serde(rename = "anneeAcademiqueCode")]
    pub academic_year: Option<String>,
    #[serde(rename = "libelle")]
    pub label: Option<String>,
    #[serde(rename = "montant")]
    pub amount: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cc_grade_deserializes_backend_names() {
        let grade: CcGrade = serde_json::from_value(serde_json::json!({
            "rattachementMcMcLibelleFr": "Analyse 3",
            "llPeriode": "Semestre 1",
            "note": 12.5,
            "absent": false
        }))
        .unwrap();
        assert_eq!(grade.subject.as_deref(), Some("Analyse 3"));
        assert_eq!(grade.period_label(), Some("Semestre 1"));
        assert!(!grade.is_absent());
        assert!(grade.observation.is_none());
    }

    #[test]
    fn transcript_units_default_to_empty() {
        let transcript: Transcript = serde_json::from_value(serde_json::json!({
            "periodeLibelleFr": "Semestre 2",
            "moyenne": 11.2
        }))
        .unwrap();
        assert!(transcript.units.is_empty());
        assert_eq!(transcript.period_label(), Some("Semestre 2"));
    }

    #[test]
    fn bac_series_label_falls_back_to_the_code() {
        let info: BacInfo = serde_json::from_value(serde_json::json!({
            "anneeBac": "2021",
            "refCodeSerieBac": "SE",
            "moyenneBac": 13.4
        }))
        .unwrap();
        assert_eq!(info.series_label(), Some("SE"));

        let info: BacInfo = serde_json::from_value(serde_json::json!({
            "libelleSerieBac": "Sciences expérimentales",
            "refCodeSerieBac": "SE"
        }))
        .unwrap();
        assert_eq!(info.series_label(), Some("Sciences expérimentales"));
    }

    #[test]
    fn discharge_levels_follow_truthiness() {
        assert!(!DischargeState::is_cleared(&None));
        assert!(!DischargeState::is_cleared(&Some(serde_json::Value::Null)));
        assert!(!DischargeState::is_cleared(&Some(serde_json::json!(false))));
        assert!(!DischargeState::is_cleared(&Some(serde_json::json!(0))));
        assert!(!DischargeState::is_cleared(&Some(serde_json::json!(""))));
        assert!(DischargeState::is_cleared(&Some(serde_json::json!(true))));
        assert!(DischargeState::is_cleared(&Some(serde_json::json!("OK"))));
        assert!(DischargeState::is_cleared(&Some(serde_json::json!(1))));
    }
}
