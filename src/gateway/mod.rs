//! Single point of outbound communication with the Progres backend.
//!
//! The [`ProgresApi`] trait is the seam the services are generic over; the
//! production implementation is [`client::ProgresClient`], tests substitute
//! the `mockall` mock from [`mock`].

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::enrollment::EnrollmentCard;
use crate::domain::records::{
    AcademicDecision, AcademicPeriod, AcademicYear, AccommodationRequest, BacGrade, BacInfo,
    CcGrade, DebtEntry, DischargeState, ExamGrade, ExamSession, GroupAssignment, ScheduleEntry,
    StudentInfo, Subject, Transcript, TransportState,
};
use crate::domain::session::LoginPayload;
use crate::domain::types::{CardId, EstablishmentId, LevelId, OfferId, PeriodId, YearId};

pub mod client;
pub mod errors;
#[cfg(test)]
pub mod mock;

pub use client::ProgresClient;
pub use errors::{ApiError, ApiResult};

/// The read surface of the Progres backend, one method per endpoint.
///
/// Every authenticated call attaches the token verbatim as the value of the
/// `Authorization` header — the backend expects no scheme prefix. All methods
/// are reads; `authenticate` is the only write this client ever performs.
#[async_trait]
pub trait ProgresApi: Send + Sync {
    /// `POST authentication/v1/` with the raw credentials.
    async fn authenticate(&self, username: &str, password: &str) -> ApiResult<LoginPayload>;

    /// `GET infos/bac/{uuid}/dias` — one enrollment card per academic year.
    async fn student_cards(&self, student_id: Uuid, token: &str) -> ApiResult<Vec<EnrollmentCard>>;

    /// `GET infos/bac/{uuid}/individu`.
    async fn individual_info(&self, student_id: Uuid, token: &str) -> ApiResult<StudentInfo>;

    /// `GET infos/bac/{uuid}` — the baccalaureate record itself.
    async fn bac_info(&self, student_id: Uuid, token: &str) -> ApiResult<BacInfo>;

    /// `GET infos/bac/{uuid}/notes` — per-subject baccalaureate grades.
    async fn bac_grades(&self, student_id: Uuid, token: &str) -> ApiResult<Vec<BacGrade>>;

    /// `GET infos/planningSession/dia/{card}/noteExamens`.
    async fn exam_grades(&self, card_id: CardId, token: &str) -> ApiResult<Vec<ExamGrade>>;

    /// `GET infos/controleContinue/dia/{card}/notesCC`.
    async fn cc_grades(&self, card_id: CardId, token: &str) -> ApiResult<Vec<CcGrade>>;

    /// `GET infos/bac/{uuid}/dias/{card}/periode/bilans`.
    async fn transcripts(
        &self,
        student_id: Uuid,
        card_id: CardId,
        token: &str,
    ) -> ApiResult<Vec<Transcript>>;

    /// `GET infos/bac/{uuid}/dia/{card}/annuel/bilan`.
    async fn annual_decision(
        &self,
        student_id: Uuid,
        card_id: CardId,
        token: &str,
    ) -> ApiResult<Option<AcademicDecision>>;

    /// `GET infos/dia/{card}/groups`.
    async fn groups(&self, card_id: CardId, token: &str) -> ApiResult<Vec<GroupAssignment>>;

    /// `GET infos/offreFormation/{offer}/niveau/{level}/Coefficients`.
    async fn subjects(
        &self,
        offer_id: OfferId,
        level_id: LevelId,
        token: &str,
    ) -> ApiResult<Vec<Subject>>;

    /// `GET infos/seanceEmploi/inscription/{card}` — weekly timetable.
    async fn week_schedule(&self, card_id: CardId, token: &str) -> ApiResult<Vec<ScheduleEntry>>;

    /// `GET infos/Examens/{period}/niveau/{level}/examens`.
    async fn exam_sessions(
        &self,
        period_id: PeriodId,
        level_id: LevelId,
        token: &str,
    ) -> ApiResult<Vec<ExamSession>>;

    /// `GET infos/AnneeAcademicqueEncours` (sic — backend spelling).
    async fn current_academic_year(&self, token: &str) -> ApiResult<AcademicYear>;

    /// `GET infos/niveau/{year}/periodes`.
    async fn academic_periods(&self, year_id: YearId, token: &str)
    -> ApiResult<Vec<AcademicPeriod>>;

    /// `GET infos/demandeTransport/{uuid}/{card}`; `null` when no request exists.
    async fn transport_state(
        &self,
        student_id: Uuid,
        card_id: CardId,
        token: &str,
    ) -> ApiResult<Option<TransportState>>;

    /// `GET infos/bac/{uuid}/demandesHebregement` (sic).
    async fn accommodation_requests(
        &self,
        student_id: Uuid,
        token: &str,
    ) -> ApiResult<Vec<AccommodationRequest>>;

    /// `GET {uuid}/qitus` on the discharge host; unauthenticated.
    async fn discharge_state(&self, student_id: Uuid) -> ApiResult<Option<DischargeState>>;

    /// `GET infos/dettes/{uuid}`.
    async fn debts(&self, student_id: Uuid, token: &str) -> ApiResult<Vec<DebtEntry>>;

    /// `GET infos/image/{uuid}` — JPEG bytes.
    async fn student_photo(&self, student_id: Uuid, token: &str) -> ApiResult<Vec<u8>>;

    /// `GET infos/logoEtablissement/{id}` — JPEG bytes.
    async fn establishment_logo(
        &self,
        establishment_id: EstablishmentId,
        token: &str,
    ) -> ApiResult<Vec<u8>>;
}
