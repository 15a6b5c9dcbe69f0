//! Mock gateway implementation for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::domain::enrollment::EnrollmentCard;
use crate::domain::records::{
    AcademicDecision, AcademicPeriod, AcademicYear, AccommodationRequest, BacGrade, BacInfo,
    CcGrade, DebtEntry, DischargeState, ExamGrade, ExamSession, GroupAssignment, ScheduleEntry,
    StudentInfo, Subject, Transcript, TransportState,
};
use crate::domain::session::LoginPayload;
use crate::domain::types::{CardId, EstablishmentId, LevelId, OfferId, PeriodId, YearId};
use crate::gateway::ProgresApi;
use crate::gateway::errors::ApiResult;

mock! {
    pub Gateway {}

    #[async_trait]
    impl ProgresApi for Gateway {
        async fn authenticate(&self, username: &str, password: &str) -> ApiResult<LoginPayload>;
        async fn student_cards(&self, student_id: Uuid, token: &str) -> ApiResult<Vec<EnrollmentCard>>;
        async fn individual_info(&self, student_id: Uuid, token: &str) -> ApiResult<StudentInfo>;
        async fn bac_info(&self, student_id: Uuid, token: &str) -> ApiResult<BacInfo>;
        async fn bac_grades(&self, student_id: Uuid, token: &str) -> ApiResult<Vec<BacGrade>>;
        async fn exam_grades(&self, card_id: CardId, token: &str) -> ApiResult<Vec<ExamGrade>>;
        async fn cc_grades(&self, card_id: CardId, token: &str) -> ApiResult<Vec<CcGrade>>;
        async fn transcripts(
            &self,
            student_id: Uuid,
            card_id: CardId,
            token: &str,
        ) -> ApiResult<Vec<Transcript>>;
        async fn annual_decision(
            &self,
            student_id: Uuid,
            card_id: CardId,
            token: &str,
        ) -> ApiResult<Option<AcademicDecision>>;
        async fn groups(&self, card_id: CardId, token: &str) -> ApiResult<Vec<GroupAssignment>>;
        async fn subjects(
            &self,
            offer_id: OfferId,
            level_id: LevelId,
            token: &str,
        ) -> ApiResult<Vec<Subject>>;
        async fn week_schedule(&self, card_id: CardId, token: &str) -> ApiResult<Vec<ScheduleEntry>>;
        async fn exam_sessions(
            &self,
            period_id: PeriodId,
            level_id: LevelId,
            token: &str,
        ) -> ApiResult<Vec<ExamSession>>;
        async fn current_academic_year(&self, token: &str) -> ApiResult<AcademicYear>;
        async fn academic_periods(&self, year_id: YearId, token: &str) -> ApiResult<Vec<AcademicPeriod>>;
        async fn transport_state(
            &self,
            student_id: Uuid,
            card_id: CardId,
            token: &str,
        ) -> ApiResult<Option<TransportState>>;
        async fn accommodation_requests(
            &self,
            student_id: Uuid,
            token: &str,
        ) -> ApiResult<Vec<AccommodationRequest>>;
        async fn discharge_state(&self, student_id: Uuid) -> ApiResult<Option<DischargeState>>;
        async fn debts(&self, student_id: Uuid, token: &str) -> ApiResult<Vec<DebtEntry>>;
        async fn student_photo(&self, student_id: Uuid, token: &str) -> ApiResult<Vec<u8>>;
        async fn establishment_logo(
            &self,
            establishment_id: EstablishmentId,
            token: &str,
        ) -> ApiResult<Vec<u8>>;
    }
}
