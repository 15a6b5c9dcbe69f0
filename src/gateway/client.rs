//! `reqwest`-backed implementation of [`ProgresApi`].

use async_trait::async_trait;
use reqwest::header;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::domain::enrollment::EnrollmentCard;
use crate::domain::records::{
    AcademicDecision, AcademicPeriod, AcademicYear, AccommodationRequest, BacGrade, BacInfo,
    CcGrade, DebtEntry, DischargeState, ExamGrade, ExamSession, GroupAssignment, ScheduleEntry,
    StudentInfo, Subject, Transcript, TransportState,
};
use crate::domain::session::LoginPayload;
use crate::domain::types::{CardId, EstablishmentId, LevelId, OfferId, PeriodId, YearId};
use crate::gateway::errors::{ApiError, ApiResult};
use crate::gateway::ProgresApi;

/// Structured error body some backend failures carry.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(serde::Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

/// Stateless HTTP client; the only configuration is the two base URLs.
///
/// The discharge endpoint historically lives on a different host than the
/// rest of the API, hence the second base URL (it defaults to the main one).
#[derive(Clone)]
pub struct ProgresClient {
    http: reqwest::Client,
    base_url: String,
    discharge_base_url: String,
}

impl ProgresClient {
    pub fn new(base_url: &str, discharge_base_url: Option<&str>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let discharge_base_url = discharge_base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| base_url.clone());
        Self {
            http: reqwest::Client::new(),
            base_url,
            discharge_base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Normalizes a non-2xx response into [`ApiError::Backend`], preferring
    /// the backend's structured message over the generic status description.
    async fn check_status(response: Response) -> ApiResult<Response> {
        let status: StatusCode = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| "Unknown error".to_string());
        Err(ApiError::Backend {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String, token: Option<&str>) -> ApiResult<T> {
        let mut request = self.http.get(&url);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, token);
        }
        let response = Self::check_status(request.send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    async fn get_bytes(&self, url: String, token: &str) -> ApiResult<Vec<u8>> {
        let response = self
            .http
            .get(&url)
            .header(header::AUTHORIZATION, token)
            .header(header::ACCEPT, "image/jpeg")
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl ProgresApi for ProgresClient {
    async fn authenticate(&self, username: &str, password: &str) -> ApiResult<LoginPayload> {
        let response = self
            .http
            .post(self.url("authentication/v1/"))
            .json(&Credentials { username, password })
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json::<LoginPayload>().await?)
    }

    async fn student_cards(&self, student_id: Uuid, token: &str) -> ApiResult<Vec<EnrollmentCard>> {
        self.get_json(self.url(&format!("infos/bac/{student_id}/dias")), Some(token))
            .await
    }

    async fn individual_info(&self, student_id: Uuid, token: &str) -> ApiResult<StudentInfo> {
        self.get_json(
            self.url(&format!("infos/bac/{student_id}/individu")),
            Some(token),
        )
        .await
    }

    async fn bac_info(&self, student_id: Uuid, token: &str) -> ApiResult<BacInfo> {
        self.get_json(self.url(&format!("infos/bac/{student_id}")), Some(token))
            .await
    }

    async fn bac_grades(&self, student_id: Uuid, token: &str) -> ApiResult<Vec<BacGrade>> {
        self.get_json(
            self.url(&format!("infos/bac/{student_id}/notes")),
            Some(token),
        )
        .await
    }

    async fn exam_grades(&self, card_id: CardId, token: &str) -> ApiResult<Vec<ExamGrade>> {
        self.get_json(
            self.url(&format!("infos/planningSession/dia/{card_id}/noteExamens")),
            Some(token),
        )
        .await
    }

    async fn cc_grades(&self, card_id: CardId, token: &str) -> ApiResult<Vec<CcGrade>> {
        self.get_json(
            self.url(&format!("infos/controleContinue/dia/{card_id}/notesCC")),
            Some(token),
        )
        .await
    }

    async fn transcripts(
        &self,
        student_id: Uuid,
        card_id: CardId,
        token: &str,
    ) -> ApiResult<Vec<Transcript>> {
        self.get_json(
            self.url(&format!(
                "infos/bac/{student_id}/dias/{card_id}/periode/bilans"
            )),
            Some(token),
        )
        .await
    }

    async fn annual_decision(
        &self,
        student_id: Uuid,
        card_id: CardId,
        token: &str,
    ) -> ApiResult<Option<AcademicDecision>> {
        self.get_json(
            self.url(&format!("infos/bac/{student_id}/dia/{card_id}/annuel/bilan")),
            Some(token),
        )
        .await
    }

    async fn groups(&self, card_id: CardId, token: &str) -> ApiResult<Vec<GroupAssignment>> {
        self.get_json(self.url(&format!("infos/dia/{card_id}/groups")), Some(token))
            .await
    }

    async fn subjects(
        &self,
        offer_id: OfferId,
        level_id: LevelId,
        token: &str,
    ) -> ApiResult<Vec<Subject>> {
        self.get_json(
            self.url(&format!(
                "infos/offreFormation/{offer_id}/niveau/{level_id}/Coefficients"
            )),
            Some(token),
        )
        .await
    }

    async fn week_schedule(&self, card_id: CardId, token: &str) -> ApiResult<Vec<ScheduleEntry>> {
        self.get_json(
            self.url(&format!("infos/seanceEmploi/inscription/{card_id}")),
            Some(token),
        )
        .await
    }

    async fn exam_sessions(
        &self,
        period_id: PeriodId,
        level_id: LevelId,
        token: &str,
    ) -> ApiResult<Vec<ExamSession>> {
        self.get_json(
            self.url(&format!(
                "infos/Examens/{period_id}/niveau/{level_id}/examens"
            )),
            Some(token),
        )
        .await
    }

    async fn current_academic_year(&self, token: &str) -> ApiResult<AcademicYear> {
        self.get_json(self.url("infos/AnneeAcademicqueEncours"), Some(token))
            .await
    }

    async fn academic_periods(
        &self,
        year_id: YearId,
        token: &str,
    ) -> ApiResult<Vec<AcademicPeriod>> {
        self.get_json(
            self.url(&format!("infos/niveau/{year_id}/periodes")),
            Some(token),
        )
        .await
    }

    async fn transport_state(
        &self,
        student_id: Uuid,
        card_id: CardId,
        token: &str,
    ) -> ApiResult<Option<TransportState>> {
        self.get_json(
            self.url(&format!("infos/demandeTransport/{student_id}/{card_id}")),
            Some(token),
        )
        .await
    }

    async fn accommodation_requests(
        &self,
        student_id: Uuid,
        token: &str,
    ) -> ApiResult<Vec<AccommodationRequest>> {
        self.get_json(
            self.url(&format!("infos/bac/{student_id}/demandesHebregement")),
            Some(token),
        )
        .await
    }

    async fn discharge_state(&self, student_id: Uuid) -> ApiResult<Option<DischargeState>> {
        self.get_json(
            format!("{}/{student_id}/qitus", self.discharge_base_url),
            None,
        )
        .await
    }

    async fn debts(&self, student_id: Uuid, token: &str) -> ApiResult<Vec<DebtEntry>> {
        self.get_json(self.url(&format!("infos/dettes/{student_id}")), Some(token))
            .await
    }

    async fn student_photo(&self, student_id: Uuid, token: &str) -> ApiResult<Vec<u8>> {
        self.get_bytes(self.url(&format!("infos/image/{student_id}")), token)
            .await
    }

    async fn establishment_logo(
        &self,
        establishment_id: EstablishmentId,
        token: &str,
    ) -> ApiResult<Vec<u8>> {
        self.get_bytes(
            self.url(&format!("infos/logoEtablissement/{establishment_id}")),
            token,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ProgresClient::new("https://progres.example/api/", None);
        assert_eq!(
            client.url("infos/AnneeAcademicqueEncours"),
            "https://progres.example/api/infos/AnneeAcademicqueEncours"
        );
    }

    #[test]
    fn discharge_base_defaults_to_main_base() {
        let client = ProgresClient::new("https://progres.example/api", None);
        assert_eq!(client.discharge_base_url, "https://progres.example/api");

        let client =
            ProgresClient::new("https://progres.example/api", Some("https://qitus.example/"));
        assert_eq!(client.discharge_base_url, "https://qitus.example");
    }
}
