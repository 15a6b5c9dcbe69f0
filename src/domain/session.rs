//! The authenticated session and the login payload it is built from.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::EstablishmentId;

/// Raw response body of `POST authentication/v1/`.
///
/// Tolerant by design: apart from the token and the student uuid every field
/// may be missing depending on the account type.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginPayload {
    pub token: String,
    pub uuid: Uuid,
    #[serde(rename = "userName")]
    pub user_name: Option<String>,
    #[serde(rename = "etablissementId")]
    pub establishment_id: Option<i64>,
}

/// Display-oriented subset of the login response kept for the whole session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentProfile {
    pub display_name: String,
    pub establishment_id: Option<EstablishmentId>,
}

/// The authenticated identity: student uuid, opaque backend token and profile.
///
/// Exactly one session is live per client. It is written only by the login and
/// logout routes; everything else reads it through the request extractor.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub student_id: Uuid,
    pub token: String,
    pub profile: StudentProfile,
}

impl From<LoginPayload> for Session {
    fn from(payload: LoginPayload) -> Self {
        Self {
            student_id: payload.uuid,
            token: payload.token,
            profile: StudentProfile {
                display_name: payload.user_name.unwrap_or_default(),
                establishment_id: payload.establishment_id.map(EstablishmentId::new),
            },
        }
    }
}
