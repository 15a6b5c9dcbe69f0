//! Login against the Progres authentication endpoint.

use crate::domain::session::Session;
use crate::gateway::ProgresApi;
use crate::services::ServiceResult;

/// Exchanges credentials for a [`Session`].
///
/// The backend answers invalid credentials with a non-2xx status, which
/// surfaces here as `ServiceError::Api` carrying the backend's own message.
pub async fn login<A>(api: &A, username: &str, password: &str) -> ServiceResult<Session>
where
    A: ProgresApi + ?Sized,
{
    let payload = api.authenticate(username, password).await?;
    Ok(Session::from(payload))
}
