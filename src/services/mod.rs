//! Feature orchestration, generic over the gateway trait.
//!
//! Services hold the logic the routes would otherwise duplicate: resolving
//! the latest card, fanning out per-card fetches, applying the selection
//! rules. They never touch HTTP types, which keeps them testable against the
//! mock gateway.

use thiserror::Error;

use crate::gateway::errors::ApiError;

pub mod auth;
pub mod enrollment;
pub mod grades;
pub mod main;
pub mod profile;
pub mod schedule;
pub mod status;
pub mod transcripts;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The backend rejected the session token; the caller should bounce the
    /// student to the login page.
    #[error("authentication required")]
    Unauthorized,

    /// A backend call failed; the message is already user-presentable.
    #[error("{0}")]
    Api(ApiError),
}

impl From<ApiError> for ServiceError {
    fn from(err: ApiError) -> Self {
        match err {
            // An expired or revoked token answers 401 on any endpoint.
            ApiError::Backend { status: 401, .. } => ServiceError::Unauthorized,
            other => ServiceError::Api(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_401_maps_to_unauthorized() {
        let err = ServiceError::from(ApiError::Backend {
            status: 401,
            message: "Expired token".into(),
        });
        assert!(matches!(err, ServiceError::Unauthorized));

        let err = ServiceError::from(ApiError::Backend {
            status: 500,
            message: "boom".into(),
        });
        assert!(matches!(err, ServiceError::Api(_)));
    }
}
