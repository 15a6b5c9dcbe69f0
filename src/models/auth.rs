//! Request extractor exposing the current [`Session`].
//!
//! The session is serialized into the identity cookie at login; this
//! extractor is the read side. A missing or undecodable identity yields a 401,
//! which the [`crate::middleware::RedirectUnauthorized`] middleware turns into
//! a redirect to the login page.

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{Error, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;

use crate::domain::session::Session;

/// The authenticated student attached to a request.
#[derive(Clone, Debug)]
pub struct AuthenticatedStudent {
    pub session: Session,
}

impl FromRequest for AuthenticatedStudent {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let identity = Identity::from_request(req, payload);
        Box::pin(async move {
            let identity = identity
                .await
                .map_err(|_| ErrorUnauthorized("authentication required"))?;
            let raw = identity
                .id()
                .map_err(|_| ErrorUnauthorized("authentication required"))?;
            let session: Session = serde_json::from_str(&raw)
                .map_err(|_| ErrorUnauthorized("authentication required"))?;
            Ok(Self { session })
        })
    }
}
