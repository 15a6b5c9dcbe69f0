use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use log::error;
use tera::Tera;

use crate::gateway::ProgresClient;
use crate::models::auth::AuthenticatedStudent;
use crate::routes::{base_context, render_template};
use crate::services::{self, ServiceError};

#[get("/profile")]
pub async fn profile(
    student: AuthenticatedStudent,
    api: web::Data<ProgresClient>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let mut context = base_context(&student.session, "profile", &flash_messages);

    match services::profile::profile(api.get_ref(), &student.session).await {
        Ok(data) => context.insert("page", &data),
        Err(ServiceError::Unauthorized) => return HttpResponse::Unauthorized().finish(),
        Err(e) => {
            error!("Failed to load the profile: {e}");
            context.insert("error", &e.to_string());
        }
    }

    render_template(&tera, "profile/index.html", &context)
}

#[get("/bac")]
pub async fn bac(
    student: AuthenticatedStudent,
    api: web::Data<ProgresClient>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let mut context = base_context(&student.session, "bac", &flash_messages);

    match services::profile::bac(api.get_ref(), &student.session).await {
        Ok(data) => context.insert("page", &data),
        Err(ServiceError::Unauthorized) => return HttpResponse::Unauthorized().finish(),
        Err(e) => {
            error!("Failed to load the baccalaureate record: {e}");
            context.insert("error", &e.to_string());
        }
    }

    render_template(&tera, "profile/bac.html", &context)
}

#[get("/profile/photo")]
pub async fn photo(student: AuthenticatedStudent, api: web::Data<ProgresClient>) -> impl Responder {
    match services::profile::photo(api.get_ref(), &student.session).await {
        Ok(bytes) => HttpResponse::Ok().content_type("image/jpeg").body(bytes),
        Err(ServiceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(e) => {
            error!("Failed to fetch the student photo: {e}");
            HttpResponse::NotFound().finish()
        }
    }
}

#[get("/profile/logo")]
pub async fn logo(student: AuthenticatedStudent, api: web::Data<ProgresClient>) -> impl Responder {
    match services::profile::logo(api.get_ref(), &student.session).await {
        Ok(Some(bytes)) => HttpResponse::Ok().content_type("image/jpeg").body(bytes),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(ServiceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(e) => {
            error!("Failed to fetch the establishment logo: {e}");
            HttpResponse::NotFound().finish()
        }
    }
}
