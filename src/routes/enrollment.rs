use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use log::error;
use tera::Tera;

use crate::gateway::ProgresClient;
use crate::models::auth::AuthenticatedStudent;
use crate::routes::{base_context, render_template};
use crate::services::{self, ServiceError};

#[get("/cards")]
pub async fn cards(
    student: AuthenticatedStudent,
    api: web::Data<ProgresClient>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let mut context = base_context(&student.session, "cards", &flash_messages);

    match services::enrollment::cards(api.get_ref(), &student.session).await {
        Ok(data) => context.insert("page", &data),
        Err(ServiceError::Unauthorized) => return HttpResponse::Unauthorized().finish(),
        Err(e) => {
            error!("Failed to list enrollment cards: {e}");
            context.insert("error", &e.to_string());
        }
    }

    render_template(&tera, "enrollment/cards.html", &context)
}

#[get("/subjects")]
pub async fn subjects(
    student: AuthenticatedStudent,
    api: web::Data<ProgresClient>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let mut context = base_context(&student.session, "subjects", &flash_messages);

    match services::enrollment::subjects(api.get_ref(), &student.session).await {
        Ok(data) => context.insert("page", &data),
        Err(ServiceError::Unauthorized) => return HttpResponse::Unauthorized().finish(),
        Err(e) => {
            error!("Failed to load the subject catalog: {e}");
            context.insert("error", &e.to_string());
        }
    }

    render_template(&tera, "enrollment/subjects.html", &context)
}

#[get("/groups")]
pub async fn groups(
    student: AuthenticatedStudent,
    api: web::Data<ProgresClient>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let mut context = base_context(&student.session, "groups", &flash_messages);

    match services::enrollment::groups(api.get_ref(), &student.session).await {
        Ok(data) => context.insert("page", &data),
        Err(ServiceError::Unauthorized) => return HttpResponse::Unauthorized().finish(),
        Err(e) => {
            error!("Failed to load group assignments: {e}");
            context.insert("error", &e.to_string());
        }
    }

    render_template(&tera, "enrollment/groups.html", &context)
}
