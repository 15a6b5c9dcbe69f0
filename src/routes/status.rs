use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use log::error;
use tera::Tera;

use crate::gateway::ProgresClient;
use crate::models::auth::AuthenticatedStudent;
use crate::routes::{base_context, render_template};
use crate::services::{self, ServiceError};

#[get("/transport")]
pub async fn transport(
    student: AuthenticatedStudent,
    api: web::Data<ProgresClient>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let mut context = base_context(&student.session, "transport", &flash_messages);

    match services::status::transport(api.get_ref(), &student.session).await {
        Ok(data) => context.insert("page", &data),
        Err(ServiceError::Unauthorized) => return HttpResponse::Unauthorized().finish(),
        Err(e) => {
            error!("Failed to load the transport status: {e}");
            context.insert("error", &e.to_string());
        }
    }

    render_template(&tera, "status/transport.html", &context)
}

#[get("/accommodation")]
pub async fn accommodation(
    student: AuthenticatedStudent,
    api: web::Data<ProgresClient>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let mut context = base_context(&student.session, "accommodation", &flash_messages);

    match services::status::accommodation(api.get_ref(), &student.session).await {
        Ok(data) => context.insert("page", &data),
        Err(ServiceError::Unauthorized) => return HttpResponse::Unauthorized().finish(),
        Err(e) => {
            error!("Failed to load accommodation requests: {e}");
            context.insert("error", &e.to_string());
        }
    }

    render_template(&tera, "status/accommodation.html", &context)
}

#[get("/discharge")]
pub async fn discharge(
    student: AuthenticatedStudent,
    api: web::Data<ProgresClient>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let mut context = base_context(&student.session, "discharge", &flash_messages);

    match services::status::discharge(api.get_ref(), &student.session).await {
        Ok(data) => context.insert("page", &data),
        Err(ServiceError::Unauthorized) => return HttpResponse::Unauthorized().finish(),
        Err(e) => {
            error!("Failed to load the discharge status: {e}");
            context.insert("error", &e.to_string());
        }
    }

    render_template(&tera, "status/discharge.html", &context)
}

#[get("/debts")]
pub async fn debts(
    student: AuthenticatedStudent,
    api: web::Data<ProgresClient>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let mut context = base_context(&student.session, "debts", &flash_messages);

    match services::status::debts(api.get_ref(), &student.session).await {
        Ok(data) => context.insert("page", &data),
        Err(ServiceError::Unauthorized) => return HttpResponse::Unauthorized().finish(),
        Err(e) => {
            error!("Failed to load outstanding debts: {e}");
            context.insert("error", &e.to_string());
        }
    }

    render_template(&tera, "status/debts.html", &context)
}
