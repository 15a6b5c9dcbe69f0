use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use log::error;
use tera::Tera;

use crate::gateway::ProgresClient;
use crate::models::auth::AuthenticatedStudent;
use crate::routes::{base_context, render_template};
use crate::services::{self, ServiceError};

#[get("/")]
pub async fn index(
    student: AuthenticatedStudent,
    api: web::Data<ProgresClient>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let mut context = base_context(&student.session, "index", &flash_messages);

    match services::main::home(api.get_ref(), &student.session).await {
        Ok(data) => context.insert("home", &data),
        Err(ServiceError::Unauthorized) => return HttpResponse::Unauthorized().finish(),
        Err(e) => {
            error!("Failed to load the dashboard: {e}");
            context.insert("error", &e.to_string());
        }
    }

    render_template(&tera, "main/index.html", &context)
}
