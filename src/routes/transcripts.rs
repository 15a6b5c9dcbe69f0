use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use log::error;
use tera::Tera;

use crate::domain::types::CardId;
use crate::gateway::ProgresClient;
use crate::models::auth::AuthenticatedStudent;
use crate::routes::{HistoryQueryParams, base_context, render_template};
use crate::services::{self, ServiceError};

#[get("/transcripts")]
pub async fn transcripts(
    student: AuthenticatedStudent,
    params: web::Query<HistoryQueryParams>,
    api: web::Data<ProgresClient>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let mut context = base_context(&student.session, "transcripts", &flash_messages);

    match services::transcripts::transcripts(
        api.get_ref(),
        &student.session,
        params.year.map(CardId::new),
        params.semester.as_deref(),
    )
    .await
    {
        Ok(data) => context.insert("page", &data),
        Err(ServiceError::Unauthorized) => return HttpResponse::Unauthorized().finish(),
        Err(e) => {
            error!("Failed to load transcripts: {e}");
            context.insert("error", &e.to_string());
        }
    }

    render_template(&tera, "transcripts/index.html", &context)
}
