use actix_web::HttpResponse;
use actix_web::http::{StatusCode, header};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use log::error;
use serde::Deserialize;
use tera::{Context, Tera};

use crate::domain::session::Session;

pub mod auth;
pub mod calculator;
pub mod enrollment;
pub mod grades;
pub mod main;
pub mod profile;
pub mod schedule;
pub mod status;
pub mod transcripts;

/// Year/semester overrides shared by every history view.
#[derive(Debug, Deserialize)]
pub struct HistoryQueryParams {
    pub year: Option<i64>,
    pub semester: Option<String>,
}

pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::build(StatusCode::SEE_OTHER)
        .insert_header((header::LOCATION, location))
        .finish()
}

pub(crate) fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            error!("Failed to render template {name}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Maps flash levels to the alert classes the stylesheet knows.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Context every authenticated page starts from: alerts, the student profile
/// and the active navigation entry.
pub(crate) fn base_context(
    session: &Session,
    current_page: &str,
    flash_messages: &IncomingFlashMessages,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", &session.profile);
    context.insert("current_page", current_page);
    context
}
