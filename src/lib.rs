use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware as actix_middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::gateway::ProgresClient;
use crate::middleware::RedirectUnauthorized;
use crate::models::config::ServerConfig;
use crate::routes::auth::{login, logout, show_login};
use crate::routes::calculator::{calculate, show_calculator};
use crate::routes::enrollment::{cards, groups, subjects};
use crate::routes::grades::{cc_grades, exam_grades};
use crate::routes::main::index;
use crate::routes::profile::{bac, logo, photo, profile};
use crate::routes::schedule::{exam_schedule, week_schedule};
use crate::routes::status::{accommodation, debts, discharge, transport};
use crate::routes::transcripts::transcripts;

pub mod domain;
pub mod dto;
pub mod forms;
pub mod gateway;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let gateway = ProgresClient::new(
        &server_config.api_base_url,
        server_config.discharge_base_url.as_deref(),
    );

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .build(),
            )
            .wrap(actix_middleware::Compress::default())
            .wrap(actix_middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_login)
            .service(login)
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(index)
                    .service(cards)
                    .service(subjects)
                    .service(groups)
                    .service(exam_grades)
                    .service(cc_grades)
                    .service(transcripts)
                    .service(week_schedule)
                    .service(exam_schedule)
                    .service(profile)
                    .service(bac)
                    .service(photo)
                    .service(logo)
                    .service(show_calculator)
                    .service(calculate)
                    .service(transport)
                    .service(accommodation)
                    .service(discharge)
                    .service(debts)
                    .service(logout),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(gateway.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
