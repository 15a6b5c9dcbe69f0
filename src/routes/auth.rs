use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use serde::Deserialize;
use tera::{Context, Tera};
use validator::Validate;

use crate::forms::auth::{LoginForm, sanitize_next};
use crate::gateway::ProgresClient;
use crate::routes::{alert_level_to_str, redirect, render_template};
use crate::services;

#[derive(Deserialize)]
struct LoginQueryParams {
    next: Option<String>,
}

#[get("/login")]
pub async fn show_login(
    params: web::Query<LoginQueryParams>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", "login");
    if let Some(next) = sanitize_next(params.next.as_deref()) {
        context.insert("next", next);
    }

    render_template(&tera, "auth/login.html", &context)
}

#[post("/login")]
pub async fn login(
    req: HttpRequest,
    web::Form(form): web::Form<LoginForm>,
    api: web::Data<ProgresClient>,
) -> impl Responder {
    if let Err(errors) = form.validate() {
        FlashMessage::error(errors.to_string()).send();
        return redirect(&login_url(form.next.as_deref()));
    }

    match services::auth::login(api.get_ref(), &form.username, &form.password).await {
        Ok(session) => {
            let serialized = match serde_json::to_string(&session) {
                Ok(serialized) => serialized,
                Err(e) => {
                    error!("Failed to serialize session: {e}");
                    return HttpResponse::InternalServerError().finish();
                }
            };
            if let Err(e) = Identity::login(&req.extensions(), serialized) {
                error!("Failed to attach identity: {e}");
                return HttpResponse::InternalServerError().finish();
            }
            redirect(form.redirect_target())
        }
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            redirect(&login_url(form.next.as_deref()))
        }
    }
}

// Logging out twice is fine, hence the Option.
#[post("/logout")]
pub async fn logout(user: Option<Identity>) -> impl Responder {
    if let Some(user) = user {
        user.logout();
    }
    redirect("/login")
}

/// Login page URL that keeps the `next` target across a failed attempt.
fn login_url(next: Option<&str>) -> String {
    match sanitize_next(next) {
        Some(next) => format!("/login?next={}", urlencoding::encode(next)),
        None => "/login".to_string(),
    }
}
