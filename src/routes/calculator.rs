//! Grade average calculator: a purely local tool, no backend calls.

use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use log::error;
use tera::Tera;

use crate::domain::grade;
use crate::dto::calculator::{CalculatorPageData, CalculatorRow};
use crate::forms::calculator::CalculatorForm;
use crate::models::auth::AuthenticatedStudent;
use crate::routes::{base_context, render_template};

/// Subject rows offered before the student edits the list.
const DEFAULT_SUBJECTS: [&str; 3] = ["Matière 1", "Matière 2", "Matière 3"];

fn page_data(form: &CalculatorForm) -> CalculatorPageData {
    let rows: Vec<CalculatorRow> = form
        .subjects()
        .into_iter()
        .map(|(name, tp, td, exam)| CalculatorRow {
            average: grade::subject_average(tp, td, exam),
            name,
            tp,
            td,
            exam,
        })
        .collect();
    let averages: Vec<f64> = rows.iter().map(|row| row.average).collect();
    CalculatorPageData {
        overall: grade::overall_average(&averages),
        rows,
    }
}

fn default_form() -> CalculatorForm {
    CalculatorForm {
        name: DEFAULT_SUBJECTS.iter().map(|s| s.to_string()).collect(),
        ..CalculatorForm::default()
    }
}

#[get("/calculator")]
pub async fn show_calculator(
    student: AuthenticatedStudent,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let mut context = base_context(&student.session, "calculator", &flash_messages);
    context.insert("page", &page_data(&default_form()));
    render_template(&tera, "calculator/index.html", &context)
}

#[post("/calculator")]
pub async fn calculate(
    student: AuthenticatedStudent,
    body: String,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let mut context = base_context(&student.session, "calculator", &flash_messages);

    match serde_html_form::from_str::<CalculatorForm>(&body) {
        Ok(form) => context.insert("page", &page_data(&form)),
        Err(e) => {
            error!("Failed to parse the calculator form: {e}");
            context.insert("error", &e.to_string());
        }
    }

    render_template(&tera, "calculator/index.html", &context)
}
