use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;

use crate::error::AppError;
use crate::models::{Field, Service, SubmissionRecord};
use crate::state::SharedState;
use crate::submission::fields::{self, PHONE_PATTERN};
use crate::submission::{Outcome, SubmissionFlow, Toast};

struct ServiceOption {
    label: &'static str,
    selected: bool,
}

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate {
    form: SubmissionRecord,
    services: Vec<ServiceOption>,
    toasts: Vec<Toast>,
    errors: Vec<String>,
    submitting: bool,
    phone_pattern: &'static str,
}

impl ContactTemplate {
    fn from_flow(flow: &SubmissionFlow, errors: Vec<String>) -> Self {
        let form = flow.record().clone();
        let services = Service::ALL
            .into_iter()
            .map(|service| ServiceOption {
                label: service.label(),
                selected: service == form.service,
            })
            .collect();

        Self {
            form,
            services,
            toasts: flow.toasts().to_vec(),
            errors,
            submitting: flow.control().is_disabled(),
            phone_pattern: PHONE_PATTERN,
        }
    }
}

fn render(
    flow: &SubmissionFlow,
    errors: Vec<String>,
    status: StatusCode,
) -> Result<Response, AppError> {
    let page = ContactTemplate::from_flow(flow, errors).render()?;
    Ok((status, Html(page)).into_response())
}

pub async fn show(State(state): State<SharedState>) -> Result<Response, AppError> {
    render(&state.flow(), Vec::new(), StatusCode::OK)
}

pub async fn submit(
    State(state): State<SharedState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let mut flow = state.flow();
    let mut errors = Vec::new();

    for (name, value) in &pairs {
        let Ok(field) = name.parse::<Field>() else {
            continue;
        };
        if let Err(e) = flow.set_field(field, value) {
            errors.push(e);
        }
    }

    errors.extend(fields::check_widgets(flow.record()));
    if !errors.is_empty() {
        tracing::debug!("Contact form held back by field constraints: {errors:?}");
        return render(&flow, errors, StatusCode::UNPROCESSABLE_ENTITY);
    }

    let status = match flow.submit().await {
        Outcome::Success => StatusCode::OK,
        Outcome::Failure => StatusCode::INTERNAL_SERVER_ERROR,
    };
    render(&flow, Vec::new(), status)
}
