use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;
use crate::models::{Field, SubmissionRecord};
use crate::state::SharedState;
use crate::submission::{fields, Outcome, FAILURE_MESSAGE};

/// Request body for the JSON submit. `service` stays a plain string until
/// it is checked against the offered options.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: Option<String>,
    pub company_name: String,
    pub problems: String,
    pub additional_info: String,
}

impl ContactRequest {
    fn into_record(self) -> (SubmissionRecord, Vec<String>) {
        let mut record = SubmissionRecord {
            name: self.name,
            email: self.email,
            phone: self.phone,
            company_name: self.company_name,
            problems: self.problems,
            additional_info: self.additional_info,
            ..SubmissionRecord::default()
        };

        let mut violations = Vec::new();
        if let Some(service) = self.service {
            if let Err(e) = record.set(Field::Service, &service) {
                violations.push(e);
            }
        }
        (record, violations)
    }
}

pub async fn submit(
    State(state): State<SharedState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::BadRequest(format!("Invalid JSON body: {}", rejection.body_text()))
    })?;

    let (record, mut violations) = request.into_record();
    violations.extend(fields::check_widgets(&record));
    if !violations.is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid submission", "fields": violations })),
        )
            .into_response());
    }

    let mut flow = state.flow();
    flow.load(record);

    let response = match flow.submit().await {
        Outcome::Success => {
            (StatusCode::CREATED, Json(json!({ "status": "created" }))).into_response()
        }
        Outcome::Failure => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": FAILURE_MESSAGE })),
        )
            .into_response(),
    };
    Ok(response)
}
