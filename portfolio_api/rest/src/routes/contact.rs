use std::sync::Arc;

use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Form, Json, Router,
};
use portfolio_core_contact_contracts::ContactService;

use crate::models::contact::{ApiContactSubmission, ApiContactSubmissionResult};

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(submit_json))
        .route("/contact/form", routing::post(submit_form))
        .with_state(service)
}

async fn submit_json(
    service: State<Arc<impl ContactService>>,
    submission: Result<Json<ApiContactSubmission>, JsonRejection>,
) -> Response {
    match submission {
        Ok(Json(submission)) => submit(&**service, submission).await,
        Err(rejection) => rejected(rejection.status(), rejection.body_text()),
    }
}

async fn submit_form(
    service: State<Arc<impl ContactService>>,
    submission: Result<Form<ApiContactSubmission>, FormRejection>,
) -> Response {
    match submission {
        Ok(Form(submission)) => submit(&**service, submission).await,
        Err(rejection) => rejected(rejection.status(), rejection.body_text()),
    }
}

async fn submit(service: &impl ContactService, submission: ApiContactSubmission) -> Response {
    let result = service.submit(submission.into()).await;

    let status = if result.success {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    (status, Json(ApiContactSubmissionResult::from(result))).into_response()
}

/// Answers a body that could not be read at all, keeping the response shape of
/// a regular submission.
fn rejected(status: StatusCode, message: String) -> Response {
    let body = ApiContactSubmissionResult {
        success: false,
        message,
    };
    (status, Json(body)).into_response()
}
