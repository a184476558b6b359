use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection, http::StatusCode, routing::post, Json, Router,
};
use showroom_core::forms::{
    plan_trip, submit_contact, submit_newsletter, ContactForm, FormStatus, NewsletterForm,
    TripPlannerForm,
};

use crate::{main_lib::AppState, models::TripPlannerResponse};

/// Rejected submissions are answered with 422 and the same body shape.
fn status_code(ok: bool) -> StatusCode {
    if ok {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    }
}

/// A body that does not decode gets the same failure shape as a body that
/// fails validation.
fn unreadable(rejection: JsonRejection) -> FormStatus {
    tracing::debug!("Rejected form body: {}", rejection.body_text());
    FormStatus::failure("The form could not be read. Please check your entries.")
}

async fn contact(
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> (StatusCode, Json<FormStatus>) {
    let status = match payload {
        Ok(Json(form)) => submit_contact(&form),
        Err(rejection) => unreadable(rejection),
    };
    (status_code(status.ok), Json(status))
}

async fn newsletter(
    payload: Result<Json<NewsletterForm>, JsonRejection>,
) -> (StatusCode, Json<FormStatus>) {
    let status = match payload {
        Ok(Json(form)) => submit_newsletter(&form),
        Err(rejection) => unreadable(rejection),
    };
    (status_code(status.ok), Json(status))
}

async fn trip_planner(
    payload: Result<Json<TripPlannerForm>, JsonRejection>,
) -> (StatusCode, Json<TripPlannerResponse>) {
    let (status, plan) = match payload {
        Ok(Json(form)) => plan_trip(&form),
        Err(rejection) => (unreadable(rejection), None),
    };
    (
        status_code(status.ok),
        Json(TripPlannerResponse { status, plan }),
    )
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/forms/contact", post(contact))
        .route("/forms/newsletter", post(newsletter))
        .route("/forms/trip-planner", post(trip_planner))
}
