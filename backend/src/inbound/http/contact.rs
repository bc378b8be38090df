//! Public contact form.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ContactOutcome, ContactRequest, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::invalid_field;

/// Contact form body.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactBody {
    pub full_name: String,
    pub email: String,
    pub message: String,
}

/// Forward a visitor's message to the contact inbox. No session needed.
#[utoipa::path(
    post,
    path = "/api/v1/contact",
    request_body = ContactBody,
    responses(
        (status = 200, description = "Message delivered", body = ContactOutcome),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Mail delivery failed", body = Error)
    ),
    tags = ["contact"],
    operation_id = "submitContact",
    security([])
)]
#[post("/contact")]
pub async fn submit_contact(
    state: web::Data<HttpState>,
    payload: web::Json<ContactBody>,
) -> ApiResult<web::Json<ContactOutcome>> {
    let body = payload.into_inner();
    let request = ContactRequest::try_from_parts(&body.full_name, &body.email, &body.message)
        .map_err(invalid_field)?;
    Ok(web::Json(state.contact.submit(&request).await?))
}
