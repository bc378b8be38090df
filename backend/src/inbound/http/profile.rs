//! Profile view, profile editor and onboarding handlers.
//!
//! ```text
//! GET  /api/v1/profile
//! PUT  /api/v1/profile     {"phone":"...","awards":[...]}
//! POST /api/v1/onboarding  {"program":"CSE","designation":"...", ...}
//! ```

use actix_web::{get, post, put, web};

use crate::domain::ports::ProfileView;
use crate::domain::{
    Error, OnboardingSubmission, ProfileUpdate, TeacherProfile, UserProfile,
    onboarding_required_error,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::invalid_field;

/// Merged profile of the signed-in employee.
///
/// Responds `409` with `details.redirect = "/onboarding"` until the profile
/// names a program.
#[utoipa::path(
    get,
    path = "/api/v1/profile",
    responses(
        (status = 200, description = "Merged profile", body = UserProfile),
        (status = 401, description = "Not signed in", body = Error),
        (status = 409, description = "Onboarding required", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["profile"],
    operation_id = "getProfile"
)]
#[get("/profile")]
pub async fn get_profile(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<UserProfile>> {
    let employee_id = session.require_employee_id()?;
    match state.profile_query.fetch_profile(&employee_id).await? {
        ProfileView::Complete(profile) => Ok(web::Json(*profile)),
        ProfileView::OnboardingRequired => Err(onboarding_required_error()),
    }
}

/// Patch the stored profile. Lists and nested objects are replaced whole.
#[utoipa::path(
    put,
    path = "/api/v1/profile",
    request_body = TeacherProfile,
    responses(
        (status = 200, description = "Updated merged profile", body = UserProfile),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Not signed in", body = Error),
        (status = 409, description = "Onboarding required", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["profile"],
    operation_id = "updateProfile"
)]
#[put("/profile")]
pub async fn update_profile(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<TeacherProfile>,
) -> ApiResult<web::Json<UserProfile>> {
    let employee_id = session.require_employee_id()?;
    let update = ProfileUpdate::try_new(payload.into_inner()).map_err(invalid_field)?;
    let merged = state
        .profile_command
        .update_profile(&employee_id, update)
        .await?;
    Ok(web::Json(merged))
}

/// Submit the onboarding wizard.
#[utoipa::path(
    post,
    path = "/api/v1/onboarding",
    request_body = TeacherProfile,
    responses(
        (status = 200, description = "Onboarding complete", body = UserProfile),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Not signed in", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["profile"],
    operation_id = "completeOnboarding"
)]
#[post("/onboarding")]
pub async fn complete_onboarding(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<TeacherProfile>,
) -> ApiResult<web::Json<UserProfile>> {
    let employee_id = session.require_employee_id()?;
    let submission = OnboardingSubmission::try_new(payload.into_inner()).map_err(invalid_field)?;
    let merged = state
        .profile_command
        .complete_onboarding(&employee_id, submission)
        .await?;
    Ok(web::Json(merged))
}
