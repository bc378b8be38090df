//! Account handlers: signup, login, logout and the current session.
//!
//! ```text
//! POST /api/v1/signup {"employeeId":"EMP001","fullName":"Jane","password":"...","requestAdmin":false}
//! POST /api/v1/login  {"employeeId":"EMP001","password":"..."}
//! POST /api/v1/logout
//! GET  /api/v1/session
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::ports::SessionSummary;
use crate::domain::{Error, ErrorCode, LoginCredentials, SignupRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::invalid_field;

/// Signup request body.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupBody {
    pub employee_id: String,
    pub full_name: String,
    pub password: String,
    #[serde(default)]
    pub request_admin: bool,
}

/// Login request body.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginBody {
    pub employee_id: String,
    pub password: String,
}

/// Register a new employee account and sign it in.
#[utoipa::path(
    post,
    path = "/api/v1/signup",
    request_body = SignupBody,
    responses(
        (status = 201, description = "Account created", body = SessionSummary,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Employee id already registered", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "signup",
    security([])
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<SignupBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let request = SignupRequest::try_from_parts(
        &body.employee_id,
        &body.full_name,
        &body.password,
        body.request_admin,
    )
    .map_err(invalid_field)?;

    let employee = state.signup.signup(&request).await?;
    session.persist_employee(employee.employee_id())?;
    let summary = state.session.describe(employee.employee_id()).await?;
    Ok(HttpResponse::Created().json(summary))
}

/// Verify credentials and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginBody,
    responses(
        (status = 200, description = "Login success", body = SessionSummary,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginBody>,
) -> ApiResult<web::Json<SessionSummary>> {
    let body = payload.into_inner();
    let credentials =
        LoginCredentials::try_from_parts(&body.employee_id, &body.password).map_err(invalid_field)?;

    let employee = state.login.authenticate(&credentials).await?;
    session.persist_employee(employee.employee_id())?;
    info!(employee_id = %employee.employee_id(), "employee logged in");
    Ok(web::Json(state.session.describe(employee.employee_id()).await?))
}

/// Clear the session cookie. Always succeeds.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses((status = 204, description = "Session cleared")),
    tags = ["accounts"],
    operation_id = "logout"
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    HttpResponse::NoContent().finish()
}

/// Who is signed in, and where the UI should send them.
#[utoipa::path(
    get,
    path = "/api/v1/session",
    responses(
        (status = 200, description = "Current session", body = SessionSummary),
        (status = 401, description = "Not signed in", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "currentSession"
)]
#[get("/session")]
pub async fn current_session(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<SessionSummary>> {
    let employee_id = session.require_employee_id()?;
    let summary = state.session.describe(&employee_id).await.inspect_err(|err| {
        if err.code() == ErrorCode::Unauthorized {
            session.clear();
        }
    })?;
    Ok(web::Json(summary))
}
