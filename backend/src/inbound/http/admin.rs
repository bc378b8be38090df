//! Administrator dashboard handlers.
//!
//! ```text
//! GET    /api/v1/admin/employees
//! POST   /api/v1/admin/employees                      {"employeeId":"EMP009","fullName":"...","password":"...","program":"CSE","makeAdmin":false}
//! DELETE /api/v1/admin/employees/{employeeId}
//! PUT    /api/v1/admin/employees/{employeeId}/admin   {"isAdmin":true}
//! POST   /api/v1/admin/notifications                  {"title":"...","message":"...","recipientId":null}
//! ```
//!
//! Handlers only resolve the acting employee; the admin check happens in
//! the domain services.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{DirectoryEntry, NewEmployee};
use crate::domain::{Error, SendNotification, SendNotificationOutcome};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{invalid_field, parse_employee_id};

/// Body for creating an employee from the dashboard.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeBody {
    pub employee_id: String,
    pub full_name: String,
    pub password: String,
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default)]
    pub make_admin: bool,
}

/// Body for granting or revoking admin membership.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminMembershipBody {
    pub is_admin: bool,
}

/// Body for sending a notification. Omit `recipientId` to broadcast.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationBody {
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub recipient_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/employees",
    responses(
        (status = 200, description = "Directory ordered by employee id", body = [DirectoryEntry]),
        (status = 401, description = "Not signed in", body = Error),
        (status = 403, description = "Not an administrator", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "listEmployees"
)]
#[get("/admin/employees")]
pub async fn list_employees(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<DirectoryEntry>>> {
    let actor = session.require_employee_id()?;
    Ok(web::Json(state.directory.list_directory(&actor).await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/employees",
    request_body = CreateEmployeeBody,
    responses(
        (status = 201, description = "Employee created", body = DirectoryEntry),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Not signed in", body = Error),
        (status = 403, description = "Not an administrator", body = Error),
        (status = 409, description = "Employee id already registered", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "createEmployee"
)]
#[post("/admin/employees")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateEmployeeBody>,
) -> ApiResult<HttpResponse> {
    let actor = session.require_employee_id()?;
    let body = payload.into_inner();
    let request = NewEmployee::try_from_parts(
        &body.employee_id,
        &body.full_name,
        &body.password,
        body.program.as_deref(),
        body.make_admin,
    )
    .map_err(invalid_field)?;

    let entry = state.directory.create_employee(&actor, request).await?;
    Ok(HttpResponse::Created().json(entry))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/employees/{employeeId}",
    params(("employeeId" = String, Path, description = "Employee to delete")),
    responses(
        (status = 204, description = "Employee, profile and membership removed"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Not signed in", body = Error),
        (status = 403, description = "Not an administrator", body = Error),
        (status = 404, description = "Unknown employee", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "deleteEmployee"
)]
#[delete("/admin/employees/{employee_id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let actor = session.require_employee_id()?;
    let target = parse_employee_id(&path, "employeeId")?;
    state.directory.delete_employee(&actor, &target).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/employees/{employeeId}/admin",
    params(("employeeId" = String, Path, description = "Employee whose membership changes")),
    request_body = AdminMembershipBody,
    responses(
        (status = 204, description = "Membership updated"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Not signed in", body = Error),
        (status = 403, description = "Not an administrator", body = Error),
        (status = 404, description = "Unknown employee", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "setAdmin"
)]
#[put("/admin/employees/{employee_id}/admin")]
pub async fn set_admin(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<AdminMembershipBody>,
) -> ApiResult<HttpResponse> {
    let actor = session.require_employee_id()?;
    let target = parse_employee_id(&path, "employeeId")?;
    state
        .directory
        .set_admin(&actor, &target, payload.is_admin)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/notifications",
    request_body = SendNotificationBody,
    responses(
        (status = 201, description = "Notifications stored; emails attempted", body = SendNotificationOutcome),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Not signed in", body = Error),
        (status = 403, description = "Not an administrator", body = Error),
        (status = 404, description = "Unknown recipient", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "sendNotification"
)]
#[post("/admin/notifications")]
pub async fn send_notification(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<SendNotificationBody>,
) -> ApiResult<HttpResponse> {
    let sender = session.require_employee_id()?;
    let body = payload.into_inner();
    let request =
        SendNotification::try_from_parts(&body.title, &body.message, body.recipient_id.as_deref())
            .map_err(invalid_field)?;

    let outcome = state.notifications.send(&sender, request).await?;
    Ok(HttpResponse::Created().json(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockDirectoryAdmin, MockNotificationCommand};
    use crate::domain::{EmployeeId, NotificationTarget};
    use crate::inbound::http::test_utils::{api_app, employee, json_body, login_as, mock_state};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::json;
    use std::sync::Arc;

    fn entry(raw: &str, is_admin: bool) -> DirectoryEntry {
        DirectoryEntry {
            employee_id: employee(raw),
            full_name: "Someone".into(),
            is_admin,
            profile_complete: false,
            profile: None,
        }
    }

    #[actix_web::test]
    async fn listing_passes_the_actor_through() {
        let mut directory = MockDirectoryAdmin::new();
        directory
            .expect_list_directory()
            .withf(|actor: &EmployeeId| actor.as_ref() == "ADMIN1")
            .return_once(|_| Ok(vec![entry("ADMIN1", true), entry("EMP002", false)]));
        let mut state = mock_state();
        state.directory = Arc::new(directory);
        let app = actix_test::init_service(api_app(state)).await;
        let cookie = login_as(&app, "admin1").await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/admin/employees")
                .cookie(cookie)
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body[0]["isAdmin"], true);
        assert_eq!(body[1]["employeeId"], "EMP002");
        assert_eq!(body[1]["profile"], serde_json::Value::Null);
    }

    #[actix_web::test]
    async fn non_admins_see_forbidden() {
        let mut directory = MockDirectoryAdmin::new();
        directory
            .expect_list_directory()
            .return_once(|_| Err(Error::forbidden("administrator access required")));
        let mut state = mock_state();
        state.directory = Arc::new(directory);
        let app = actix_test::init_service(api_app(state)).await;
        let cookie = login_as(&app, "EMP002").await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/admin/employees")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn create_validates_then_delegates() {
        let mut directory = MockDirectoryAdmin::new();
        directory
            .expect_create_employee()
            .withf(|_, request| {
                request.employee_id.as_ref() == "EMP009"
                    && request.program.as_deref() == Some("CSE")
                    && request.make_admin
            })
            .times(1)
            .return_once(|_, _| Ok(entry("EMP009", true)));
        let mut state = mock_state();
        state.directory = Arc::new(directory);
        let app = actix_test::init_service(api_app(state)).await;
        let cookie = login_as(&app, "ADMIN1").await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/admin/employees")
                .cookie(cookie)
                .set_json(CreateEmployeeBody {
                    employee_id: "emp009".into(),
                    full_name: "Meera".into(),
                    password: "long enough".into(),
                    program: Some(" CSE ".into()),
                    make_admin: true,
                })
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[rstest]
    #[case::deleted(Ok(()), StatusCode::NO_CONTENT)]
    #[case::unknown(Err(Error::not_found("employee EMP404 not found")), StatusCode::NOT_FOUND)]
    #[case::self_delete(
        Err(Error::invalid_request("administrators cannot delete their own account")),
        StatusCode::BAD_REQUEST
    )]
    #[actix_web::test]
    async fn delete_maps_service_outcomes(
        #[case] outcome: Result<(), Error>,
        #[case] expected: StatusCode,
    ) {
        let mut directory = MockDirectoryAdmin::new();
        directory
            .expect_delete_employee()
            .withf(|_, target| target.as_ref() == "EMP404")
            .return_once(move |_, _| outcome);
        let mut state = mock_state();
        state.directory = Arc::new(directory);
        let app = actix_test::init_service(api_app(state)).await;
        let cookie = login_as(&app, "ADMIN1").await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/api/v1/admin/employees/emp404")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), expected);
    }

    #[actix_web::test]
    async fn set_admin_forwards_the_flag() {
        let mut directory = MockDirectoryAdmin::new();
        directory
            .expect_set_admin()
            .withf(|_, target, grant| target.as_ref() == "EMP002" && !*grant)
            .times(1)
            .return_once(|_, _, _| Ok(()));
        let mut state = mock_state();
        state.directory = Arc::new(directory);
        let app = actix_test::init_service(api_app(state)).await;
        let cookie = login_as(&app, "ADMIN1").await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri("/api/v1/admin/employees/EMP002/admin")
                .cookie(cookie)
                .set_json(json!({"isAdmin": false}))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[rstest]
    #[case::broadcast(None)]
    #[case::individual(Some("EMP002"))]
    #[actix_web::test]
    async fn send_reports_the_outcome(#[case] recipient: Option<&'static str>) {
        let mut notifications = MockNotificationCommand::new();
        notifications
            .expect_send()
            .withf(move |_, request| match (recipient, request.target()) {
                (None, NotificationTarget::Broadcast) => true,
                (Some(raw), NotificationTarget::Individual(id)) => id.as_ref() == raw,
                _ => false,
            })
            .times(1)
            .return_once(|_, _| {
                Ok(SendNotificationOutcome {
                    created: 2,
                    emailed: 1,
                    email_failures: 1,
                })
            });
        let mut state = mock_state();
        state.notifications = Arc::new(notifications);
        let app = actix_test::init_service(api_app(state)).await;
        let cookie = login_as(&app, "ADMIN1").await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/admin/notifications")
                .cookie(cookie)
                .set_json(SendNotificationBody {
                    title: "Exam duty".into(),
                    message: "Report at 9".into(),
                    recipient_id: recipient.map(str::to_owned),
                })
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json_body(response).await;
        assert_eq!(
            body,
            json!({"created": 2, "emailed": 1, "emailFailures": 1})
        );
    }

    #[actix_web::test]
    async fn blank_titles_are_rejected_inline() {
        let app = actix_test::init_service(api_app(mock_state())).await;
        let cookie = login_as(&app, "ADMIN1").await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/admin/notifications")
                .cookie(cookie)
                .set_json(json!({"title": " ", "message": "body"}))
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["details"], json!({"field": "title", "code": "required"}));
    }
}
