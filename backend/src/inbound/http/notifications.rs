//! Inbox handlers for the signed-in employee.

use actix_web::{HttpResponse, get, post, web};

use crate::domain::Error;
use crate::domain::ports::NotificationInbox;
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_uuid;

/// Own notifications, newest first, with the unread count.
#[utoipa::path(
    get,
    path = "/api/v1/notifications",
    responses(
        (status = 200, description = "Inbox", body = NotificationInbox),
        (status = 401, description = "Not signed in", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "listNotifications"
)]
#[get("/notifications")]
pub async fn list_notifications(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<NotificationInbox>> {
    let recipient = session.require_employee_id()?;
    Ok(web::Json(state.notifications_query.inbox(&recipient).await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/notifications/{id}/read",
    params(("id" = String, Path, description = "Notification UUID")),
    responses(
        (status = 204, description = "Marked as read"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Not signed in", body = Error),
        (status = 404, description = "No such notification for this employee", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "markNotificationRead"
)]
#[post("/notifications/{id}/read")]
pub async fn mark_read(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let recipient = session.require_employee_id()?;
    let id = parse_uuid(&path, "id")?;
    state.notifications.mark_read(&recipient, id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockNotificationCommand, MockNotificationQuery};
    use crate::inbound::http::test_utils::{api_app, json_body, login_as, mock_state};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use std::sync::Arc;
    use uuid::Uuid;

    #[actix_web::test]
    async fn inbox_is_scoped_to_the_session() {
        let mut query = MockNotificationQuery::new();
        query
            .expect_inbox()
            .withf(|recipient| recipient.as_ref() == "EMP002")
            .return_once(|_| {
                Ok(NotificationInbox {
                    notifications: Vec::new(),
                    unread_count: 3,
                })
            });
        let mut state = mock_state();
        state.notifications_query = Arc::new(query);
        let app = actix_test::init_service(api_app(state)).await;
        let cookie = login_as(&app, "EMP002").await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/notifications")
                .cookie(cookie)
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["unreadCount"], 3);
    }

    #[actix_web::test]
    async fn mark_read_parses_the_id() {
        let id = Uuid::new_v4();
        let mut command = MockNotificationCommand::new();
        command
            .expect_mark_read()
            .withf(move |recipient, candidate| recipient.as_ref() == "EMP002" && *candidate == id)
            .times(1)
            .return_once(|_, _| Ok(()));
        let mut state = mock_state();
        state.notifications = Arc::new(command);
        let app = actix_test::init_service(api_app(state)).await;
        let cookie = login_as(&app, "EMP002").await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/api/v1/notifications/{id}/read"))
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn foreign_notifications_are_not_found() {
        let mut command = MockNotificationCommand::new();
        command
            .expect_mark_read()
            .return_once(|_, id| Err(Error::not_found(format!("notification {id} not found"))));
        let mut state = mock_state();
        state.notifications = Arc::new(command);
        let app = actix_test::init_service(api_app(state)).await;
        let cookie = login_as(&app, "EMP002").await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/api/v1/notifications/{}/read", Uuid::nil()))
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn malformed_ids_are_rejected() {
        let app = actix_test::init_service(api_app(mock_state())).await;
        let cookie = login_as(&app, "EMP002").await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/notifications/not-a-uuid/read")
                .cookie(cookie)
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["details"]["code"], "invalid_uuid");
    }
}
