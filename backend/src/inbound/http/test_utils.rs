//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpResponse, test, web};
use serde_json::Value;

use crate::domain::ports::{
    MockContactCommand, MockDirectoryAdmin, MockLoginService, MockNotificationCommand,
    MockNotificationQuery, MockProfileCommand, MockProfileQuery, MockSessionQuery,
    MockSignupService,
};
use crate::domain::{EmployeeId, Error};
use crate::inbound::http::api_routes;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Session middleware with a throwaway key and a non-`Secure` cookie.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// State whose ports are mocks without expectations; any call panics.
pub fn mock_state() -> HttpState {
    HttpState {
        login: Arc::new(MockLoginService::new()),
        signup: Arc::new(MockSignupService::new()),
        session: Arc::new(MockSessionQuery::new()),
        profile_query: Arc::new(MockProfileQuery::new()),
        profile_command: Arc::new(MockProfileCommand::new()),
        directory: Arc::new(MockDirectoryAdmin::new()),
        notifications: Arc::new(MockNotificationCommand::new()),
        notifications_query: Arc::new(MockNotificationQuery::new()),
        contact: Arc::new(MockContactCommand::new()),
    }
}

async fn seed_session(
    session: SessionContext,
    employee_id: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let employee_id = EmployeeId::new(employee_id.as_str())
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    session.persist_employee(&employee_id)?;
    Ok(HttpResponse::NoContent().finish())
}

/// The full `/api/v1` surface over `state`, plus a `/test/session/{id}`
/// route that logs in without credentials.
pub fn api_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(test_session_middleware())
        .route("/test/session/{employee_id}", web::post().to(seed_session))
        .service(web::scope("/api/v1").configure(api_routes))
}

/// Extract the `session` cookie set by `response`.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie set")
        .into_owned()
}

/// Cookie for a session belonging to `employee_id`.
pub async fn login_as<S>(app: &S, employee_id: &str) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let response = test::call_service(
        app,
        test::TestRequest::post()
            .uri(&format!("/test/session/{employee_id}"))
            .to_request(),
    )
    .await;
    assert!(response.status().is_success(), "seeding session failed");
    session_cookie(&response)
}

/// Employee id used by handler tests.
pub fn employee(raw: &str) -> EmployeeId {
    EmployeeId::new(raw).expect("valid employee id")
}

/// Read a JSON body from `response`.
pub async fn json_body(response: ServiceResponse) -> Value {
    let bytes = test::read_body(response).await;
    serde_json::from_slice(&bytes).expect("JSON body")
}
