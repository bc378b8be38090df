//! Tests for HTTP error mapping.

use super::*;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::{fixture, rstest};
use rstest_bdd_macros::{given, then, when};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn trace_id() -> String {
    TRACE_ID.to_owned()
}

async fn response_payload(error: &Error) -> (StatusCode, Option<String>, Error) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("ascii header").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let payload = serde_json::from_slice(&bytes).expect("error JSON deserialisation succeeds");
    (status, header, payload)
}

#[rstest]
#[case::invalid(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case::unauthorized(Error::unauthorized("no session"), StatusCode::UNAUTHORIZED)]
#[case::forbidden(Error::forbidden("admins only"), StatusCode::FORBIDDEN)]
#[case::not_found(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case::conflict(Error::conflict("taken"), StatusCode::CONFLICT)]
#[case::unavailable(Error::service_unavailable("mail down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case::internal(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted_but_keep_the_trace(trace_id: String) {
    let error = Error::internal("db password is hunter2")
        .with_trace_id(trace_id.clone())
        .with_details(json!({"secret": "x"}));

    let (status, header, payload) = response_payload(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(trace_id.as_str()));
    assert_eq!(payload.message(), "Internal server error");
    assert!(payload.details().is_none());
    assert_eq!(payload.trace_id(), Some(trace_id.as_str()));
}

#[rstest]
#[actix_web::test]
async fn conflict_details_reach_the_client(trace_id: String) {
    let error = Error::conflict("profile onboarding is required")
        .with_trace_id(trace_id)
        .with_details(json!({"code": "onboarding_required", "redirect": "/onboarding"}));

    let (status, _, payload) = response_payload(&error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(payload.code(), ErrorCode::Conflict);
    assert_eq!(
        payload.details(),
        Some(&json!({"code": "onboarding_required", "redirect": "/onboarding"}))
    );
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let error = Error::invalid_request("bad").with_details(json!({"field": "phone"}));

    let (status, header, payload) = response_payload(&error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(header.is_none());
    assert_eq!(payload.trace_id(), None);
    assert_eq!(payload.details(), Some(&json!({"field": "phone"})));
}

#[given("a service unavailable error code")]
fn a_service_unavailable_error_code() -> ErrorCode {
    ErrorCode::ServiceUnavailable
}

#[when("the adapter maps the code to an HTTP status")]
fn the_adapter_maps_the_code_to_an_http_status(code: ErrorCode) -> StatusCode {
    super::status_for(code)
}

#[then("the status is 503 Service Unavailable")]
fn the_status_is_503(status: StatusCode) {
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[rstest]
fn unavailable_mail_maps_to_503() {
    let code = a_service_unavailable_error_code();
    let status = the_adapter_maps_the_code_to_an_http_status(code);
    the_status_is_503(status);
}

#[test]
fn from_actix_error_is_redacted_internal_error() {
    let err: Error = actix_web::error::ErrorBadRequest("boom").into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "Internal server error");
    assert_eq!(err.details(), None);
}
