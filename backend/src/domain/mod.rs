//! Domain primitives, aggregates and services.
//!
//! Purpose: Define strongly typed domain entities used by the API and
//! persistence layers, together with the services behind the driving ports.
//! Keep types immutable and document invariants and serialisation contracts
//! (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Employee (alias to `employee::Employee`): login identity.
//! - TeacherProfile / UserProfile: stored and merged profile documents.
//! - merge_profile: the single place profile fields are reconciled.

pub mod admin;
pub mod auth;
pub mod contact;
pub mod employee;
pub mod error;
pub mod field_error;
pub mod notifications;
pub mod ports;
pub mod profile_forms;
pub mod profile_merge;
pub mod teacher_profile;
pub mod trace_id;
pub mod user_profile;

mod account_service;
mod contact_service;
mod credentials;
mod directory_service;
mod email_templates;
mod notification_service;
mod profile_service;
mod store_error_mapping;

pub use self::account_service::AccountService;
pub use self::admin::{AdminRole, AdminSet};
pub use self::auth::{
    CredentialValidationError, LoginCredentials, NewPassword, PASSWORD_MAX, PASSWORD_MIN,
    PasswordHash, SignupRequest,
};
pub use self::contact::{
    CONTACT_MESSAGE_MAX, ContactOutcome, ContactRequest, ContactStatus, ContactSubmission,
};
pub use self::contact_service::ContactService;
pub use self::directory_service::DirectoryService;
pub use self::employee::{
    EMPLOYEE_ID_MAX, Employee, EmployeeId, EmployeeValidationError, FULL_NAME_MAX, FullName,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::field_error::FieldError;
pub use self::notification_service::NotificationService;
pub use self::notifications::{
    NOTIFICATION_MESSAGE_MAX, NOTIFICATION_TITLE_MAX, Notification, NotificationKind,
    NotificationTarget, SendNotification, SendNotificationOutcome, UnknownNotificationKind,
};
pub use self::profile_forms::{ABOUT_MAX, OnboardingSubmission, PROFILE_TEXT_MAX, ProfileUpdate};
pub use self::profile_merge::{ProfileIncomplete, contact_email, merge_profile};
pub use self::profile_service::{ONBOARDING_PATH, ProfileService, onboarding_required_error};
pub use self::teacher_profile::TeacherProfile;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user_profile::UserProfile;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
