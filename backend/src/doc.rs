//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every `/api/v1` handler, the health probes, the
//! request and response schemas, and the session cookie security scheme.
//! Swagger UI serves it in debug builds; `cargo run --bin openapi-dump`
//! exports it for external tooling.

use crate::domain::ports::{DirectoryEntry, NotificationInbox, SessionSummary};
use crate::domain::teacher_profile::{
    AdminExperience, Award, EducationEntry, Event, Membership, Project, Publication, SocialLinks,
    StudentInteraction, TeachingExperience,
};
use crate::domain::{
    ContactOutcome, ContactStatus, Error, ErrorCode, Notification, NotificationKind,
    SendNotificationOutcome, TeacherProfile, UserProfile,
};
use crate::inbound::http::accounts::{LoginBody, SignupBody};
use crate::inbound::http::admin::{AdminMembershipBody, CreateEmployeeBody, SendNotificationBody};
use crate::inbound::http::contact::ContactBody;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Private session cookie issued by POST /api/v1/login or /api/v1/signup.",
            ))),
        );
    }
}

/// OpenAPI document for the faculty directory REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Faculty directory API",
        description = "Employee accounts, merged faculty profiles, admin tooling, notifications and the public contact form."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::accounts::signup,
        crate::inbound::http::accounts::login,
        crate::inbound::http::accounts::logout,
        crate::inbound::http::accounts::current_session,
        crate::inbound::http::profile::get_profile,
        crate::inbound::http::profile::update_profile,
        crate::inbound::http::profile::complete_onboarding,
        crate::inbound::http::admin::list_employees,
        crate::inbound::http::admin::create_employee,
        crate::inbound::http::admin::delete_employee,
        crate::inbound::http::admin::set_admin,
        crate::inbound::http::admin::send_notification,
        crate::inbound::http::notifications::list_notifications,
        crate::inbound::http::notifications::mark_read,
        crate::inbound::http::contact::submit_contact,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        SessionSummary,
        UserProfile,
        TeacherProfile,
        EducationEntry,
        TeachingExperience,
        AdminExperience,
        Publication,
        Project,
        Award,
        Event,
        Membership,
        StudentInteraction,
        SocialLinks,
        DirectoryEntry,
        Notification,
        NotificationKind,
        NotificationInbox,
        SendNotificationOutcome,
        ContactOutcome,
        ContactStatus,
        SignupBody,
        LoginBody,
        CreateEmployeeBody,
        AdminMembershipBody,
        SendNotificationBody,
        ContactBody,
    )),
    tags(
        (name = "accounts", description = "Signup, login and session"),
        (name = "profile", description = "Merged profile, editor and onboarding"),
        (name = "admin", description = "Directory administration"),
        (name = "notifications", description = "Employee inbox"),
        (name = "contact", description = "Public contact form"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI schema field structure.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn schema(name: &str) -> RefOr<Schema> {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        components
            .schemas
            .get(name)
            .cloned()
            .unwrap_or_else(|| panic!("{name} schema registered"))
    }

    #[rstest]
    #[case("Error", &["code", "message", "traceId", "details"])]
    #[case("UserProfile", &["employeeId", "fullName", "officialEmail", "isAdmin", "education"])]
    #[case("SessionSummary", &["employeeId", "fullName", "isAdmin", "onboardingRequired"])]
    #[case("NotificationInbox", &["notifications", "unreadCount"])]
    fn schemas_expose_wire_field_names(#[case] name: &str, #[case] fields: &[&str]) {
        match schema(name) {
            RefOr::T(Schema::Object(obj)) => {
                for field in fields {
                    assert!(
                        obj.properties.contains_key(*field),
                        "{name} should have field '{field}'"
                    );
                }
            }
            _ => panic!("expected {name} to be an object schema"),
        }
    }

    #[rstest]
    fn cookie_security_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("SessionCookie"));
    }
}
