//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (repositories, mailer, hasher) are implemented by outbound
//! adapters; driving ports are what inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod admin_repository;
mod contact_command;
mod contact_submission_repository;
mod credential_hasher;
mod directory_admin;
mod employee_repository;
mod login_service;
mod mailer;
mod notification_command;
mod notification_query;
mod notification_repository;
mod profile_command;
mod profile_query;
mod session_query;
mod signup_service;
mod teacher_profile_repository;

#[cfg(test)]
pub use admin_repository::MockAdminRepository;
pub use admin_repository::{AdminRepository, AdminRepositoryError, FixtureAdminRepository};
pub use contact_command::ContactCommand;
#[cfg(test)]
pub use contact_command::MockContactCommand;
#[cfg(test)]
pub use contact_submission_repository::MockContactSubmissionRepository;
pub use contact_submission_repository::{
    ContactSubmissionRepository, ContactSubmissionRepositoryError,
    FixtureContactSubmissionRepository,
};
#[cfg(test)]
pub use credential_hasher::MockCredentialHasher;
pub use credential_hasher::{CredentialHasher, CredentialHasherError};
#[cfg(test)]
pub use directory_admin::MockDirectoryAdmin;
pub use directory_admin::{DirectoryAdmin, DirectoryEntry, NewEmployee};
#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
pub use employee_repository::{
    EmployeeRepository, EmployeeRepositoryError, FixtureEmployeeRepository, NewEmployeeRecord,
};
pub use login_service::LoginService;
#[cfg(test)]
pub use login_service::MockLoginService;
#[cfg(test)]
pub use mailer::MockMailer;
pub use mailer::{FixtureMailer, Mailer, MailerError, OutboundEmail};
#[cfg(test)]
pub use notification_command::MockNotificationCommand;
pub use notification_command::NotificationCommand;
#[cfg(test)]
pub use notification_query::MockNotificationQuery;
pub use notification_query::{NotificationInbox, NotificationQuery};
#[cfg(test)]
pub use notification_repository::MockNotificationRepository;
pub use notification_repository::{
    FixtureNotificationRepository, NotificationRepository, NotificationRepositoryError,
};
#[cfg(test)]
pub use profile_command::MockProfileCommand;
pub use profile_command::ProfileCommand;
#[cfg(test)]
pub use profile_query::MockProfileQuery;
pub use profile_query::{ProfileQuery, ProfileView};
#[cfg(test)]
pub use session_query::MockSessionQuery;
pub use session_query::{SessionQuery, SessionSummary};
#[cfg(test)]
pub use signup_service::MockSignupService;
pub use signup_service::SignupService;
#[cfg(test)]
pub use teacher_profile_repository::MockTeacherProfileRepository;
pub use teacher_profile_repository::{
    FixtureTeacherProfileRepository, TeacherProfileRepository, TeacherProfileRepositoryError,
};
