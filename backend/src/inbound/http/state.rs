//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ContactCommand, DirectoryAdmin, LoginService, NotificationCommand, NotificationQuery,
    ProfileCommand, ProfileQuery, SessionQuery, SignupService,
};

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
///
/// use backend::domain::ports::{
///     FixtureAdminRepository, FixtureContactSubmissionRepository, FixtureEmployeeRepository,
///     FixtureMailer, FixtureNotificationRepository, FixtureTeacherProfileRepository,
/// };
/// use backend::domain::{
///     AccountService, ContactService, DirectoryService, NotificationService, ProfileService,
/// };
/// use backend::inbound::http::state::HttpState;
/// use backend::outbound::security::Argon2Hasher;
///
/// let employees = Arc::new(FixtureEmployeeRepository);
/// let admins = Arc::new(FixtureAdminRepository);
/// let profiles = Arc::new(FixtureTeacherProfileRepository);
/// let hasher = Arc::new(Argon2Hasher::default());
/// let accounts = Arc::new(AccountService::new(
///     employees.clone(),
///     admins.clone(),
///     profiles.clone(),
///     hasher.clone(),
/// ));
/// let profile = Arc::new(ProfileService::new(employees.clone(), profiles.clone(), admins.clone()));
/// let notifications = Arc::new(NotificationService::new(
///     employees.clone(),
///     profiles.clone(),
///     admins.clone(),
///     Arc::new(FixtureNotificationRepository),
///     Arc::new(FixtureMailer),
///     Arc::new(mockable::DefaultClock),
/// ));
/// let state = HttpState {
///     login: accounts.clone(),
///     signup: accounts.clone(),
///     session: accounts,
///     profile_query: profile.clone(),
///     profile_command: profile,
///     directory: Arc::new(DirectoryService::new(employees, profiles, admins, hasher)),
///     notifications: notifications.clone(),
///     notifications_query: notifications,
///     contact: Arc::new(ContactService::new(
///         Arc::new(FixtureMailer),
///         Arc::new(FixtureContactSubmissionRepository),
///         Arc::new(mockable::DefaultClock),
///         "office@example.edu",
///     )),
/// };
/// let _login = state.login.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub signup: Arc<dyn SignupService>,
    pub session: Arc<dyn SessionQuery>,
    pub profile_query: Arc<dyn ProfileQuery>,
    pub profile_command: Arc<dyn ProfileCommand>,
    pub directory: Arc<dyn DirectoryAdmin>,
    pub notifications: Arc<dyn NotificationCommand>,
    pub notifications_query: Arc<dyn NotificationQuery>,
    pub contact: Arc<dyn ContactCommand>,
}
