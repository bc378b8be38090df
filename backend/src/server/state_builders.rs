//! Builders for HTTP state ports over database-backed or fixture stores.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::{info, warn};

use backend::domain::ports::{
    AdminRepository, ContactSubmissionRepository, CredentialHasher, EmployeeRepository,
    FixtureAdminRepository, FixtureContactSubmissionRepository, FixtureEmployeeRepository,
    FixtureNotificationRepository, FixtureTeacherProfileRepository, Mailer,
    NotificationRepository, TeacherProfileRepository,
};
use backend::domain::{
    AccountService, ContactService, DirectoryService, NotificationService, ProfileService,
};
use backend::inbound::http::state::HttpState;
use backend::outbound::mail::{HttpMailer, LoggingMailer};
use backend::outbound::persistence::{
    DbPool, DieselAdminRepository, DieselContactSubmissionRepository, DieselEmployeeRepository,
    DieselNotificationRepository, DieselTeacherProfileRepository,
};
use backend::outbound::security::Argon2Hasher;

use super::ServerConfig;

/// Driven adapters shared by every service.
struct Stores<E, A, P, N, C> {
    employees: Arc<E>,
    admins: Arc<A>,
    profiles: Arc<P>,
    notifications: Arc<N>,
    submissions: Arc<C>,
}

impl
    Stores<
        DieselEmployeeRepository,
        DieselAdminRepository,
        DieselTeacherProfileRepository,
        DieselNotificationRepository,
        DieselContactSubmissionRepository,
    >
{
    fn diesel(pool: &DbPool) -> Self {
        Self {
            employees: Arc::new(DieselEmployeeRepository::new(pool.clone())),
            admins: Arc::new(DieselAdminRepository::new(pool.clone())),
            profiles: Arc::new(DieselTeacherProfileRepository::new(pool.clone())),
            notifications: Arc::new(DieselNotificationRepository::new(pool.clone())),
            submissions: Arc::new(DieselContactSubmissionRepository::new(pool.clone())),
        }
    }
}

impl
    Stores<
        FixtureEmployeeRepository,
        FixtureAdminRepository,
        FixtureTeacherProfileRepository,
        FixtureNotificationRepository,
        FixtureContactSubmissionRepository,
    >
{
    fn fixtures() -> Self {
        Self {
            employees: Arc::new(FixtureEmployeeRepository),
            admins: Arc::new(FixtureAdminRepository),
            profiles: Arc::new(FixtureTeacherProfileRepository),
            notifications: Arc::new(FixtureNotificationRepository),
            submissions: Arc::new(FixtureContactSubmissionRepository),
        }
    }
}

/// Non-store collaborators.
struct Collaborators<H> {
    hasher: Arc<H>,
    mailer: Arc<dyn Mailer>,
    clock: Arc<dyn Clock>,
    contact_inbox: String,
}

fn assemble<E, A, P, N, C, H>(
    stores: Stores<E, A, P, N, C>,
    collaborators: Collaborators<H>,
) -> HttpState
where
    E: EmployeeRepository + 'static,
    A: AdminRepository + 'static,
    P: TeacherProfileRepository + 'static,
    N: NotificationRepository + 'static,
    C: ContactSubmissionRepository + 'static,
    H: CredentialHasher + 'static,
{
    let Stores {
        employees,
        admins,
        profiles,
        notifications,
        submissions,
    } = stores;
    let Collaborators {
        hasher,
        mailer,
        clock,
        contact_inbox,
    } = collaborators;

    let accounts = Arc::new(AccountService::new(
        employees.clone(),
        admins.clone(),
        profiles.clone(),
        hasher.clone(),
    ));
    let profile = Arc::new(ProfileService::new(
        employees.clone(),
        profiles.clone(),
        admins.clone(),
    ));
    let notification_service = Arc::new(NotificationService::new(
        employees.clone(),
        profiles.clone(),
        admins.clone(),
        notifications,
        mailer.clone(),
        clock.clone(),
    ));

    HttpState {
        login: accounts.clone(),
        signup: accounts.clone(),
        session: accounts,
        profile_query: profile.clone(),
        profile_command: profile,
        directory: Arc::new(DirectoryService::new(employees, profiles, admins, hasher)),
        notifications: notification_service.clone(),
        notifications_query: notification_service,
        contact: Arc::new(ContactService::new(
            mailer,
            submissions,
            clock,
            contact_inbox,
        )),
    }
}

fn build_mailer(config: &ServerConfig) -> std::io::Result<Arc<dyn Mailer>> {
    match &config.mailer {
        Some(mailer_config) => {
            let mailer = HttpMailer::new(mailer_config.clone()).map_err(|err| {
                std::io::Error::other(format!("mail client construction failed: {err}"))
            })?;
            info!(endpoint = %mailer_config.endpoint, "sending email through the mail API");
            Ok(Arc::new(mailer))
        }
        None => {
            warn!("mail API not configured; outgoing email will only be logged");
            Ok(Arc::new(LoggingMailer))
        }
    }
}

/// Build the HTTP state from `config`.
///
/// Uses Diesel repositories when a pool is configured and empty fixtures
/// otherwise.
///
/// # Errors
/// Returns [`std::io::Error`] when the mail client cannot be constructed.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let collaborators = Collaborators {
        hasher: Arc::new(Argon2Hasher::default()),
        mailer: build_mailer(config)?,
        clock: Arc::new(DefaultClock),
        contact_inbox: config.contact_inbox.clone(),
    };

    let state = match &config.db_pool {
        Some(pool) => assemble(Stores::diesel(pool), collaborators),
        None => {
            warn!("no database configured; serving from empty fixtures");
            assemble(Stores::fixtures(), collaborators)
        }
    };
    Ok(web::Data::new(state))
}
