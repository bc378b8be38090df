//! Shared helpers for HTTP integration suites.
//!
//! [`InMemoryDirectory`] implements every driven store port over one mutex so
//! the real services can run behind the real handlers without PostgreSQL.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};
use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use backend::domain::ports::{
    AdminRepository, AdminRepositoryError, ContactSubmissionRepository,
    ContactSubmissionRepositoryError, EmployeeRepository, EmployeeRepositoryError, Mailer,
    MailerError, NewEmployeeRecord, NotificationRepository, NotificationRepositoryError,
    OutboundEmail, TeacherProfileRepository, TeacherProfileRepositoryError,
};
use backend::domain::{
    AccountService, AdminRole, AdminSet, ContactService, ContactSubmission, DirectoryService,
    Employee, EmployeeId, Notification, NotificationService, PasswordHash, ProfileService,
    TeacherProfile,
};
use backend::inbound::http::api_routes;
use backend::inbound::http::state::HttpState;
use backend::outbound::security::Argon2Hasher;

pub const CONTACT_INBOX: &str = "office@college.edu";

#[derive(Default)]
struct Tables {
    employees: BTreeMap<EmployeeId, (Employee, PasswordHash)>,
    admins: BTreeMap<EmployeeId, AdminRole>,
    profiles: BTreeMap<EmployeeId, TeacherProfile>,
    notifications: Vec<Notification>,
    submissions: Vec<ContactSubmission>,
}

/// All five stores behind one lock.
#[derive(Default)]
pub struct InMemoryDirectory {
    tables: Mutex<Tables>,
}

impl InMemoryDirectory {
    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().expect("directory lock")
    }

    pub fn submissions(&self) -> Vec<ContactSubmission> {
        self.tables().submissions.clone()
    }

    pub fn profile(&self, employee_id: &str) -> Option<TeacherProfile> {
        let id = EmployeeId::new(employee_id).expect("valid id");
        self.tables().profiles.get(&id).cloned()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryDirectory {
    async fn find_by_id(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        Ok(self
            .tables()
            .employees
            .get(employee_id)
            .map(|(employee, _)| employee.clone()))
    }

    async fn find_password_hash(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<PasswordHash>, EmployeeRepositoryError> {
        Ok(self
            .tables()
            .employees
            .get(employee_id)
            .map(|(_, hash)| hash.clone()))
    }

    async fn list(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        Ok(self
            .tables()
            .employees
            .values()
            .map(|(employee, _)| employee.clone())
            .collect())
    }

    async fn create(&self, record: &NewEmployeeRecord) -> Result<(), EmployeeRepositoryError> {
        let mut tables = self.tables();
        let id = record.employee.employee_id().clone();
        if tables.employees.contains_key(&id) {
            return Err(EmployeeRepositoryError::duplicate_employee_id(id.as_ref()));
        }
        tables.employees.insert(
            id.clone(),
            (record.employee.clone(), record.password_hash.clone()),
        );
        if let Some(profile) = &record.profile {
            tables.profiles.insert(id.clone(), profile.clone());
        }
        if let Some(role) = &record.admin_role {
            tables.admins.insert(id, role.clone());
        }
        Ok(())
    }

    async fn delete(&self, employee_id: &EmployeeId) -> Result<bool, EmployeeRepositoryError> {
        let mut tables = self.tables();
        tables.profiles.remove(employee_id);
        tables.admins.remove(employee_id);
        Ok(tables.employees.remove(employee_id).is_some())
    }
}

#[async_trait]
impl AdminRepository for InMemoryDirectory {
    async fn list_admins(&self) -> Result<AdminSet, AdminRepositoryError> {
        Ok(self.tables().admins.keys().cloned().collect())
    }

    async fn is_admin(&self, employee_id: &EmployeeId) -> Result<bool, AdminRepositoryError> {
        Ok(self.tables().admins.contains_key(employee_id))
    }

    async fn grant(
        &self,
        employee_id: &EmployeeId,
        role: &AdminRole,
    ) -> Result<(), AdminRepositoryError> {
        self.tables()
            .admins
            .entry(employee_id.clone())
            .or_insert_with(|| role.clone());
        Ok(())
    }

    async fn revoke(&self, employee_id: &EmployeeId) -> Result<bool, AdminRepositoryError> {
        Ok(self.tables().admins.remove(employee_id).is_some())
    }
}

#[async_trait]
impl TeacherProfileRepository for InMemoryDirectory {
    async fn find(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<TeacherProfile>, TeacherProfileRepositoryError> {
        Ok(self.tables().profiles.get(employee_id).cloned())
    }

    async fn list(
        &self,
    ) -> Result<Vec<(EmployeeId, TeacherProfile)>, TeacherProfileRepositoryError> {
        Ok(self
            .tables()
            .profiles
            .iter()
            .map(|(id, profile)| (id.clone(), profile.clone()))
            .collect())
    }

    async fn upsert(
        &self,
        employee_id: &EmployeeId,
        profile: &TeacherProfile,
    ) -> Result<(), TeacherProfileRepositoryError> {
        self.tables()
            .profiles
            .insert(employee_id.clone(), profile.clone());
        Ok(())
    }
}

#[async_trait]
impl NotificationRepository for InMemoryDirectory {
    async fn insert_many(
        &self,
        notifications: &[Notification],
    ) -> Result<(), NotificationRepositoryError> {
        self.tables()
            .notifications
            .extend(notifications.iter().cloned());
        Ok(())
    }

    async fn list_for_recipient(
        &self,
        recipient_id: &EmployeeId,
    ) -> Result<Vec<Notification>, NotificationRepositoryError> {
        let mut rows: Vec<Notification> = self
            .tables()
            .notifications
            .iter()
            .filter(|row| &row.recipient_id == recipient_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn unread_count(
        &self,
        recipient_id: &EmployeeId,
    ) -> Result<u64, NotificationRepositoryError> {
        let count = self
            .tables()
            .notifications
            .iter()
            .filter(|row| &row.recipient_id == recipient_id && !row.is_read)
            .count();
        Ok(u64::try_from(count).expect("count fits"))
    }

    async fn mark_read(
        &self,
        recipient_id: &EmployeeId,
        notification_id: Uuid,
    ) -> Result<bool, NotificationRepositoryError> {
        let mut tables = self.tables();
        let row = tables
            .notifications
            .iter_mut()
            .find(|row| row.id == notification_id && &row.recipient_id == recipient_id);
        Ok(row.map(|row| row.is_read = true).is_some())
    }
}

#[async_trait]
impl ContactSubmissionRepository for InMemoryDirectory {
    async fn insert(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), ContactSubmissionRepositoryError> {
        self.tables().submissions.push(submission.clone());
        Ok(())
    }
}

/// Mailer that keeps every message it is handed.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundEmail>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().expect("mailer lock").clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailerError> {
        self.sent.lock().expect("mailer lock").push(email.clone());
        Ok(())
    }
}

/// Stores, mailer and the HTTP state built over them.
pub struct Harness {
    pub directory: Arc<InMemoryDirectory>,
    pub mailer: Arc<RecordingMailer>,
    pub state: HttpState,
}

impl Harness {
    pub fn new() -> Self {
        let directory = Arc::new(InMemoryDirectory::default());
        let mailer = Arc::new(RecordingMailer::default());
        let hasher = Arc::new(Argon2Hasher::default());
        let clock: Arc<dyn mockable::Clock> = Arc::new(mockable::DefaultClock);

        let accounts = Arc::new(AccountService::new(
            directory.clone(),
            directory.clone(),
            directory.clone(),
            hasher.clone(),
        ));
        let profile = Arc::new(ProfileService::new(
            directory.clone(),
            directory.clone(),
            directory.clone(),
        ));
        let notifications = Arc::new(NotificationService::new(
            directory.clone(),
            directory.clone(),
            directory.clone(),
            directory.clone(),
            mailer.clone(),
            clock.clone(),
        ));
        let state = HttpState {
            login: accounts.clone(),
            signup: accounts.clone(),
            session: accounts,
            profile_query: profile.clone(),
            profile_command: profile,
            directory: Arc::new(DirectoryService::new(
                directory.clone(),
                directory.clone(),
                directory.clone(),
                hasher,
            )),
            notifications: notifications.clone(),
            notifications_query: notifications,
            contact: Arc::new(ContactService::new(
                mailer.clone(),
                directory.clone(),
                clock,
                CONTACT_INBOX,
            )),
        };

        Self {
            directory,
            mailer,
            state,
        }
    }
}

/// Initialise the `/api/v1` surface over `state` with a throwaway session key.
pub async fn init_app(
    state: HttpState,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build();
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(web::scope("/api/v1").wrap(session).configure(api_routes)),
    )
    .await
}

/// Extract the `session` cookie set by `response`, if any.
pub fn session_cookie(response: &ServiceResponse) -> Option<Cookie<'static>> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
}

/// Read a JSON body from `response`.
pub async fn json_body(response: ServiceResponse) -> Value {
    let bytes = test::read_body(response).await;
    serde_json::from_slice(&bytes).expect("JSON body")
}
