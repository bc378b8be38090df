//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! The cookie only carries the employee id. Services re-read the employee on
//! every request, so a deleted account stops working at its next call.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{EmployeeId, Error};

pub(crate) const EMPLOYEE_ID_KEY: &str = "employee_id";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store `employee_id` under a fresh session key.
    pub fn persist_employee(&self, employee_id: &EmployeeId) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(EMPLOYEE_ID_KEY, employee_id.as_ref())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Current employee id, if the cookie carries a valid one.
    pub fn employee_id(&self) -> Result<Option<EmployeeId>, Error> {
        let raw = self
            .0
            .get::<String>(EMPLOYEE_ID_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        Ok(raw.and_then(|raw| match EmployeeId::new(&raw) {
            Ok(id) => Some(id),
            Err(error) => {
                warn!(%error, "invalid employee id in session cookie");
                None
            }
        }))
    }

    /// Require a logged-in employee or fail with `401 Unauthorized`.
    pub fn require_employee_id(&self) -> Result<EmployeeId, Error> {
        self.employee_id()?
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Drop every session value and expire the cookie.
    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
