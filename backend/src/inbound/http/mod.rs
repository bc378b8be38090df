//! HTTP inbound adapter exposing REST endpoints.

pub mod accounts;
pub mod admin;
pub mod contact;
pub mod error;
pub mod health;
pub mod notifications;
pub mod profile;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;

use actix_web::web;

/// Register every `/api/v1` handler on `cfg`.
///
/// The caller owns the scope so it can attach the session middleware.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use backend::inbound::http::api_routes;
///
/// let _app = App::new().service(web::scope("/api/v1").configure(api_routes));
/// ```
pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(accounts::signup)
        .service(accounts::login)
        .service(accounts::logout)
        .service(accounts::current_session)
        .service(profile::get_profile)
        .service(profile::update_profile)
        .service(profile::complete_onboarding)
        .service(admin::list_employees)
        .service(admin::create_employee)
        .service(admin::delete_employee)
        .service(admin::set_admin)
        .service(admin::send_notification)
        .service(notifications::list_notifications)
        .service(notifications::mark_read)
        .service(contact::submit_contact);
}
