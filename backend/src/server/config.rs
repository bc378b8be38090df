//! HTTP server configuration object and helpers.

use actix_web::cookie::{Key, SameSite};
use backend::inbound::http::session_config::SessionSettings;
use backend::outbound::mail::HttpMailerConfig;
use backend::outbound::persistence::DbPool;
use std::net::SocketAddr;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) ttl_hours: i64,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) contact_inbox: String,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) mailer: Option<HttpMailerConfig>,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a server configuration from validated session settings.
    #[must_use]
    pub fn new(
        session: SessionSettings,
        bind_addr: SocketAddr,
        contact_inbox: impl Into<String>,
    ) -> Self {
        let SessionSettings {
            key,
            cookie_secure,
            same_site,
            ttl_hours,
        } = session;
        Self {
            key,
            cookie_secure,
            same_site,
            ttl_hours,
            bind_addr,
            contact_inbox: contact_inbox.into(),
            db_pool: None,
            mailer: None,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Attach a database connection pool.
    ///
    /// Without one every store is an in-memory fixture, which is only useful
    /// for local smoke tests.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Send email through the HTTP mail API instead of logging it.
    #[must_use]
    pub fn with_mailer(mut self, mailer: HttpMailerConfig) -> Self {
        self.mailer = Some(mailer);
        self
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
