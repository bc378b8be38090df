//! Process configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `FACULTY_*` environment variables and an
//! optional configuration file, in that order of precedence. Session cookie
//! settings are parsed separately by
//! [`crate::inbound::http::session_config`].

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_PORT: u16 = 8080;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_DB_CONNECTION_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAIL_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAIL_FROM: &str = "Faculty Directory <noreply@localhost>";
const DEFAULT_CONTACT_INBOX: &str = "office@localhost";

/// Startup settings for the faculty directory server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FACULTY")]
pub struct AppSettings {
    /// Interface to bind; defaults to all IPv4 interfaces.
    pub bind_host: Option<IpAddr>,
    pub bind_port: Option<u16>,
    /// PostgreSQL URL. Without it the server runs over in-memory fixtures.
    pub database_url: Option<String>,
    pub db_max_connections: Option<u32>,
    pub db_connection_timeout_secs: Option<u64>,
    /// Transactional email API endpoint. Without it mail is only logged.
    pub mail_api_url: Option<String>,
    pub mail_api_key: Option<String>,
    pub mail_from: Option<String>,
    /// Recipient of contact form messages.
    pub contact_inbox: Option<String>,
    pub mail_timeout_secs: Option<u64>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
}

impl AppSettings {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.bind_host.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            self.bind_port.unwrap_or(DEFAULT_BIND_PORT),
        )
    }

    /// Database URL with blank values treated as unset.
    pub fn database_url(&self) -> Option<&str> {
        non_blank(self.database_url.as_deref())
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    pub fn db_connection_timeout(&self) -> Duration {
        Duration::from_secs(
            self.db_connection_timeout_secs
                .unwrap_or(DEFAULT_DB_CONNECTION_TIMEOUT_SECS),
        )
    }

    pub fn mail_api_url(&self) -> Option<&str> {
        non_blank(self.mail_api_url.as_deref())
    }

    pub fn mail_api_key(&self) -> &str {
        self.mail_api_key.as_deref().unwrap_or_default()
    }

    pub fn mail_from(&self) -> &str {
        non_blank(self.mail_from.as_deref()).unwrap_or(DEFAULT_MAIL_FROM)
    }

    pub fn contact_inbox(&self) -> &str {
        non_blank(self.contact_inbox.as_deref()).unwrap_or(DEFAULT_CONTACT_INBOX)
    }

    pub fn mail_timeout(&self) -> Duration {
        Duration::from_secs(self.mail_timeout_secs.unwrap_or(DEFAULT_MAIL_TIMEOUT_SECS))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    //! Unit tests for configuration parsing and defaults.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 11] = [
        "FACULTY_BIND_HOST",
        "FACULTY_BIND_PORT",
        "FACULTY_DATABASE_URL",
        "FACULTY_DB_MAX_CONNECTIONS",
        "FACULTY_DB_CONNECTION_TIMEOUT_SECS",
        "FACULTY_MAIL_API_URL",
        "FACULTY_MAIL_API_KEY",
        "FACULTY_MAIL_FROM",
        "FACULTY_CONTACT_INBOX",
        "FACULTY_MAIL_TIMEOUT_SECS",
        "FACULTY_RUN_MIGRATIONS",
    ];

    fn vars_with(overrides: &[(&'static str, &str)]) -> Vec<(&'static str, Option<String>)> {
        VARS.iter()
            .map(|name| {
                let value = overrides
                    .iter()
                    .find(|(key, _)| key == name)
                    .map(|(_, value)| (*value).to_owned());
                (*name, value)
            })
            .collect()
    }

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("faculty-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = lock_env(vars_with(&[]));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "0.0.0.0:8080".parse().expect("addr"));
        assert_eq!(settings.database_url(), None);
        assert_eq!(settings.db_max_connections(), DEFAULT_DB_MAX_CONNECTIONS);
        assert_eq!(settings.mail_api_url(), None);
        assert_eq!(settings.mail_from(), DEFAULT_MAIL_FROM);
        assert_eq!(settings.contact_inbox(), DEFAULT_CONTACT_INBOX);
        assert_eq!(settings.mail_timeout(), Duration::from_secs(10));
        assert!(!settings.run_migrations);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env(vars_with(&[
            ("FACULTY_BIND_HOST", "127.0.0.1"),
            ("FACULTY_BIND_PORT", "9000"),
            ("FACULTY_DATABASE_URL", "postgres://db/faculty"),
            ("FACULTY_DB_MAX_CONNECTIONS", "4"),
            ("FACULTY_CONTACT_INBOX", "dean@college.edu"),
            ("FACULTY_RUN_MIGRATIONS", "true"),
        ]));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "127.0.0.1:9000".parse().expect("addr"));
        assert_eq!(settings.database_url(), Some("postgres://db/faculty"));
        assert_eq!(settings.db_max_connections(), 4);
        assert_eq!(settings.contact_inbox(), "dean@college.edu");
        assert!(settings.run_migrations);
    }

    #[rstest]
    #[case(Some("   "), None)]
    #[case(Some(""), None)]
    #[case(Some(" https://mail.example/send "), Some("https://mail.example/send"))]
    #[case(None, None)]
    fn blank_values_count_as_unset(#[case] raw: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(non_blank(raw), expected);
    }
}
