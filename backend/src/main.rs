//! Backend entry-point: loads configuration, prepares stores and serves the API.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

mod server;

use std::ffi::OsString;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetricsBuilder;
use color_eyre::eyre::{Context, Result, eyre};
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use reqwest::Url;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::inbound::http::session_config::{BuildMode, session_settings_from_env};
use backend::outbound::mail::HttpMailerConfig;
use backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use backend::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = load_settings(std::env::args_os())?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .wrap_err("session configuration")?;

    let mut config = ServerConfig::new(session, settings.bind_addr(), settings.contact_inbox());

    if let Some(database_url) = settings.database_url() {
        if settings.run_migrations {
            apply_migrations(database_url.to_owned()).await?;
        }
        let pool = DbPool::new(
            PoolConfig::new(database_url)
                .with_max_size(settings.db_max_connections())
                .with_connection_timeout(settings.db_connection_timeout()),
        )
        .await
        .wrap_err("create database pool")?;
        config = config.with_db_pool(pool);
    }

    if let Some(mailer) = mailer_config(&settings)? {
        config = config.with_mailer(mailer);
    }

    #[cfg(feature = "metrics")]
    {
        config = config.with_metrics(make_metrics());
    }

    let bind_addr = settings.bind_addr();
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).wrap_err("start HTTP server")?;
    info!(%bind_addr, "faculty directory listening");
    server.await.wrap_err("serve HTTP")
}

/// Merge CLI arguments, `FACULTY_*` environment variables and config files.
fn load_settings<I>(args: I) -> Result<AppSettings>
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
{
    AppSettings::load_from_iter(args).map_err(|err| eyre!("load configuration: {err}"))
}

async fn apply_migrations(database_url: String) -> Result<()> {
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&database_url))
        .await
        .map_err(|err| eyre!("migration task failed: {err}"))?
        .wrap_err("apply migrations")?;
    info!(applied, "database migrations applied");
    Ok(())
}

fn mailer_config(settings: &AppSettings) -> Result<Option<HttpMailerConfig>> {
    let Some(raw) = settings.mail_api_url() else {
        return Ok(None);
    };
    let endpoint = Url::parse(raw).wrap_err_with(|| format!("invalid mail API URL {raw:?}"))?;
    Ok(Some(HttpMailerConfig {
        endpoint,
        api_key: settings.mail_api_key().to_owned(),
        from: settings.mail_from().to_owned(),
        timeout: settings.mail_timeout(),
    }))
}

#[cfg(feature = "metrics")]
fn make_metrics() -> Option<actix_web_prom::PrometheusMetrics> {
    match PrometheusMetricsBuilder::new("faculty")
        .endpoint("/metrics")
        .build()
    {
        Ok(metrics) => Some(metrics),
        Err(err) => {
            warn!(error = %err, "Prometheus metrics disabled");
            None
        }
    }
}
