//! User directory entry point: loads settings, wires the record store, seeds
//! example data, and serves HTTP.

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::domain::UserSearchService;
use backend::domain::ports::UserRepository;
#[cfg(feature = "example-data")]
use backend::example_data::{ExampleDataSettings, seed_example_data_on_startup};
use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::{
    DbPool, DieselUserRepository, InMemoryUserRepository, PoolConfig, run_pending_migrations,
};
use backend::server::{ServerSettings, create_server, drain};
use ortho_config::OrthoConfig;

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

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .wrap_err("failed to load server settings")?;
    let bind_addr = settings.bind_addr()?;
    let policy = settings.match_policy()?;
    let page_size = settings.default_page_size()?;

    let repository = build_repository(&settings).await?;

    #[cfg(feature = "example-data")]
    {
        // Example data reads env and config files only; the CLI belongs to the server.
        let program = std::env::args_os()
            .next()
            .unwrap_or_else(|| std::ffi::OsString::from("user-directory"));
        let example = ExampleDataSettings::load_from_iter([program])
            .wrap_err("failed to load example data settings")?;
        seed_example_data_on_startup(&example, repository.as_ref()).await?;
    }

    let service = UserSearchService::new(repository, policy);
    let http_state =
        web::Data::new(HttpState::new(Arc::new(service)).with_default_page_size(page_size));
    let health_state = web::Data::new(HealthState::new());

    info!(%bind_addr, mode = %policy.mode(), case = %policy.case(), "starting server");
    let server = create_server(health_state.clone(), http_state, bind_addr)?;
    let handle = server.handle();
    actix_web::rt::spawn(async move {
        if actix_web::rt::signal::ctrl_c().await.is_ok() {
            drain(&health_state, handle).await;
        }
    });
    server.await.wrap_err("server terminated with an error")
}

async fn build_repository(settings: &ServerSettings) -> Result<Arc<dyn UserRepository>> {
    let Some(database_url) = settings.database_url() else {
        info!("no database configured; using in-memory user store");
        return Ok(Arc::new(InMemoryUserRepository::new()));
    };

    let migration_url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url))
        .await
        .wrap_err("migration task panicked")??;
    info!(applied, "database schema up to date");

    let mut config = PoolConfig::new(database_url);
    if let Some(max) = settings.db_max_connections {
        config = config.with_max_size(max);
    }
    let pool = DbPool::new(config).await?;
    Ok(Arc::new(DieselUserRepository::new(pool)))
}
