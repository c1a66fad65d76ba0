use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;

use pv_api::middleware::SecurityMiddleware;
use pv_api::session::CookieSessionStore;
use pv_api::templates::Templates;
use pv_api::{create_app, telemetry, AppState, Config};
use pv_infra::create_verification_client;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; missing variables are caught below
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("failed to load configuration")?;
    telemetry::init(&config.logging).context("failed to initialise logging")?;

    info!(
        environment = %config.environment,
        provider = ?config.verify.provider(),
        "Starting phone verification server"
    );

    let client = create_verification_client(&config.verify)
        .context("failed to create verification client")?;
    let sessions = CookieSessionStore::new(&config.session).context("invalid session settings")?;
    let templates = Templates::new().context("failed to compile templates")?;

    let state = web::Data::new(AppState::new(
        client,
        sessions,
        templates,
        config.session.flash_key.clone(),
    ));

    let security =
        SecurityMiddleware::for_environment(config.environment, config.server.trusted_proxies.clone());
    let bind_address = config.server.bind_address();

    let mut server = HttpServer::new(move || create_app(state.clone(), security.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    info!(address = %bind_address, "Server listening");

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")?;

    Ok(())
}
