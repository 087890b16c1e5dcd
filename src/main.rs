//! Wiring & DI. Entry point: bootstrap adapters, inject into services, serve HTTP.
//! No business logic here; pages are produced by ScheduleService.

use axum::Router;
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use week_schedule_bot::adapters::discord::verify::parse_public_key;
use week_schedule_bot::adapters::discord::{self, BotState, DiscordRest};
use week_schedule_bot::adapters::http::liveness;
use week_schedule_bot::adapters::teamup::TeamupAdapter;
use week_schedule_bot::ports::{CommandPort, EventFetcher};
use week_schedule_bot::shared::config::AppConfig;
use week_schedule_bot::usecases::ScheduleService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let settings = AppConfig::load()?.validate()?;
    match &settings.subcalendar_id {
        Some(sub) => info!(calendar = %settings.calendar_id, subcalendar = %sub, "showing one sub-calendar"),
        None => info!(calendar = %settings.calendar_id, "showing all sub-calendars"),
    }

    // --- Calendar provider + use case ---
    let fetcher: Arc<dyn EventFetcher> = Arc::new(TeamupAdapter::new(
        settings.teamup_api_key.clone(),
        settings.calendar_id.clone(),
        settings.subcalendar_id.clone(),
    ));
    let commands: Arc<dyn CommandPort> = Arc::new(ScheduleService::new(fetcher));

    // --- Discord session ---
    let rest = Arc::new(DiscordRest::new(
        settings.discord_token.clone(),
        settings.discord_application_id.clone(),
    ));
    if let Err(e) = rest.register_commands().await {
        warn!(error = %e, "slash command registration failed; existing registration is kept");
    }
    let public_key = parse_public_key(&settings.discord_public_key)?;
    let state = BotState::new(commands, rest, public_key);

    let app = Router::new()
        .merge(liveness::router())
        .merge(discord::server::router(state));

    let addr = format!("{}:{}", settings.bind_addr, settings.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "listening (POST /interactions, GET /)");
    axum::serve(listener, app).await?;

    Ok(())
}
