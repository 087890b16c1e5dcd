//! Keep-alive route for the hosting platform's health checks. Knows nothing about the bot.

use axum::Router;
use axum::routing::get;

pub const ALIVE: &str = "Bot is alive!";

pub fn router() -> Router {
    Router::new().route("/", get(alive))
}

async fn alive() -> &'static str {
    ALIVE
}
