//! Discord interactions endpoint.
//!
//! Every accepted interaction is acknowledged with a deferred response right away; the page is
//! produced in a spawned task and delivered through the interaction webhook, so provider
//! latency never hits Discord's three-second deadline.

use crate::adapters::discord::model::{
    INTERACTION_APPLICATION_COMMAND, INTERACTION_MESSAGE_COMPONENT, INTERACTION_PING, Interaction,
    InteractionResponse, RESPONSE_DEFERRED_CHANNEL_MESSAGE, RESPONSE_DEFERRED_UPDATE_MESSAGE,
};
use crate::adapters::discord::rest::{DiscordRest, WEEK_COMMAND};
use crate::adapters::discord::surface::{InteractionSurface, Origin};
use crate::adapters::discord::verify::{SIGNATURE_HEADER, TIMESTAMP_HEADER, verify_signature};
use crate::domain::NavControl;
use crate::ports::{CommandPort, PageSurface};
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use ed25519_dalek::VerifyingKey;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Bot session shared by all interaction handlers.
#[derive(Clone)]
pub struct BotState {
    commands: Arc<dyn CommandPort>,
    rest: Arc<DiscordRest>,
    public_key: VerifyingKey,
}

impl BotState {
    pub fn new(
        commands: Arc<dyn CommandPort>,
        rest: Arc<DiscordRest>,
        public_key: VerifyingKey,
    ) -> Self {
        Self {
            commands,
            rest,
            public_key,
        }
    }

    fn surface(&self, token: String, origin: Origin) -> Arc<dyn PageSurface> {
        Arc::new(InteractionSurface::new(Arc::clone(&self.rest), token, origin))
    }
}

pub fn router(state: BotState) -> Router {
    Router::new()
        .route("/interactions", post(handle_interaction))
        .with_state(state)
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

async fn handle_interaction(
    State(state): State<BotState>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let signature = header(&headers, SIGNATURE_HEADER);
    let timestamp = header(&headers, TIMESTAMP_HEADER);
    if !verify_signature(&state.public_key, signature, timestamp, &body) {
        warn!("Invalid Discord signature");
        return (StatusCode::UNAUTHORIZED, "Invalid signature").into_response();
    }

    let interaction: Interaction = match serde_json::from_str(&body) {
        Ok(i) => i,
        Err(e) => {
            error!(error = %e, "Failed to parse interaction");
            return (StatusCode::BAD_REQUEST, "Invalid request").into_response();
        }
    };

    match interaction.interaction_type {
        INTERACTION_PING => {
            debug!("Responding to Discord PING");
            Json(InteractionResponse::pong()).into_response()
        }
        INTERACTION_APPLICATION_COMMAND => handle_command(&state, interaction),
        INTERACTION_MESSAGE_COMPONENT => handle_component(&state, interaction),
        other => {
            warn!(interaction_type = other, "Unknown interaction type");
            (StatusCode::BAD_REQUEST, "Unknown interaction type").into_response()
        }
    }
}

fn handle_command(state: &BotState, interaction: Interaction) -> Response {
    let name = interaction
        .data
        .as_ref()
        .and_then(|d| d.name.as_deref())
        .unwrap_or_default();
    if name != WEEK_COMMAND {
        warn!(command = name, "Unknown command");
        return Json(InteractionResponse::ephemeral("Unknown command")).into_response();
    }
    let Some(token) = interaction.token.clone() else {
        return (StatusCode::BAD_REQUEST, "Missing interaction token").into_response();
    };

    info!(
        user = interaction.actor().map(|u| u.username.as_str()).unwrap_or("unknown"),
        "week command"
    );
    let commands = Arc::clone(&state.commands);
    let surface = state.surface(token, Origin::Command);
    tokio::spawn(async move {
        if let Err(e) = commands.open_week(surface, Utc::now()).await {
            debug!(error = %e, "week command failed");
        }
    });

    Json(InteractionResponse::deferred(RESPONSE_DEFERRED_CHANNEL_MESSAGE)).into_response()
}

fn handle_component(state: &BotState, interaction: Interaction) -> Response {
    let control = interaction
        .data
        .as_ref()
        .and_then(|d| d.custom_id.as_deref())
        .and_then(NavControl::parse);
    let Some(control) = control else {
        warn!("Unknown component");
        return Json(InteractionResponse::ephemeral("Unknown interaction")).into_response();
    };
    let Some(token) = interaction.token.clone() else {
        return (StatusCode::BAD_REQUEST, "Missing interaction token").into_response();
    };

    info!(
        user = interaction.actor().map(|u| u.id.as_str()).unwrap_or("unknown"),
        control = %control,
        "navigation"
    );
    let commands = Arc::clone(&state.commands);
    let surface = state.surface(token, Origin::Component);
    tokio::spawn(async move {
        if let Err(e) = commands.navigate(control, surface, Utc::now()).await {
            debug!(error = %e, "navigation failed");
        }
    });

    Json(InteractionResponse::deferred(RESPONSE_DEFERRED_UPDATE_MESSAGE)).into_response()
}
