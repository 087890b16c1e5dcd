//! Application configuration. Discord and Teamup credentials, listen address.

use crate::domain::DomainError;
use serde::Deserialize;

/// Port the interactions endpoint and the liveness route listen on.
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Raw settings. Read from the unprefixed environment (and `.env`), plus an optional file named
/// by SCHEDULE_BOT_CONFIG.
#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Bot token, used to register the slash command. Read from DISCORD_TOKEN.
    #[serde(default)]
    pub discord_token: Option<String>,

    /// Read from DISCORD_APPLICATION_ID.
    #[serde(default)]
    pub discord_application_id: Option<String>,

    /// Hex ed25519 key used to verify interaction requests. Read from DISCORD_PUBLIC_KEY.
    #[serde(default)]
    pub discord_public_key: Option<String>,

    /// Read from TEAMUP_API_KEY.
    #[serde(default)]
    pub teamup_api_key: Option<String>,

    /// Teamup calendar key. Read from CALENDAR_ID.
    #[serde(default)]
    pub calendar_id: Option<String>,

    /// Only show this sub-calendar; unset or empty shows all. Read from SUBCALENDAR_ID.
    #[serde(default)]
    pub subcalendar_id: Option<String>,

    /// Read from PORT (default 8080).
    #[serde(default)]
    pub port: Option<u16>,

    /// Read from BIND_ADDR (default 0.0.0.0).
    #[serde(default)]
    pub bind_addr: Option<String>,
}

/// Validated settings the bot needs to start.
#[derive(Debug, Clone)]
pub struct BotSettings {
    pub discord_token: String,
    pub discord_application_id: String,
    pub discord_public_key: String,
    pub teamup_api_key: String,
    pub calendar_id: String,
    pub subcalendar_id: Option<String>,
    pub port: u16,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("SCHEDULE_BOT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::default());
        c.build()?.try_deserialize()
    }

    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn bind_addr_or_default(&self) -> String {
        self.bind_addr
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
    }

    /// Check required keys are present and non-empty.
    pub fn validate(&self) -> Result<BotSettings, DomainError> {
        Ok(BotSettings {
            discord_token: required(&self.discord_token, "DISCORD_TOKEN")?,
            discord_application_id: required(
                &self.discord_application_id,
                "DISCORD_APPLICATION_ID",
            )?,
            discord_public_key: required(&self.discord_public_key, "DISCORD_PUBLIC_KEY")?,
            teamup_api_key: required(&self.teamup_api_key, "TEAMUP_API_KEY")?,
            calendar_id: required(&self.calendar_id, "CALENDAR_ID")?,
            subcalendar_id: self
                .subcalendar_id
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
            port: self.port_or_default(),
            bind_addr: self.bind_addr_or_default(),
        })
    }
}

fn required(value: &Option<String>, key: &str) -> Result<String, DomainError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .ok_or_else(|| DomainError::Config(format!("Set {} (env or .env)", key)))
}
