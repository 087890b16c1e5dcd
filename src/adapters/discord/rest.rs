//! Discord REST client: command registration and interaction webhooks.

use crate::adapters::discord::model::{CommandDefinition, MessagePayload};
use crate::domain::DomainError;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use tracing::info;

pub const DISCORD_API_URL: &str = "https://discord.com/api/v10";

/// Name of the slash command that opens a schedule page.
pub const WEEK_COMMAND: &str = "week";
const WEEK_COMMAND_DESCRIPTION: &str = "Show this week's calendar events";
const CHAT_INPUT_COMMAND: u8 = 1;

pub struct DiscordRest {
    client: Client,
    api_url: String,
    bot_token: String,
    application_id: String,
}

impl DiscordRest {
    pub fn new(bot_token: String, application_id: String) -> Self {
        Self::with_api_url(DISCORD_API_URL, bot_token, application_id)
    }

    pub fn with_api_url(
        api_url: impl Into<String>,
        bot_token: String,
        application_id: String,
    ) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            bot_token,
            application_id,
        }
    }

    /// Overwrite the application's global commands with the week command.
    pub async fn register_commands(&self) -> Result<(), DomainError> {
        let url = format!("{}/applications/{}/commands", self.api_url, self.application_id);
        let body = [CommandDefinition {
            name: WEEK_COMMAND,
            description: WEEK_COMMAND_DESCRIPTION,
            kind: CHAT_INPUT_COMMAND,
        }];
        let req = self
            .client
            .put(&url)
            .header("Authorization", format!("Bot {}", self.bot_token));
        send(req, &body).await?;
        info!(command = WEEK_COMMAND, "registered slash command");
        Ok(())
    }

    /// Replace the message the interaction with `token` responded with.
    pub async fn edit_original(
        &self,
        token: &str,
        message: &MessagePayload,
    ) -> Result<(), DomainError> {
        let url = format!("{}/messages/@original", self.webhook_url(token));
        send(self.client.patch(&url), message).await
    }

    /// Post an additional message for the interaction with `token`.
    pub async fn create_followup(
        &self,
        token: &str,
        message: &MessagePayload,
    ) -> Result<(), DomainError> {
        send(self.client.post(self.webhook_url(token)), message).await
    }

    fn webhook_url(&self, token: &str) -> String {
        format!("{}/webhooks/{}/{}", self.api_url, self.application_id, token)
    }
}

async fn send<T: Serialize + ?Sized>(req: RequestBuilder, body: &T) -> Result<(), DomainError> {
    let res = req
        .json(body)
        .send()
        .await
        .map_err(|e| DomainError::Discord(format!("Request failed: {}", e)))?;

    if !res.status().is_success() {
        let status = res.status();
        let text = res.text().await.unwrap_or_else(|_| "unknown".to_string());
        return Err(DomainError::Discord(format!("{}: {}", status, text)));
    }
    Ok(())
}
