//! Discord interaction wire types (HTTP interactions, API v10).

use serde::{Deserialize, Serialize};

/// Interaction types
pub const INTERACTION_PING: u8 = 1;
pub const INTERACTION_APPLICATION_COMMAND: u8 = 2;
pub const INTERACTION_MESSAGE_COMPONENT: u8 = 3;

/// Response types
pub const RESPONSE_PONG: u8 = 1;
pub const RESPONSE_CHANNEL_MESSAGE: u8 = 4;
pub const RESPONSE_DEFERRED_CHANNEL_MESSAGE: u8 = 5;
pub const RESPONSE_DEFERRED_UPDATE_MESSAGE: u8 = 6;

/// Message flag: only the acting user sees the message.
pub const FLAG_EPHEMERAL: u32 = 1 << 6;

const COMPONENT_ACTION_ROW: u8 = 1;
const COMPONENT_BUTTON: u8 = 2;

/// Incoming interaction
#[derive(Debug, Deserialize, Clone)]
pub struct Interaction {
    #[serde(rename = "type")]
    pub interaction_type: u8,
    pub token: Option<String>,
    pub data: Option<InteractionData>,
    pub member: Option<GuildMember>,
    pub user: Option<DiscordUser>,
}

impl Interaction {
    /// Acting user; guild interactions carry it inside `member`.
    pub fn actor(&self) -> Option<&DiscordUser> {
        self.member.as_ref().map(|m| &m.user).or(self.user.as_ref())
    }
}

/// Command name for slash commands, custom id for component clicks.
#[derive(Debug, Deserialize, Clone)]
pub struct InteractionData {
    pub name: Option<String>,
    pub custom_id: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GuildMember {
    pub user: DiscordUser,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DiscordUser {
    pub id: String,
    pub username: String,
}

/// Immediate reply to an interaction request.
#[derive(Debug, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub response_type: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MessagePayload>,
}

impl InteractionResponse {
    pub fn pong() -> Self {
        Self {
            response_type: RESPONSE_PONG,
            data: None,
        }
    }

    pub fn deferred(response_type: u8) -> Self {
        Self {
            response_type,
            data: None,
        }
    }

    /// A message only the acting user can see.
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            response_type: RESPONSE_CHANNEL_MESSAGE,
            data: Some(MessagePayload::ephemeral(content)),
        }
    }
}

/// Message body used for responses, original-message edits and follow-ups.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct MessagePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Embed>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<ActionRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u32>,
}

impl MessagePayload {
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            flags: Some(FLAG_EPHEMERAL),
            ..Default::default()
        }
    }

    /// Plain text that replaces any embeds and buttons already on the message.
    pub fn text_only(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            embeds: Some(Vec::new()),
            components: Some(Vec::new()),
            flags: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embed {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: u32,
    pub footer: EmbedFooter,
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionRow {
    #[serde(rename = "type")]
    kind: u8,
    pub components: Vec<Button>,
}

impl ActionRow {
    pub fn new(components: Vec<Button>) -> Self {
        Self {
            kind: COMPONENT_ACTION_ROW,
            components,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary = 1,
    Secondary = 2,
    Success = 3,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    #[serde(rename = "type")]
    kind: u8,
    pub style: u8,
    pub label: String,
    pub custom_id: String,
}

impl Button {
    pub fn new(style: ButtonStyle, label: impl Into<String>, custom_id: impl Into<String>) -> Self {
        Self {
            kind: COMPONENT_BUTTON,
            style: style as u8,
            label: label.into(),
            custom_id: custom_id.into(),
        }
    }
}

/// Global slash command registration body.
#[derive(Debug, Serialize)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: u8,
}
