//! PageSurface backed by a deferred Discord interaction.

use crate::adapters::discord::model::MessagePayload;
use crate::adapters::discord::render::page_message;
use crate::adapters::discord::rest::DiscordRest;
use crate::domain::{DomainError, NavControl, Page};
use crate::ports::PageSurface;
use std::sync::Arc;

/// What the interaction was, which decides how failures are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The week command: failures replace the pending reply.
    Command,
    /// A navigation button: failures go to the clicker only.
    Component,
}

/// The message an interaction token points at.
pub struct InteractionSurface {
    rest: Arc<DiscordRest>,
    token: String,
    origin: Origin,
}

impl InteractionSurface {
    pub fn new(rest: Arc<DiscordRest>, token: String, origin: Origin) -> Self {
        Self {
            rest,
            token,
            origin,
        }
    }
}

/// Text shown when a page cannot be produced.
pub fn failure_text(origin: Origin, error: &DomainError) -> String {
    match origin {
        Origin::Command => format!("❌ Failed: {}", error),
        Origin::Component => format!("❌ Error: {}", error),
    }
}

#[async_trait::async_trait]
impl PageSurface for InteractionSurface {
    async fn show(&self, page: &Page, controls: &[NavControl]) -> Result<(), DomainError> {
        self.rest
            .edit_original(&self.token, &page_message(page, controls))
            .await
    }

    async fn report(&self, error: &DomainError) -> Result<(), DomainError> {
        let text = failure_text(self.origin, error);
        match self.origin {
            Origin::Command => {
                self.rest
                    .edit_original(&self.token, &MessagePayload::text_only(text))
                    .await
            }
            Origin::Component => {
                self.rest
                    .create_followup(&self.token, &MessagePayload::ephemeral(text))
                    .await
            }
        }
    }
}
