//! Page -> Discord embed + navigation buttons.

use crate::adapters::discord::model::{
    ActionRow, Button, ButtonStyle, Embed, EmbedField, EmbedFooter, MessagePayload,
};
use crate::domain::{NavAction, NavControl, Page};
use tracing::warn;

/// Discord "blue".
pub const EMBED_COLOR: u32 = 0x3498DB;

/// Discord rejects embeds with more fields than this.
pub const EMBED_FIELD_LIMIT: usize = 25;

/// Day header fields need a value; a left-to-right mark renders as nothing.
const BLANK_VALUE: &str = "\u{200E}";

pub fn page_message(page: &Page, controls: &[NavControl]) -> MessagePayload {
    MessagePayload {
        content: None,
        embeds: Some(vec![page_embed(page)]),
        components: Some(vec![ActionRow::new(controls.iter().map(button).collect())]),
        flags: None,
    }
}

pub fn page_embed(page: &Page) -> Embed {
    let mut fields = Vec::with_capacity(page.entry_count());
    for day in &page.days {
        fields.push(EmbedField {
            name: day.heading.clone(),
            value: BLANK_VALUE.to_string(),
            inline: false,
        });
        fields.extend(day.events.iter().map(|ev| EmbedField {
            name: ev.title.clone(),
            value: ev.summary(),
            inline: false,
        }));
    }

    if fields.len() > EMBED_FIELD_LIMIT {
        warn!(
            offset = page.range.offset,
            fields = fields.len(),
            limit = EMBED_FIELD_LIMIT,
            "embed exceeds Discord's field limit"
        );
    }

    Embed {
        title: page.title.clone(),
        description: page.notice.clone(),
        color: EMBED_COLOR,
        footer: EmbedFooter {
            text: page.footer.clone(),
        },
        fields,
    }
}

fn button(control: &NavControl) -> Button {
    let style = match control.action {
        NavAction::Previous => ButtonStyle::Secondary,
        NavAction::Reset => ButtonStyle::Success,
        NavAction::Next => ButtonStyle::Primary,
    };
    Button::new(style, control.action.label(), control.custom_id())
}
