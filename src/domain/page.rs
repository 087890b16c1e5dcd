//! Rendered schedule page and its navigation controls. Surface-agnostic.

use crate::domain::WeekRange;
use chrono::Weekday;
use std::fmt;

/// One rendered, navigable week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub range: WeekRange,
    pub title: String,
    pub footer: String,
    /// Set when nothing is scheduled; `days` is empty in that case.
    pub notice: Option<String>,
    pub days: Vec<DaySection>,
}

impl Page {
    /// Number of headed entries the page needs on the host surface (day headers + events).
    pub fn entry_count(&self) -> usize {
        self.days.iter().map(|d| 1 + d.events.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySection {
    pub weekday: Weekday,
    pub heading: String,
    pub events: Vec<EventBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBlock {
    pub title: String,
    /// `YYYY-MM-DD HH:MM`.
    pub starts_at: String,
    pub category: String,
    pub location: Option<String>,
    pub notes: Option<String>,
}

impl EventBlock {
    /// Multi-line body shown under the event title.
    pub fn summary(&self) -> String {
        let mut out = format!("📍 {}\n🏷️ Category: `{}`", self.starts_at, self.category);
        if let Some(location) = &self.location {
            out.push_str(&format!("\n📌 Location: {}", location));
        }
        if let Some(notes) = &self.notes {
            out.push_str(&format!("\n📝 {}", notes));
        }
        out
    }
}

/// The three ways a user can move a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    Previous,
    Reset,
    Next,
}

impl NavAction {
    pub const ALL: [NavAction; 3] = [NavAction::Previous, NavAction::Reset, NavAction::Next];

    pub fn label(self) -> &'static str {
        match self {
            NavAction::Previous => "◀️ Last week",
            NavAction::Reset => "🔄 Current week",
            NavAction::Next => "▶️ Next week",
        }
    }

    fn key(self) -> &'static str {
        match self {
            NavAction::Previous => "prev",
            NavAction::Reset => "reset",
            NavAction::Next => "next",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "prev" => Some(NavAction::Previous),
            "reset" => Some(NavAction::Reset),
            "next" => Some(NavAction::Next),
            _ => None,
        }
    }
}

/// A navigation control attached to a page showing week `offset`.
///
/// The control carries the page's offset, so a click can be handled without server-side state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControl {
    pub action: NavAction,
    pub offset: i64,
}

const CONTROL_PREFIX: &str = "week";

impl NavControl {
    /// Stable identifier, e.g. `week:next:-2`.
    pub fn custom_id(&self) -> String {
        format!("{}:{}:{}", CONTROL_PREFIX, self.action.key(), self.offset)
    }

    /// Inverse of [`NavControl::custom_id`]. `None` for ids this bot did not issue.
    pub fn parse(custom_id: &str) -> Option<Self> {
        let mut parts = custom_id.splitn(3, ':');
        if parts.next()? != CONTROL_PREFIX {
            return None;
        }
        let action = NavAction::from_key(parts.next()?)?;
        let offset = parts.next()?.parse().ok()?;
        Some(Self { action, offset })
    }
}

impl fmt::Display for NavControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.custom_id())
    }
}
