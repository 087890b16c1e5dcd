//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{Category, DomainError, NavControl, Page, RawEvent, WeekRange};

/// Calendar provider. Fetch events and sub-calendars.
///
/// Calendar id, credentials and the optional sub-calendar filter are bound into the adapter.
#[async_trait::async_trait]
pub trait EventFetcher: Send + Sync {
    /// Fetch every event starting within `range` (both ends inclusive).
    ///
    /// Non-success statuses and transport failures surface as `DomainError::Transport`.
    async fn fetch_events(&self, range: &WeekRange) -> Result<Vec<RawEvent>, DomainError>;

    /// Fetch the sub-calendars used to label events.
    async fn fetch_categories(&self) -> Result<Vec<Category>, DomainError>;
}

/// Handle to the place a page is displayed (e.g. one chat message).
#[async_trait::async_trait]
pub trait PageSurface: Send + Sync {
    /// Replace whatever is displayed with `page` and attach `controls`.
    async fn show(&self, page: &Page, controls: &[NavControl]) -> Result<(), DomainError>;

    /// Tell the user who triggered the update that it failed. Displayed content is left alone.
    async fn report(&self, error: &DomainError) -> Result<(), DomainError>;
}
