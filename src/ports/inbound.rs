//! Inbound port. The chat surface calls into the application.

use crate::domain::{DomainError, NavControl};
use crate::ports::PageSurface;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Entry points for the week command and its navigation controls.
#[async_trait::async_trait]
pub trait CommandPort: Send + Sync {
    /// Render the current week onto a fresh `surface`. Returns the displayed offset.
    async fn open_week(
        &self,
        surface: Arc<dyn PageSurface>,
        now: DateTime<Utc>,
    ) -> Result<i64, DomainError>;

    /// Handle a click on `control` for the page behind `surface`. Returns the displayed offset.
    async fn navigate(
        &self,
        control: NavControl,
        surface: Arc<dyn PageSurface>,
        now: DateTime<Utc>,
    ) -> Result<i64, DomainError>;
}
