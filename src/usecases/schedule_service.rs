//! Week command use case: range -> fetch -> group -> format, and the navigation entry points.

use crate::domain::{CategoryMap, DomainError, NavControl, Page};
use crate::ports::{CommandPort, EventFetcher, PageSurface};
use crate::usecases::formatter::format;
use crate::usecases::grouper::group;
use crate::usecases::pagination::PaginationController;
use crate::usecases::week_range::compute_week_range;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

/// Renders schedule pages. Every call fetches fresh data; nothing is cached.
pub struct ScheduleService {
    fetcher: Arc<dyn EventFetcher>,
}

impl ScheduleService {
    pub fn new(fetcher: Arc<dyn EventFetcher>) -> Self {
        Self { fetcher }
    }

    /// Full pipeline for the week `offset` weeks from the one containing `now`.
    pub async fn render(&self, offset: i64, now: DateTime<Utc>) -> Result<Page, DomainError> {
        let range = compute_week_range(offset, now);
        let events = self.fetcher.fetch_events(&range).await?;
        let categories = self.fetcher.fetch_categories().await?;
        let fetched = events.len();
        let category_count = categories.len();
        let categories = CategoryMap::from_categories(categories);

        let schedule = group(events);
        let page = format(&range, &schedule, &categories);

        info!(
            offset,
            week_start = %range.start,
            events = fetched,
            categories = category_count,
            "rendered week"
        );
        Ok(page)
    }
}

#[async_trait::async_trait]
impl CommandPort for ScheduleService {
    async fn open_week(
        &self,
        surface: Arc<dyn PageSurface>,
        now: DateTime<Utc>,
    ) -> Result<i64, DomainError> {
        let controller = PaginationController::open(self, surface, now).await?;
        Ok(controller.offset())
    }

    async fn navigate(
        &self,
        control: NavControl,
        surface: Arc<dyn PageSurface>,
        now: DateTime<Utc>,
    ) -> Result<i64, DomainError> {
        let mut controller = PaginationController::resume(self, surface, control.offset);
        controller.navigate(control.action, now).await?;
        Ok(controller.offset())
    }
}
