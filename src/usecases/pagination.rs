//! Per-page navigation state and the controller that moves a page between weeks.
//!
//! A page's state is a single week offset. Each navigation renders a new page with fresh
//! controls bound to the new offset; a failed navigation changes nothing on the page.

use crate::domain::{DomainError, NavAction, NavControl};
use crate::ports::PageSurface;
use crate::usecases::schedule_service::ScheduleService;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

/// Navigation state bound to one displayed page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationSession {
    week_offset: i64,
}

impl PaginationSession {
    pub fn at(week_offset: i64) -> Self {
        Self { week_offset }
    }

    pub fn week_offset(&self) -> i64 {
        self.week_offset
    }

    /// Offset `action` leads to. Does not move the session.
    pub fn target(&self, action: NavAction) -> i64 {
        match action {
            NavAction::Previous => self.week_offset.saturating_sub(1),
            NavAction::Reset => 0,
            NavAction::Next => self.week_offset.saturating_add(1),
        }
    }

    fn commit(&mut self, week_offset: i64) {
        self.week_offset = week_offset;
    }
}

/// Controls attached to a page showing week `offset`, in display order.
pub fn controls_for(offset: i64) -> [NavControl; 3] {
    NavAction::ALL.map(|action| NavControl { action, offset })
}

/// Drives one displayed page.
pub struct PaginationController<'a> {
    service: &'a ScheduleService,
    surface: Arc<dyn PageSurface>,
    session: PaginationSession,
}

impl<'a> PaginationController<'a> {
    /// First page for a fresh invocation: an implicit reset with nothing displayed yet.
    pub async fn open(
        service: &'a ScheduleService,
        surface: Arc<dyn PageSurface>,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let mut controller = Self::resume(service, surface, 0);
        controller.navigate(NavAction::Reset, now).await?;
        Ok(controller)
    }

    /// Pick up a page already displayed at `week_offset`.
    pub fn resume(
        service: &'a ScheduleService,
        surface: Arc<dyn PageSurface>,
        week_offset: i64,
    ) -> Self {
        Self {
            service,
            surface,
            session: PaginationSession::at(week_offset),
        }
    }

    pub fn offset(&self) -> i64 {
        self.session.week_offset()
    }

    /// Render the week `action` leads to and replace the displayed page.
    ///
    /// On failure the session keeps its offset, the surface is untouched and the acting user
    /// gets a private notice.
    pub async fn navigate(
        &mut self,
        action: NavAction,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let from = self.session.week_offset();
        let to = self.session.target(action);

        match self.refresh(to, now).await {
            Ok(()) => {
                self.session.commit(to);
                info!(from, to, ?action, "page moved");
                Ok(())
            }
            Err(e) => {
                warn!(from, to, ?action, error = %e, "page refresh failed");
                if let Err(report_err) = self.surface.report(&e).await {
                    warn!(error = %report_err, "could not report failure to user");
                }
                Err(e)
            }
        }
    }

    async fn refresh(&self, offset: i64, now: DateTime<Utc>) -> Result<(), DomainError> {
        let page = self.service.render(offset, now).await?;
        self.surface.show(&page, &controls_for(offset)).await
    }
}
