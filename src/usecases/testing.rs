//! In-memory port implementations for use case tests.

use crate::domain::{Category, DomainError, NavControl, Page, RawEvent, WeekRange};
use crate::ports::{EventFetcher, PageSurface};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Returns the same events for every range; can be told to fail the next N event fetches.
pub struct ScriptedFetcher {
    events: Vec<RawEvent>,
    categories: Vec<Category>,
    failures: AtomicUsize,
    ranges: Mutex<Vec<WeekRange>>,
}

impl ScriptedFetcher {
    pub fn new(events: Vec<RawEvent>) -> Self {
        Self::with_categories(events, Vec::new())
    }

    pub fn with_categories(events: Vec<RawEvent>, categories: Vec<Category>) -> Self {
        Self {
            events,
            categories,
            failures: AtomicUsize::new(0),
            ranges: Mutex::new(Vec::new()),
        }
    }

    pub fn fail_next(&self, n: usize) {
        self.failures.store(n, Ordering::SeqCst);
    }

    pub fn requested_ranges(&self) -> Vec<WeekRange> {
        self.ranges.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl EventFetcher for ScriptedFetcher {
    async fn fetch_events(&self, range: &WeekRange) -> Result<Vec<RawEvent>, DomainError> {
        self.ranges.lock().unwrap().push(*range);
        let pending = self.failures.load(Ordering::SeqCst);
        if pending > 0 {
            self.failures.store(pending - 1, Ordering::SeqCst);
            return Err(DomainError::Transport("503 Service Unavailable".into()));
        }
        Ok(self.events.clone())
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, DomainError> {
        Ok(self.categories.clone())
    }
}

/// Records every page shown and every failure reported.
#[derive(Default)]
pub struct RecordingSurface {
    shown: Mutex<Vec<(Page, Vec<NavControl>)>>,
    reported: Mutex<Vec<String>>,
    fail_show: AtomicBool,
}

impl RecordingSurface {
    pub fn fail_next_show(&self) {
        self.fail_show.store(true, Ordering::SeqCst);
    }

    pub fn shown_offsets(&self) -> Vec<i64> {
        self.shown
            .lock()
            .unwrap()
            .iter()
            .map(|(page, _)| page.range.offset)
            .collect()
    }

    pub fn last_controls(&self) -> Vec<NavControl> {
        self.shown
            .lock()
            .unwrap()
            .last()
            .map(|(_, controls)| controls.clone())
            .unwrap_or_default()
    }

    pub fn reported(&self) -> Vec<String> {
        self.reported.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl PageSurface for RecordingSurface {
    async fn show(&self, page: &Page, controls: &[NavControl]) -> Result<(), DomainError> {
        if self.fail_show.swap(false, Ordering::SeqCst) {
            return Err(DomainError::Presentation("message was deleted".into()));
        }
        self.shown
            .lock()
            .unwrap()
            .push((page.clone(), controls.to_vec()));
        Ok(())
    }

    async fn report(&self, error: &DomainError) -> Result<(), DomainError> {
        self.reported.lock().unwrap().push(error.to_string());
        Ok(())
    }
}
