//! Teamup adapter. Implements EventFetcher over the Teamup REST API.

use crate::domain::{Category, DomainError, RawEvent, WeekRange};
use crate::ports::EventFetcher;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

pub const TEAMUP_BASE_URL: &str = "https://api.teamup.com";
const TOKEN_HEADER: &str = "Teamup-Token";

#[derive(Deserialize)]
struct EventsResponse {
    #[serde(default)]
    events: Vec<RawEvent>,
}

#[derive(Deserialize)]
struct SubcalendarsResponse {
    #[serde(default)]
    subcalendars: Vec<Category>,
}

/// Teamup calendar client.
///
/// Requires an API key from https://teamup.com/api-keys and the calendar key from the
/// calendar's URL. With `subcalendar_id` set, only that sub-calendar's events are fetched.
pub struct TeamupAdapter {
    client: Client,
    base_url: String,
    api_key: String,
    calendar_id: String,
    subcalendar_id: Option<String>,
}

impl TeamupAdapter {
    pub fn new(api_key: String, calendar_id: String, subcalendar_id: Option<String>) -> Self {
        Self::with_base_url(TEAMUP_BASE_URL, api_key, calendar_id, subcalendar_id)
    }

    /// Point the client at another host (e.g. a local mock server).
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: String,
        calendar_id: String,
        subcalendar_id: Option<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            calendar_id,
            subcalendar_id: subcalendar_id.filter(|s| !s.trim().is_empty()),
        }
    }

    fn url(&self, resource: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.calendar_id, resource)
    }

    /// Query string for an events request.
    fn events_query(&self, range: &WeekRange) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("startDate", iso_date(range.start)),
            ("endDate", iso_date(range.end)),
        ];
        if let Some(sub) = &self.subcalendar_id {
            query.push(("subcalendarId", sub.clone()));
        }
        query
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, DomainError> {
        let res = self
            .client
            .get(self.url(resource))
            .header(TOKEN_HEADER, &self.api_key)
            .query(query)
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("Request failed: {}", e)))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_else(|_| "unknown".to_string());
            return Err(DomainError::Transport(format!(
                "Teamup API error {}: {}",
                status, text
            )));
        }

        res.json::<T>()
            .await
            .map_err(|e| DomainError::Transport(format!("Invalid {} payload: {}", resource, e)))
    }
}

fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[async_trait::async_trait]
impl EventFetcher for TeamupAdapter {
    async fn fetch_events(&self, range: &WeekRange) -> Result<Vec<RawEvent>, DomainError> {
        let body: EventsResponse = self.get_json("events", &self.events_query(range)).await?;
        debug!(
            start = %range.start,
            end = %range.end,
            events = body.events.len(),
            "fetched Teamup events"
        );
        Ok(body.events)
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, DomainError> {
        let body: SubcalendarsResponse = self.get_json("subcalendars", &[]).await?;
        debug!(subcalendars = body.subcalendars.len(), "fetched Teamup subcalendars");
        Ok(body.subcalendars)
    }
}
