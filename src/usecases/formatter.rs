//! Render a grouped week into a [`Page`].
//!
//! Produces content for a single page. Hosts that cap the number of entries (Discord embeds
//! allow 25 fields) are not paginated further here.

use crate::domain::{CategoryMap, DaySection, EventBlock, Page, RawEvent, WeekRange};
use crate::usecases::grouper::{weekday_name, Schedule};

pub const NOTHING_SCHEDULED: &str = "Nothing this week";
pub const UNTITLED: &str = "Untitled";
/// Notes longer than this many characters are cut and suffixed with [`ELLIPSIS`].
pub const NOTES_MAX_CHARS: usize = 100;
pub const ELLIPSIS: &str = "...";

pub fn format(range: &WeekRange, schedule: &Schedule, categories: &CategoryMap) -> Page {
    let title = format!(
        "📅 Events from {} to {}",
        range.start.format("%d %B"),
        range.end.format("%d %B %Y")
    );
    let footer = format!(
        "Week starting the {} • Offset: {}",
        range.start.format("%d/%m"),
        range.offset
    );

    let (notice, days) = match schedule {
        Schedule::Empty => (Some(NOTHING_SCHEDULED.to_string()), Vec::new()),
        Schedule::Grouped(grouped) => {
            let days = grouped
                .days()
                .map(|(day, events)| DaySection {
                    weekday: day,
                    heading: format!("📅 {}", weekday_name(day)),
                    events: events.iter().map(|ev| event_block(ev, categories)).collect(),
                })
                .collect();
            (None, days)
        }
    };

    Page {
        range: *range,
        title,
        footer,
        notice,
        days,
    }
}

fn event_block(ev: &RawEvent, categories: &CategoryMap) -> EventBlock {
    EventBlock {
        title: non_empty(ev.title.as_deref())
            .unwrap_or(UNTITLED)
            .to_string(),
        starts_at: ev.start.as_deref().map(minute_precision).unwrap_or_default(),
        category: categories.resolve(ev.category.as_ref()).to_string(),
        location: non_empty(ev.location.as_deref()).map(String::from),
        notes: non_empty(ev.notes.as_deref()).map(truncate_notes),
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

/// `2026-10-15T09:00:00+02:00` -> `2026-10-15 09:00`.
fn minute_precision(start: &str) -> String {
    start.get(..16).unwrap_or(start).replacen('T', " ", 1)
}

/// Cut to [`NOTES_MAX_CHARS`] characters, appending [`ELLIPSIS`] only when something was cut.
pub fn truncate_notes(notes: &str) -> String {
    match notes.char_indices().nth(NOTES_MAX_CHARS) {
        Some((cut, _)) => format!("{}{}", &notes[..cut], ELLIPSIS),
        None => notes.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, ProviderId, UNKNOWN_CATEGORY};
    use crate::usecases::grouper::group;
    use chrono::{NaiveDate, Weekday};

    fn week() -> WeekRange {
        WeekRange {
            start: NaiveDate::from_ymd_opt(2026, 10, 12).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            offset: 0,
        }
    }

    fn event(start: &str) -> RawEvent {
        RawEvent {
            id: ProviderId::new("1"),
            title: Some("Scrim vs Team Liquid".into()),
            start: Some(start.into()),
            location: Some("Arena".into()),
            notes: Some("Bring headsets".into()),
            category: Some(ProviderId::new("9")),
        }
    }

    #[test]
    fn test_header_and_footer() {
        let page = format(&week(), &Schedule::Empty, &CategoryMap::default());
        assert_eq!(page.title, "📅 Events from 12 October to 18 October 2026");
        assert_eq!(page.footer, "Week starting the 12/10 • Offset: 0");
    }

    #[test]
    fn test_empty_schedule_has_notice_only() {
        let page = format(&week(), &Schedule::Empty, &CategoryMap::default());
        assert_eq!(page.notice.as_deref(), Some(NOTHING_SCHEDULED));
        assert!(page.days.is_empty());
    }

    #[test]
    fn test_event_block_fields() {
        let categories = CategoryMap::from_categories(vec![Category {
            id: ProviderId::new("9"),
            name: "Scrims".into(),
        }]);
        let schedule = group(vec![event("2026-10-16T19:30:00+02:00")]);
        let page = format(&week(), &schedule, &categories);

        assert!(page.notice.is_none());
        assert_eq!(page.days.len(), 1);
        assert_eq!(page.days[0].weekday, Weekday::Fri);
        assert_eq!(page.days[0].heading, "📅 Friday");
        let block = &page.days[0].events[0];
        assert_eq!(block.title, "Scrim vs Team Liquid");
        assert_eq!(block.starts_at, "2026-10-16 19:30");
        assert_eq!(block.category, "Scrims");
        assert_eq!(block.location.as_deref(), Some("Arena"));
        assert_eq!(block.notes.as_deref(), Some("Bring headsets"));
    }

    #[test]
    fn test_untitled_and_blank_optionals() {
        let mut ev = event("2026-10-12T08:00");
        ev.title = None;
        ev.location = Some(String::new());
        ev.notes = Some("   ".into());
        let page = format(&week(), &group(vec![ev]), &CategoryMap::default());
        let block = &page.days[0].events[0];
        assert_eq!(block.title, UNTITLED);
        assert_eq!(block.category, UNKNOWN_CATEGORY);
        assert!(block.location.is_none());
        assert!(block.notes.is_none());
    }

    #[test]
    fn test_notes_truncation() {
        let exact = "a".repeat(100);
        assert_eq!(truncate_notes(&exact), exact);

        let long = "b".repeat(101);
        let cut = truncate_notes(&long);
        assert_eq!(cut, format!("{}...", "b".repeat(100)));

        // counts characters, not bytes
        let accents = "é".repeat(120);
        assert_eq!(truncate_notes(&accents), format!("{}...", "é".repeat(100)));
    }

    #[test]
    fn test_days_follow_monday_first_order() {
        let mut sun = event("2026-10-18T10:00");
        sun.id = ProviderId::new("2");
        let schedule = group(vec![sun, event("2026-10-13T10:00")]);
        let page = format(&week(), &schedule, &CategoryMap::default());
        let headings: Vec<&str> = page.days.iter().map(|d| d.heading.as_str()).collect();
        assert_eq!(headings, vec!["📅 Tuesday", "📅 Sunday"]);
        assert_eq!(page.entry_count(), 4);
    }
}
