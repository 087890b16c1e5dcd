//! Sort fetched events chronologically and bucket them by weekday.

use crate::domain::RawEvent;
use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

/// Canonical iteration order for a week.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// English name used for day headers.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Grouper output: either nothing to show, or events bucketed by weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schedule {
    Empty,
    Grouped(GroupedSchedule),
}

/// Events per weekday, each bucket in start order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedSchedule {
    buckets: [Vec<RawEvent>; 7],
}

impl GroupedSchedule {
    /// Events on `day`; empty for days with nothing scheduled.
    pub fn get(&self, day: Weekday) -> &[RawEvent] {
        &self.buckets[day.num_days_from_monday() as usize]
    }

    /// Non-empty days, Monday first.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &[RawEvent])> + '_ {
        WEEKDAYS
            .iter()
            .map(|&day| (day, self.get(day)))
            .filter(|(_, events)| !events.is_empty())
    }

    pub fn event_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

/// Date portion of an ISO-8601 start, if it parses.
pub fn start_date(start: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(start.get(..10)?, "%Y-%m-%d").ok()
}

/// Drop events without a usable start, sort by raw start string, bucket by weekday.
///
/// Ties on the start string are broken by id then title, so the result does not depend on
/// input order.
pub fn group(events: Vec<RawEvent>) -> Schedule {
    let total = events.len();
    let mut dated: Vec<(NaiveDate, RawEvent)> = events
        .into_iter()
        .filter_map(|ev| {
            let date = ev.start.as_deref().and_then(start_date)?;
            Some((date, ev))
        })
        .collect();

    let skipped = total - dated.len();
    if skipped > 0 {
        debug!(skipped, "dropped events without a usable start");
    }
    if dated.is_empty() {
        return Schedule::Empty;
    }

    dated.sort_by(|(_, a), (_, b)| {
        a.start
            .cmp(&b.start)
            .then_with(|| a.id.cmp(&b.id))
            .then_with(|| a.title.cmp(&b.title))
    });

    let mut grouped = GroupedSchedule::default();
    for (date, ev) in dated {
        grouped.buckets[date.weekday().num_days_from_monday() as usize].push(ev);
    }
    Schedule::Grouped(grouped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProviderId;

    fn event(id: &str, start: Option<&str>) -> RawEvent {
        RawEvent {
            id: ProviderId::new(id),
            title: Some(format!("Event {}", id)),
            start: start.map(String::from),
            location: None,
            notes: None,
            category: None,
        }
    }

    fn ids(events: &[RawEvent]) -> Vec<&str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_empty_input_is_empty_signal() {
        assert_eq!(group(vec![]), Schedule::Empty);
    }

    #[test]
    fn test_only_unparsable_starts_is_empty_signal() {
        let events = vec![event("1", None), event("2", Some("tomorrow")), event("3", Some(""))];
        assert_eq!(group(events), Schedule::Empty);
    }

    #[test]
    fn test_buckets_by_weekday_in_start_order() {
        let events = vec![
            event("thu-late", Some("2026-10-15T18:00:00+02:00")),
            event("mon", Some("2026-10-12T10:00:00+02:00")),
            event("thu-early", Some("2026-10-15T09:00:00+02:00")),
            event("sun", Some("2026-10-18T20:00:00+02:00")),
        ];
        let Schedule::Grouped(g) = group(events) else {
            panic!("expected grouped schedule");
        };
        assert_eq!(ids(g.get(Weekday::Thu)), vec!["thu-early", "thu-late"]);
        assert_eq!(ids(g.get(Weekday::Mon)), vec!["mon"]);
        assert!(g.get(Weekday::Tue).is_empty());
        let order: Vec<Weekday> = g.days().map(|(d, _)| d).collect();
        assert_eq!(order, vec![Weekday::Mon, Weekday::Thu, Weekday::Sun]);
        assert_eq!(g.event_count(), 4);
    }

    #[test]
    fn test_unparsable_starts_dropped_anywhere() {
        let events = vec![
            event("bad-first", None),
            event("ok", Some("2026-10-13T09:00")),
            event("bad-mid", Some("13/10/2026")),
            event("bad-last", Some("2026-1")),
        ];
        let Schedule::Grouped(g) = group(events) else {
            panic!("expected grouped schedule");
        };
        assert_eq!(g.event_count(), 1);
        assert_eq!(ids(g.get(Weekday::Tue)), vec!["ok"]);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let a = event("a", Some("2026-10-14T09:00"));
        let b = event("b", Some("2026-10-14T09:00"));
        let c = event("c", Some("2026-10-12T08:00"));
        let forward = group(vec![a.clone(), b.clone(), c.clone()]);
        let reversed = group(vec![c, b, a]);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_grouping_sorted_input_is_idempotent() {
        let events = vec![
            event("1", Some("2026-10-12T08:00")),
            event("2", Some("2026-10-14T09:00")),
            event("3", Some("2026-10-14T11:00")),
        ];
        let Schedule::Grouped(g) = group(events.clone()) else {
            panic!("expected grouped schedule");
        };
        let flattened: Vec<RawEvent> = g.days().flat_map(|(_, evs)| evs.to_vec()).collect();
        assert_eq!(flattened, events);
        assert_eq!(group(flattened), Schedule::Grouped(g));
    }
}
