//! Week boundaries from an offset relative to the week containing `now`.

use crate::domain::WeekRange;
use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};

/// Monday..=Sunday of the week `offset` weeks away from the week containing `now`.
///
/// Total for every `offset`: past the calendar's representable range the start saturates at
/// the earliest/latest Monday that still has a full week after it.
pub fn compute_week_range(offset: i64, now: DateTime<Utc>) -> WeekRange {
    let today = now.date_naive();
    let monday = today - Days::new(u64::from(today.weekday().num_days_from_monday()));
    let start = shift_weeks(monday, offset);
    WeekRange {
        start,
        end: start + Days::new(6),
        offset,
    }
}

fn shift_weeks(monday: NaiveDate, offset: i64) -> NaiveDate {
    let days = Days::new(offset.unsigned_abs().saturating_mul(7));
    let shifted = if offset >= 0 {
        monday
            .checked_add_days(days)
            .filter(|d| d.checked_add_days(Days::new(6)).is_some())
    } else {
        monday.checked_sub_days(days)
    };
    shifted.unwrap_or_else(|| {
        if offset >= 0 {
            last_full_monday()
        } else {
            first_monday()
        }
    })
}

fn last_full_monday() -> NaiveDate {
    let d = NaiveDate::MAX - Days::new(6);
    d - Days::new(u64::from(d.weekday().num_days_from_monday()))
}

fn first_monday() -> NaiveDate {
    let d = NaiveDate::MIN;
    d + Days::new(u64::from((7 - d.weekday().num_days_from_monday()) % 7))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Weekday};

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 15, 30, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_wednesday_current_week() {
        // 2026-10-14 is a Wednesday
        let range = compute_week_range(0, at(2026, 10, 14));
        assert_eq!(range.start, date(2026, 10, 12));
        assert_eq!(range.end, date(2026, 10, 18));
        assert_eq!(range.offset, 0);
    }

    #[test]
    fn test_monday_and_sunday_anchor_same_week() {
        assert_eq!(compute_week_range(0, at(2026, 10, 12)).start, date(2026, 10, 12));
        assert_eq!(compute_week_range(0, at(2026, 10, 18)).start, date(2026, 10, 12));
    }

    #[test]
    fn test_offsets_cross_month_and_year() {
        let now = at(2026, 12, 30);
        assert_eq!(compute_week_range(1, now).start, date(2027, 1, 4));
        assert_eq!(compute_week_range(-1, now).start, date(2026, 12, 21));
    }

    #[test]
    fn test_every_offset_is_a_monday_week() {
        let now = at(2026, 10, 17);
        for o in -60..=60 {
            let r = compute_week_range(o, now);
            let next = compute_week_range(o + 1, now);
            assert_eq!(r.start.weekday(), Weekday::Mon);
            assert_eq!(r.end, r.start + Days::new(6));
            assert_eq!(next.start, r.start + Days::new(7));
        }
    }

    #[test]
    fn test_extreme_offsets_saturate() {
        let now = at(2026, 10, 17);
        let hi = compute_week_range(i64::MAX, now);
        let lo = compute_week_range(i64::MIN, now);
        assert_eq!(hi.start.weekday(), Weekday::Mon);
        assert_eq!(lo.start.weekday(), Weekday::Mon);
        assert_eq!(hi.end, hi.start + Days::new(6));
        assert_eq!(lo.offset, i64::MIN);
    }
}
