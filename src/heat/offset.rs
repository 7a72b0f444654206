use crate::model::HORIZON;
use chrono::{DateTime, FixedOffset, TimeZone, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOffset {
    /// Whole calendar days before today, `0..=HORIZON`.
    Within(usize),
    /// Older than the horizon; never aggregated.
    OutOfRange,
}

/// Calendar days between `timestamp` and `now`, both truncated to midnight
/// in the timestamp's own timezone.
///
/// Timestamps at or after that midnight count as today. Counting dates
/// rather than 24 hour spans keeps DST transitions from shifting a commit
/// into the neighbouring day.
pub fn day_offset<Tz: TimeZone>(timestamp: &DateTime<FixedOffset>, now: &DateTime<Tz>) -> DayOffset {
    let reference = now.with_timezone(timestamp.offset()).date_naive();
    let days = (reference - timestamp.date_naive()).num_days().max(0) as usize;

    if days > HORIZON {
        DayOffset::OutOfRange
    } else {
        DayOffset::Within(days)
    }
}

/// Shift that puts today into its weekday slot of week 0.
///
/// Sunday maps to 7 and each following day one less, down to 1 on Saturday.
pub fn alignment_offset(weekday: Weekday) -> u32 {
    7 - weekday.num_days_from_sunday()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Duration, NaiveDate, Utc};
    use pretty_assertions::assert_eq;

    fn at(offset_hours: i32, date: NaiveDate, h: u32, m: u32) -> DateTime<FixedOffset> {
        let tz = FixedOffset::east_opt(offset_hours * 3600).unwrap();
        tz.from_local_datetime(&date.and_hms_opt(h, m, 0).unwrap())
            .single()
            .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn midnight_n_days_back_counts_n() {
        let now = at(2, date(2026, 10, 16), 15, 30);
        for n in 0..=HORIZON as i64 {
            let day = date(2026, 10, 16) - Duration::days(n);
            let ts = at(2, day, 0, 0);
            assert_eq!(day_offset(&ts, &now), DayOffset::Within(n as usize), "n = {n}");
        }
    }

    #[test]
    fn past_horizon_is_out_of_range() {
        let now = at(0, date(2026, 10, 16), 9, 0);
        let ts = at(0, date(2026, 10, 16) - Duration::days(HORIZON as i64 + 1), 23, 59);
        assert_eq!(day_offset(&ts, &now), DayOffset::OutOfRange);
    }

    #[test]
    fn same_day_and_future_are_today() {
        let now = at(0, date(2026, 10, 16), 9, 0);
        assert_eq!(day_offset(&at(0, date(2026, 10, 16), 0, 0), &now), DayOffset::Within(0));
        assert_eq!(day_offset(&at(0, date(2026, 10, 16), 23, 59), &now), DayOffset::Within(0));
        assert_eq!(day_offset(&at(0, date(2026, 10, 18), 8, 0), &now), DayOffset::Within(0));
    }

    #[test]
    fn late_evening_yesterday_is_one_day_not_zero() {
        let now = at(0, date(2026, 10, 16), 0, 30);
        let ts = at(0, date(2026, 10, 15), 23, 45);
        assert_eq!(day_offset(&ts, &now), DayOffset::Within(1));
    }

    #[test]
    fn reference_midnight_uses_timestamp_timezone() {
        // 2026-10-16 01:00 UTC is still 2026-10-15 in UTC-5.
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 1, 0, 0).unwrap();
        let ts = at(-5, date(2026, 10, 15), 10, 0);
        assert_eq!(day_offset(&ts, &now), DayOffset::Within(0));

        let ts = at(0, date(2026, 10, 15), 10, 0);
        assert_eq!(day_offset(&ts, &now), DayOffset::Within(1));
    }

    #[test]
    fn alignment_counts_down_from_sunday() {
        let expected = [
            (Weekday::Sun, 7),
            (Weekday::Mon, 6),
            (Weekday::Tue, 5),
            (Weekday::Wed, 4),
            (Weekday::Thu, 3),
            (Weekday::Fri, 2),
            (Weekday::Sat, 1),
        ];
        for (weekday, offset) in expected {
            assert_eq!(alignment_offset(weekday), offset, "{weekday}");
        }
    }

    #[test]
    fn alignment_of_today_matches_date_weekday() {
        // 2026-10-16 is a Friday.
        assert_eq!(alignment_offset(date(2026, 10, 16).weekday()), 2);
    }
}
