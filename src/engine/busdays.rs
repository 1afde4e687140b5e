// ==========================================
// Retouch SLA Checker - Business-Day Calculator
// ==========================================
// Weekday count (Mon-Fri) over the half-open interval [start, end).
// No holiday calendar. Negative when end < start; callers clamp in
// the overage calculation, never here.
// ==========================================

use chrono::{Datelike, Duration, NaiveDate};

/// Count the business days in `[start, end)`.
///
/// `business_days(d, d) == 0` for any `d`, and a full calendar week
/// always contributes exactly 5.
pub fn business_days(start: NaiveDate, end: NaiveDate) -> i64 {
    if start == end {
        return 0;
    }
    let (from, to, sign) = if end >= start {
        (start, end, 1)
    } else {
        (end, start, -1)
    };

    let total_days = (to - from).num_days();
    let full_weeks = total_days / 7;
    let mut count = full_weeks * 5;

    let mut day = from + Duration::days(full_weeks * 7);
    while day < to {
        if day.weekday().num_days_from_monday() < 5 {
            count += 1;
        }
        day += Duration::days(1);
    }

    sign * count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_day_is_zero() {
        assert_eq!(business_days(date(2024, 1, 15), date(2024, 1, 15)), 0);
        // Saturday to Saturday too
        assert_eq!(business_days(date(2024, 1, 13), date(2024, 1, 13)), 0);
    }

    #[test]
    fn test_full_week_is_five() {
        // Monday 2024-01-15 + 7 calendar days
        assert_eq!(business_days(date(2024, 1, 15), date(2024, 1, 22)), 5);
        // Any anchor weekday: Wednesday + 7
        assert_eq!(business_days(date(2024, 1, 17), date(2024, 1, 24)), 5);
    }

    #[test]
    fn test_end_exclusive_start_inclusive() {
        // Mon -> Tue counts Monday only
        assert_eq!(business_days(date(2024, 1, 15), date(2024, 1, 16)), 1);
        // Fri -> Mon counts Friday only (weekend skipped)
        assert_eq!(business_days(date(2024, 1, 19), date(2024, 1, 22)), 1);
        // Sat -> Mon counts nothing
        assert_eq!(business_days(date(2024, 1, 20), date(2024, 1, 22)), 0);
    }

    #[test]
    fn test_negative_when_end_before_start() {
        assert_eq!(business_days(date(2024, 1, 22), date(2024, 1, 15)), -5);
        assert_eq!(business_days(date(2024, 1, 16), date(2024, 1, 15)), -1);
    }

    #[test]
    fn test_multi_week_span() {
        // Mon 2024-01-01 .. Mon 2024-01-29: 4 full weeks
        assert_eq!(business_days(date(2024, 1, 1), date(2024, 1, 29)), 20);
        // plus mid-week remainder: .. Wed 2024-01-31
        assert_eq!(business_days(date(2024, 1, 1), date(2024, 1, 31)), 22);
    }
}
