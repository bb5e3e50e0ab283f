//! Calendar arithmetic for billing due dates.
//!
//! The due-total buckets walk every debt for three date ranges at once, so
//! the helpers here use Rata Die day-numbering for O(1) day differences and
//! direct calendar arithmetic for month stepping — no `jiff::Span`
//! allocation or normalisation involved. The billing-day helpers clamp a
//! nominal 1-31 due day into whatever month it lands in (a debt due on the
//! 31st is due Feb 28 in February).

use jiff::civil::Date;

use crate::model::WeekStart;

/// Fast leap year check.
#[inline]
pub fn is_leap_year(year: i16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Fast inline days-in-month calculation without creating a `jiff::civil::Date`.
#[inline]
pub fn days_in_month(year: i16, month: i8) -> i8 {
    const DAYS: [i8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS[(month - 1) as usize]
    }
}

/// Convert a civil date to a Rata Die day number (days since 0001-01-01).
///
/// Uses the proleptic Gregorian calendar algorithm from Baum (2017).
#[inline]
fn rata_die(d: Date) -> i32 {
    let y = d.year() as i32;
    let m = d.month() as i32;
    let day = d.day() as i32;

    // Shift March = month 1 so Feb (end of "year") is month 12
    let a = (14 - m) / 12;
    let y2 = y - a;
    let m2 = m + 12 * a - 3;

    day + (153 * m2 + 2) / 5 + 365 * y2 + y2 / 4 - y2 / 100 + y2 / 400 - 306
}

/// Compute the number of days between two dates (d2 - d1), positive when
/// `d2 > d1`.
#[inline]
pub fn fast_days_between(d1: Date, d2: Date) -> i32 {
    rata_die(d2) - rata_die(d1)
}

/// Add `n` days to a date without going through `jiff::Span`.
#[inline]
pub fn add_days(d: Date, n: i32) -> Date {
    rd_to_date(rata_die(d) + n)
}

/// Convert a Rata Die day number back to a `jiff::civil::Date`.
///
/// Inverse of `rata_die()`, using the same proleptic Gregorian algorithm.
#[inline]
fn rd_to_date(rd: i32) -> Date {
    // Shift so day 0 = March 1, year 0
    let z = rd + 306;
    let h = 100 * z - 25;
    let a = h / 3_652_425;
    let b = a - a / 4;
    let y = (100 * b + h) / 36_525;
    let c = b + z - 365 * y - y / 4;
    let m = (5 * c + 456) / 153;
    let day = c - (153 * m - 457) / 5;

    let (year, month) = if m > 12 { (y + 1, m - 12) } else { (y, m) };

    jiff::civil::date(year as i16, month as i8, day as i8)
}

fn next_month(year: i16, month: i8) -> (i16, i8) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

/// Build the billing date for a nominal due day within one month,
/// clamping past the month's end.
fn due_date_in_month(year: i16, month: i8, due_day: i8) -> Date {
    let clamped = due_day.min(days_in_month(year, month));
    jiff::civil::date(year, month, clamped)
}

/// Next occurrence of a monthly billing day on or after `today`.
pub fn next_due_date(due_day: i8, today: Date) -> Date {
    let candidate = due_date_in_month(today.year(), today.month(), due_day);
    if candidate < today {
        let (year, month) = next_month(today.year(), today.month());
        due_date_in_month(year, month, due_day)
    } else {
        candidate
    }
}

/// One billing cycle after `current_due`, re-clamping the nominal due day
/// into the next month.
pub fn advance_due_date(due_day: i8, current_due: Date) -> Date {
    let (year, month) = next_month(current_due.year(), current_due.month());
    due_date_in_month(year, month, due_day)
}

/// Inclusive [start, end] of the week containing `today`.
pub fn week_bounds(today: Date, week_start: WeekStart) -> (Date, Date) {
    let offset = match week_start {
        WeekStart::Mon => today.weekday().to_monday_zero_offset() as i32,
        WeekStart::Sun => today.weekday().to_sunday_zero_offset() as i32,
    };
    let start = add_days(today, -offset);
    (start, add_days(start, 6))
}

/// Inclusive [start, end] of the week after the one containing `today`.
pub fn next_week_bounds(today: Date, week_start: WeekStart) -> (Date, Date) {
    let (start, _) = week_bounds(today, week_start);
    let next_start = add_days(start, 7);
    (next_start, add_days(next_start, 6))
}

/// Inclusive [start, end] of the month containing `today`.
pub fn month_bounds(today: Date) -> (Date, Date) {
    let year = today.year();
    let month = today.month();
    (
        jiff::civil::date(year, month, 1),
        jiff::civil::date(year, month, days_in_month(year, month)),
    )
}

/// Days from `today` until `due`, never negative.
pub fn days_until_due(due: Date, today: Date) -> i32 {
    fast_days_between(today, due).max(0)
}

pub fn is_in_range(date: Date, start: Date, end: Date) -> bool {
    date >= start && date <= end
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn test_fast_days_between_across_year() {
        // 2024 is a leap year → 366 days
        assert_eq!(fast_days_between(date(2024, 1, 1), date(2025, 1, 1)), 366);
        assert_eq!(fast_days_between(date(2025, 1, 1), date(2026, 1, 1)), 365);
    }

    #[test]
    fn test_fast_days_between_matches_jiff() {
        let pairs = [
            (date(2020, 1, 1), date(2030, 6, 15)),
            (date(2024, 2, 29), date(2025, 2, 28)),
            (date(2025, 12, 31), date(2026, 1, 1)),
        ];
        for (d1, d2) in pairs {
            let jiff_days = (d2 - d1).get_days();
            let fast_days = fast_days_between(d1, d2);
            assert_eq!(
                fast_days, jiff_days,
                "mismatch for {d1} → {d2}: fast={fast_days}, jiff={jiff_days}"
            );
        }
    }

    #[test]
    fn test_add_days_leap_year() {
        assert_eq!(add_days(date(2024, 2, 28), 1), date(2024, 2, 29));
        assert_eq!(add_days(date(2024, 2, 29), 1), date(2024, 3, 1));
        assert_eq!(add_days(date(2025, 2, 28), 1), date(2025, 3, 1));
    }

    #[test]
    fn test_rata_die_roundtrip() {
        let dates = [
            date(2000, 1, 1),
            date(2024, 2, 29),
            date(2026, 6, 15),
            date(2099, 12, 31),
        ];
        for d in dates {
            let rd = rata_die(d);
            assert_eq!(d, rd_to_date(rd), "roundtrip failed for {d}");
        }
    }

    #[test]
    fn test_next_due_date_upcoming_this_month() {
        assert_eq!(next_due_date(15, date(2026, 3, 10)), date(2026, 3, 15));
        // The due day itself still counts as upcoming
        assert_eq!(next_due_date(15, date(2026, 3, 15)), date(2026, 3, 15));
    }

    #[test]
    fn test_next_due_date_rolls_to_next_month() {
        assert_eq!(next_due_date(5, date(2026, 3, 10)), date(2026, 4, 5));
        assert_eq!(next_due_date(1, date(2026, 12, 2)), date(2027, 1, 1));
    }

    #[test]
    fn test_next_due_date_clamps_to_month_end() {
        // Due on the 31st: February clamps to its last day
        assert_eq!(next_due_date(31, date(2026, 2, 1)), date(2026, 2, 28));
        assert_eq!(next_due_date(31, date(2024, 2, 1)), date(2024, 2, 29));
        assert_eq!(next_due_date(31, date(2026, 4, 1)), date(2026, 4, 30));
    }

    #[test]
    fn test_advance_due_date_restores_nominal_day() {
        // Feb 28 due date with a nominal day of 31 springs back in March
        assert_eq!(advance_due_date(31, date(2026, 2, 28)), date(2026, 3, 31));
        assert_eq!(advance_due_date(15, date(2026, 12, 15)), date(2027, 1, 15));
    }

    #[test]
    fn test_week_bounds_monday_start() {
        // 2026-03-11 is a Wednesday
        let (start, end) = week_bounds(date(2026, 3, 11), WeekStart::Mon);
        assert_eq!(start, date(2026, 3, 9));
        assert_eq!(end, date(2026, 3, 15));
    }

    #[test]
    fn test_week_bounds_sunday_start() {
        let (start, end) = week_bounds(date(2026, 3, 11), WeekStart::Sun);
        assert_eq!(start, date(2026, 3, 8));
        assert_eq!(end, date(2026, 3, 14));
    }

    #[test]
    fn test_next_week_bounds_follow_on() {
        let (start, end) = next_week_bounds(date(2026, 3, 11), WeekStart::Mon);
        assert_eq!(start, date(2026, 3, 16));
        assert_eq!(end, date(2026, 3, 22));
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(
            month_bounds(date(2026, 2, 14)),
            (date(2026, 2, 1), date(2026, 2, 28))
        );
        assert_eq!(
            month_bounds(date(2024, 2, 14)),
            (date(2024, 2, 1), date(2024, 2, 29))
        );
    }

    #[test]
    fn test_days_until_due_saturates() {
        assert_eq!(days_until_due(date(2026, 3, 15), date(2026, 3, 10)), 5);
        assert_eq!(days_until_due(date(2026, 3, 10), date(2026, 3, 15)), 0);
    }
}
