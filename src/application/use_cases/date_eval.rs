// ============================================================
// FLUENT DATE EVALUATION
// ============================================================
// Turns human-friendly date expressions ("yesterday", "3weeksAgo")
// and date-span keywords ("last7days", "thisMonth") into concrete
// dates, evaluated against the wall-clock date.

use chrono::{Datelike, Duration, Local, Months, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::DateSpan;

/// Weeks start on Monday. A fixed constant, not derived from the
/// runtime locale.
pub const WEEK_START: Weekday = Weekday::Mon;

static X_DAYS_AGO: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([1-9][0-9]*)daysago$").unwrap());
static X_WEEKS_AGO: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([1-9][0-9]*)weeksago$").unwrap());
static X_MONTHS_AGO: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([1-9][0-9]*)monthsago$").unwrap());
static X_YEARS_AGO: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([1-9][0-9]*)yearsago$").unwrap());
static LAST_X_DAYS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^last([1-9][0-9]*)days$").unwrap());
static LAST_X_WEEKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^last([1-9][0-9]*)weeks$").unwrap());
static LAST_X_MONTHS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^last([1-9][0-9]*)months$").unwrap());
static LAST_X_YEARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^last([1-9][0-9]*)years$").unwrap());

/// Evaluate a fluent date expression, ignoring case: `today`,
/// `yesterday`, `{N}daysAgo`, `{N}weeksAgo`, `{N}monthsAgo`,
/// `{N}yearsAgo`. An unrecognized expression falls back to today's
/// date without raising; the analytics query then covers "now", which
/// can mask a caller typo but matches the historical behavior.
pub fn evaluate_date(value: &str) -> NaiveDate {
    evaluate_date_at(value, today())
}

/// Evaluate a fluent date-span expression, ignoring case:
/// `last{N}days`, `thisWeek`/`lastWeek`/`last{N}weeks`,
/// `thisMonth`/`lastMonth`/`last{N}months`,
/// `thisYear`/`lastYear`/`last{N}years`. Unrecognized input falls
/// back to the single-day span (today, today) without raising.
pub fn evaluate_date_span(value: &str) -> DateSpan {
    evaluate_date_span_at(value, today())
}

fn evaluate_date_at(value: &str, today: NaiveDate) -> NaiveDate {
    let value = value.to_lowercase();
    match value.as_str() {
        "today" => today,
        "yesterday" => today - Duration::days(1),
        v if X_DAYS_AGO.is_match(v) => today - Duration::days(magnitude(&X_DAYS_AGO, v)),
        v if X_WEEKS_AGO.is_match(v) => today - Duration::days(magnitude(&X_WEEKS_AGO, v) * 7),
        v if X_MONTHS_AGO.is_match(v) => months_ago(today, magnitude(&X_MONTHS_AGO, v)),
        v if X_YEARS_AGO.is_match(v) => years_ago(today, magnitude(&X_YEARS_AGO, v)),
        _ => today,
    }
}

fn evaluate_date_span_at(value: &str, today: NaiveDate) -> DateSpan {
    let value = value.to_lowercase();
    let yesterday = today - Duration::days(1);
    match value.as_str() {
        v if LAST_X_DAYS.is_match(v) => {
            DateSpan::new(today - Duration::days(magnitude(&LAST_X_DAYS, v)), yesterday)
        }
        "thisweek" => for_week(today, today),
        "lastweek" => for_week(today - Duration::days(7), today - Duration::days(7)),
        v if LAST_X_WEEKS.is_match(v) => for_week(
            today - Duration::days(magnitude(&LAST_X_WEEKS, v) * 7),
            today - Duration::days(7),
        ),
        "thismonth" => for_month(today, today),
        "lastmonth" => for_month(months_ago(today, 1), months_ago(today, 1)),
        v if LAST_X_MONTHS.is_match(v) => for_month(
            months_ago(today, magnitude(&LAST_X_MONTHS, v)),
            months_ago(today, 1),
        ),
        "thisyear" => for_year(today, today),
        "lastyear" => for_year(years_ago(today, 1), years_ago(today, 1)),
        v if LAST_X_YEARS.is_match(v) => for_year(
            years_ago(today, magnitude(&LAST_X_YEARS, v)),
            years_ago(today, 1),
        ),
        _ => DateSpan::single(today),
    }
}

fn magnitude(pattern: &Regex, value: &str) -> i64 {
    pattern
        .captures(value)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn months_ago(value: NaiveDate, count: i64) -> NaiveDate {
    value
        .checked_sub_months(Months::new(count.min(u32::MAX as i64) as u32))
        .unwrap_or(value)
}

fn years_ago(value: NaiveDate, count: i64) -> NaiveDate {
    months_ago(value, count.saturating_mul(12))
}

fn for_week(first: NaiveDate, last: NaiveDate) -> DateSpan {
    DateSpan::new(start_of_week(first), start_of_week(last) + Duration::days(6))
}

fn for_month(first: NaiveDate, last: NaiveDate) -> DateSpan {
    DateSpan::new(start_of_month(first), end_of_month(last))
}

fn for_year(first: NaiveDate, last: NaiveDate) -> DateSpan {
    DateSpan::new(start_of_year(first), end_of_year(last))
}

fn start_of_week(value: NaiveDate) -> NaiveDate {
    value - Duration::days(value.weekday().days_since(WEEK_START) as i64)
}

fn start_of_month(value: NaiveDate) -> NaiveDate {
    value.with_day(1).unwrap_or(value)
}

fn end_of_month(value: NaiveDate) -> NaiveDate {
    start_of_month(value)
        .checked_add_months(Months::new(1))
        .map(|next| next - Duration::days(1))
        .unwrap_or(value)
}

fn start_of_year(value: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(value.year(), 1, 1).unwrap_or(value)
}

fn end_of_year(value: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(value.year(), 12, 31).unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    // Wall-clock evaluation: assert against both a before and after
    // snapshot so a midnight rollover mid-test cannot flake.
    fn assert_date<F>(input: &str, expected: F)
    where
        F: Fn(NaiveDate) -> NaiveDate,
    {
        let before = today();
        let got = evaluate_date(input);
        let after = today();
        assert!(
            got == expected(before) || got == expected(after),
            "evaluate_date({:?}) = {}, expected {}",
            input,
            got,
            expected(before)
        );
    }

    fn assert_span<F>(input: &str, expected: F)
    where
        F: Fn(NaiveDate) -> DateSpan,
    {
        let before = today();
        let got = evaluate_date_span(input);
        let after = today();
        assert!(
            got == expected(before) || got == expected(after),
            "evaluate_date_span({:?}) = {:?}, expected {:?}",
            input,
            got,
            expected(before)
        );
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_date("Today", |t| t);
        assert_date("YESTERDAY", |t| t - Duration::days(1));
        assert_date("3daysAgo", |t| t - Duration::days(3));
        assert_date("2WeeksAgo", |t| t - Duration::days(14));
    }

    #[test]
    fn test_months_and_years_ago_use_calendar_arithmetic() {
        assert_date("1monthsago", |t| months_ago(t, 1));
        assert_date("2yearsago", |t| years_ago(t, 2));
        // clamped at short month ends rather than overflowing
        assert_eq!(months_ago(d(2024, 3, 31), 1), d(2024, 2, 29));
        assert_eq!(years_ago(d(2024, 2, 29), 1), d(2023, 2, 28));
    }

    #[test]
    fn test_unrecognized_expression_falls_back_to_today() {
        // documented quirk: silently defaults instead of raising, so a
        // typo like "yesterdy" queries today's data
        assert_date("yesterdy", |t| t);
        assert_date("0daysago", |t| t);
        assert_date("", |t| t);
    }

    #[test]
    fn test_last_n_days_ends_yesterday() {
        assert_span("last7days", |t| {
            DateSpan::new(t - Duration::days(7), t - Duration::days(1))
        });
        assert_span("LAST1DAYS", |t| {
            DateSpan::new(t - Duration::days(1), t - Duration::days(1))
        });
    }

    #[test]
    fn test_last_n_units_share_the_single_unit_end() {
        for (many, one) in [
            ("last3days", "last1days"),
            ("last3weeks", "last1weeks"),
            ("last3months", "last1months"),
            ("last3years", "last1years"),
        ] {
            let wide = evaluate_date_span(many);
            let narrow = evaluate_date_span(one);
            assert_eq!(wide.end, narrow.end, "{} vs {}", many, one);
            assert!(wide.start <= narrow.start);
        }
    }

    #[test]
    fn test_spans_are_never_inverted() {
        for input in [
            "last1days",
            "last90days",
            "thisweek",
            "lastweek",
            "last4weeks",
            "thismonth",
            "lastmonth",
            "last12months",
            "thisyear",
            "lastyear",
            "last2years",
            "garbage",
        ] {
            let span = evaluate_date_span(input);
            assert!(span.start <= span.end, "{} gave {:?}", input, span);
        }
    }

    #[test]
    fn test_this_week_is_monday_through_sunday_containing_today() {
        let before = today();
        let span = evaluate_date_span("thisWeek");
        let after = today();
        assert_eq!(span.len_days(), 7);
        assert_eq!(span.start.weekday(), WEEK_START);
        assert!(span.contains(before) || span.contains(after));
    }

    #[test]
    fn test_last_week_precedes_this_week() {
        let this_week = evaluate_date_span("thisweek");
        let last_week = evaluate_date_span("lastweek");
        assert_eq!(last_week.len_days(), 7);
        assert_eq!(last_week.end + Duration::days(1), this_week.start);
    }

    #[test]
    fn test_calendar_period_spans_at_fixed_date() {
        let t = d(2024, 5, 15); // a Wednesday
        assert_eq!(
            evaluate_date_span_at("thisweek", t),
            DateSpan::new(d(2024, 5, 13), d(2024, 5, 19))
        );
        assert_eq!(
            evaluate_date_span_at("lastweek", t),
            DateSpan::new(d(2024, 5, 6), d(2024, 5, 12))
        );
        assert_eq!(
            evaluate_date_span_at("last2weeks", t),
            DateSpan::new(d(2024, 4, 29), d(2024, 5, 12))
        );
        assert_eq!(
            evaluate_date_span_at("thismonth", t),
            DateSpan::new(d(2024, 5, 1), d(2024, 5, 31))
        );
        assert_eq!(
            evaluate_date_span_at("lastmonth", t),
            DateSpan::new(d(2024, 4, 1), d(2024, 4, 30))
        );
        assert_eq!(
            evaluate_date_span_at("last3months", t),
            DateSpan::new(d(2024, 2, 1), d(2024, 4, 30))
        );
        assert_eq!(
            evaluate_date_span_at("thisyear", t),
            DateSpan::new(d(2024, 1, 1), d(2024, 12, 31))
        );
        assert_eq!(
            evaluate_date_span_at("lastyear", t),
            DateSpan::new(d(2023, 1, 1), d(2023, 12, 31))
        );
        assert_eq!(
            evaluate_date_span_at("last2years", t),
            DateSpan::new(d(2022, 1, 1), d(2023, 12, 31))
        );
    }

    #[test]
    fn test_unrecognized_span_falls_back_to_today_today() {
        // documented quirk, same silent default as evaluate_date
        assert_span("lastdays", |t| DateSpan::single(t));
        assert_span("last0days", |t| DateSpan::single(t));
        assert_span("", |t| DateSpan::single(t));
    }
}
