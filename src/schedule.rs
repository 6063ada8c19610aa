use crate::compiler;
use crate::error::Error;
use crate::ir::{IrDateRange, IrGroup, IrIntegerRange, IrProgram};
use crate::parser::Parser;
use crate::utils::{days_in_month, days_in_previous_month};
use crate::validator::Validator;
use crate::Result;
use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, TimeZone, Timelike, Utc};
use std::cmp::Ordering;
use std::fmt::Display;

/// The search covers the starting day plus 366 more in either direction,
/// guaranteeing at least one full year of coverage.
const SEARCH_HORIZON_DAYS: i64 = 367;

/// Represents a compiled schyntax schedule with its methods.
///
/// A schedule is a list of field expressions, optionally bundled into
/// `{ ... }` groups whose events are unioned:
///
/// | Expression     | Aliases                 | Allowed values            |
/// | -------------- | ----------------------- | ------------------------- |
/// | `seconds(...)` | s, sec, secondofminute  | 0-59                      |
/// | `minutes(...)` | m, min, minuteofhour    | 0-59                      |
/// | `hours(...)`   | h, hour, hourofday      | 0-23                      |
/// | `days(...)`    | day, dow, dayofweek     | 1-7 or su-sa (Sunday = 1) |
/// | `dom(...)`     | dayofmonth, daysofmonth | 1-31, or -31..-1 counting back from the end of the month |
/// | `dates(...)`   | date                    | month/day or year/month/day, years 1900-2200 |
///
/// Each argument is a value, a range (`a..b`, or half-open `a..<b`), or the
/// wildcard `*`, optionally prefixed with `!` to exclude it and suffixed
/// with `%n` to step through it. Fields below the finest one mentioned are
/// implied to zero, so `hours(12)` means 12:00:00 exactly.
///
/// All computation is in UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    original_text: String,
    ir: IrProgram,
}

impl Schedule {
    /// Schedule constructor: parses, validates, and compiles the schedule
    /// string.
    pub fn new(schedule: impl Into<String>) -> Result<Self> {
        let original_text = schedule.into();

        let program = Parser::new(&original_text).parse()?;
        Validator::new(&original_text, &program).assert_valid()?;
        let ir = compiler::compile(&program);

        Ok(Self { original_text, ir })
    }

    /// The schedule string this schedule was built from.
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// Next event strictly after the current time.
    pub fn next(&self) -> Result<DateTime<Utc>> {
        self.next_after(&Utc::now())
    }

    /// Next event strictly after the provided instant.
    pub fn next_after<Tz: TimeZone>(&self, after: &DateTime<Tz>) -> Result<DateTime<Utc>> {
        self.get_event(after.with_timezone(&Utc), SearchMode::After)
    }

    /// Latest event at or before the current time.
    pub fn previous(&self) -> Result<DateTime<Utc>> {
        self.previous_at_or_before(&Utc::now())
    }

    /// Latest event at or before the provided instant.
    pub fn previous_at_or_before<Tz: TimeZone>(&self, at_or_before: &DateTime<Tz>) -> Result<DateTime<Utc>> {
        self.get_event(at_or_before.with_timezone(&Utc), SearchMode::AtOrBefore)
    }

    /// Endless series of events strictly after the provided instant.
    pub fn iter<Tz: TimeZone>(&self, from: &DateTime<Tz>) -> impl Iterator<Item = DateTime<Utc>> {
        ScheduleIterator {
            next: self.next_after(from).ok(),
            schedule: self.clone(),
        }
    }

    /// Consuming variant of [`Schedule::iter`].
    pub fn into_iter<Tz: TimeZone>(self, from: &DateTime<Tz>) -> impl Iterator<Item = DateTime<Utc>> {
        let next = self.next_after(from).ok();
        ScheduleIterator { schedule: self, next }
    }

    fn get_event(&self, start: DateTime<Utc>, mode: SearchMode) -> Result<DateTime<Utc>> {
        let mut result: Option<DateTime<Utc>> = None;

        // each group searches independently; the union keeps the event
        // nearest to the start in the direction of the search
        for group in &self.ir.groups {
            if let Some(event) = try_get_group_event(group, start, mode) {
                let closer = match result {
                    None => true,
                    Some(current) => match mode {
                        SearchMode::After => event < current,
                        SearchMode::AtOrBefore => event > current,
                    },
                };

                if closer {
                    result = Some(event);
                }
            }
        }

        result.ok_or_else(|| Error::ValidTimeNotFound {
            input: self.original_text.clone(),
        })
    }
}

struct ScheduleIterator {
    schedule: Schedule,
    next: Option<DateTime<Utc>>,
}

impl Iterator for ScheduleIterator {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.schedule.next_after(&current).ok();
        Some(current)
    }
}

impl TryFrom<String> for Schedule {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&String> for Schedule {
    type Error = Error;

    fn try_from(value: &String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Schedule {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.original_text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchMode {
    AtOrBefore,
    After,
}

/// Day-by-day, hour-by-hour, minute-by-minute, second-by-second elimination
/// in the direction of the search, bounded by the search horizon.
fn try_get_group_event(group: &IrGroup, start: DateTime<Utc>, mode: SearchMode) -> Option<DateTime<Utc>> {
    let after = mode == SearchMode::After;
    let inc: i32 = if after { 1 } else { -1 };
    let (init_hour, init_minute, init_second) = if after { (0, 0, 0) } else { (23, 59, 59) };

    for d in 0..SEARCH_HORIZON_DAYS {
        let date;
        let mut hour;
        let mut minute;
        let mut second;
        if d == 0 {
            // "after" events must be strictly in the future
            date = if after {
                start.checked_add_signed(TimeDelta::seconds(1))?
            } else {
                start
            };

            hour = date.hour() as i32;
            minute = date.minute() as i32;
            second = date.second() as i32;
        } else {
            date = start.checked_add_signed(TimeDelta::days(d * i64::from(inc)))?;

            hour = init_hour;
            minute = init_minute;
            second = init_second;
        }

        let year = date.year();
        let month = date.month() as i32;
        let day_of_week = date.weekday().num_days_from_sunday() as i32 + 1; // Sunday = 1
        let day_of_month = date.day() as i32;

        // check if today is an applicable date
        if !group.dates.is_empty()
            && !group.dates.iter().any(|r| in_date_range(r, year, month, day_of_month))
        {
            continue;
        }

        if group
            .dates_excluded
            .iter()
            .any(|r| in_date_range(r, year, month, day_of_month))
        {
            continue;
        }

        // check if today is an applicable day of month
        if !group.days_of_month.is_empty()
            && !group
                .days_of_month
                .iter()
                .any(|r| in_day_of_month_range(r, year, month, day_of_month))
        {
            continue;
        }

        if group
            .days_of_month_excluded
            .iter()
            .any(|r| in_day_of_month_range(r, year, month, day_of_month))
        {
            continue;
        }

        // check if today is an applicable day of week
        if !group.days_of_week.is_empty() && !in_rule(7, &group.days_of_week, day_of_week) {
            continue;
        }

        if in_rule(7, &group.days_of_week_excluded, day_of_week) {
            continue;
        }

        // today is an applicable day; walk the hours, minutes, and seconds
        let hour_count = if after { 24 - hour } else { hour + 1 };
        for _ in 0..hour_count {
            let hour_applicable = (group.hours.is_empty() || in_rule(24, &group.hours, hour))
                && !in_rule(24, &group.hours_excluded, hour);

            if hour_applicable {
                let minute_count = if after { 60 - minute } else { minute + 1 };
                for _ in 0..minute_count {
                    let minute_applicable = (group.minutes.is_empty()
                        || in_rule(60, &group.minutes, minute))
                        && !in_rule(60, &group.minutes_excluded, minute);

                    if minute_applicable {
                        let second_count = if after { 60 - second } else { second + 1 };
                        for _ in 0..second_count {
                            let second_applicable = (group.seconds.is_empty()
                                || in_rule(60, &group.seconds, second))
                                && !in_rule(60, &group.seconds_excluded, second);

                            if second_applicable {
                                // we've found our event
                                return Utc
                                    .with_ymd_and_hms(
                                        year,
                                        month as u32,
                                        day_of_month as u32,
                                        hour as u32,
                                        minute as u32,
                                        second as u32,
                                    )
                                    .single();
                            }

                            second += inc;
                        }
                    }

                    minute += inc;
                    second = init_second;
                }
            }

            hour += inc;
            minute = init_minute;
            second = init_second;
        }
    }

    // no applicable date within the horizon
    None
}

fn in_rule(length_of_unit: i32, rules: &[IrIntegerRange], value: i32) -> bool {
    rules.iter().any(|r| in_integer_range(r, value, length_of_unit))
}

fn in_integer_range(range: &IrIntegerRange, value: i32, length_of_unit: i32) -> bool {
    let Some(end) = range.end else {
        // not a range, so just do a straight comparison
        return value == range.start;
    };

    if range.is_half_open && value == end {
        return false;
    }

    if range.is_split {
        // range spans across the max value and loops back around
        if value <= end || value >= range.start {
            if let Some(interval) = range.interval {
                if value >= range.start {
                    return (value - range.start) % interval == 0;
                }

                return (value + length_of_unit - range.start) % interval == 0;
            }

            return true;
        }
    } else if value >= range.start && value <= end {
        if let Some(interval) = range.interval {
            return (value - range.start) % interval == 0;
        }

        return true;
    }

    false
}

fn in_day_of_month_range(range: &IrIntegerRange, year: i32, month: i32, day_of_month: i32) -> bool {
    let revised;
    let range = if range.start < 0 || range.end.is_some_and(|end| end < 0) {
        // negative values count back from the end of the month
        let days_in_month = days_in_month(year, month);
        let revise = |value: i32| {
            if value < 0 {
                days_in_month + value + 1
            } else {
                value
            }
        };

        revised = range.with_revised_range(revise(range.start), range.end.map(revise).unwrap_or(0));
        &revised
    } else {
        range
    };

    in_integer_range(range, day_of_month, days_in_previous_month(year, month))
}

fn in_date_range(range: &IrDateRange, year: i32, month: i32, day_of_month: i32) -> bool {
    let Some(end) = range.end else {
        // not a range, so just do a straight comparison
        if range.start.month != month || range.start.day != day_of_month {
            return false;
        }

        return !range.dates_have_year() || range.start.year == year;
    };

    if range.is_half_open
        && end.day == day_of_month
        && end.month == month
        && (!range.dates_have_year() || end.year == year)
    {
        // this is the last date of a half-open range
        return false;
    }

    if range.dates_have_year() {
        // with years the check is much simpler because the range can't be split
        if year < range.start.year || year > end.year {
            return false;
        }

        if year == range.start.year
            && compare_month_and_day(month, day_of_month, range.start.month, range.start.day)
                == Ordering::Less
        {
            return false;
        }

        if year == end.year
            && compare_month_and_day(month, day_of_month, end.month, end.day) == Ordering::Greater
        {
            return false;
        }
    } else if range.is_split {
        // yearless range wrapping across January 1
        if month == range.start.month || month == end.month {
            if month == range.start.month && day_of_month < range.start.day {
                return false;
            }

            if month == end.month && day_of_month > end.day {
                return false;
            }
        } else if !(month < end.month || month > range.start.month) {
            return false;
        }
    } else {
        // not a split range, and no year information - just month and day to go on
        if compare_month_and_day(month, day_of_month, range.start.month, range.start.day) == Ordering::Less {
            return false;
        }

        if compare_month_and_day(month, day_of_month, end.month, end.day) == Ordering::Greater {
            return false;
        }
    }

    // somewhere within the range; nothing else to check without an interval
    let Some(interval) = range.interval else {
        return true;
    };

    // figure out the actual date of the low end so we know whether we're on
    // the desired interval
    let start_year = if range.dates_have_year() {
        range.start.year
    } else if range.is_split && month <= end.month {
        // the start date belongs to the previous year
        year - 1
    } else {
        year
    };

    // an interval anchored on February 29 degrades to the 28th in non-leap years
    let start_day = if range.start.month == 2 && range.start.day == 29 && days_in_month(start_year, 2) != 29 {
        28
    } else {
        range.start.day
    };

    let (Some(anchor), Some(current)) = (
        NaiveDate::from_ymd_opt(start_year, range.start.month as u32, start_day as u32),
        NaiveDate::from_ymd_opt(year, month as u32, day_of_month as u32),
    ) else {
        return false;
    };

    let day_count = current.signed_duration_since(anchor).num_days();

    day_count % i64::from(interval) == 0
}

/// Compares (month, day) pairs within an unspecified year.
fn compare_month_and_day(month_a: i32, day_a: i32, month_b: i32, day_b: i32) -> Ordering {
    (month_a, day_a).cmp(&(month_b, day_b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rstest_reuse::{apply, template};
    use std::time::Duration;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[rstest]
    // wildcard minutes with an interval; implied seconds pin to zero
    #[case("min(*%5)", "2014-01-01T00:00:00Z", "2014-01-01T00:05:00Z")]
    #[case("min(*%5)", "2014-01-01T00:04:59Z", "2014-01-01T00:05:00Z")]
    // contiguous hour range
    #[case("hours(3..5)", "2014-01-01T06:30:00Z", "2014-01-02T03:00:00Z")]
    // implied minutes and seconds pin events to the top of the hour
    #[case("hours(3..5)", "2014-01-01T03:00:00Z", "2014-01-01T04:00:00Z")]
    // weekday range with minutes
    #[case("days(mo..fr) min(0,30)", "2015-06-06T12:00:00Z", "2015-06-08T00:00:00Z")]
    // last day of the month
    #[case("dom(-1)", "2015-02-15T00:00:00Z", "2015-02-28T00:00:00Z")]
    #[case("dom(-1)", "2016-02-15T00:00:00Z", "2016-02-29T00:00:00Z")]
    #[case("dom(-1)", "2015-12-31T00:00:00Z", "2016-01-31T00:00:00Z")]
    // split ranges
    #[case("dates(11/1..2/28)", "2015-07-01T00:00:00Z", "2015-11-01T00:00:00Z")]
    #[case("dates(11/1..2/28)", "2015-12-05T06:00:00Z", "2015-12-06T00:00:00Z")]
    #[case("hours(22..2)", "2014-01-01T23:30:00Z", "2014-01-02T00:00:00Z")]
    #[case("hours(22..2)", "2014-01-01T03:00:00Z", "2014-01-01T22:00:00Z")]
    #[case("days(sa..su)", "2015-06-03T00:00:00Z", "2015-06-06T00:00:00Z")]
    #[case("dom(28..3)", "2015-01-10T00:00:00Z", "2015-01-28T00:00:00Z")]
    #[case("sec(58..2%2)", "2014-01-01T00:00:58Z", "2014-01-01T00:01:00Z")]
    // multiple groups union their events
    #[case("{sec(0)} {sec(30)}", "2015-01-01T00:00:10Z", "2015-01-01T00:00:30Z")]
    #[case("{min(10)} {min(20)}", "2015-01-01T00:00:00Z", "2015-01-01T00:10:00Z")]
    #[case("{min(10)} {min(20)}", "2015-01-01T00:15:00Z", "2015-01-01T00:20:00Z")]
    // half-open ranges exclude the end value
    #[case("hours(10..<12)", "2014-01-01T11:00:00Z", "2014-01-02T10:00:00Z")]
    #[case("sec(0..<30)", "2014-01-01T00:00:29Z", "2014-01-01T00:01:00Z")]
    // exclusions
    #[case("sec(*, !30)", "2014-01-01T00:00:29Z", "2014-01-01T00:00:31Z")]
    #[case("min(*) min(!0..29)", "2014-01-01T00:10:00Z", "2014-01-01T00:30:00Z")]
    #[case("days(*, !sa, !su)", "2015-06-05T23:59:59Z", "2015-06-08T00:00:00Z")]
    // dates with explicit years
    #[case("dates(2014/6/1..2014/6/30)", "2014-06-15T12:00:00Z", "2014-06-16T00:00:00Z")]
    #[case("dates(2015/1/1)", "2014-06-01T00:00:00Z", "2015-01-01T00:00:00Z")]
    // leap-year boundaries
    #[case("dates(2/29)", "2015-02-28T23:59:59Z", "2016-02-29T00:00:00Z")]
    #[case("dates(2/29%7)", "2015-02-28T00:00:00Z", "2015-03-07T00:00:00Z")]
    #[case("dates(2/29%7)", "2016-02-28T00:00:00Z", "2016-02-29T00:00:00Z")]
    #[timeout(Duration::from_secs(1))]
    fn test_next_after(#[case] schedule: &str, #[case] start: &str, #[case] expected: &str) {
        let schedule = Schedule::new(schedule).unwrap();
        let next = schedule.next_after(&at(start)).unwrap();
        assert_eq!(next, at(expected), "schedule = {schedule}, start = {start}");
    }

    #[rstest]
    #[case("min(*%5)", "2014-01-01T00:00:00Z", "2014-01-01T00:00:00Z")]
    #[case("min(*%5)", "2014-01-01T00:04:59Z", "2014-01-01T00:00:00Z")]
    #[case("hours(3..5)", "2014-01-01T06:30:00Z", "2014-01-01T05:00:00Z")]
    #[case("days(mo..fr) min(0,30)", "2015-06-06T12:00:00Z", "2015-06-05T23:30:00Z")]
    #[case("dates(11/1..2/28)", "2015-07-01T00:00:00Z", "2015-02-28T00:00:00Z")]
    #[case("{sec(0)} {sec(30)}", "2015-01-01T00:00:10Z", "2015-01-01T00:00:00Z")]
    #[case("hours(10..<12)", "2014-01-01T12:00:00Z", "2014-01-01T11:00:00Z")]
    #[case("hours(22..2)", "2014-01-02T03:00:00Z", "2014-01-02T02:00:00Z")]
    #[case("dom(28..3)", "2015-01-10T00:00:00Z", "2015-01-03T00:00:00Z")]
    #[case("dom(-1)", "2016-03-15T00:00:00Z", "2016-02-29T00:00:00Z")]
    #[case("dates(2015/1/1)", "2015-06-01T00:00:00Z", "2015-01-01T00:00:00Z")]
    #[timeout(Duration::from_secs(1))]
    fn test_previous_at_or_before(#[case] schedule: &str, #[case] start: &str, #[case] expected: &str) {
        let schedule = Schedule::new(schedule).unwrap();
        let previous = schedule.previous_at_or_before(&at(start)).unwrap();
        assert_eq!(previous, at(expected), "schedule = {schedule}, start = {start}");
    }

    #[rstest]
    // year-qualified date out of reach of the horizon
    #[case("dates(2015/1/1)", "2016-06-01T00:00:00Z")]
    // February 30th can never match
    #[case("dom(30) dates(2/1..2/28)", "2015-06-01T00:00:00Z")]
    #[timeout(Duration::from_secs(1))]
    fn test_next_not_found(#[case] schedule: &str, #[case] start: &str) {
        let schedule = Schedule::new(schedule).unwrap();
        let err = schedule.next_after(&at(start)).unwrap_err();
        assert_eq!(
            err,
            Error::ValidTimeNotFound {
                input: schedule.original_text().to_string()
            }
        );
        assert_eq!(err.to_string(), "A valid time was not found for the schedule.");
    }

    #[test]
    fn previous_not_found_beyond_horizon() {
        let schedule = Schedule::new("dates(2/29)").unwrap();
        // 2012-02-29 is more than a year before
        let err = schedule.previous_at_or_before(&at("2013-06-01T00:00:00Z")).unwrap_err();
        assert!(matches!(err, Error::ValidTimeNotFound { .. }));
    }

    #[template]
    #[rstest]
    #[case("sec(*)")]
    #[case("min(*%5)")]
    #[case("hours(22..2)")]
    #[case("days(mo..fr) min(0,30)")]
    #[case("dates(11/1..2/28)")]
    #[case("dom(-1)")]
    #[case("{sec(0)} {sec(30)}")]
    fn assorted_schedules_to_test(#[case] schedule: &str) {}

    #[apply(assorted_schedules_to_test)]
    #[timeout(Duration::from_secs(5))]
    fn test_next_is_strictly_after(#[case] schedule: &str) {
        let schedule = Schedule::new(schedule).unwrap();

        let mut t = at("2015-01-01T00:00:00Z");
        for _ in 0..25 {
            let next = schedule.next_after(&t).unwrap();
            assert!(next > t, "next {next} is not after {t}");
            assert_eq!(next.nanosecond(), 0);

            // the event we just found is its own latest event at-or-before
            assert_eq!(schedule.previous_at_or_before(&next).unwrap(), next);
            t = next;
        }
    }

    #[apply(assorted_schedules_to_test)]
    #[timeout(Duration::from_secs(5))]
    fn test_previous_is_at_or_before(#[case] schedule: &str) {
        let schedule = Schedule::new(schedule).unwrap();

        let mut t = at("2015-06-15T00:00:00Z");
        for _ in 0..25 {
            let previous = schedule.previous_at_or_before(&t).unwrap();
            assert!(previous <= t, "previous {previous} is not at or before {t}");
            assert_eq!(previous.nanosecond(), 0);
            t = previous - TimeDelta::seconds(1);
        }
    }

    #[test]
    fn union_of_groups_is_at_least_as_close_as_each_group() {
        let combined = Schedule::new("{min(10)} {min(20)}").unwrap();
        let tens = Schedule::new("min(10)").unwrap();
        let twenties = Schedule::new("min(20)").unwrap();

        let t = at("2015-01-01T00:00:00Z");
        let next = combined.next_after(&t).unwrap();
        assert!(next <= tens.next_after(&t).unwrap());
        assert!(next <= twenties.next_after(&t).unwrap());
    }

    #[test]
    fn wildcard_schedule_matches_within_a_minute() {
        let schedule = Schedule::new("sec(*)").unwrap();
        let t = at("2014-06-15T23:59:59Z");
        let next = schedule.next_after(&t).unwrap();
        assert_eq!(next, at("2014-06-16T00:00:00Z"));
    }

    #[test]
    fn nanoseconds_do_not_break_strictness() {
        let schedule = Schedule::new("sec(*)").unwrap();
        let t = at("2014-01-01T00:00:00Z") + TimeDelta::nanoseconds(500_000_000);
        let next = schedule.next_after(&t).unwrap();
        assert_eq!(next.timestamp_subsec_nanos(), 0);
        assert_eq!(next, at("2014-01-01T00:00:01Z"));
    }

    #[test]
    fn accepts_any_input_timezone() {
        let schedule = Schedule::new("hours(12)").unwrap();
        // 11:00 UTC
        let fixed = DateTime::parse_from_rfc3339("2014-01-01T13:00:00+02:00").unwrap();
        let next = schedule.next_after(&fixed).unwrap();
        assert_eq!(next, at("2014-01-01T12:00:00Z"));
    }

    #[rstest]
    #[timeout(Duration::from_secs(1))]
    fn test_schedule_iter() {
        let schedule = Schedule::new("min(0,30)").unwrap();
        let mut iter = schedule.iter(&at("2015-01-01T00:00:00Z"));

        assert_eq!(iter.next().unwrap(), at("2015-01-01T00:30:00Z"));
        assert_eq!(iter.next().unwrap(), at("2015-01-01T01:00:00Z"));
        assert_eq!(iter.next().unwrap(), at("2015-01-01T01:30:00Z"));
    }

    #[rstest]
    #[timeout(Duration::from_secs(1))]
    fn test_schedule_into_iter_stops_when_exhausted() {
        let schedule = Schedule::new("dates(2015/1/1..2015/1/2)").unwrap();
        let events: Vec<_> = schedule.into_iter(&at("2014-12-31T00:00:00Z")).collect();

        assert_eq!(events, vec![at("2015-01-01T00:00:00Z"), at("2015-01-02T00:00:00Z")]);
    }

    #[test]
    fn test_try_from_string() {
        let schedule1 = Schedule::new("sec(0)").unwrap();

        let schedule2 = Schedule::try_from("sec(0)").unwrap();
        assert_eq!(schedule1, schedule2);

        let tst_string = String::from("sec(0)");
        let schedule2 = Schedule::try_from(&tst_string).unwrap();
        assert_eq!(schedule1, schedule2);

        let schedule2 = Schedule::try_from(tst_string).unwrap();
        assert_eq!(schedule1, schedule2);

        assert!(Schedule::try_from("sec(99)").is_err());
    }

    #[test]
    fn display_and_original_text_round_trip() {
        let text = "{ sec(0), min(*) }  hours(12)";
        let schedule = Schedule::new(text).unwrap();
        assert_eq!(schedule.original_text(), text);
        assert_eq!(schedule.to_string(), text);
    }

    #[rstest]
    #[case(58, true)]
    #[case(59, false)]
    #[case(0, true)]
    #[case(1, false)]
    #[case(2, true)]
    #[case(3, false)]
    #[case(30, false)]
    fn split_interval_membership(#[case] value: i32, #[case] expected: bool) {
        let range = IrIntegerRange {
            start: 58,
            end: Some(2),
            is_half_open: false,
            is_split: true,
            interval: Some(2),
        };

        assert_eq!(in_integer_range(&range, value, 60), expected);
    }

    #[rstest]
    #[case(9, false)]
    #[case(10, true)]
    #[case(15, true)]
    #[case(19, true)]
    #[case(20, false)]
    fn half_open_membership(#[case] value: i32, #[case] expected: bool) {
        let range = IrIntegerRange {
            start: 10,
            end: Some(20),
            is_half_open: true,
            is_split: false,
            interval: None,
        };

        assert_eq!(in_integer_range(&range, value, 24), expected);
    }
}
