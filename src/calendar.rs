use chrono::{Datelike, Duration, NaiveDate};

pub const DAYS_PER_WEEK: usize = 7;
pub const HISTORY_WEEKS: usize = 52;

pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_day_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), "%Y-%m-%d").ok()
}

/// Monday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

pub fn week_days(anchor: NaiveDate) -> Vec<NaiveDate> {
    let start = week_start(anchor);
    (0..DAYS_PER_WEEK as i64)
        .map(|offset| start + Duration::days(offset))
        .collect()
}

pub fn shift_weeks(anchor: NaiveDate, weeks: i64) -> NaiveDate {
    anchor + Duration::weeks(weeks)
}

/// Week rows of the history grid. Row `i` is the Monday-start week containing
/// 1 January plus `i` weeks, so the first row may begin in December and the
/// last one may end in the following year.
pub fn history_grid(year: i32) -> Vec<Vec<NaiveDate>> {
    let Some(year_start) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return Vec::new();
    };

    (0..HISTORY_WEEKS as i64)
        .map(|offset| week_days(shift_weeks(year_start, offset)))
        .collect()
}

pub fn weekday_initial(date: NaiveDate) -> String {
    date.format("%a").to_string().chars().take(1).collect()
}

pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// `Mar 11`
pub fn month_day(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// `Mar 11, 2024`
pub fn long_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// US-style week of year: weeks start on Sunday and week 1 is the one that
/// contains 1 January, so late-December days can already be in week 1.
pub fn local_week_number(date: NaiveDate) -> u32 {
    let sunday = date - Duration::days(date.weekday().num_days_from_sunday() as i64);
    let week_year = (sunday + Duration::days(6)).year();
    let Some(jan_first) = NaiveDate::from_ymd_opt(week_year, 1, 1) else {
        return 1;
    };
    let first_sunday = jan_first - Duration::days(jan_first.weekday().num_days_from_sunday() as i64);
    ((sunday - first_sunday).num_days() / 7) as u32 + 1
}

/// Header shown above the tracker, e.g. `Week 11 (Mar 11 — Mar 17)`.
pub fn week_label(anchor: NaiveDate) -> String {
    let start = week_start(anchor);
    let end = start + Duration::days(6);
    format!(
        "Week {} ({} — {})",
        local_week_number(anchor),
        month_day(start),
        month_day(end)
    )
}
