use crate::error::{ErrorKind, ParseError, Result};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy)]
enum DateShape {
    YearMonthDay,
    MonthDayYear,
    MonthDayShortYear,
    MonthDay,
}

/// Accepted date layouts, tried in order
static DATE_PATTERNS: LazyLock<Vec<(Regex, DateShape)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").unwrap(),
            DateShape::YearMonthDay,
        ),
        (
            Regex::new(r"^(\d{4})/(\d{1,2})/(\d{1,2})$").unwrap(),
            DateShape::YearMonthDay,
        ),
        (
            Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").unwrap(),
            DateShape::MonthDayYear,
        ),
        (
            Regex::new(r"^(\d{1,2})-(\d{1,2})-(\d{4})$").unwrap(),
            DateShape::MonthDayYear,
        ),
        (
            Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2})$").unwrap(),
            DateShape::MonthDayShortYear,
        ),
        (
            Regex::new(r"^(\d{1,2})/(\d{1,2})$").unwrap(),
            DateShape::MonthDay,
        ),
    ]
});

/// Whether the token has the shape of a date (valid or not)
pub fn looks_like_date(token: &str) -> bool {
    DATE_PATTERNS.iter().any(|(re, _)| re.is_match(token.trim()))
}

fn calendar_date(year: i32, month: u32, day: u32, raw: &str) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ParseError::new(
            ErrorKind::InvalidDateFormat,
            format!("{:?} is not a calendar date", raw),
        )
        .with_detail(raw)
    })
}

/// Parse an event date.
///
/// A year-less `MM/DD` lands in the reference date's year unless that day has
/// already passed, in which case it rolls to the next year.
pub fn parse_date(token: &str, reference: NaiveDate) -> Result<NaiveDate> {
    let raw = token.trim();
    let Some((caps, shape)) = DATE_PATTERNS
        .iter()
        .find_map(|(re, shape)| re.captures(raw).map(|caps| (caps, *shape)))
    else {
        return Err(ParseError::new(
            ErrorKind::InvalidDateFormat,
            format!("{:?} is not a recognized date", raw),
        )
        .with_detail(raw));
    };

    let num = |i: usize| caps[i].parse::<u32>().unwrap_or(0);

    match shape {
        DateShape::YearMonthDay => calendar_date(num(1) as i32, num(2), num(3), raw),
        DateShape::MonthDayYear => calendar_date(num(3) as i32, num(1), num(2), raw),
        DateShape::MonthDayShortYear => calendar_date(2000 + num(3) as i32, num(1), num(2), raw),
        DateShape::MonthDay => {
            let (month, day) = (num(1), num(2));
            match NaiveDate::from_ymd_opt(reference.year(), month, day) {
                Some(date) if date >= reference => Ok(date),
                _ => calendar_date(reference.year() + 1, month, day, raw),
            }
        }
    }
}
