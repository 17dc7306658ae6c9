use crate::error::{ErrorKind, ParseError, Result};
use crate::models::{Period, PeriodType};
use regex::Regex;
use std::sync::LazyLock;

static RE_NUMBER_FIRST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})(h|q|p)$").unwrap());

static RE_LETTER_FIRST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(h|q|p|i)(\d{1,2})$").unwrap());

static RE_ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})(st|nd|rd|th)$").unwrap());

fn max_number(period_type: PeriodType) -> u8 {
    match period_type {
        PeriodType::Match => 0,
        PeriodType::Half => 2,
        PeriodType::Quarter => 4,
        PeriodType::Inning => 15,
        PeriodType::HockeyPeriod => 4,
    }
}

fn build(period_type: PeriodType, number: u32, raw: &str) -> Result<Period> {
    if number == 0 || number > max_number(period_type) as u32 {
        return Err(ParseError::new(
            ErrorKind::InvalidPeriodFormat,
            format!("{:?} {} is out of range", period_type, number),
        )
        .with_detail(raw));
    }
    Ok(Period::new(period_type, number as u8))
}

fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (1, r) if r != 11 => "st",
        (2, r) if r != 12 => "nd",
        (3, r) if r != 13 => "rd",
        _ => "th",
    }
}

fn ordinal_number(token: &str) -> Result<Option<u32>> {
    let word = match token {
        "first" => Some(1),
        "second" => Some(2),
        "third" => Some(3),
        "fourth" => Some(4),
        _ => None,
    };
    if word.is_some() {
        return Ok(word);
    }

    let Some(caps) = RE_ORDINAL.captures(token) else {
        return Ok(None);
    };
    let number = caps[1].parse::<u32>().unwrap_or(0);
    if &caps[2] != ordinal_suffix(number) {
        return Err(ParseError::new(
            ErrorKind::InvalidPeriodFormat,
            format!("bad ordinal {:?}", token),
        )
        .with_detail(token));
    }
    Ok(Some(number))
}

fn unit(token: &str) -> Option<PeriodType> {
    match token {
        "half" => Some(PeriodType::Half),
        "quarter" | "qtr" => Some(PeriodType::Quarter),
        "inning" | "inn" => Some(PeriodType::Inning),
        "period" | "per" => Some(PeriodType::HockeyPeriod),
        _ => None,
    }
}

/// Recognize a single-token period like `1h`, `q3`, `i7`, `fg`
fn single_token(token: &str) -> Result<Option<Period>> {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "fg" | "game" => return Ok(Some(Period::FULL_GAME)),
        "fh" => return Ok(Some(Period::new(PeriodType::Half, 1))),
        "sh" => return Ok(Some(Period::new(PeriodType::Half, 2))),
        _ => {}
    }

    let (letter, digits) = if let Some(caps) = RE_NUMBER_FIRST.captures(&lower) {
        (caps[2].to_string(), caps[1].to_string())
    } else if let Some(caps) = RE_LETTER_FIRST.captures(&lower) {
        (caps[1].to_string(), caps[2].to_string())
    } else {
        return Ok(None);
    };

    let period_type = match letter.as_str() {
        "h" => PeriodType::Half,
        "q" => PeriodType::Quarter,
        "p" => PeriodType::HockeyPeriod,
        _ => PeriodType::Inning,
    };
    let number = digits.parse::<u32>().unwrap_or(0);
    build(period_type, number, token).map(Some)
}

/// Recognize a two-token period like `1st inning`, `second half`, `full game`
fn two_tokens(first: &str, second: &str) -> Result<Option<Period>> {
    let first = first.to_lowercase();
    let second = second.to_lowercase();
    if first == "full" && second == "game" {
        return Ok(Some(Period::FULL_GAME));
    }

    let Some(period_type) = unit(&second) else {
        return Ok(None);
    };
    let Some(number) = ordinal_number(&first)? else {
        return Ok(None);
    };
    build(period_type, number, &format!("{} {}", first, second)).map(Some)
}

/// Match a period at the start of `tokens`, returning it and how many tokens it used.
///
/// Period-shaped tokens with an out-of-range number are an error rather than a miss.
pub fn leading_period(tokens: &[&str]) -> Result<Option<(Period, usize)>> {
    if tokens.len() >= 2 {
        if let Some(period) = two_tokens(tokens[0], tokens[1])? {
            return Ok(Some((period, 2)));
        }
    }
    match tokens.first() {
        Some(token) => Ok(single_token(token)?.map(|p| (p, 1))),
        None => Ok(None),
    }
}

/// Match a period at the end of `tokens`
pub fn trailing_period(tokens: &[&str]) -> Result<Option<(Period, usize)>> {
    let n = tokens.len();
    if n >= 2 {
        if let Some(period) = two_tokens(tokens[n - 2], tokens[n - 1])? {
            return Ok(Some((period, 2)));
        }
    }
    match tokens.last() {
        Some(token) => Ok(single_token(token)?.map(|p| (p, 1))),
        None => Ok(None),
    }
}

/// Parse text that must be exactly one period
pub fn parse_period(text: &str) -> Result<Period> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match leading_period(&tokens)? {
        Some((period, used)) if used == tokens.len() => Ok(period),
        _ => Err(ParseError::new(
            ErrorKind::InvalidPeriodFormat,
            format!("{:?} is not a period", text),
        )
        .with_detail(text)),
    }
}
