use super::{match_info, ContractContext};
use crate::error::{ErrorKind, ParseError, Result};
use crate::models::{Contract, Series};
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_SERIES_LENGTH: u8 = 3;
pub const MIN_SERIES_LENGTH: u8 = 2;
pub const MAX_SERIES_LENGTH: u8 = 9;

static RE_LENGTH_ATTACHED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d+)-?game$").unwrap());

static RE_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

fn checked_length(digits: &str) -> Result<u8> {
    match digits.parse::<u8>() {
        Ok(n) if (MIN_SERIES_LENGTH..=MAX_SERIES_LENGTH).contains(&n) => Ok(n),
        _ => Err(ParseError::new(
            ErrorKind::InvalidSeriesFormat,
            format!(
                "series length {} must be {}-{} games",
                digits, MIN_SERIES_LENGTH, MAX_SERIES_LENGTH
            ),
        )
        .with_detail(digits)),
    }
}

/// Series winner: `Celtics series`, `Yankees 4 game series`, `Yankees 4-game series`
pub fn parse(ctx: &ContractContext) -> Result<Contract> {
    let mut tokens = ctx.tokens();
    let marker = tokens
        .iter()
        .position(|t| t.eq_ignore_ascii_case("series"))
        .ok_or_else(|| ParseError::new(ErrorKind::InvalidSeriesFormat, "missing 'series'"))?;
    if tokens.len() > marker + 1 {
        return Err(ParseError::new(
            ErrorKind::InvalidSeriesFormat,
            "nothing may follow 'series'",
        )
        .with_detail(tokens[marker + 1..].join(" ")));
    }
    tokens.truncate(marker);

    let mut series_length = DEFAULT_SERIES_LENGTH;
    if let Some(caps) = tokens.last().and_then(|t| RE_LENGTH_ATTACHED.captures(t)) {
        series_length = checked_length(&caps[1])?;
        tokens.pop();
    } else if tokens.len() >= 2
        && tokens[tokens.len() - 1].eq_ignore_ascii_case("game")
        && RE_DIGITS.is_match(tokens[tokens.len() - 2])
    {
        series_length = checked_length(tokens[tokens.len() - 2])?;
        tokens.truncate(tokens.len() - 2);
    }

    let (matchup, period) = match_info(&tokens, ctx)?;
    let (sport, league) = ctx.sport_and_league(false, period)?;

    Ok(Contract::Series(Series {
        sport,
        league,
        contestant: matchup.team1.clone(),
        matchup,
        period,
        series_length,
    }))
}
