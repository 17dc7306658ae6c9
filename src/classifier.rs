//! Decides which contract type a piece of contract text describes.
//!
//! Rules are tried in a fixed order and the first match wins.

use crate::error::{ErrorKind, ParseError, Result};
use crate::models::ContractType;
use crate::utils::props::{find_prop, PropCategory};
use crate::utils::{is_over_under, signed_number};
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// Spread lines are under this magnitude, anything above is an odds price
const SPREAD_LIMIT: f64 = 100.0;

static RE_TEAM_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 &\-.'/]+$").unwrap());

static RE_SERIES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:^|\s)series(?:\s|$)").unwrap());

fn has_letter(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
}

fn is_moneyline_marker(token: &str) -> bool {
    token.eq_ignore_ascii_case("ml") || token == "+0" || token == "-0"
}

fn series(text: &str) -> Option<ContractType> {
    RE_SERIES
        .is_match(text)
        .then_some(ContractType::Series)
}

fn team_total(tokens: &[&str]) -> Result<Option<ContractType>> {
    match tokens.iter().position(|t| t.eq_ignore_ascii_case("tt")) {
        Some(0) => Err(ParseError::new(
            ErrorKind::InvalidTeamFormat,
            "team total needs a team before TT",
        )
        .at(0)),
        Some(_) => Ok(Some(ContractType::TotalPointsContestant)),
        None => Ok(None),
    }
}

fn prop(tokens: &[&str]) -> Result<Option<ContractType>> {
    let Some(found) = find_prop(tokens) else {
        return Ok(None);
    };
    let has_line = tokens.iter().any(|t| is_over_under(t));
    match (found.definition.category, has_line) {
        (PropCategory::OverUnder, true) => Ok(Some(ContractType::PropOU)),
        (PropCategory::YesNo, false) => Ok(Some(ContractType::PropYN)),
        (PropCategory::OverUnder, false) => Err(ParseError::new(
            ErrorKind::InvalidContractType,
            format!("{} prop needs an over/under line", found.definition.name),
        )
        .with_detail(found.definition.phrase)),
        (PropCategory::YesNo, true) => Err(ParseError::new(
            ErrorKind::InvalidContractType,
            format!("{} prop is yes/no and takes no line", found.definition.name),
        )
        .with_detail(found.definition.phrase)),
    }
}

/// Team text followed by a signed number, with no over/under anywhere
fn signed_tail(tokens: &[&str]) -> Option<ContractType> {
    let (last, team) = tokens.split_last()?;
    let value = signed_number(last)?;
    if team.is_empty() || tokens.iter().any(|t| is_over_under(t)) {
        return None;
    }
    if !has_letter(&team.join(" ")) {
        return None;
    }
    if value == 0.0 || value.abs() >= SPREAD_LIMIT {
        Some(ContractType::HandicapContestantML)
    } else {
        Some(ContractType::HandicapContestantLine)
    }
}

fn game_total(text: &str, tokens: &[&str]) -> Option<ContractType> {
    let over_under = tokens.iter().position(|t| is_over_under(t))?;
    if over_under == 0 {
        return None;
    }
    // Matchup totals and single-team totals both grade the combined score
    if text.contains('/') || has_letter(&tokens[..over_under].join(" ")) {
        return Some(ContractType::TotalPoints);
    }
    None
}

fn moneyline(tokens: &[&str]) -> Option<ContractType> {
    let team = match tokens.split_last() {
        Some((last, rest)) if is_moneyline_marker(last) => rest,
        _ => tokens,
    };
    let text = team.join(" ");
    if team.is_empty()
        || !RE_TEAM_TEXT.is_match(&text)
        || !has_letter(&text)
        || team.iter().any(|t| is_over_under(t) || signed_number(t).is_some())
    {
        return None;
    }
    Some(ContractType::HandicapContestantML)
}

/// Classify canonical contract text (team first, period after team)
pub fn classify(text: &str) -> Result<ContractType> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(ParseError::new(ErrorKind::InvalidContractType, "no contract given"));
    }

    let contract_type = match series(text) {
        Some(t) => Some(t),
        None => match team_total(&tokens)? {
            Some(t) => Some(t),
            None => match prop(&tokens)? {
                Some(t) => Some(t),
                None => signed_tail(&tokens)
                    .or_else(|| game_total(text, &tokens))
                    .or_else(|| moneyline(&tokens)),
            },
        },
    };

    match contract_type {
        Some(contract_type) => {
            trace!(text, %contract_type, "classified contract");
            Ok(contract_type)
        }
        None => Err(ParseError::new(
            ErrorKind::InvalidContractType,
            format!("cannot tell what kind of contract {:?} is", text),
        )
        .with_detail(text)),
    }
}
