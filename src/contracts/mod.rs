//! One parser per contract type, plus the match-info routine they share.

pub mod moneyline;
pub mod props;
pub mod series;
pub mod spread;
pub mod team_total;
pub mod totals;
pub mod writein;

use crate::error::{ErrorKind, ParseError, Result};
use crate::models::{Contract, ContractType, League, Matchup, Period, Sport};
use crate::tokenizer::StructuredContract;
use crate::utils::game_number::{leading_game_number, trailing_game_number};
use crate::utils::league::{resolve_sport, SportHints};
use crate::utils::period::{leading_period, trailing_period};
use crate::utils::team::split_teams;
use crate::utils::{is_over_under, over_under};
use tracing::trace;

/// Contract text together with what the tokenizer already pulled out of the message
#[derive(Debug, Clone, Copy)]
pub struct ContractContext<'a> {
    pub source: &'a StructuredContract,
    pub rotation_number: Option<u16>,
}

impl<'a> ContractContext<'a> {
    pub fn new(source: &'a StructuredContract, rotation_number: Option<u16>) -> Self {
        Self {
            source,
            rotation_number,
        }
    }

    pub fn tokens(&self) -> Vec<&'a str> {
        self.source.text.split_whitespace().collect()
    }

    /// Sport and league for this contract, given what the parser found
    pub fn sport_and_league(&self, runs: bool, period: Period) -> Result<(Option<Sport>, Option<League>)> {
        let hints = SportHints {
            sport: self.source.sport,
            league: self.source.league,
            runs,
            rotation_number: self.rotation_number,
        };
        resolve_sport(&hints, Some(period))
    }
}

/// Team tokens left once period and game number are gone
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Stripped<'a> {
    pub tokens: Vec<&'a str>,
    pub period: Period,
    pub game_number: Option<u8>,
}

/// Peel period and game-number tokens off either end of `tokens`
pub(crate) fn strip_period_and_game<'a>(tokens: &[&'a str], game_number: Option<u8>) -> Result<Stripped<'a>> {
    let mut tokens = tokens.to_vec();
    let mut period = None;
    let mut game_number = game_number;

    loop {
        let mut changed = false;

        if period.is_none() {
            if let Some((found, used)) = trailing_period(&tokens)? {
                tokens.truncate(tokens.len() - used);
                period = Some(found);
                changed = true;
            } else if let Some((found, used)) = leading_period(&tokens)? {
                tokens.drain(..used);
                period = Some(found);
                changed = true;
            }
        }

        if game_number.is_none() {
            if let Some((found, used)) = trailing_game_number(&tokens)? {
                tokens.truncate(tokens.len() - used);
                game_number = Some(found);
                changed = true;
            } else if let Some((found, used)) = leading_game_number(&tokens)? {
                tokens.drain(..used);
                game_number = Some(found);
                changed = true;
            }
        }

        if !changed {
            break;
        }
    }

    Ok(Stripped {
        tokens,
        period: period.unwrap_or_default(),
        game_number,
    })
}

/// Teams, period and game number from what remains after a parser takes its own tokens
pub(crate) fn match_info(tokens: &[&str], ctx: &ContractContext) -> Result<(Matchup, Period)> {
    let stripped = strip_period_and_game(tokens, ctx.source.game_number)?;
    if stripped.tokens.is_empty() {
        return Err(ParseError::new(ErrorKind::InvalidTeamFormat, "no team given"));
    }
    let (team1, team2) = split_teams(&stripped.tokens.join(" "))?;
    trace!(%team1, ?team2, period = %stripped.period, "match info");

    Ok((
        Matchup {
            team1,
            team2,
            date: ctx.source.event_date,
            day_sequence: stripped.game_number,
        },
        stripped.period,
    ))
}

/// The single over/under token in `tokens`, as (index, is_over, line text)
pub(crate) fn single_over_under<'a>(
    tokens: &[&'a str],
    missing: ErrorKind,
) -> Result<(usize, bool, &'a str)> {
    let found: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| is_over_under(t))
        .map(|(i, _)| i)
        .collect();

    match found.as_slice() {
        [] => Err(ParseError::new(missing, "expected an over/under such as o8.5 or u2.5")),
        [index] => {
            let token: &'a str = tokens[*index];
            let (is_over, line) = over_under(token).ok_or_else(|| {
                ParseError::new(missing, "malformed over/under").with_detail(token)
            })?;
            Ok((*index, is_over, line))
        }
        _ => Err(ParseError::new(
            ErrorKind::AmbiguousContractType,
            "more than one over/under given",
        )
        .at(found[1])),
    }
}

/// Drop the token at `index` plus a `runs` suffix right after it
pub(crate) fn remove_with_runs<'a>(tokens: &[&'a str], index: usize) -> (Vec<&'a str>, bool) {
    let runs = tokens
        .get(index + 1)
        .is_some_and(|t| t.eq_ignore_ascii_case("runs"));
    let end = if runs { index + 2 } else { index + 1 };
    let mut rest = tokens[..index].to_vec();
    rest.extend_from_slice(&tokens[end..]);
    (rest, runs)
}

/// Run the parser for `contract_type`
pub fn parse_contract(contract_type: ContractType, ctx: &ContractContext) -> Result<Contract> {
    let contract = match contract_type {
        ContractType::TotalPoints => totals::parse(ctx)?,
        ContractType::TotalPointsContestant => team_total::parse(ctx)?,
        ContractType::HandicapContestantML => moneyline::parse(ctx)?,
        ContractType::HandicapContestantLine => spread::parse(ctx)?,
        ContractType::PropOU | ContractType::PropYN => props::parse(ctx)?,
        ContractType::Series => series::parse(ctx)?,
        ContractType::Writein => {
            return Err(ParseError::new(
                ErrorKind::InvalidWriteinFormat,
                "writein contracts must start with the writein keyword",
            ))
        }
    };
    trace!(?contract, "parsed contract");
    Ok(contract)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn structured(text: &str) -> StructuredContract {
        StructuredContract {
            text: text.to_string(),
            game_number: None,
            event_date: None,
            league: None,
            sport: None,
            ties_lose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::structured;
    use super::*;
    use crate::models::PeriodType;

    #[test]
    fn test_strip_period_and_game() {
        let tokens = ["Yankees/Red", "Sox", "g2", "1st", "inning"];
        let stripped = strip_period_and_game(&tokens, None).unwrap();
        assert_eq!(stripped.tokens, vec!["Yankees/Red", "Sox"]);
        assert_eq!(stripped.period, Period::new(PeriodType::Inning, 1));
        assert_eq!(stripped.game_number, Some(2));

        let stripped = strip_period_and_game(&["Lakers"], Some(1)).unwrap();
        assert_eq!(stripped.period, Period::FULL_GAME);
        assert_eq!(stripped.game_number, Some(1));
    }

    #[test]
    fn test_match_info() {
        let source = structured("");
        let ctx = ContractContext::new(&source, None);
        let (matchup, period) = match_info(&["Padres/Pirates", "1h"], &ctx).unwrap();
        assert_eq!(matchup.team1, "Padres");
        assert_eq!(matchup.team2.as_deref(), Some("Pirates"));
        assert_eq!(period, Period::new(PeriodType::Half, 1));

        let err = match_info(&["Padres/padres"], &ctx).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidTeamFormat);
        let err = match_info(&["1h"], &ctx).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidTeamFormat);
    }

    #[test]
    fn test_single_over_under() {
        let (index, is_over, line) =
            single_over_under(&["Yankees", "o8.5", "runs"], ErrorKind::InvalidTotalFormat).unwrap();
        assert_eq!((index, is_over, line), (1, true, "8.5"));

        let err = single_over_under(&["A", "o1.5", "u2.5"], ErrorKind::InvalidTotalFormat).unwrap_err();
        assert_eq!(err.kind, ErrorKind::AmbiguousContractType);
        let err = single_over_under(&["A"], ErrorKind::InvalidTotalFormat).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidTotalFormat);
    }

    #[test]
    fn test_writein_type_needs_keyword() {
        let source = structured("Something");
        let ctx = ContractContext::new(&source, None);
        let err = parse_contract(ContractType::Writein, &ctx).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidWriteinFormat);
    }
}
