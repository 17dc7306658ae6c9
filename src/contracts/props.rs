use super::{single_over_under, strip_period_and_game, ContractContext};
use crate::error::{ErrorKind, ParseError, Result};
use crate::models::{ContestantType, Contract, Matchup, PropOU, PropYN};
use crate::utils::line::parse_line;
use crate::utils::props::{find_prop, PropCategory, PropScope};
use crate::utils::team::{split_teams, validate_team};
use crate::utils::is_over_under;

fn yes_no(token: &str) -> Option<bool> {
    match token.to_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

/// Contestant of a prop. Players joined with `+` form an ad-hoc team.
fn contestant(tokens: &[&str], scope: PropScope) -> Result<(String, ContestantType, Option<String>)> {
    let text = tokens.join(" ");
    if text.contains('+') {
        let members = text
            .split('+')
            .map(validate_team)
            .collect::<Result<Vec<_>>>()
            .map_err(|e| ParseError::new(ErrorKind::InvalidPropFormat, e.reason))?;
        if members.len() < 2 {
            return Err(ParseError::new(ErrorKind::InvalidPropFormat, "ad-hoc team needs two or more members"));
        }
        return Ok((members.join("+"), ContestantType::TeamAdHoc, None));
    }

    let (team1, team2) = split_teams(&text)?;
    let contestant_type = match scope {
        PropScope::Player => ContestantType::Individual,
        PropScope::Team => ContestantType::TeamLeague,
    };
    Ok((team1, contestant_type, team2))
}

/// Player and team props: `Mahomes passing yards o275.5`, `Kelce anytime td`, `Chiefs first to score no`
pub fn parse(ctx: &ContractContext) -> Result<Contract> {
    let tokens = ctx.tokens();
    let found = find_prop(&tokens).ok_or_else(|| {
        ParseError::new(ErrorKind::InvalidPropFormat, "no known prop in contract")
            .with_detail(ctx.source.text.as_str())
    })?;
    let definition = found.definition;

    let mut rest: Vec<&str> = tokens[..found.start].to_vec();
    rest.extend_from_slice(&tokens[found.start + found.len..]);

    let mut line = None;
    if rest.iter().any(|t| is_over_under(t)) {
        let (index, is_over, text) = single_over_under(&rest, ErrorKind::InvalidPropFormat)?;
        let value = parse_line(text).map_err(|e| ParseError::new(ErrorKind::InvalidPropFormat, e.reason))?;
        line = Some((value, is_over));
        rest.remove(index);
    }

    let mut is_yes = None;
    if let Some(index) = rest.iter().position(|t| yes_no(t).is_some()) {
        is_yes = yes_no(rest[index]);
        rest.remove(index);
    }

    let stripped = strip_period_and_game(&rest, ctx.source.game_number)?;
    if stripped.tokens.is_empty() {
        return Err(ParseError::new(
            ErrorKind::InvalidPropFormat,
            format!("{} prop needs a player or team", definition.name),
        ));
    }
    let (contestant, contestant_type, team2) = contestant(&stripped.tokens, definition.scope)?;
    let matchup = Matchup {
        team1: contestant.clone(),
        team2,
        date: ctx.source.event_date,
        day_sequence: stripped.game_number,
    };
    let period = stripped.period;
    let (sport, league) = ctx.sport_and_league(false, period)?;

    match (definition.category, line, is_yes) {
        (PropCategory::OverUnder, Some((line, is_over)), None) => Ok(Contract::PropOU(PropOU {
            sport,
            league,
            matchup,
            period,
            contestant,
            contestant_type,
            prop: definition.name.to_string(),
            line,
            is_over,
        })),
        (PropCategory::YesNo, None, is_yes) => Ok(Contract::PropYN(PropYN {
            sport,
            league,
            matchup,
            period,
            contestant,
            contestant_type,
            prop: definition.name.to_string(),
            is_yes: is_yes.unwrap_or(true),
        })),
        (PropCategory::OverUnder, None, _) => Err(ParseError::new(
            ErrorKind::InvalidPropFormat,
            format!("{} prop needs an over/under line", definition.name),
        )),
        (PropCategory::OverUnder, Some(_), Some(_)) => Err(ParseError::new(
            ErrorKind::InvalidPropFormat,
            format!("{} prop takes a line, not yes/no", definition.name),
        )),
        (PropCategory::YesNo, Some(_), _) => Err(ParseError::new(
            ErrorKind::InvalidPropFormat,
            format!("{} prop is yes/no and takes no line", definition.name),
        )),
    }
}
