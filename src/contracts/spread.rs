use super::{match_info, ContractContext};
use crate::error::{ErrorKind, ParseError, Result};
use crate::models::{Contract, HandicapContestantLine};
use crate::utils::line::validate_line;
use crate::utils::signed_number;

/// Spread lines sit strictly between these magnitudes
const MAX_SPREAD: f64 = 100.0;

/// Spread: `Vanderbilt 2h +2.5`, `Chiefs -7`
pub fn parse(ctx: &ContractContext) -> Result<Contract> {
    let mut tokens = ctx.tokens();
    let line = tokens
        .last()
        .and_then(|t| signed_number(t))
        .ok_or_else(|| ParseError::new(ErrorKind::InvalidSpreadFormat, "spread must end in a signed line such as -3.5"))?;
    tokens.pop();

    if line == 0.0 || line.abs() >= MAX_SPREAD {
        return Err(ParseError::new(
            ErrorKind::InvalidSpreadFormat,
            format!("spread line {} must be non-zero and under {}", line, MAX_SPREAD),
        ));
    }
    let line = validate_line(line).map_err(|e| ParseError::new(ErrorKind::InvalidSpreadFormat, e.reason))?;

    let (matchup, period) = match_info(&tokens, ctx)?;
    let (sport, league) = ctx.sport_and_league(false, period)?;

    Ok(Contract::HandicapContestantLine(HandicapContestantLine {
        sport,
        league,
        contestant: matchup.team1.clone(),
        matchup,
        period,
        line,
    }))
}
