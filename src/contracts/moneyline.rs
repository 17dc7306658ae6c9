use super::{match_info, ContractContext};
use crate::error::{ErrorKind, ParseError, Result};
use crate::models::{Contract, HandicapContestantML};
use crate::utils::{is_over_under, signed_number};

fn is_moneyline_suffix(token: &str) -> bool {
    token.eq_ignore_ascii_case("ml") || signed_number(token) == Some(0.0)
}

/// Moneyline: `Athletics`, `Athletics ML`, `Lakers +0`, `Vanderbilt 1h`
pub fn parse(ctx: &ContractContext) -> Result<Contract> {
    let mut tokens = ctx.tokens();
    if tokens.last().is_some_and(|t| is_moneyline_suffix(t)) {
        tokens.pop();
    }

    if let Some(stray) = tokens
        .iter()
        .find(|t| signed_number(t).is_some() || is_over_under(t))
    {
        return Err(ParseError::new(
            ErrorKind::InvalidMoneylineFormat,
            format!("moneyline cannot carry {}", stray),
        )
        .with_detail(*stray));
    }

    let (matchup, period) = match_info(&tokens, ctx)?;
    let (sport, league) = ctx.sport_and_league(false, period)?;

    Ok(Contract::HandicapContestantML(HandicapContestantML {
        sport,
        league,
        contestant: matchup.team1.clone(),
        matchup,
        period,
        ties_lose: ctx.source.ties_lose,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::test_support::structured;
    use crate::models::{Period, PeriodType, Sport};

    fn moneyline(text: &str, rotation: Option<u16>) -> Result<HandicapContestantML> {
        let source = structured(text);
        match parse(&ContractContext::new(&source, rotation))? {
            Contract::HandicapContestantML(c) => Ok(c),
            other => panic!("unexpected contract {:?}", other),
        }
    }

    #[test]
    fn test_plain_team() {
        let ml = moneyline("Athletics", Some(872)).unwrap();
        assert_eq!(ml.contestant, "Athletics");
        assert_eq!(ml.sport, Some(Sport::Baseball));
        assert_eq!(ml.period, Period::FULL_GAME);
        assert!(!ml.ties_lose);
    }

    #[test]
    fn test_suffixes_and_period() {
        assert_eq!(moneyline("Athletics ML", None).unwrap().contestant, "Athletics");
        assert_eq!(moneyline("Lakers -0", None).unwrap().contestant, "Lakers");
        let ml = moneyline("Vanderbilt 2h", None).unwrap();
        assert_eq!(ml.period, Period::new(PeriodType::Half, 2));
    }

    #[test]
    fn test_ties_lose() {
        let mut source = structured("Arsenal");
        source.ties_lose = true;
        match parse(&ContractContext::new(&source, None)).unwrap() {
            Contract::HandicapContestantML(c) => assert!(c.ties_lose),
            other => panic!("unexpected contract {:?}", other),
        }
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            moneyline("Lakers -3", None).unwrap_err().kind,
            ErrorKind::InvalidMoneylineFormat
        );
        assert_eq!(
            moneyline("Lakers/Lakers", None).unwrap_err().kind,
            ErrorKind::InvalidTeamFormat
        );
    }
}
