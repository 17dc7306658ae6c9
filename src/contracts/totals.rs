use super::{match_info, remove_with_runs, single_over_under, ContractContext};
use crate::error::{ErrorKind, ParseError, Result};
use crate::models::{Contract, TotalPoints};
use crate::utils::line::parse_line;
use crate::utils::signed_number;

/// Game total: `Padres/Pirates 1st inning u0.5`, `Yankees o8.5 runs`
pub fn parse(ctx: &ContractContext) -> Result<Contract> {
    let tokens = ctx.tokens();
    let (index, is_over, line) = single_over_under(&tokens, ErrorKind::InvalidTotalFormat)?;
    let line = parse_line(line).map_err(|e| ParseError::new(ErrorKind::InvalidTotalFormat, e.reason))?;

    let (rest, runs) = remove_with_runs(&tokens, index);
    if let Some(stray) = rest.iter().find(|t| signed_number(t).is_some()) {
        return Err(ParseError::new(
            ErrorKind::AmbiguousContractType,
            format!("total also carries a signed number {}", stray),
        )
        .with_detail(*stray));
    }

    let (matchup, period) = match_info(&rest, ctx)?;
    let (sport, league) = ctx.sport_and_league(runs, period)?;

    Ok(Contract::TotalPoints(TotalPoints {
        sport,
        league,
        matchup,
        period,
        line,
        is_over,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::test_support::structured;
    use crate::models::{Period, PeriodType, Sport};

    fn total(text: &str, rotation: Option<u16>) -> Result<TotalPoints> {
        let source = structured(text);
        match parse(&ContractContext::new(&source, rotation))? {
            Contract::TotalPoints(t) => Ok(t),
            other => panic!("unexpected contract {:?}", other),
        }
    }

    #[test]
    fn test_matchup_total() {
        let t = total("Padres/Pirates 1st inning u0.5", None).unwrap();
        assert_eq!(t.matchup.team1, "Padres");
        assert_eq!(t.matchup.team2.as_deref(), Some("Pirates"));
        assert_eq!(t.period, Period::new(PeriodType::Inning, 1));
        assert_eq!(t.line, 0.5);
        assert!(!t.is_over);
        assert_eq!(t.sport, Some(Sport::Baseball));
    }

    #[test]
    fn test_single_team_runs_total() {
        let t = total("Yankees o8.5 runs", Some(550)).unwrap();
        assert_eq!(t.matchup.team1, "Yankees");
        assert!(t.matchup.team2.is_none());
        assert!(t.is_over);
        assert_eq!(t.period, Period::FULL_GAME);
        assert_eq!(t.sport, Some(Sport::Baseball));
    }

    #[test]
    fn test_rotation_sport() {
        let t = total("Lakers/Celtics o220.5", Some(550)).unwrap();
        assert_eq!(t.sport, Some(Sport::Basketball));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            total("Lakers/Celtics o220.3", None).unwrap_err().kind,
            ErrorKind::InvalidTotalFormat
        );
        assert_eq!(
            total("Lakers/Celtics -3 o220.5", None).unwrap_err().kind,
            ErrorKind::AmbiguousContractType
        );
        assert_eq!(
            total("Lakers/Celtics o220.5 u220.5", None).unwrap_err().kind,
            ErrorKind::AmbiguousContractType
        );
        assert_eq!(
            total("Lakers/Celtics", None).unwrap_err().kind,
            ErrorKind::InvalidTotalFormat
        );
    }
}
