use super::{match_info, remove_with_runs, single_over_under, ContractContext};
use crate::error::{ErrorKind, ParseError, Result};
use crate::models::{Contract, TotalPointsContestant};
use crate::utils::line::parse_line;

/// Team total: `LAA TT o3.5`, `Angels TT 1h u2.5 runs`
pub fn parse(ctx: &ContractContext) -> Result<Contract> {
    let tokens = ctx.tokens();
    let marker = match tokens.iter().position(|t| t.eq_ignore_ascii_case("tt")) {
        Some(0) | None => {
            return Err(ParseError::new(
                ErrorKind::InvalidTeamTotalFormat,
                "team total must be written TEAM TT o/uLINE",
            ))
        }
        Some(i) => i,
    };
    let mut tokens = tokens;
    tokens.remove(marker);

    let (index, is_over, line) = single_over_under(&tokens, ErrorKind::InvalidTeamTotalFormat)?;
    let line =
        parse_line(line).map_err(|e| ParseError::new(ErrorKind::InvalidTeamTotalFormat, e.reason))?;
    let (rest, runs) = remove_with_runs(&tokens, index);

    let (matchup, period) = match_info(&rest, ctx)?;
    if matchup.team2.is_some() {
        return Err(ParseError::new(
            ErrorKind::InvalidTeamTotalFormat,
            "team total takes a single team",
        ));
    }
    let (sport, league) = ctx.sport_and_league(runs, period)?;

    Ok(Contract::TotalPointsContestant(TotalPointsContestant {
        sport,
        league,
        contestant: matchup.team1.clone(),
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

    fn team_total(text: &str) -> Result<TotalPointsContestant> {
        let source = structured(text);
        match parse(&ContractContext::new(&source, None))? {
            Contract::TotalPointsContestant(t) => Ok(t),
            other => panic!("unexpected contract {:?}", other),
        }
    }

    #[test]
    fn test_team_total() {
        let t = team_total("LAA TT o3.5").unwrap();
        assert_eq!(t.contestant, "LAA");
        assert_eq!(t.line, 3.5);
        assert!(t.is_over);
        assert_eq!(t.period, Period::FULL_GAME);
    }

    #[test]
    fn test_team_total_with_period_and_runs() {
        let t = team_total("Angels TT 1h u2.5 runs").unwrap();
        assert_eq!(t.period, Period::new(PeriodType::Half, 1));
        assert!(!t.is_over);
        assert_eq!(t.sport, Some(Sport::Baseball));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            team_total("TT o3.5").unwrap_err().kind,
            ErrorKind::InvalidTeamTotalFormat
        );
        assert_eq!(
            team_total("LAA TT").unwrap_err().kind,
            ErrorKind::InvalidTeamTotalFormat
        );
        assert_eq!(
            team_total("LAA/NYY TT o3.5").unwrap_err().kind,
            ErrorKind::InvalidTeamTotalFormat
        );
    }
}
