use crate::error::{ErrorKind, ParseError, Result};
use crate::models::{League, Period, PeriodType, Sport};
use crate::utils::rotation::sport_for_rotation;

/// League code, including the aliases traders use
pub fn league_from_token(token: &str) -> Option<League> {
    match token.to_uppercase().as_str() {
        "NFL" => Some(League::NFL),
        "CFB" | "FCS" | "FBS" | "NCAAF" => Some(League::CFB),
        "NBA" => Some(League::NBA),
        "WNBA" => Some(League::WNBA),
        "CBK" | "CBB" | "NCAAB" => Some(League::CBK),
        "MLB" => Some(League::MLB),
        "NHL" => Some(League::NHL),
        "MLS" => Some(League::MLS),
        "EPL" => Some(League::EPL),
        _ => None,
    }
}

pub fn parse_league(token: &str) -> Result<League> {
    league_from_token(token).ok_or_else(|| {
        ParseError::new(
            ErrorKind::InvalidLeagueFormat,
            format!("unknown league {:?}", token),
        )
        .with_detail(token)
    })
}

pub fn sport_from_token(token: &str) -> Option<Sport> {
    match token.to_lowercase().as_str() {
        "football" => Some(Sport::Football),
        "basketball" => Some(Sport::Basketball),
        "baseball" => Some(Sport::Baseball),
        "hockey" => Some(Sport::Hockey),
        "soccer" => Some(Sport::Soccer),
        _ => None,
    }
}

/// What the parsers know when deciding sport and league
#[derive(Debug, Clone, Copy, Default)]
pub struct SportHints {
    pub sport: Option<Sport>,
    pub league: Option<League>,
    /// A `runs` suffix was present on a total
    pub runs: bool,
    pub rotation_number: Option<u16>,
}

/// Settle sport and league.
///
/// Explicit tokens win, then baseball markers (`runs`, inning periods), then
/// the rotation-number block. An explicit league that disagrees with an
/// explicit sport is an error.
pub fn resolve_sport(hints: &SportHints, period: Option<Period>) -> Result<(Option<Sport>, Option<League>)> {
    if let Some(league) = hints.league {
        if let Some(sport) = hints.sport {
            if league.sport() != sport {
                return Err(ParseError::new(
                    ErrorKind::LeagueSportConflict,
                    format!("league {} is not a {} league", league, sport),
                ));
            }
        }
        return Ok((Some(league.sport()), Some(league)));
    }

    if hints.sport.is_some() {
        return Ok((hints.sport, None));
    }

    let inning = period.is_some_and(|p| p.period_type == PeriodType::Inning);
    if hints.runs || inning {
        return Ok((Some(Sport::Baseball), None));
    }

    Ok((hints.rotation_number.and_then(sport_for_rotation), None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_aliases() {
        assert_eq!(parse_league("fcs").unwrap(), League::CFB);
        assert_eq!(parse_league("CBB").unwrap(), League::CBK);
        assert_eq!(parse_league("NBA").unwrap(), League::NBA);
        assert_eq!(parse_league("XFL").unwrap_err().kind, ErrorKind::InvalidLeagueFormat);
    }

    #[test]
    fn test_explicit_league_wins() {
        let hints = SportHints {
            league: Some(League::NBA),
            rotation_number: Some(872),
            ..SportHints::default()
        };
        assert_eq!(
            resolve_sport(&hints, None).unwrap(),
            (Some(Sport::Basketball), Some(League::NBA))
        );
    }

    #[test]
    fn test_conflicting_league_and_sport() {
        let hints = SportHints {
            sport: Some(Sport::Hockey),
            league: Some(League::MLB),
            ..SportHints::default()
        };
        let err = resolve_sport(&hints, None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::LeagueSportConflict);
    }

    #[test]
    fn test_baseball_markers_beat_rotation() {
        let hints = SportHints {
            runs: true,
            rotation_number: Some(550),
            ..SportHints::default()
        };
        assert_eq!(resolve_sport(&hints, None).unwrap().0, Some(Sport::Baseball));

        let hints = SportHints {
            rotation_number: Some(550),
            ..SportHints::default()
        };
        let inning = Period::new(PeriodType::Inning, 1);
        assert_eq!(resolve_sport(&hints, Some(inning)).unwrap().0, Some(Sport::Baseball));
        assert_eq!(resolve_sport(&hints, None).unwrap().0, Some(Sport::Basketball));
    }

    #[test]
    fn test_unset_without_hints() {
        assert_eq!(resolve_sport(&SportHints::default(), None).unwrap(), (None, None));
    }
}
