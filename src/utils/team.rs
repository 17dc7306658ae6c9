use crate::error::{ErrorKind, ParseError, Result};
use regex::Regex;
use std::sync::LazyLock;

pub const MAX_TEAM_LEN: usize = 50;

static RE_TEAM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 &\-.']+$").unwrap());

/// Helper function to normalize team names for consistent matching
pub fn normalize_team_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .replace("state", "st")
        .replace('&', "and")
        .replace(['.', '\''], "")
        .replace(' ', "_")
}

/// Validate one team name and collapse its internal whitespace
pub fn validate_team(name: &str) -> Result<String> {
    let name = name.split_whitespace().collect::<Vec<_>>().join(" ");
    if name.is_empty() {
        return Err(ParseError::new(ErrorKind::InvalidTeamFormat, "team name is empty"));
    }
    if name.len() > MAX_TEAM_LEN {
        return Err(ParseError::new(
            ErrorKind::InvalidTeamFormat,
            format!("team name is longer than {} characters", MAX_TEAM_LEN),
        )
        .with_detail(name));
    }
    if !RE_TEAM.is_match(&name) || !name.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(ParseError::new(
            ErrorKind::InvalidTeamFormat,
            format!("team name {:?} has invalid characters", name),
        )
        .with_detail(name));
    }
    Ok(name)
}

/// Split `Team1/Team2` (or a lone team) into validated names
pub fn split_teams(text: &str) -> Result<(String, Option<String>)> {
    let parts: Vec<&str> = text.split('/').collect();
    match parts.as_slice() {
        [team] => Ok((validate_team(team)?, None)),
        [team1, team2] => {
            let team1 = validate_team(team1)?;
            let team2 = validate_team(team2)?;
            if normalize_team_name(&team1) == normalize_team_name(&team2) {
                return Err(ParseError::new(
                    ErrorKind::InvalidTeamFormat,
                    format!("{} cannot play itself", team1),
                )
                .with_detail(text));
            }
            Ok((team1, Some(team2)))
        }
        _ => Err(ParseError::new(
            ErrorKind::InvalidTeamFormat,
            "at most two teams may be given",
        )
        .with_detail(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_team_name() {
        assert_eq!(normalize_team_name("Ohio State"), "ohio_st");
        assert_eq!(normalize_team_name("Texas  A&M"), "texas_aandm");
        assert_eq!(normalize_team_name("St. John's"), "st_johns");
    }

    #[test]
    fn test_split_teams() {
        let (team1, team2) = split_teams("Padres/Pirates").unwrap();
        assert_eq!(team1, "Padres");
        assert_eq!(team2.as_deref(), Some("Pirates"));

        let (team1, team2) = split_teams("Red  Sox ").unwrap();
        assert_eq!(team1, "Red Sox");
        assert!(team2.is_none());
    }

    #[test]
    fn test_duplicate_teams_rejected() {
        let err = split_teams("Lakers/lakers").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidTeamFormat);
        assert!(split_teams("Ohio State/Ohio St").is_err());
    }

    #[test]
    fn test_invalid_teams() {
        assert!(split_teams("A/B/C").is_err());
        assert!(split_teams("Lakers/").is_err());
        assert!(validate_team("Lakers!").is_err());
        assert!(validate_team(&"x".repeat(51)).is_err());
        assert!(validate_team("Texas A&M").is_ok());
        assert!(validate_team("---").is_err());
    }
}
