use crate::error::{ErrorKind, ParseError, Result};
use regex::Regex;
use std::sync::LazyLock;

pub const MAX_GAME_NUMBER: u32 = 10;

static RE_ATTACHED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:gm|g|#)(\d+)$").unwrap());

static RE_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^(?:gm|g|#)$").unwrap());

static RE_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

fn checked(digits: &str, raw: &str) -> Result<u8> {
    match digits.parse::<u32>() {
        Ok(n) if (1..=MAX_GAME_NUMBER).contains(&n) => Ok(n as u8),
        _ => Err(ParseError::new(
            ErrorKind::InvalidGameNumber,
            format!("game number {:?} must be 1-{}", raw, MAX_GAME_NUMBER),
        )
        .with_detail(raw)),
    }
}

fn match_pair(marker: &str, digits: &str) -> Result<Option<u8>> {
    if RE_MARKER.is_match(marker) && RE_DIGITS.is_match(digits) {
        return checked(digits, &format!("{} {}", marker, digits)).map(Some);
    }
    Ok(None)
}

fn match_single(token: &str) -> Result<Option<u8>> {
    match RE_ATTACHED.captures(token) {
        Some(caps) => checked(&caps[1], token).map(Some),
        None => Ok(None),
    }
}

/// Match `g2`, `gm 2`, `#2` at the start of `tokens`, returning it and the tokens used
pub fn leading_game_number(tokens: &[&str]) -> Result<Option<(u8, usize)>> {
    if tokens.len() >= 2 {
        if let Some(n) = match_pair(tokens[0], tokens[1])? {
            return Ok(Some((n, 2)));
        }
    }
    match tokens.first() {
        Some(token) => Ok(match_single(token)?.map(|n| (n, 1))),
        None => Ok(None),
    }
}

pub fn trailing_game_number(tokens: &[&str]) -> Result<Option<(u8, usize)>> {
    let n = tokens.len();
    if n >= 2 {
        if let Some(number) = match_pair(tokens[n - 2], tokens[n - 1])? {
            return Ok(Some((number, 2)));
        }
    }
    match tokens.last() {
        Some(token) => Ok(match_single(token)?.map(|number| (number, 1))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_number_forms() {
        assert_eq!(leading_game_number(&["g2", "Yankees"]).unwrap(), Some((2, 1)));
        assert_eq!(leading_game_number(&["GM", "1", "Yankees"]).unwrap(), Some((1, 2)));
        assert_eq!(leading_game_number(&["#3", "Yankees"]).unwrap(), Some((3, 1)));
        assert_eq!(leading_game_number(&["Yankees"]).unwrap(), None);
        assert_eq!(trailing_game_number(&["Yankees", "g", "2"]).unwrap(), Some((2, 2)));
    }

    #[test]
    fn test_game_number_range() {
        let err = leading_game_number(&["g11"]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidGameNumber);
        assert!(leading_game_number(&["#0"]).is_err());
    }
}
