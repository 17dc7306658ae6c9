use crate::error::{ErrorKind, ParseError, Result};
use crate::models::Sport;

pub const MAX_ROTATION_NUMBER: u32 = 9999;

/// Tokens that sit in the rotation-number slot: all digits, or the literal `abc`
pub fn is_rotation_candidate(token: &str) -> bool {
    token == "abc" || (!token.is_empty() && token.chars().all(|c| c.is_ascii_digit()))
}

pub fn parse_rotation_number(token: &str) -> Result<u16> {
    let invalid = || {
        ParseError::new(
            ErrorKind::InvalidRotationNumber,
            format!("rotation number {:?} must be 1-{}", token, MAX_ROTATION_NUMBER),
        )
        .with_detail(token)
    };
    match token.parse::<u32>() {
        Ok(n) if (1..=MAX_ROTATION_NUMBER).contains(&n) => Ok(n as u16),
        _ => Err(invalid()),
    }
}

/// Sportsbooks allocate rotation numbers in per-sport blocks
pub fn sport_for_rotation(rotation_number: u16) -> Option<Sport> {
    match rotation_number {
        100..=498 => Some(Sport::Football),
        500..=799 => Some(Sport::Basketball),
        800..=899 | 9900..=9999 => Some(Sport::Baseball),
        _ => None,
    }
}
