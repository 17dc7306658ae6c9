pub mod data;
pub mod date;
pub mod game_number;
pub mod keyword;
pub mod league;
pub mod line;
pub mod odds;
pub mod period;
pub mod price;
pub mod props;
pub mod rotation;
pub mod size;
pub mod team;

use regex::Regex;
use std::sync::LazyLock;

static RE_SIGNED_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]\d+(?:\.\d+)?$").unwrap());

static RE_OVER_UNDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^([ou])(\d+(?:\.\d+)?)$").unwrap());

/// Value of a token like `+3.5` or `-150`. Unsigned numbers are not signed numbers.
pub fn signed_number(token: &str) -> Option<f64> {
    if RE_SIGNED_NUMBER.is_match(token) {
        token.parse::<f64>().ok()
    } else {
        None
    }
}

/// Split an over/under token (`o8.5`, `U210`) into (is_over, raw line)
pub fn over_under(token: &str) -> Option<(bool, &str)> {
    let caps = RE_OVER_UNDER.captures(token)?;
    let is_over = caps.get(1)?.as_str().eq_ignore_ascii_case("o");
    Some((is_over, caps.get(2)?.as_str()))
}

pub fn is_over_under(token: &str) -> bool {
    RE_OVER_UNDER.is_match(token)
}

/// Round a dollar amount to cents
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_number() {
        assert_eq!(signed_number("+3.5"), Some(3.5));
        assert_eq!(signed_number("-150"), Some(-150.0));
        assert_eq!(signed_number("-0"), Some(0.0));
        assert_eq!(signed_number("3.5"), None);
        assert_eq!(signed_number("+3.5x"), None);
    }

    #[test]
    fn test_over_under() {
        assert_eq!(over_under("o8.5"), Some((true, "8.5")));
        assert_eq!(over_under("U210"), Some((false, "210")));
        assert_eq!(over_under("over"), None);
        assert_eq!(over_under("o8.5-110"), None);
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(0.094 * 1000.0), 94.0);
        assert_eq!(round_cents(319.999999), 320.0);
    }
}
