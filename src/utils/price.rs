use crate::error::{ErrorKind, ParseError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Price assumed when an order leaves it out
pub const DEFAULT_PRICE: f64 = -110.0;

/// American odds never have a magnitude below this
pub const MIN_PRICE_MAGNITUDE: f64 = 100.0;

static RE_PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]\d+(?:\.\d+)?$").unwrap());

/// Parse an American odds price: `+145`, `-115.5`, `ev`, `even`
pub fn parse_price(token: &str) -> Result<f64> {
    let token = token.trim();
    if token.eq_ignore_ascii_case("ev") || token.eq_ignore_ascii_case("even") {
        return Ok(100.0);
    }

    if !RE_PRICE.is_match(token) {
        return Err(ParseError::new(
            ErrorKind::InvalidPriceFormat,
            format!("price {:?} must be a signed number or 'ev'", token),
        )
        .with_detail(token));
    }

    let price = token.parse::<f64>().map_err(|_| {
        ParseError::new(ErrorKind::InvalidPriceFormat, "price is not a number").with_detail(token)
    })?;

    if price.abs() < MIN_PRICE_MAGNITUDE {
        return Err(ParseError::new(
            ErrorKind::InvalidPriceFormat,
            format!("price {} has magnitude under 100", token),
        )
        .with_detail(token));
    }

    Ok(price)
}
