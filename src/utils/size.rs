use crate::error::{ErrorKind, ParseError, Result};
use crate::models::MessageType;
use regex::Regex;
use std::sync::LazyLock;

static RE_PLAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d+(?:\.\d+)?|\.\d+)$").unwrap());

static RE_COMMA_GROUPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}(?:,\d{3})+(?:\.\d+)?$").unwrap());

/// `$` prefixed and `k` suffixed sizes are unambiguous wherever they appear
pub fn is_size_notation(token: &str) -> bool {
    let token = token.trim();
    token.starts_with('$')
        || token
            .strip_suffix(['k', 'K'])
            .is_some_and(|number| number.ends_with(|c: char| c.is_ascii_digit()))
}

/// Parse a size in dollars.
///
/// `$250` and `1,500` are literal, `2k` is thousands. A bare decimal like
/// `0.094` is literal on orders but thousands on fills.
pub fn parse_size(token: &str, message_type: MessageType) -> Result<f64> {
    let raw = token.trim();
    let invalid = |reason: &str| {
        ParseError::new(ErrorKind::InvalidSizeFormat, format!("size {:?}: {}", raw, reason))
            .with_detail(raw)
    };

    if raw.is_empty() {
        return Err(invalid("empty size"));
    }

    let (dollar, rest) = match raw.strip_prefix('$') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    let (thousands, number) = match rest.strip_suffix(['k', 'K']) {
        Some(number) => (true, number),
        None => (false, rest),
    };

    let (digits, comma_grouped) = if number.contains(',') {
        if !RE_COMMA_GROUPED.is_match(number) {
            return Err(invalid("thousands must be grouped in threes"));
        }
        (number.replace(',', ""), true)
    } else if RE_PLAIN.is_match(number) {
        (number.to_string(), false)
    } else {
        return Err(invalid("not a number"));
    };

    let in_thousands = thousands
        || (!dollar && !comma_grouped && message_type == MessageType::Fill && number.contains('.'));

    // Scale in the decimal text so 0.094 thousands reads as exactly 94
    let text = if in_thousands { format!("{}e3", digits) } else { digits };
    text.parse::<f64>().map_err(|_| invalid("not a number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dollar_and_k_sizes() {
        assert_eq!(parse_size("$100", MessageType::Fill).unwrap(), 100.0);
        assert_eq!(parse_size("$2.5", MessageType::Fill).unwrap(), 2.5);
        assert_eq!(parse_size("2k", MessageType::Order).unwrap(), 2000.0);
        assert_eq!(parse_size("1.5K", MessageType::Fill).unwrap(), 1500.0);
        assert_eq!(parse_size("$3k", MessageType::Order).unwrap(), 3000.0);
    }

    #[test]
    fn test_plain_sizes_differ_between_orders_and_fills() {
        assert_eq!(parse_size("0.094", MessageType::Fill).unwrap(), 94.0);
        assert_eq!(parse_size("0.094", MessageType::Order).unwrap(), 0.094);
        assert_eq!(parse_size("$0.125", MessageType::Fill).unwrap(), 0.125);
        assert_eq!(parse_size("1,000.255", MessageType::Order).unwrap(), 1000.255);
        assert_eq!(parse_size(".5", MessageType::Fill).unwrap(), 500.0);
        assert_eq!(parse_size("1.0", MessageType::Fill).unwrap(), 1000.0);
        assert_eq!(parse_size("250", MessageType::Fill).unwrap(), 250.0);
        assert_eq!(parse_size("250", MessageType::Order).unwrap(), 250.0);
    }

    #[test]
    fn test_comma_grouped_sizes() {
        assert_eq!(parse_size("1,000", MessageType::Fill).unwrap(), 1000.0);
        assert_eq!(parse_size("$12,500.50", MessageType::Order).unwrap(), 12500.5);
        let err = parse_size("1,00", MessageType::Order).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidSizeFormat);
        assert!(parse_size("1000,000", MessageType::Order).is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_size("-5", MessageType::Order).is_err());
        assert!(parse_size("abc", MessageType::Order).is_err());
        assert!(parse_size("$", MessageType::Order).is_err());
        assert!(parse_size("k", MessageType::Order).is_err());
    }

    #[test]
    fn test_is_size_notation() {
        assert!(is_size_notation("$100"));
        assert!(is_size_notation("2k"));
        assert!(!is_size_notation("+100"));
        assert!(!is_size_notation("k"));
        assert!(!is_size_notation("ok"));
        assert!(!is_size_notation("Mak"));
        assert!(is_size_notation("1.5K"));
    }
}
