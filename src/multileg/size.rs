use crate::error::{ErrorKind, ParseError, Result};
use crate::models::{MessageType, RiskType};
use crate::utils::size::parse_size;

/// What the `=` segment of a parlay or round robin said
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MultiLegSize {
    pub risk: Option<f64>,
    pub risk_type: Option<RiskType>,
    pub to_win: Option<f64>,
}

fn risk_type(token: &str) -> Option<RiskType> {
    match token.to_lowercase().as_str() {
        "per" => Some(RiskType::PerSelection),
        "total" => Some(RiskType::Total),
        _ => None,
    }
}

/// Parse `amount [per|total] [tw amount]`.
///
/// A risk type is only legal on round robins and must come before `tw`.
pub fn parse_multi_leg_size(
    tokens: &[String],
    message_type: MessageType,
    round_robin: bool,
) -> Result<MultiLegSize> {
    let format_kind = if round_robin {
        ErrorKind::InvalidRoundRobinFormat
    } else {
        ErrorKind::InvalidParlayFormat
    };

    let Some((amount, rest)) = tokens.split_first() else {
        return Ok(MultiLegSize::default());
    };
    let mut size = MultiLegSize {
        risk: Some(parse_size(amount, message_type)?),
        ..MultiLegSize::default()
    };

    let mut rest = rest.iter().map(String::as_str).peekable();

    if let Some(found) = rest.peek().and_then(|t| risk_type(t)) {
        if !round_robin {
            return Err(ParseError::new(
                ErrorKind::InvalidParlayFormat,
                "per/total only applies to round robins",
            ));
        }
        size.risk_type = Some(found);
        rest.next();
    }

    if rest.peek().is_some_and(|t| t.eq_ignore_ascii_case("tw")) {
        rest.next();
        let to_win = rest.next().ok_or_else(|| {
            ParseError::new(ErrorKind::InvalidSizeFormat, "tw must be followed by an amount")
        })?;
        size.to_win = Some(parse_size(to_win, message_type)?);
    }

    if let Some(extra) = rest.next() {
        if round_robin && risk_type(extra).is_some() {
            return Err(ParseError::new(
                ErrorKind::InvalidRiskType,
                "risk type must come before tw",
            )
            .with_detail(extra));
        }
        if round_robin && size.risk_type.is_none() && size.to_win.is_none() {
            return Err(ParseError::new(
                ErrorKind::InvalidRiskType,
                format!("unknown risk type {:?}, expected per or total", extra),
            )
            .with_detail(extra));
        }
        return Err(ParseError::new(format_kind, format!("unexpected {:?} after size", extra))
            .with_detail(extra));
    }

    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_parlay_size() {
        let size = parse_multi_leg_size(&tokens("$100 tw $320"), MessageType::Fill, false).unwrap();
        assert_eq!(size.risk, Some(100.0));
        assert_eq!(size.to_win, Some(320.0));
        assert_eq!(size.risk_type, None);

        let size = parse_multi_leg_size(&[], MessageType::Order, false).unwrap();
        assert_eq!(size, MultiLegSize::default());
    }

    #[test]
    fn test_round_robin_size() {
        let size = parse_multi_leg_size(&tokens("$100 per"), MessageType::Fill, true).unwrap();
        assert_eq!(size.risk_type, Some(RiskType::PerSelection));
        let size = parse_multi_leg_size(&tokens("1k total tw 5k"), MessageType::Order, true).unwrap();
        assert_eq!(size.risk, Some(1000.0));
        assert_eq!(size.risk_type, Some(RiskType::Total));
        assert_eq!(size.to_win, Some(5000.0));
    }

    #[test]
    fn test_errors() {
        let err = parse_multi_leg_size(&tokens("$100 tw $500 per"), MessageType::Fill, true).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidRiskType);
        let err = parse_multi_leg_size(&tokens("$100 each"), MessageType::Fill, true).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidRiskType);
        let err = parse_multi_leg_size(&tokens("$100 per"), MessageType::Fill, false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidParlayFormat);
        let err = parse_multi_leg_size(&tokens("$100 tw"), MessageType::Fill, false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidSizeFormat);
    }
}
