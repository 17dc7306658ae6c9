use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Every way a trade message can fail to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidChatFormat,
    UnrecognizedPrefix,
    InvalidPriceFormat,
    InvalidSizeFormat,
    InvalidLineFormat,
    InvalidPeriodFormat,
    InvalidTeamFormat,
    InvalidGameNumber,
    InvalidRotationNumber,
    InvalidDateFormat,
    InvalidLeagueFormat,
    LeagueSportConflict,
    AmbiguousContractType,
    InvalidContractType,
    InvalidTotalFormat,
    InvalidTeamTotalFormat,
    InvalidMoneylineFormat,
    InvalidSpreadFormat,
    InvalidPropFormat,
    InvalidSeriesFormat,
    MissingSizeForFill,
    InvalidWriteinFormat,
    InvalidWriteinDate,
    InvalidWriteinDescription,
    UnknownKeyword,
    InvalidKeywordFormat,
    InvalidKeywordValue,
    InvalidParlayFormat,
    InvalidParlayLeg,
    InvalidRoundRobinFormat,
    InvalidRoundRobinNotation,
    LegCountMismatch,
    MissingRiskType,
    InvalidRiskType,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidChatFormat => "invalid chat format",
            Self::UnrecognizedPrefix => "unrecognized prefix",
            Self::InvalidPriceFormat => "invalid price format",
            Self::InvalidSizeFormat => "invalid size format",
            Self::InvalidLineFormat => "invalid line format",
            Self::InvalidPeriodFormat => "invalid period format",
            Self::InvalidTeamFormat => "invalid team format",
            Self::InvalidGameNumber => "invalid game number",
            Self::InvalidRotationNumber => "invalid rotation number",
            Self::InvalidDateFormat => "invalid date format",
            Self::InvalidLeagueFormat => "invalid league format",
            Self::LeagueSportConflict => "league/sport conflict",
            Self::AmbiguousContractType => "ambiguous contract type",
            Self::InvalidContractType => "invalid contract type",
            Self::InvalidTotalFormat => "invalid total format",
            Self::InvalidTeamTotalFormat => "invalid team total format",
            Self::InvalidMoneylineFormat => "invalid moneyline format",
            Self::InvalidSpreadFormat => "invalid spread format",
            Self::InvalidPropFormat => "invalid prop format",
            Self::InvalidSeriesFormat => "invalid series format",
            Self::MissingSizeForFill => "missing size for fill",
            Self::InvalidWriteinFormat => "invalid writein format",
            Self::InvalidWriteinDate => "invalid writein date",
            Self::InvalidWriteinDescription => "invalid writein description",
            Self::UnknownKeyword => "unknown keyword",
            Self::InvalidKeywordFormat => "invalid keyword format",
            Self::InvalidKeywordValue => "invalid keyword value",
            Self::InvalidParlayFormat => "invalid parlay format",
            Self::InvalidParlayLeg => "invalid parlay leg",
            Self::InvalidRoundRobinFormat => "invalid round robin format",
            Self::InvalidRoundRobinNotation => "invalid round robin notation",
            Self::LegCountMismatch => "leg count mismatch",
            Self::MissingRiskType => "missing risk type",
            Self::InvalidRiskType => "invalid risk type",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parse failure.
///
/// Primitives build these without knowing the full message; the public entry
/// points stamp `raw_input` before handing the error back to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {reason}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub raw_input: String,
    pub reason: String,
    /// Offending substring, when there is one
    pub detail: Option<String>,
    /// Token index within the message body
    pub position: Option<usize>,
    /// 1-based leg number for multi-leg failures
    pub leg: Option<usize>,
    pub source: Option<Box<ParseError>>,
}

impl ParseError {
    pub fn new(kind: ErrorKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            raw_input: String::new(),
            reason: reason.into(),
            detail: None,
            position: None,
            leg: None,
            source: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Wrap a leg's failure so the caller can tell which leg broke and why
    pub fn leg_failure(leg: usize, cause: ParseError) -> Self {
        Self {
            kind: ErrorKind::InvalidParlayLeg,
            raw_input: String::new(),
            reason: format!("leg {} failed: {}", leg, cause),
            detail: Some(cause.raw_input.clone()),
            position: None,
            leg: Some(leg),
            source: Some(Box::new(cause)),
        }
    }

    /// Attach the original message, keeping any input already recorded
    pub fn with_input(mut self, raw_input: &str) -> Self {
        if self.raw_input.is_empty() {
            self.raw_input = raw_input.to_string();
        }
        self
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_includes_kind_and_reason() {
        let err = ParseError::new(ErrorKind::InvalidLineFormat, "line 2.3 is not a multiple of 0.5");
        assert_eq!(
            err.to_string(),
            "invalid line format: line 2.3 is not a multiple of 0.5"
        );
    }

    #[test]
    fn test_with_input_keeps_first_input() {
        let err = ParseError::new(ErrorKind::InvalidPriceFormat, "bad")
            .with_input("IW Lakers @ +50")
            .with_input("something else");
        assert_eq!(err.raw_input, "IW Lakers @ +50");
    }

    #[test]
    fn test_leg_failure_keeps_cause() {
        let cause = ParseError::new(ErrorKind::InvalidTeamFormat, "duplicate teams")
            .with_input("IW Lakers/Lakers");
        let err = ParseError::leg_failure(2, cause).with_input("IWP Nets & Lakers/Lakers");

        assert_eq!(err.kind, ErrorKind::InvalidParlayLeg);
        assert_eq!(err.leg, Some(2));
        assert_eq!(err.raw_input, "IWP Nets & Lakers/Lakers");
        assert_eq!(err.detail.as_deref(), Some("IW Lakers/Lakers"));
        let source = err.source().map(|s| s.to_string()).unwrap_or_default();
        assert!(source.contains("duplicate teams"));
    }
}
