use crate::error::{ErrorKind, ParseError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static RE_NCR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^(\d+)c(\d+)(-?)$").unwrap());

pub const MIN_LEGS: u32 = 3;
pub const MIN_PARLAY_SIZE: u32 = 2;

/// `NcR` round-robin notation; a trailing `-` means "every size up to R"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRobinNotation {
    pub legs: u32,
    pub parlay_size: u32,
    pub at_most: bool,
}

impl fmt::Display for RoundRobinNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}c{}{}",
            self.legs,
            self.parlay_size,
            if self.at_most { "-" } else { "" }
        )
    }
}

fn invalid(token: &str, reason: impl Into<String>) -> ParseError {
    ParseError::new(ErrorKind::InvalidRoundRobinNotation, reason).with_detail(token)
}

pub fn parse_notation(token: &str) -> Result<RoundRobinNotation> {
    if token.contains(',') {
        return Err(invalid(
            token,
            "lists of parlay sizes are not supported, use NcR or NcR- instead",
        ));
    }

    let caps = RE_NCR
        .captures(token)
        .ok_or_else(|| invalid(token, format!("{:?} is not NcR notation (e.g. 4c2 or 4c3-)", token)))?;

    let legs: u32 = caps[1]
        .parse()
        .map_err(|_| invalid(token, "leg count is too large"))?;
    let parlay_size: u32 = caps[2]
        .parse()
        .map_err(|_| invalid(token, "parlay size is too large"))?;

    if legs < MIN_LEGS {
        return Err(invalid(token, format!("a round robin needs at least {} legs", MIN_LEGS)));
    }
    if parlay_size < MIN_PARLAY_SIZE {
        return Err(invalid(
            token,
            format!("parlay size must be at least {}", MIN_PARLAY_SIZE),
        ));
    }
    if parlay_size >= legs {
        return Err(invalid(token, "parlay size must be smaller than the leg count"));
    }

    Ok(RoundRobinNotation {
        legs,
        parlay_size,
        at_most: !caps[3].is_empty(),
    })
}
