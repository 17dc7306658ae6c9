//! Parlays and round robins, built on top of the straight bet parser.
//!
//! A multi-leg message is either one line with legs joined by ` & `, or
//! several lines where the first holds flags, each following line is a leg
//! and a line starting with `=` carries the size.

pub mod notation;
pub mod size;

use crate::config::ParseOptions;
use crate::error::{ErrorKind, ParseError, Result};
use crate::models::{MessageType, MultiLegBet, ParlayBet, ParseResult, RoundRobinBet, StraightBet};
use crate::tokenizer::normalize_markers;
use crate::utils::keyword::{extract_keywords, is_keyword_like, Keywords, MULTI_LEG_KEYWORDS};
use crate::utils::odds::{parlay_fair_to_win, round_robin_fair_to_win};
use crate::utils::round_cents;
use tracing::debug;

pub use notation::{parse_notation, RoundRobinNotation};
pub use size::{parse_multi_leg_size, MultiLegSize};

pub const MIN_PARLAY_LEGS: usize = 2;

const LEG_SEPARATOR: &str = "&";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Parlay,
    RoundRobin,
}

impl Family {
    fn format_error(self) -> ErrorKind {
        match self {
            Self::Parlay => ErrorKind::InvalidParlayFormat,
            Self::RoundRobin => ErrorKind::InvalidRoundRobinFormat,
        }
    }
}

/// A multi-leg message cut into its parts, before anything is parsed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Layout {
    notation: Option<String>,
    flags: Vec<String>,
    legs: Vec<String>,
    size: Vec<String>,
}

fn split_single_line(body: &str, family: Family) -> Result<Layout> {
    let normalized = normalize_markers(body);
    let tokens: Vec<String> = normalized.split_whitespace().map(String::from).collect();

    let equals: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| *t == "=")
        .map(|(i, _)| i)
        .collect();
    if equals.len() > 1 {
        return Err(ParseError::new(family.format_error(), "more than one '=' size marker").at(equals[1]));
    }
    let (before, size) = match equals.first() {
        Some(&eq) => (&tokens[..eq], tokens[eq + 1..].to_vec()),
        None => (&tokens[..], Vec::new()),
    };

    let mut rest = before;
    let mut layout = Layout {
        size,
        ..Layout::default()
    };
    if family == Family::RoundRobin {
        if let Some((first, tail)) = rest.split_first() {
            layout.notation = Some(first.clone());
            rest = tail;
        }
    }
    let flag_count = rest.iter().take_while(|t| is_keyword_like(t)).count();
    layout.flags = rest[..flag_count].to_vec();
    rest = &rest[flag_count..];

    if rest.is_empty() {
        return Ok(layout);
    }
    for (index, group) in rest.split(|t| t == LEG_SEPARATOR).enumerate() {
        if group.is_empty() {
            return Err(ParseError::new(
                ErrorKind::InvalidParlayLeg,
                format!("leg {} is empty", index + 1),
            ));
        }
        layout.legs.push(group.join(" "));
    }
    Ok(layout)
}

fn split_multiline(body: &str, family: Family) -> Result<Layout> {
    let mut lines = body.lines();
    let header = normalize_markers(lines.next().unwrap_or_default());
    let mut header_tokens = header.split_whitespace().map(String::from);

    let mut layout = Layout::default();
    if family == Family::RoundRobin {
        layout.notation = header_tokens.next();
    }
    for token in header_tokens {
        if !is_keyword_like(&token) {
            return Err(ParseError::new(
                family.format_error(),
                format!("the first line may only hold flags, found {:?}", token),
            )
            .with_detail(token));
        }
        layout.flags.push(token);
    }

    let mut size_line = None;
    for line in lines.map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(size) = line.strip_prefix('=') {
            if size_line.is_some() {
                return Err(ParseError::new(family.format_error(), "more than one size line"));
            }
            size_line = Some(size.to_string());
            continue;
        }
        if size_line.is_some() {
            return Err(ParseError::new(
                family.format_error(),
                "legs must come before the size line",
            )
            .with_detail(line));
        }
        if line.contains('=') {
            return Err(ParseError::new(
                ErrorKind::InvalidParlayLeg,
                format!("leg {} carries its own size", layout.legs.len() + 1),
            )
            .with_detail(line));
        }
        layout.legs.push(line.to_string());
    }

    layout.size = size_line
        .map(|s| normalize_markers(&s).split_whitespace().map(String::from).collect())
        .unwrap_or_default();
    Ok(layout)
}

fn split_layout(body: &str, family: Family) -> Result<Layout> {
    if body.trim().contains('\n') {
        split_multiline(body, family)
    } else {
        split_single_line(body, family)
    }
}

/// Parse one leg by sending it back through the straight pipeline as an order
fn parse_leg(index: usize, text: &str, options: &ParseOptions) -> Result<StraightBet> {
    let message = format!("{} {}", MessageType::Order.prefix(), text);
    let parsed = crate::parse_message(&message, options)
        .map_err(|e| ParseError::leg_failure(index, e.with_input(&message)))?;
    match parsed {
        ParseResult::Straight(leg) => Ok(leg),
        other => Err(ParseError::leg_failure(
            index,
            ParseError::new(
                ErrorKind::InvalidParlayLeg,
                format!("a leg must be a straight bet, not a {}", other.bet_type()),
            )
            .with_input(&message),
        )),
    }
}

fn parse_legs(texts: &[String], options: &ParseOptions) -> Result<Vec<StraightBet>> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| parse_leg(i + 1, text, options))
        .collect()
}

/// Parts shared by parlays and round robins
struct MultiLegParts {
    legs: Vec<StraightBet>,
    keywords: Keywords,
    size: MultiLegSize,
}

fn parse_parts(
    layout: &Layout,
    message_type: MessageType,
    family: Family,
    options: &ParseOptions,
) -> Result<MultiLegParts> {
    let (keywords, _) = extract_keywords(&layout.flags, MULTI_LEG_KEYWORDS)?;
    let size = parse_multi_leg_size(&layout.size, message_type, family == Family::RoundRobin)?;
    if message_type == MessageType::Fill && size.risk.is_none() {
        return Err(ParseError::new(
            ErrorKind::MissingSizeForFill,
            "fills must state a risk amount",
        ));
    }
    let legs = parse_legs(&layout.legs, options)?;
    Ok(MultiLegParts { legs, keywords, size })
}

fn multi_leg_bet(
    parts: &MultiLegParts,
    message_type: MessageType,
    fair_to_win: impl Fn(f64) -> f64,
    options: &ParseOptions,
) -> (MultiLegBet, bool) {
    let use_fair = parts.size.to_win.is_none();
    let to_win = match parts.size.to_win {
        Some(to_win) => Some(to_win),
        None => parts.size.risk.map(|risk| round_cents(fair_to_win(risk))),
    };
    let bet = MultiLegBet {
        risk: parts.size.risk,
        to_win,
        execution_timestamp: (message_type == MessageType::Fill).then(|| options.execution_timestamp()),
        free_bet: parts.keywords.flag("freebet"),
    };
    (bet, use_fair)
}

fn pushes_lose(keywords: &Keywords) -> Option<bool> {
    (keywords.flag("pusheslose") || keywords.flag("tieslose")).then_some(true)
}

pub fn parse_parlay(message_type: MessageType, body: &str, options: &ParseOptions) -> Result<ParlayBet> {
    let layout = split_layout(body, Family::Parlay)?;
    if layout.legs.len() < MIN_PARLAY_LEGS {
        return Err(ParseError::new(
            ErrorKind::InvalidParlayFormat,
            format!("a parlay needs at least {} legs, got {}", MIN_PARLAY_LEGS, layout.legs.len()),
        ));
    }

    let parts = parse_parts(&layout, message_type, Family::Parlay, options)?;
    let prices: Vec<f64> = parts.legs.iter().map(|leg| leg.bet.price).collect();
    let (bet, use_fair) = multi_leg_bet(
        &parts,
        message_type,
        |risk| parlay_fair_to_win(risk, &prices),
        options,
    );
    debug!(legs = parts.legs.len(), risk = ?bet.risk, to_win = ?bet.to_win, "parsed parlay");

    Ok(ParlayBet {
        message_type,
        pushes_lose: pushes_lose(&parts.keywords),
        legs: parts.legs,
        bet,
        use_fair,
    })
}

pub fn parse_round_robin(
    message_type: MessageType,
    body: &str,
    options: &ParseOptions,
) -> Result<RoundRobinBet> {
    let layout = split_layout(body, Family::RoundRobin)?;
    let notation = match &layout.notation {
        Some(token) => parse_notation(token)?,
        None => {
            return Err(ParseError::new(
                ErrorKind::InvalidRoundRobinNotation,
                "round robin must start with NcR notation",
            ))
        }
    };
    if layout.legs.len() != notation.legs as usize {
        return Err(ParseError::new(
            ErrorKind::LegCountMismatch,
            format!("{} needs {} legs, got {}", notation, notation.legs, layout.legs.len()),
        ));
    }

    let parts = parse_parts(&layout, message_type, Family::RoundRobin, options)?;
    if message_type == MessageType::Fill && parts.size.risk_type.is_none() {
        return Err(ParseError::new(
            ErrorKind::MissingRiskType,
            "round robin fills must say per or total",
        ));
    }

    let prices: Vec<f64> = parts.legs.iter().map(|leg| leg.bet.price).collect();
    let (bet, use_fair) = multi_leg_bet(
        &parts,
        message_type,
        |risk| round_robin_fair_to_win(risk, &prices, notation.parlay_size, notation.at_most),
        options,
    );
    debug!(%notation, risk = ?bet.risk, to_win = ?bet.to_win, "parsed round robin");

    Ok(RoundRobinBet {
        message_type,
        pushes_lose: pushes_lose(&parts.keywords),
        risk_type: parts.size.risk_type,
        legs: parts.legs,
        bet,
        use_fair,
        parlay_size: notation.parlay_size,
        is_at_most: notation.at_most,
    })
}
