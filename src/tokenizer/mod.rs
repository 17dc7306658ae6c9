//! Turns the body of a trade message into a structured token set.
//!
//! Each stage takes the previous stage's tokens and returns a new list, so
//! rotation, markers, keywords, positional fields, game number, prices and
//! period placement can be reasoned about (and tested) one at a time.

pub mod writein;

use crate::config::ParseOptions;
use crate::error::{ErrorKind, ParseError, Result};
use crate::models::{League, MessageType, Sport};
use crate::utils::date::{looks_like_date, parse_date};
use crate::utils::game_number::leading_game_number;
use crate::utils::keyword::{extract_keywords, STRAIGHT_KEYWORDS};
use crate::utils::league::{league_from_token, parse_league, sport_from_token};
use crate::utils::period::leading_period;
use crate::utils::price::{parse_price, DEFAULT_PRICE};
use crate::utils::rotation::{is_rotation_candidate, parse_rotation_number};
use crate::utils::size::{is_size_notation, parse_size};
use crate::utils::{is_over_under, signed_number};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

pub use writein::WriteinTokens;

/// Odds at or above this magnitude are prices, below it they are spread lines
pub const EMBEDDED_PRICE_THRESHOLD: f64 = 100.0;

static RE_ATTACHED_PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^([ou]\d+(?:\.\d+)?)([+-]\d+(?:\.\d+)?)$").unwrap());

static RE_UNSIGNED_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d+)?$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetFamily {
    Straight,
    Parlay,
    RoundRobin,
}

/// A message split into its family, order/fill flag and the text after the prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    pub family: BetFamily,
    pub message_type: MessageType,
    pub body: String,
}

/// Identify the message family from its prefix
pub fn detect_prefix(message: &str) -> Result<Prefix> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err(ParseError::new(ErrorKind::InvalidChatFormat, "message is empty"));
    }

    let split_at = trimmed
        .find(char::is_whitespace)
        .unwrap_or(trimmed.len());
    let (head, body) = trimmed.split_at(split_at);

    let (family, message_type, writein) = match head.to_uppercase().as_str() {
        "IW" => (BetFamily::Straight, MessageType::Order, false),
        "YG" => (BetFamily::Straight, MessageType::Fill, false),
        "IWW" => (BetFamily::Straight, MessageType::Order, true),
        "YGW" => (BetFamily::Straight, MessageType::Fill, true),
        "IWP" => (BetFamily::Parlay, MessageType::Order, false),
        "YGP" => (BetFamily::Parlay, MessageType::Fill, false),
        "IWRR" => (BetFamily::RoundRobin, MessageType::Order, false),
        "YGRR" => (BetFamily::RoundRobin, MessageType::Fill, false),
        _ => {
            return Err(ParseError::new(
                ErrorKind::UnrecognizedPrefix,
                format!("message must start with IW, YG, IWP, YGP, IWRR or YGRR, not {:?}", head),
            )
            .with_detail(head)
            .at(0))
        }
    };

    let body = if writein {
        format!("writein {}", body.trim_start())
    } else {
        body.to_string()
    };

    if body.trim().is_empty() {
        return Err(ParseError::new(
            ErrorKind::InvalidChatFormat,
            format!("nothing follows the {} prefix", head),
        ));
    }

    debug!(?family, ?message_type, "detected message prefix");
    Ok(Prefix {
        family,
        message_type,
        body,
    })
}

/// Put whitespace around the `@` and `=` markers so they are always standalone tokens
pub fn normalize_markers(body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 8);
    for c in body.chars() {
        if c == '@' || c == '=' {
            out.push(' ');
            out.push(c);
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}

/// The contract portion of a non-write-in message, plus what was pulled out of it
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredContract {
    /// Canonical contract text: team(s), then period, then the type-specific tail
    pub text: String,
    pub game_number: Option<u8>,
    pub event_date: Option<NaiveDate>,
    pub league: Option<League>,
    pub sport: Option<Sport>,
    pub ties_lose: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContractTokens {
    Structured(StructuredContract),
    Writein(WriteinTokens),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenizedMessage {
    pub message_type: MessageType,
    pub rotation_number: Option<u16>,
    pub contract: ContractTokens,
    pub price: f64,
    pub size: Option<f64>,
    pub free_bet: bool,
}

/// Tokens split around the `@` and `=` markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MarkerSplit {
    pub contract: Vec<String>,
    pub price: Option<Vec<String>>,
    pub size: Option<Vec<String>>,
}

pub(crate) fn split_markers(tokens: &[String], offset: usize) -> Result<MarkerSplit> {
    let at_positions: Vec<usize> = positions(tokens, "@");
    let eq_positions: Vec<usize> = positions(tokens, "=");

    if at_positions.len() > 1 {
        return Err(ParseError::new(ErrorKind::InvalidChatFormat, "more than one '@' price marker")
            .at(offset + at_positions[1]));
    }
    if eq_positions.len() > 1 {
        return Err(ParseError::new(ErrorKind::InvalidChatFormat, "more than one '=' size marker")
            .at(offset + eq_positions[1]));
    }

    let at = at_positions.first().copied();
    let eq = eq_positions.first().copied();
    if let (Some(at), Some(eq)) = (at, eq) {
        if eq < at {
            return Err(ParseError::new(
                ErrorKind::InvalidChatFormat,
                "the '=' size must come after the '@' price",
            )
            .at(offset + eq));
        }
    }

    let contract_end = at.or(eq).unwrap_or(tokens.len());
    let price = at.map(|at| tokens[at + 1..eq.unwrap_or(tokens.len())].to_vec());
    let size = eq.map(|eq| tokens[eq + 1..].to_vec());

    if let (Some(at), Some(price)) = (at, &price) {
        if price.is_empty() {
            return Err(ParseError::new(ErrorKind::InvalidChatFormat, "nothing follows '@'")
                .at(offset + at));
        }
    }

    Ok(MarkerSplit {
        contract: tokens[..contract_end].to_vec(),
        price,
        size,
    })
}

fn positions(tokens: &[String], marker: &str) -> Vec<usize> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| *t == marker)
        .map(|(i, _)| i)
        .collect()
}

/// What the `@` slot held: a price, or a size written where the price goes
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PriceSlot {
    pub price: Option<f64>,
    pub size: Option<f64>,
}

pub(crate) fn read_price_slot(tokens: &[String], message_type: MessageType) -> Result<PriceSlot> {
    match tokens {
        [] => Ok(PriceSlot {
            price: None,
            size: None,
        }),
        [token] if is_size_notation(token) => Ok(PriceSlot {
            price: None,
            size: Some(parse_size(token, message_type)?),
        }),
        [token] => Ok(PriceSlot {
            price: Some(parse_price(token)?),
            size: None,
        }),
        _ => Err(ParseError::new(
            ErrorKind::InvalidPriceFormat,
            format!("expected a single price after '@', got {:?}", tokens.join(" ")),
        )
        .with_detail(tokens.join(" "))),
    }
}

pub(crate) fn read_size_slot(tokens: &[String], message_type: MessageType) -> Result<Option<f64>> {
    match tokens {
        [] => match message_type {
            MessageType::Fill => Err(ParseError::new(
                ErrorKind::MissingSizeForFill,
                "nothing follows '=' on a fill",
            )),
            MessageType::Order => Err(ParseError::new(
                ErrorKind::InvalidSizeFormat,
                "nothing follows '='",
            )),
        },
        [token] => parse_size(token, message_type).map(Some),
        _ => Err(ParseError::new(
            ErrorKind::InvalidSizeFormat,
            format!("expected a single size after '=', got {:?}", tokens.join(" ")),
        )
        .with_detail(tokens.join(" "))),
    }
}

/// Pick exactly one price from the places one can appear, defaulting to -110
pub(crate) fn settle_price(candidates: &[Option<f64>]) -> Result<f64> {
    let given: Vec<f64> = candidates.iter().flatten().copied().collect();
    match given.as_slice() {
        [] => Ok(DEFAULT_PRICE),
        [price] => Ok(*price),
        _ => Err(ParseError::new(
            ErrorKind::InvalidChatFormat,
            "more than one price given",
        )),
    }
}

/// Pick at most one size; fills must end up with one
pub(crate) fn settle_size(
    candidates: &[Option<f64>],
    message_type: MessageType,
) -> Result<Option<f64>> {
    let given: Vec<f64> = candidates.iter().flatten().copied().collect();
    match (given.as_slice(), message_type) {
        ([], MessageType::Fill) => Err(ParseError::new(
            ErrorKind::MissingSizeForFill,
            "fills must state a size",
        )),
        ([], MessageType::Order) => Ok(None),
        ([size], _) => Ok(Some(*size)),
        _ => Err(ParseError::new(
            ErrorKind::InvalidChatFormat,
            "more than one size given",
        )),
    }
}

/// Positional date, league and sport found in the first two tokens
#[derive(Debug, Clone, Default, PartialEq)]
struct Positional {
    date: Option<NaiveDate>,
    league: Option<League>,
    sport: Option<Sport>,
}

fn take_positional(
    tokens: Vec<String>,
    keyword_date: Option<NaiveDate>,
    keyword_league: Option<League>,
    reference: NaiveDate,
) -> Result<(Positional, Vec<String>)> {
    let mut found = Positional {
        date: keyword_date,
        league: keyword_league,
        sport: None,
    };
    let mut consumed = 0;

    for token in tokens.iter().take(2) {
        if looks_like_date(token) {
            if found.date.is_some() {
                return Err(ParseError::new(ErrorKind::InvalidDateFormat, "date given twice")
                    .with_detail(token.as_str()));
            }
            found.date = Some(parse_date(token, reference)?);
        } else if let Some(league) = league_from_token(token) {
            if found.league.is_some() {
                return Err(ParseError::new(ErrorKind::InvalidLeagueFormat, "league given twice")
                    .with_detail(token.as_str()));
            }
            found.league = Some(league);
        } else if let Some(sport) = sport_from_token(token) {
            if found.sport.is_some() {
                break;
            }
            found.sport = Some(sport);
        } else {
            break;
        }
        consumed += 1;
    }

    Ok((found, tokens[consumed..].to_vec()))
}

fn take_game_number(tokens: Vec<String>) -> Result<(Option<u8>, Vec<String>)> {
    let refs: Vec<&str> = tokens.iter().map(String::as_str).collect();
    match leading_game_number(&refs)? {
        Some((number, used)) if used < tokens.len() => Ok((Some(number), tokens[used..].to_vec())),
        _ => Ok((None, tokens)),
    }
}

/// Rewrite `over 8.5`/`o 8.5` as `o8.5` and split prices glued to totals (`u2.5-125`)
fn canonical_over_under(tokens: Vec<String>) -> Result<(Option<f64>, Vec<String>)> {
    let mut out: Vec<String> = Vec::with_capacity(tokens.len());
    let mut attached = None;
    let mut iter = tokens.into_iter().peekable();

    while let Some(token) = iter.next() {
        let lower = token.to_lowercase();
        let spelled = matches!(lower.as_str(), "over" | "under" | "o" | "u");
        if spelled && iter.peek().is_some_and(|next| RE_UNSIGNED_NUMBER.is_match(next)) {
            let number = iter.next().unwrap_or_default();
            out.push(format!("{}{}", &lower[..1], number));
            continue;
        }

        if let Some(caps) = RE_ATTACHED_PRICE.captures(&token) {
            if attached.is_some() {
                return Err(ParseError::new(
                    ErrorKind::InvalidChatFormat,
                    "more than one attached price",
                )
                .with_detail(token.as_str()));
            }
            attached = Some(parse_price(&caps[2])?);
            out.push(caps[1].to_lowercase());
            continue;
        }

        out.push(token);
    }

    Ok((attached, out))
}

/// Find a signed number big enough to be a price. Zero stays as a moneyline
/// marker and anything under 100 stays as a spread line.
fn take_embedded_price(
    tokens: Vec<String>,
) -> Result<(Option<f64>, Option<String>, Vec<String>)> {
    let found = tokens.iter().position(|t| {
        signed_number(t).is_some_and(|v| v != 0.0 && v.abs() >= EMBEDDED_PRICE_THRESHOLD)
    });
    let Some(index) = found else {
        return Ok((None, None, tokens));
    };

    let price = parse_price(&tokens[index])?;
    let trailing = &tokens[index + 1..];
    let size_token = match trailing {
        [] => None,
        [token] if is_size_notation(token) => Some(token.clone()),
        _ => {
            return Err(ParseError::new(
                ErrorKind::InvalidChatFormat,
                format!("unexpected text after price {}", tokens[index]),
            )
            .with_detail(trailing.join(" ")))
        }
    };

    Ok((Some(price), size_token, tokens[..index].to_vec()))
}

fn is_contract_marker(token: &str) -> bool {
    signed_number(token).is_some()
        || is_over_under(token)
        || matches!(
            token.to_lowercase().as_str(),
            "tt" | "ml" | "series" | "yes" | "no" | "y" | "n" | "runs"
        )
}

/// Move a period written before the team (`2h Vanderbilt +2.5`) to just after it
fn reorder_leading_period(tokens: Vec<String>) -> Result<Vec<String>> {
    let refs: Vec<&str> = tokens.iter().map(String::as_str).collect();
    let Some((_, used)) = leading_period(&refs)? else {
        return Ok(tokens);
    };
    if used >= tokens.len() {
        return Ok(tokens);
    }

    let (period, rest) = tokens.split_at(used);
    let team_end = rest
        .iter()
        .position(|t| is_contract_marker(t))
        .unwrap_or(rest.len());
    if team_end == 0 {
        return Ok(tokens);
    }

    let mut out = rest[..team_end].to_vec();
    out.extend_from_slice(period);
    out.extend_from_slice(&rest[team_end..]);
    Ok(out)
}

/// Tokenize the body of a straight (single contract) message
pub fn tokenize(body: &str, message_type: MessageType, options: &ParseOptions) -> Result<TokenizedMessage> {
    let normalized = normalize_markers(body);
    let tokens: Vec<String> = normalized.split_whitespace().map(String::from).collect();

    let Some(first) = tokens.first() else {
        return Err(ParseError::new(ErrorKind::InvalidChatFormat, "no contract given"));
    };
    if first.eq_ignore_ascii_case("writein") {
        return writein::tokenize(&normalized, message_type, options);
    }

    let (rotation_number, start) = if is_rotation_candidate(first) {
        (Some(parse_rotation_number(first).map_err(|e| e.at(0))?), 1)
    } else {
        (None, 0)
    };

    let split = split_markers(&tokens[start..], start)?;
    let price_slot = match &split.price {
        Some(price_tokens) => read_price_slot(price_tokens, message_type)?,
        None => PriceSlot {
            price: None,
            size: None,
        },
    };
    let explicit_size = match &split.size {
        Some(size_tokens) => read_size_slot(size_tokens, message_type)?,
        None => None,
    };

    let reference = options.reference_date();
    let (keywords, contract) =
        extract_keywords(&split.contract, STRAIGHT_KEYWORDS).map_err(|mut e| {
            e.position = e.position.map(|p| p + start);
            e
        })?;
    let keyword_date = keywords
        .get("date")
        .map(|value| parse_date(value, reference))
        .transpose()?;
    let keyword_league = keywords.get("league").map(parse_league).transpose()?;

    let (positional, contract) = take_positional(contract, keyword_date, keyword_league, reference)?;
    let (game_number, contract) = take_game_number(contract)?;
    let (attached_price, contract) = canonical_over_under(contract)?;
    let (embedded_price, embedded_size, contract) = take_embedded_price(contract)?;
    let contract = reorder_leading_period(contract)?;

    if contract.is_empty() {
        return Err(ParseError::new(ErrorKind::InvalidChatFormat, "no contract given"));
    }

    let price = settle_price(&[price_slot.price, attached_price, embedded_price])?;
    let embedded_size = embedded_size
        .map(|token| parse_size(&token, message_type))
        .transpose()?;
    let size = settle_size(&[explicit_size, price_slot.size, embedded_size], message_type)?;

    let structured = StructuredContract {
        text: contract.join(" "),
        game_number,
        event_date: positional.date,
        league: positional.league,
        sport: positional.sport,
        ties_lose: keywords.flag("tieslose"),
    };
    debug!(
        contract = %structured.text,
        ?rotation_number,
        price,
        ?size,
        "tokenized straight message"
    );

    Ok(TokenizedMessage {
        message_type,
        rotation_number,
        contract: ContractTokens::Structured(structured),
        price,
        size,
        free_bet: keywords.flag("freebet"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ParseOptions {
        ParseOptions::with_reference_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    fn structured(message: &TokenizedMessage) -> &StructuredContract {
        match &message.contract {
            ContractTokens::Structured(s) => s,
            ContractTokens::Writein(_) => panic!("expected a structured contract"),
        }
    }

    #[test]
    fn test_detect_prefix() {
        let prefix = detect_prefix("YG Padres/Pirates u8.5").unwrap();
        assert_eq!(prefix.family, BetFamily::Straight);
        assert_eq!(prefix.message_type, MessageType::Fill);
        assert_eq!(prefix.body.trim(), "Padres/Pirates u8.5");

        assert_eq!(detect_prefix("iwp a & b").unwrap().family, BetFamily::Parlay);
        assert_eq!(detect_prefix("YGRR 3c2 a").unwrap().family, BetFamily::RoundRobin);

        let prefix = detect_prefix("IWW 2024-07-04 something").unwrap();
        assert_eq!(prefix.body, "writein 2024-07-04 something");
    }

    #[test]
    fn test_detect_prefix_errors() {
        assert_eq!(detect_prefix("").unwrap_err().kind, ErrorKind::InvalidChatFormat);
        assert_eq!(detect_prefix("IW").unwrap_err().kind, ErrorKind::InvalidChatFormat);
        assert_eq!(
            detect_prefix("BUY Lakers").unwrap_err().kind,
            ErrorKind::UnrecognizedPrefix
        );
    }

    #[test]
    fn test_normalize_markers() {
        assert_eq!(
            normalize_markers("Lakers@+120=2k").split_whitespace().collect::<Vec<_>>(),
            vec!["Lakers", "@", "+120", "=", "2k"]
        );
    }

    #[test]
    fn test_rotation_and_price() {
        let t = tokenize("872 Athletics @ +145", MessageType::Order, &options()).unwrap();
        assert_eq!(t.rotation_number, Some(872));
        assert_eq!(t.price, 145.0);
        assert_eq!(t.size, None);
        assert_eq!(structured(&t).text, "Athletics");
    }

    #[test]
    fn test_invalid_rotation() {
        let err = tokenize("abc Athletics @ +145", MessageType::Order, &options()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidRotationNumber);
        let err = tokenize("10000 Athletics", MessageType::Order, &options()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidRotationNumber);
    }

    #[test]
    fn test_marker_errors() {
        let err = tokenize("Lakers @ +120 @ +130", MessageType::Order, &options()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidChatFormat);
        let err = tokenize("Lakers @ ", MessageType::Order, &options()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidChatFormat);
        let err = tokenize("Lakers @ = 2k", MessageType::Order, &options()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidChatFormat);
    }

    #[test]
    fn test_default_price() {
        let t = tokenize("Lakers -3.5", MessageType::Order, &options()).unwrap();
        assert_eq!(t.price, DEFAULT_PRICE);
        assert_eq!(structured(&t).text, "Lakers -3.5");
    }

    #[test]
    fn test_embedded_price_vs_spread() {
        let t = tokenize("Lakers -150 = 2k", MessageType::Order, &options()).unwrap();
        assert_eq!(t.price, -150.0);
        assert_eq!(t.size, Some(2000.0));
        assert_eq!(structured(&t).text, "Lakers");

        let t = tokenize("Lakers +0", MessageType::Order, &options()).unwrap();
        assert_eq!(t.price, DEFAULT_PRICE);
        assert_eq!(structured(&t).text, "Lakers +0");

        let t = tokenize("Lakers +99.5", MessageType::Order, &options()).unwrap();
        assert_eq!(structured(&t).text, "Lakers +99.5");
    }

    #[test]
    fn test_two_prices_rejected() {
        let err = tokenize("Lakers -150 @ -110", MessageType::Order, &options()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidChatFormat);
    }

    #[test]
    fn test_attached_price() {
        let t = tokenize("Padres/Pirates u2.5-125 = 1.5", MessageType::Fill, &options()).unwrap();
        assert_eq!(t.price, -125.0);
        assert_eq!(t.size, Some(1500.0));
        assert_eq!(structured(&t).text, "Padres/Pirates u2.5");
    }

    #[test]
    fn test_spelled_over_under() {
        let t = tokenize("Padres/Pirates over 8.5", MessageType::Order, &options()).unwrap();
        assert_eq!(structured(&t).text, "Padres/Pirates o8.5");
    }

    #[test]
    fn test_size_in_price_slot() {
        let t = tokenize("Lakers -3 @ 2k", MessageType::Fill, &options()).unwrap();
        assert_eq!(t.price, DEFAULT_PRICE);
        assert_eq!(t.size, Some(2000.0));
    }

    #[test]
    fn test_missing_size_for_fill() {
        let err = tokenize("LAA TT o3.5 @ -115.5", MessageType::Fill, &options()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingSizeForFill);
        let err = tokenize("LAA TT o3.5 @ -115 =", MessageType::Fill, &options()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingSizeForFill);
    }

    #[test]
    fn test_keywords_and_positional_fields() {
        let t = tokenize(
            "NBA 6/10 Lakers -3 freebet:true @ -110 = 1k",
            MessageType::Order,
            &options(),
        )
        .unwrap();
        let s = structured(&t);
        assert_eq!(s.league, Some(League::NBA));
        assert_eq!(s.event_date, NaiveDate::from_ymd_opt(2024, 6, 10));
        assert_eq!(s.text, "Lakers -3");
        assert!(t.free_bet);

        let t = tokenize("date:2024-06-12 league:fcs Montana -7", MessageType::Order, &options())
            .unwrap();
        let s = structured(&t);
        assert_eq!(s.league, Some(League::CFB));
        assert_eq!(s.event_date, NaiveDate::from_ymd_opt(2024, 6, 12));
    }

    #[test]
    fn test_keyword_errors() {
        let err = tokenize("Lakers -3 pusheslose:true", MessageType::Order, &options()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownKeyword);
        let err = tokenize("Lakers -3 freebet:false", MessageType::Order, &options()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidKeywordValue);
        let err = tokenize("date:6/10 6/11 Lakers -3", MessageType::Order, &options()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidDateFormat);
    }

    #[test]
    fn test_game_number() {
        let t = tokenize("g2 Yankees/Red Sox o8.5", MessageType::Order, &options()).unwrap();
        let s = structured(&t);
        assert_eq!(s.game_number, Some(2));
        assert_eq!(s.text, "Yankees/Red Sox o8.5");

        let err = tokenize("g12 Yankees/Red Sox o8.5", MessageType::Order, &options()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidGameNumber);
    }

    #[test]
    fn test_leading_period_moves_after_team() {
        let t = tokenize("2h Vanderbilt +2.5", MessageType::Order, &options()).unwrap();
        assert_eq!(structured(&t).text, "Vanderbilt 2h +2.5");

        let t = tokenize("1st half Lakers/Celtics o110.5", MessageType::Order, &options()).unwrap();
        assert_eq!(structured(&t).text, "Lakers/Celtics 1st half o110.5");

        let t = tokenize("2h Vanderbilt", MessageType::Order, &options()).unwrap();
        assert_eq!(structured(&t).text, "Vanderbilt 2h");
    }
}
