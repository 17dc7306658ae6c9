use super::{read_price_slot, read_size_slot, settle_price, settle_size, split_markers};
use super::{ContractTokens, PriceSlot, TokenizedMessage};
use crate::config::ParseOptions;
use crate::error::{ErrorKind, ParseError, Result};
use crate::models::{League, MessageType};
use crate::utils::date::parse_date;
use crate::utils::keyword::{extract_keywords, is_keyword_like};
use crate::utils::league::parse_league;
use chrono::NaiveDate;
use tracing::debug;

pub const MIN_DESCRIPTION_LEN: usize = 10;
pub const MAX_DESCRIPTION_LEN: usize = 255;

const WRITEIN_KEYWORDS: &[&str] = &["league", "freebet"];

/// A free-text contract with its event date
#[derive(Debug, Clone, PartialEq)]
pub struct WriteinTokens {
    pub event_date: NaiveDate,
    pub description: String,
    pub league: Option<League>,
}

/// Check a write-in description: 10-255 characters on a single line
pub fn validate_description(description: &str) -> Result<String> {
    if description.contains('\n') || description.contains('\r') {
        return Err(ParseError::new(
            ErrorKind::InvalidWriteinDescription,
            "description must be on one line",
        ));
    }
    let description = description.trim();
    let len = description.chars().count();
    if !(MIN_DESCRIPTION_LEN..=MAX_DESCRIPTION_LEN).contains(&len) {
        return Err(ParseError::new(
            ErrorKind::InvalidWriteinDescription,
            format!(
                "description must be {}-{} characters, got {}",
                MIN_DESCRIPTION_LEN, MAX_DESCRIPTION_LEN, len
            ),
        )
        .with_detail(description));
    }
    Ok(description.to_string())
}

/// Tokenize `writein [league:X] [freebet:true] <date> <description> [@ price] [= size]`.
///
/// `body` has already had its markers spaced out. The description is cut
/// from the raw text so a stray line break inside it is still visible.
pub fn tokenize(body: &str, message_type: MessageType, options: &ParseOptions) -> Result<TokenizedMessage> {
    let body = body.trim_start();
    let rest = body.get("writein".len()..).unwrap_or_default();

    let marker_at = rest.find(['@', '=']).unwrap_or(rest.len());
    let (contract_text, marker_text) = rest.split_at(marker_at);

    let marker_tokens: Vec<String> = marker_text.split_whitespace().map(String::from).collect();
    let split = split_markers(&marker_tokens, 0)?;
    let price_slot = match &split.price {
        Some(tokens) => read_price_slot(tokens, message_type)?,
        None => PriceSlot {
            price: None,
            size: None,
        },
    };
    let explicit_size = match &split.size {
        Some(tokens) => read_size_slot(tokens, message_type)?,
        None => None,
    };

    // Leading keyword tokens, then the date, then everything else is the description
    let mut remaining = contract_text.trim_start();
    let mut keyword_tokens = Vec::new();
    while let Some(token) = remaining.split_whitespace().next() {
        if !is_keyword_like(token) {
            break;
        }
        keyword_tokens.push(token.to_string());
        remaining = remaining[token.len()..].trim_start();
    }
    let (keywords, _) = extract_keywords(&keyword_tokens, WRITEIN_KEYWORDS)?;
    let league = keywords.get("league").map(parse_league).transpose()?;

    let Some(date_token) = remaining.split_whitespace().next() else {
        return Err(ParseError::new(
            ErrorKind::InvalidWriteinFormat,
            "writein needs a date and a description",
        ));
    };
    let event_date = parse_date(date_token, options.reference_date()).map_err(|e| {
        ParseError::new(ErrorKind::InvalidWriteinDate, e.reason).with_detail(date_token)
    })?;

    let description = remaining[date_token.len()..].trim_matches([' ', '\t']);
    if description.trim().is_empty() {
        return Err(ParseError::new(
            ErrorKind::InvalidWriteinFormat,
            "writein needs a description after the date",
        ));
    }
    let description = validate_description(description)?;

    let price = settle_price(&[price_slot.price])?;
    let size = settle_size(&[explicit_size, price_slot.size], message_type)?;

    debug!(%event_date, %description, price, ?size, "tokenized writein");
    Ok(TokenizedMessage {
        message_type,
        rotation_number: None,
        contract: ContractTokens::Writein(WriteinTokens {
            event_date,
            description,
            league,
        }),
        price,
        size,
        free_bet: keywords.flag("freebet"),
    })
}
