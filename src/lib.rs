pub mod classifier;
pub mod config;
pub mod contracts;
pub mod error;
pub mod models;
pub mod multileg;
pub mod tokenizer;
pub mod tracking;
pub mod utils;

pub use config::ParseOptions;
pub use error::{ErrorKind, ParseError, Result};
pub use models::*;
pub use tracking::{to_tracking_records, TrackingOverrides, TrackingRecord};

use contracts::ContractContext;
use tokenizer::{BetFamily, ContractTokens};
use tracing::debug;

/// Parse a trade message using today's date for year inference
pub fn parse(message: &str) -> Result<ParseResult> {
    parse_with_options(message, &ParseOptions::default())
}

/// Parse a trade message.
///
/// Every error coming back carries `message` as its raw input.
pub fn parse_with_options(message: &str, options: &ParseOptions) -> Result<ParseResult> {
    let result = parse_message(message, options).map_err(|e| e.with_input(message))?;
    debug!(bet_type = result.bet_type(), "parsed message");
    Ok(result)
}

pub(crate) fn parse_message(message: &str, options: &ParseOptions) -> Result<ParseResult> {
    let prefix = tokenizer::detect_prefix(message)?;
    match prefix.family {
        BetFamily::Straight => {
            parse_straight(prefix.message_type, &prefix.body, options).map(ParseResult::Straight)
        }
        BetFamily::Parlay => {
            multileg::parse_parlay(prefix.message_type, &prefix.body, options).map(ParseResult::Parlay)
        }
        BetFamily::RoundRobin => {
            multileg::parse_round_robin(prefix.message_type, &prefix.body, options)
                .map(ParseResult::RoundRobin)
        }
    }
}

fn parse_straight(message_type: MessageType, body: &str, options: &ParseOptions) -> Result<StraightBet> {
    let tokenized = tokenizer::tokenize(body, message_type, options)?;

    let contract = match &tokenized.contract {
        ContractTokens::Writein(tokens) => contracts::writein::build(tokens),
        ContractTokens::Structured(source) => {
            let contract_type = classifier::classify(&source.text)?;
            if source.ties_lose && contract_type != ContractType::HandicapContestantML {
                return Err(ParseError::new(
                    ErrorKind::InvalidKeywordValue,
                    format!("tieslose only applies to moneylines, not {}", contract_type),
                ));
            }
            let ctx = ContractContext::new(source, tokenized.rotation_number);
            contracts::parse_contract(contract_type, &ctx)?
        }
    };

    let execution_timestamp = match message_type {
        MessageType::Fill => Some(options.execution_timestamp()),
        MessageType::Order => None,
    };

    Ok(StraightBet {
        message_type,
        contract_type: contract.contract_type(),
        contract,
        bet: Bet {
            price: tokenized.price,
            size: tokenized.size,
            execution_timestamp,
            free_bet: tokenized.free_bet,
        },
        rotation_number: tokenized.rotation_number,
    })
}
