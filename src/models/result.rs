use super::{Contract, ContractType, MessageType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Price and size of a straight bet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bet {
    pub price: f64, // American odds format (e.g., -110, +150)
    pub size: Option<f64>,
    pub execution_timestamp: Option<DateTime<Utc>>,
    pub free_bet: bool,
}

/// Stake of a parlay or round robin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiLegBet {
    pub risk: Option<f64>,
    pub to_win: Option<f64>,
    pub execution_timestamp: Option<DateTime<Utc>>,
    pub free_bet: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StraightBet {
    pub message_type: MessageType,
    pub contract_type: ContractType,
    pub contract: Contract,
    pub bet: Bet,
    pub rotation_number: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskType {
    PerSelection,
    Total,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParlayBet {
    pub message_type: MessageType,
    pub legs: Vec<StraightBet>,
    pub bet: MultiLegBet,
    /// True unless the to-win amount was given explicitly with `tw`
    pub use_fair: bool,
    pub pushes_lose: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRobinBet {
    pub message_type: MessageType,
    pub legs: Vec<StraightBet>,
    pub bet: MultiLegBet,
    pub use_fair: bool,
    pub pushes_lose: Option<bool>,
    /// R from the `NcR` notation
    pub parlay_size: u32,
    /// Include every parlay size from 2 up to `parlay_size`
    pub is_at_most: bool,
    pub risk_type: Option<RiskType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "bet_type")]
pub enum ParseResult {
    Straight(StraightBet),
    Parlay(ParlayBet),
    RoundRobin(RoundRobinBet),
}

impl ParseResult {
    pub fn bet_type(&self) -> &'static str {
        match self {
            Self::Straight(_) => "Straight",
            Self::Parlay(_) => "Parlay",
            Self::RoundRobin(_) => "RoundRobin",
        }
    }

    pub fn as_parlay(&self) -> Option<&ParlayBet> {
        match self {
            Self::Parlay(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_round_robin(&self) -> Option<&RoundRobinBet> {
        match self {
            Self::RoundRobin(r) => Some(r),
            _ => None,
        }
    }
}
