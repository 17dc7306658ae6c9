mod contract;
mod result;

pub use contract::*;
pub use result::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// "IW" (I want) messages are orders, "YG" (you got) messages are fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Order,
    Fill,
}

impl MessageType {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Order => "IW",
            Self::Fill => "YG",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sport {
    Football,
    Basketball,
    Baseball,
    Hockey,
    Soccer,
}

impl Sport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Football => "Football",
            Self::Basketball => "Basketball",
            Self::Baseball => "Baseball",
            Self::Hockey => "Hockey",
            Self::Soccer => "Soccer",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum League {
    NFL,
    CFB,
    NBA,
    WNBA,
    CBK,
    MLB,
    NHL,
    MLS,
    EPL,
}

impl League {
    pub fn sport(&self) -> Sport {
        match self {
            Self::NFL | Self::CFB => Sport::Football,
            Self::NBA | Self::WNBA | Self::CBK => Sport::Basketball,
            Self::MLB => Sport::Baseball,
            Self::NHL => Sport::Hockey,
            Self::MLS | Self::EPL => Sport::Soccer,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NFL => "NFL",
            Self::CFB => "CFB",
            Self::NBA => "NBA",
            Self::WNBA => "WNBA",
            Self::CBK => "CBK",
            Self::MLB => "MLB",
            Self::NHL => "NHL",
            Self::MLS => "MLS",
            Self::EPL => "EPL",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The eight contract categories the classifier can assign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractType {
    TotalPoints,
    TotalPointsContestant,
    HandicapContestantML,
    HandicapContestantLine,
    PropOU,
    PropYN,
    Series,
    Writein,
}

impl ContractType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TotalPoints => "TotalPoints",
            Self::TotalPointsContestant => "TotalPointsContestant",
            Self::HandicapContestantML => "HandicapContestantML",
            Self::HandicapContestantLine => "HandicapContestantLine",
            Self::PropOU => "PropOU",
            Self::PropYN => "PropYN",
            Self::Series => "Series",
            Self::Writein => "Writein",
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
