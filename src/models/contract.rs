use super::{ContractType, League, Sport};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodType {
    Match,
    Half,
    Quarter,
    Inning,
    HockeyPeriod,
}

/// Portion of the game a contract covers. Full game is `{Match, 0}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub period_type: PeriodType,
    pub number: u8,
}

impl Period {
    pub const FULL_GAME: Period = Period {
        period_type: PeriodType::Match,
        number: 0,
    };

    pub fn new(period_type: PeriodType, number: u8) -> Self {
        Self {
            period_type,
            number,
        }
    }
}

impl Default for Period {
    fn default() -> Self {
        Self::FULL_GAME
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.period_type {
            PeriodType::Match => write!(f, "FG"),
            PeriodType::Half => write!(f, "H{}", self.number),
            PeriodType::Quarter => write!(f, "Q{}", self.number),
            PeriodType::Inning => write!(f, "I{}", self.number),
            PeriodType::HockeyPeriod => write!(f, "P{}", self.number),
        }
    }
}

/// The game a contract is about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub team1: String,
    pub team2: Option<String>,
    pub date: Option<NaiveDate>,
    /// Game number for double headers and series games
    pub day_sequence: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContestantType {
    Individual,
    TeamAdHoc,
    TeamLeague,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalPoints {
    pub sport: Option<Sport>,
    pub league: Option<League>,
    pub matchup: Matchup,
    pub period: Period,
    pub line: f64,
    pub is_over: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalPointsContestant {
    pub sport: Option<Sport>,
    pub league: Option<League>,
    pub matchup: Matchup,
    pub period: Period,
    pub contestant: String,
    pub line: f64,
    pub is_over: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandicapContestantML {
    pub sport: Option<Sport>,
    pub league: Option<League>,
    pub matchup: Matchup,
    pub period: Period,
    pub contestant: String,
    pub ties_lose: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandicapContestantLine {
    pub sport: Option<Sport>,
    pub league: Option<League>,
    pub matchup: Matchup,
    pub period: Period,
    pub contestant: String,
    pub line: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropOU {
    pub sport: Option<Sport>,
    pub league: Option<League>,
    pub matchup: Matchup,
    pub period: Period,
    pub contestant: String,
    pub contestant_type: ContestantType,
    pub prop: String,
    pub line: f64,
    pub is_over: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropYN {
    pub sport: Option<Sport>,
    pub league: Option<League>,
    pub matchup: Matchup,
    pub period: Period,
    pub contestant: String,
    pub contestant_type: ContestantType,
    pub prop: String,
    pub is_yes: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub sport: Option<Sport>,
    pub league: Option<League>,
    pub matchup: Matchup,
    pub period: Period,
    pub contestant: String,
    pub series_length: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Writein {
    pub sport: Option<Sport>,
    pub league: Option<League>,
    pub event_date: NaiveDate,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "contract_type")]
pub enum Contract {
    TotalPoints(TotalPoints),
    TotalPointsContestant(TotalPointsContestant),
    HandicapContestantML(HandicapContestantML),
    HandicapContestantLine(HandicapContestantLine),
    PropOU(PropOU),
    PropYN(PropYN),
    Series(Series),
    Writein(Writein),
}

impl Contract {
    pub fn contract_type(&self) -> ContractType {
        match self {
            Self::TotalPoints(_) => ContractType::TotalPoints,
            Self::TotalPointsContestant(_) => ContractType::TotalPointsContestant,
            Self::HandicapContestantML(_) => ContractType::HandicapContestantML,
            Self::HandicapContestantLine(_) => ContractType::HandicapContestantLine,
            Self::PropOU(_) => ContractType::PropOU,
            Self::PropYN(_) => ContractType::PropYN,
            Self::Series(_) => ContractType::Series,
            Self::Writein(_) => ContractType::Writein,
        }
    }

    pub fn sport(&self) -> Option<Sport> {
        match self {
            Self::TotalPoints(c) => c.sport,
            Self::TotalPointsContestant(c) => c.sport,
            Self::HandicapContestantML(c) => c.sport,
            Self::HandicapContestantLine(c) => c.sport,
            Self::PropOU(c) => c.sport,
            Self::PropYN(c) => c.sport,
            Self::Series(c) => c.sport,
            Self::Writein(c) => c.sport,
        }
    }

    pub fn league(&self) -> Option<League> {
        match self {
            Self::TotalPoints(c) => c.league,
            Self::TotalPointsContestant(c) => c.league,
            Self::HandicapContestantML(c) => c.league,
            Self::HandicapContestantLine(c) => c.league,
            Self::PropOU(c) => c.league,
            Self::PropYN(c) => c.league,
            Self::Series(c) => c.league,
            Self::Writein(c) => c.league,
        }
    }

    /// Write-ins are keyed by date and description, so they have no matchup
    pub fn matchup(&self) -> Option<&Matchup> {
        match self {
            Self::TotalPoints(c) => Some(&c.matchup),
            Self::TotalPointsContestant(c) => Some(&c.matchup),
            Self::HandicapContestantML(c) => Some(&c.matchup),
            Self::HandicapContestantLine(c) => Some(&c.matchup),
            Self::PropOU(c) => Some(&c.matchup),
            Self::PropYN(c) => Some(&c.matchup),
            Self::Series(c) => Some(&c.matchup),
            Self::Writein(_) => None,
        }
    }

    pub fn period(&self) -> Option<Period> {
        match self {
            Self::TotalPoints(c) => Some(c.period),
            Self::TotalPointsContestant(c) => Some(c.period),
            Self::HandicapContestantML(c) => Some(c.period),
            Self::HandicapContestantLine(c) => Some(c.period),
            Self::PropOU(c) => Some(c.period),
            Self::PropYN(c) => Some(c.period),
            Self::Series(c) => Some(c.period),
            Self::Writein(_) => None,
        }
    }

    pub fn contestant(&self) -> Option<&str> {
        match self {
            Self::TotalPoints(_) | Self::Writein(_) => None,
            Self::TotalPointsContestant(c) => Some(&c.contestant),
            Self::HandicapContestantML(c) => Some(&c.contestant),
            Self::HandicapContestantLine(c) => Some(&c.contestant),
            Self::PropOU(c) => Some(&c.contestant),
            Self::PropYN(c) => Some(&c.contestant),
            Self::Series(c) => Some(&c.contestant),
        }
    }

    pub fn line(&self) -> Option<f64> {
        match self {
            Self::TotalPoints(c) => Some(c.line),
            Self::TotalPointsContestant(c) => Some(c.line),
            Self::HandicapContestantLine(c) => Some(c.line),
            Self::PropOU(c) => Some(c.line),
            Self::HandicapContestantML(_)
            | Self::PropYN(_)
            | Self::Series(_)
            | Self::Writein(_) => None,
        }
    }

    pub fn is_over(&self) -> Option<bool> {
        match self {
            Self::TotalPoints(c) => Some(c.is_over),
            Self::TotalPointsContestant(c) => Some(c.is_over),
            Self::PropOU(c) => Some(c.is_over),
            _ => None,
        }
    }
}
