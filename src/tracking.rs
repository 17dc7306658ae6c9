//! Flattens a parse result into rows for a bet-tracking sheet.

use crate::models::{
    Contract, League, MessageType, MultiLegBet, ParseResult, RiskType, Sport, StraightBet,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Values known outside the message that replace what was parsed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackingOverrides {
    pub event_date: Option<NaiveDate>,
    pub league: Option<League>,
}

/// One row per straight bet, or one per leg of a parlay or round robin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackingRecord {
    pub bet_type: String,
    pub message_type: MessageType,
    pub leg_number: Option<usize>,
    pub leg_count: usize,
    pub contract_type: String,
    pub sport: Option<Sport>,
    pub league: Option<League>,
    pub event_date: Option<NaiveDate>,
    pub team1: Option<String>,
    pub team2: Option<String>,
    pub contestant: Option<String>,
    pub period: Option<String>,
    pub game_number: Option<u8>,
    pub line: Option<f64>,
    pub is_over: Option<bool>,
    pub prop: Option<String>,
    pub is_yes: Option<bool>,
    pub series_length: Option<u8>,
    pub description: Option<String>,
    pub rotation_number: Option<u16>,
    pub price: f64,
    pub size: Option<f64>,
    pub risk: Option<f64>,
    pub to_win: Option<f64>,
    pub use_fair: Option<bool>,
    pub free_bet: bool,
    pub ties_lose: Option<bool>,
    pub pushes_lose: Option<bool>,
    pub parlay_size: Option<u32>,
    pub is_at_most: Option<bool>,
    pub risk_type: Option<RiskType>,
    pub execution_timestamp: Option<DateTime<Utc>>,
}

/// Parent-level fields copied onto every leg row
struct Parent<'a> {
    bet_type: &'static str,
    leg_count: usize,
    bet: Option<&'a MultiLegBet>,
    use_fair: Option<bool>,
    pushes_lose: Option<bool>,
    parlay_size: Option<u32>,
    is_at_most: Option<bool>,
    risk_type: Option<RiskType>,
}

fn record(
    straight: &StraightBet,
    leg_number: Option<usize>,
    parent: &Parent,
    overrides: &TrackingOverrides,
) -> TrackingRecord {
    let contract = &straight.contract;
    let matchup = contract.matchup();

    let (prop, is_yes) = match contract {
        Contract::PropOU(c) => (Some(c.prop.clone()), None),
        Contract::PropYN(c) => (Some(c.prop.clone()), Some(c.is_yes)),
        _ => (None, None),
    };
    let event_date = match contract {
        Contract::Writein(c) => Some(c.event_date),
        _ => matchup.and_then(|m| m.date),
    };
    let league = overrides.league.or(contract.league());

    TrackingRecord {
        bet_type: parent.bet_type.to_string(),
        message_type: straight.message_type,
        leg_number,
        leg_count: parent.leg_count,
        contract_type: straight.contract_type.to_string(),
        sport: league.map(|l| l.sport()).or(contract.sport()),
        league,
        event_date: overrides.event_date.or(event_date),
        team1: matchup.map(|m| m.team1.clone()),
        team2: matchup.and_then(|m| m.team2.clone()),
        contestant: contract.contestant().map(String::from),
        period: contract.period().map(|p| p.to_string()),
        game_number: matchup.and_then(|m| m.day_sequence),
        line: contract.line(),
        is_over: contract.is_over(),
        prop,
        is_yes,
        series_length: match contract {
            Contract::Series(c) => Some(c.series_length),
            _ => None,
        },
        description: match contract {
            Contract::Writein(c) => Some(c.description.clone()),
            _ => None,
        },
        rotation_number: straight.rotation_number,
        price: straight.bet.price,
        size: straight.bet.size,
        risk: parent.bet.and_then(|b| b.risk),
        to_win: parent.bet.and_then(|b| b.to_win),
        use_fair: parent.use_fair,
        free_bet: parent.bet.map_or(straight.bet.free_bet, |b| b.free_bet),
        ties_lose: match contract {
            Contract::HandicapContestantML(c) => Some(c.ties_lose),
            _ => None,
        },
        pushes_lose: parent.pushes_lose,
        parlay_size: parent.parlay_size,
        is_at_most: parent.is_at_most,
        risk_type: parent.risk_type,
        execution_timestamp: parent
            .bet
            .map_or(straight.bet.execution_timestamp, |b| b.execution_timestamp),
    }
}

/// Reshape a parse result into tracking rows
pub fn to_tracking_records(result: &ParseResult, overrides: &TrackingOverrides) -> Vec<TrackingRecord> {
    match result {
        ParseResult::Straight(straight) => {
            let parent = Parent {
                bet_type: result.bet_type(),
                leg_count: 1,
                bet: None,
                use_fair: None,
                pushes_lose: None,
                parlay_size: None,
                is_at_most: None,
                risk_type: None,
            };
            vec![record(straight, None, &parent, overrides)]
        }
        ParseResult::Parlay(parlay) => {
            let parent = Parent {
                bet_type: result.bet_type(),
                leg_count: parlay.legs.len(),
                bet: Some(&parlay.bet),
                use_fair: Some(parlay.use_fair),
                pushes_lose: parlay.pushes_lose,
                parlay_size: None,
                is_at_most: None,
                risk_type: None,
            };
            legs(&parlay.legs, &parent, overrides)
        }
        ParseResult::RoundRobin(rr) => {
            let parent = Parent {
                bet_type: result.bet_type(),
                leg_count: rr.legs.len(),
                bet: Some(&rr.bet),
                use_fair: Some(rr.use_fair),
                pushes_lose: rr.pushes_lose,
                parlay_size: Some(rr.parlay_size),
                is_at_most: Some(rr.is_at_most),
                risk_type: rr.risk_type,
            };
            legs(&rr.legs, &parent, overrides)
        }
    }
}

fn legs(legs: &[StraightBet], parent: &Parent, overrides: &TrackingOverrides) -> Vec<TrackingRecord> {
    legs.iter()
        .enumerate()
        .map(|(i, leg)| record(leg, Some(i + 1), parent, overrides))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParseOptions;
    use crate::parse_with_options;

    fn options() -> ParseOptions {
        ParseOptions::with_reference_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    #[test]
    fn test_straight_record() {
        let result = parse_with_options("YG Padres/Pirates 1st inning u0.5 @ +100 = 0.094", &options())
            .unwrap();
        let records = to_tracking_records(&result, &TrackingOverrides::default());
        assert_eq!(records.len(), 1);

        let row = &records[0];
        assert_eq!(row.bet_type, "Straight");
        assert_eq!(row.contract_type, "TotalPoints");
        assert_eq!(row.team1.as_deref(), Some("Padres"));
        assert_eq!(row.team2.as_deref(), Some("Pirates"));
        assert_eq!(row.period.as_deref(), Some("I1"));
        assert_eq!(row.line, Some(0.5));
        assert_eq!(row.is_over, Some(false));
        assert_eq!(row.size, Some(94.0));
        assert_eq!(row.leg_number, None);
        assert!(row.execution_timestamp.is_some());
    }

    #[test]
    fn test_overrides() {
        let result = parse_with_options("IW 872 Athletics @ +145", &options()).unwrap();
        let overrides = TrackingOverrides {
            event_date: NaiveDate::from_ymd_opt(2024, 6, 3),
            league: Some(League::MLB),
        };
        let row = &to_tracking_records(&result, &overrides)[0];
        assert_eq!(row.event_date, NaiveDate::from_ymd_opt(2024, 6, 3));
        assert_eq!(row.league, Some(League::MLB));
        assert_eq!(row.sport, Some(Sport::Baseball));
        assert_eq!(row.ties_lose, Some(false));
    }

    #[test]
    fn test_one_row_per_leg() {
        let result = parse_with_options(
            "YGRR 4c3- Lakers @ +120 & Warriors @ -110 & Celtics @ +105 & Nets @ +115 = $100 per",
            &options(),
        )
        .unwrap();
        let records = to_tracking_records(&result, &TrackingOverrides::default());
        assert_eq!(records.len(), 4);
        assert_eq!(
            records.iter().map(|r| r.leg_number).collect::<Vec<_>>(),
            vec![Some(1), Some(2), Some(3), Some(4)]
        );
        assert!(records.iter().all(|r| r.risk == Some(100.0)));
        assert!(records.iter().all(|r| r.risk_type == Some(RiskType::PerSelection)));
        assert_eq!(records[1].price, -110.0);
    }

    #[test]
    fn test_pascal_case_columns() {
        let result = parse_with_options("IW Lakers -3", &options()).unwrap();
        let row = &to_tracking_records(&result, &TrackingOverrides::default())[0];
        let json = serde_json::to_value(row).unwrap();
        assert!(json.get("ContractType").is_some());
        assert!(json.get("RotationNumber").is_some());
        assert!(json.get("Team1").is_some());
    }
}
