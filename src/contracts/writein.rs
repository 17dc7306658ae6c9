use crate::models::{Contract, Writein};
use crate::tokenizer::WriteinTokens;

/// Write-ins are validated while tokenizing; this only fills in the sport
pub fn build(tokens: &WriteinTokens) -> Contract {
    Contract::Writein(Writein {
        sport: tokens.league.map(|league| league.sport()),
        league: tokens.league,
        event_date: tokens.event_date,
        description: tokens.description.clone(),
    })
}
