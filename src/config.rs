use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate, Utc};

pub const REFERENCE_DATE_ENV: &str = "BET_PARSER_REFERENCE_DATE";

/// Per-call knobs for the parser
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOptions {
    /// Date used to infer the year of year-less dates. Defaults to today.
    pub reference_date: Option<NaiveDate>,
    /// Stamped on fills. Defaults to the time of the call.
    pub execution_timestamp: Option<DateTime<Utc>>,
}

impl ParseOptions {
    pub fn with_reference_date(reference_date: NaiveDate) -> Self {
        Self {
            reference_date: Some(reference_date),
            ..Self::default()
        }
    }

    /// Load options from the environment (and a `.env` file if present)
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let reference_date = match std::env::var(REFERENCE_DATE_ENV) {
            Ok(value) if !value.trim().is_empty() => Some(
                NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").with_context(|| {
                    format!("{} must be YYYY-MM-DD, got {:?}", REFERENCE_DATE_ENV, value)
                })?,
            ),
            _ => None,
        };

        Ok(Self {
            reference_date,
            execution_timestamp: None,
        })
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn execution_timestamp(&self) -> DateTime<Utc> {
        self.execution_timestamp.unwrap_or_else(Utc::now)
    }
}
