use crate::models::ParseResult;
use crate::tracking::TrackingRecord;
use anyhow::{Context, Result};
use std::io::Write;

/// Save parse results to a JSON file
pub fn save_results_to_json(results: &[ParseResult], filename: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(results).context("Failed to serialize parse results")?;
    std::fs::write(filename, json).context("Failed to write results file")?;
    Ok(())
}

/// Load parse results from a JSON file
pub fn load_results_from_json(filename: &str) -> Result<Vec<ParseResult>> {
    let json = std::fs::read_to_string(filename).context("Failed to read results file")?;
    let results: Vec<ParseResult> =
        serde_json::from_str(&json).context("Failed to deserialize parse results")?;
    Ok(results)
}

/// Write tracking records as CSV, header row first
pub fn write_tracking_csv<W: Write>(records: &[TrackingRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer
            .serialize(record)
            .context("Failed to write tracking record")?;
    }
    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Save tracking records to a CSV file
pub fn save_tracking_to_csv(records: &[TrackingRecord], filename: &str) -> Result<()> {
    let file = std::fs::File::create(filename).context("Failed to create CSV file")?;
    write_tracking_csv(records, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParseOptions;
    use crate::parse_with_options;
    use crate::tracking::{to_tracking_records, TrackingOverrides};
    use chrono::NaiveDate;

    fn options() -> ParseOptions {
        ParseOptions::with_reference_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    #[test]
    fn test_json_round_trip_through_file() {
        let results = vec![
            parse_with_options("IW 872 Athletics @ +145", &options()).unwrap(),
            parse_with_options("IWP Lakers & Celtics -3 = $100", &options()).unwrap(),
        ];
        let path = std::env::temp_dir().join(format!("bet_parser_results_{}.json", std::process::id()));
        let path = path.to_string_lossy().to_string();

        save_results_to_json(&results, &path).unwrap();
        let loaded = load_results_from_json(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0], results[0]);
        let parlay = loaded[1].as_parlay().unwrap();
        assert_eq!(parlay.legs, results[1].as_parlay().unwrap().legs);
        assert_eq!(parlay.bet.risk, Some(100.0));
    }

    #[test]
    fn test_tracking_csv_has_header_and_rows() {
        let result = parse_with_options("IWP Lakers & Celtics -3 = $100", &options()).unwrap();
        let records = to_tracking_records(&result, &TrackingOverrides::default());

        let mut buffer = Vec::new();
        write_tracking_csv(&records, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("BetType,MessageType,LegNumber"));
        assert!(lines[1].starts_with("Parlay,order,1"));
    }
}
