use anyhow::{Context, Result};
use bet_parser::utils::data::{save_results_to_json, save_tracking_to_csv, write_tracking_csv};
use bet_parser::{parse_with_options, to_tracking_records, ParseOptions, ParseResult, TrackingOverrides};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::io::Read;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
}

#[derive(Parser)]
#[command(name = "bet-parser")]
#[command(about = "Parse IW/YG trade messages into structured bets", long_about = None)]
struct Cli {
    /// Messages to parse. Reads --input or stdin when empty, with messages separated by blank lines.
    messages: Vec<String>,

    /// File with one message per line
    #[arg(short, long)]
    input: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Date used to infer the year of dates like 7/4 (YYYY-MM-DD)
    #[arg(long)]
    reference_date: Option<NaiveDate>,

    /// Event date written to tracking rows (csv only)
    #[arg(long)]
    event_date: Option<NaiveDate>,

    /// League written to tracking rows (csv only)
    #[arg(long)]
    league: Option<String>,
}

/// Split input text into messages. Consecutive non-blank lines form one
/// message so multiline parlays and round robins survive.
fn split_messages(text: &str) -> Vec<String> {
    let mut messages = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                messages.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        messages.push(current.join("\n"));
    }
    messages
}

fn read_messages(cli: &Cli) -> Result<Vec<String>> {
    if !cli.messages.is_empty() {
        return Ok(cli.messages.clone());
    }

    let text = match &cli.input {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };
    Ok(split_messages(&text))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut options = ParseOptions::from_env()?;
    if cli.reference_date.is_some() {
        options.reference_date = cli.reference_date;
    }

    let overrides = TrackingOverrides {
        event_date: cli.event_date,
        league: cli
            .league
            .as_deref()
            .map(bet_parser::utils::league::parse_league)
            .transpose()
            .context("Invalid --league")?,
    };

    let messages = read_messages(&cli)?;
    let mut results: Vec<ParseResult> = Vec::with_capacity(messages.len());
    let mut failures = 0;
    for message in &messages {
        match parse_with_options(message, &options) {
            Ok(result) => results.push(result),
            Err(e) => {
                failures += 1;
                eprintln!("Error: {}", e);
                eprintln!("  input: {}", e.raw_input);
                if let Some(cause) = &e.source {
                    eprintln!("  cause: {}", cause);
                }
            }
        }
    }

    match cli.format {
        OutputFormat::Json => match &cli.output {
            Some(path) => {
                save_results_to_json(&results, path)?;
                eprintln!("Saved {} results to {}", results.len(), path);
            }
            None => {
                let json = serde_json::to_string_pretty(&results).context("Failed to serialize results")?;
                println!("{}", json);
            }
        },
        OutputFormat::Csv => {
            let records: Vec<_> = results
                .iter()
                .flat_map(|result| to_tracking_records(result, &overrides))
                .collect();
            match &cli.output {
                Some(path) => {
                    save_tracking_to_csv(&records, path)?;
                    eprintln!("Saved {} tracking rows to {}", records.len(), path);
                }
                None => write_tracking_csv(&records, std::io::stdout())?,
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} messages failed to parse", failures, messages.len());
    }
    Ok(())
}
