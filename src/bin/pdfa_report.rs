//! PDF/A Compliance Report Generator
//!
//! Turns recorded validation engine output into a compliance report.
//!
//! Usage:
//!   cargo run --bin pdfa_report -- engine-output.json
//!   cargo run --bin pdfa_report -- --format xml engine-output.json
//!   cat engine-output.json | cargo run --bin pdfa_report -- --compact -
//!
//! Exit status: 0 compliant, 1 not compliant, 2 error.

use pdfa_report::compliance::{validate_stream_with, ReplayEngine, ValidationResult};
use pdfa_report::config::{GroupingKey, ReportConfig, ReportFormat};
use pdfa_report::report::render;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

struct CliConfig {
    input: Option<PathBuf>,
    report: ReportConfig,
}

impl CliConfig {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut input = None;
        let mut report = ReportConfig::new();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--format" | "-f" => {
                    i += 1;
                    let value = args.get(i).ok_or("--format needs a value")?;
                    report = report.with_format(value.parse::<ReportFormat>()?);
                },
                "--compact" => {
                    report = report.with_pretty(false);
                },
                "--group-by-details" => {
                    report = report.with_grouping(GroupingKey::CodeAndDetails);
                },
                "--help" | "-h" => {
                    return Err(usage());
                },
                "-" => {
                    input = None;
                },
                other if other.starts_with('-') => {
                    return Err(format!("unknown option '{}'\n{}", other, usage()));
                },
                path => {
                    input = Some(PathBuf::from(path));
                },
            }
            i += 1;
        }

        Ok(Self { input, report })
    }
}

fn usage() -> String {
    "usage: pdfa_report [--format json|xml] [--compact] [--group-by-details] <engine-output.json | ->"
        .to_string()
}

fn run(config: &CliConfig) -> pdfa_report::Result<ValidationResult> {
    let engine = ReplayEngine::new();
    let aggregator = config.report.aggregator();
    match config.input {
        Some(ref path) => {
            log::info!("Reading engine output from {}", path.display());
            let file = File::open(path)?;
            validate_stream_with(BufReader::new(file), &engine, &aggregator)
        },
        None => {
            log::info!("Reading engine output from stdin");
            validate_stream_with(io::stdin().lock(), &engine, &aggregator)
        },
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let config = match CliConfig::from_args() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::from(2);
        },
    };

    let result = match run(&config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Validation could not run: {}", e);
            return ExitCode::from(2);
        },
    };
    log::info!("{}", result);

    match render(&result, &config.report) {
        Ok(report) => println!("{}", report),
        Err(e) => {
            eprintln!("Failed to encode report: {}", e);
            return ExitCode::from(2);
        },
    }

    if result.is_compliant() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
