//! CLI tool for card number validation.
//!
//! # Usage
//!
//! ```bash
//! # Check every line of a file and write a report
//! ccvalidator scan cards.txt validation_results.txt
//!
//! # Check a single number
//! ccvalidator check "4111 1111 1111 1111"
//!
//! # Detect brand, run Luhn only, or mask
//! ccvalidator detect 378282246310005
//! ccvalidator luhn 4111111111111111
//! ccvalidator mask 4111111111111111
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` or `-v`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use cardcheck::{card::brand_name, luhn, mask, normalize::normalize, report, LineOutcome};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "ccvalidator")]
#[command(author, version, about = "Payment card number validation tool")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check every line of a file and write a results report
    Scan {
        /// File with one card number per line
        #[arg(env = "CARDCHECK_INPUT", default_value = "cards.txt")]
        input: PathBuf,

        /// Report destination (overwritten)
        #[arg(env = "CARDCHECK_OUTPUT", default_value = "validation_results.txt")]
        output: PathBuf,
    },

    /// Check a single card number
    Check {
        /// Card number (spaces and dashes allowed)
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Detect card brand from number
    Detect {
        /// Card number (or partial number)
        card_number: String,
    },

    /// Check if a number passes the Luhn algorithm
    Luhn {
        /// Card number to check
        card_number: String,
    },

    /// Mask all but the last four digits
    Mask {
        /// Card number to mask
        card_number: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "cardcheck=debug" } else { "cardcheck=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Scan { input, output } => cmd_scan(&input, &output),
        Commands::Check {
            card_number,
            output,
        } => cmd_check(&card_number, output),
        Commands::Detect { card_number } => cmd_detect(&card_number),
        Commands::Luhn { card_number } => cmd_luhn(&card_number),
        Commands::Mask { card_number } => cmd_mask(&card_number),
    }
}

fn cmd_scan(input: &Path, output: &Path) -> ExitCode {
    match report::process_files(input, output) {
        Ok(summary) => {
            println!("Processed file: {}", input.display());
            println!("Wrote results:  {}", output.display());
            println!();
            println!("Totals");
            println!("Valid:   {}", summary.valid);
            println!("Invalid: {}", summary.invalid);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_check(card_number: &str, output: OutputFormat) -> ExitCode {
    let outcome = LineOutcome::from_line(card_number);

    match output {
        OutputFormat::Text => match &outcome {
            LineOutcome::Checked {
                digits,
                brand,
                valid,
            } => {
                println!("Valid: {}", if *valid { "yes" } else { "no" });
                println!("Brand: {}", brand_name(*brand));
                println!("Length: {}", digits.len());
                println!("Masked: {}", mask::mask_digits(digits));
            }
            LineOutcome::InvalidInput { error, .. } => {
                println!("Valid: no");
                println!("Error: {}", error);
            }
        },
        OutputFormat::Json => match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }

    if outcome.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_detect(card_number: &str) -> ExitCode {
    match normalize(card_number) {
        Ok(digits) => {
            let brand = cardcheck::detect::detect_brand(&digits);
            println!("Detected Brand: {}", brand_name(brand));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_luhn(card_number: &str) -> ExitCode {
    match normalize(card_number) {
        Ok(digits) if luhn::validate(&digits) => {
            println!("Luhn check: PASS");
            ExitCode::SUCCESS
        }
        Ok(_) => {
            println!("Luhn check: FAIL");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_mask(card_number: &str) -> ExitCode {
    match normalize(card_number) {
        Ok(digits) => {
            println!("{}", mask::mask_digits(&digits));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
