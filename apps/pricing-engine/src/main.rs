//! Quote Binary
//!
//! Prices one quote request read as JSON from stdin and prints the priced
//! quote as JSON on stdout.
//!
//! # Usage
//!
//! ```bash
//! echo '{"fullName":"Ada Lovelace","email":"ada@example.com","address1":"Main St 1",
//!        "city":"Berlin","zip":"10117","country":"DE",
//!        "monthlyConsumptionKwh":400,"systemSizeKw":5,"downPayment":1000}' \
//!   | cargo run --bin quote
//! ```
//!
//! # Environment Variables
//!
//! - `PRICING_CONFIG`: Config file path (default: config.yaml, defaults if absent)
//! - `QUOTE_SUMMARY`: Print a plain-text summary to stderr when `true`
//! - `RUST_LOG`: Log level (default: from config, else info)
//!
//! # Exit Codes
//!
//! - `0`: Quote priced
//! - `1`: Unreadable input or configuration
//! - `2`: Input failed validation

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use pricing_engine::application::{CreateQuoteUseCase, QuoteInputDto};
use pricing_engine::config::{self, CONFIG_PATH_ENV, Config};
use pricing_engine::domain::pricing::PricingEngine;
use pricing_engine::report::render_summary;
use pricing_engine::telemetry::init_logging;

/// Exit code for input that failed validation.
const EXIT_VALIDATION_FAILED: u8 = 2;

fn main() -> anyhow::Result<ExitCode> {
    let config = load_runtime_config()?;
    init_logging(&config.observability.logging);

    tracing::info!("Starting quote pricing");

    let policy = config
        .pricing
        .to_pricing_policy()
        .context("Invalid pricing policy")?;
    let use_case = CreateQuoteUseCase::new(Arc::new(PricingEngine::new(policy)));

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("Failed to read quote request from stdin")?;
    let input: QuoteInputDto =
        serde_json::from_str(&raw).context("Quote request is not a JSON object")?;

    match use_case.execute(&input) {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            if summary_requested() {
                eprint!("{}", render_summary(&response));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{}", serde_json::to_string_pretty(&e.to_response_body())?);
            Ok(ExitCode::from(EXIT_VALIDATION_FAILED))
        }
    }
}

/// Load config from `PRICING_CONFIG`, else `config.yaml` if present, else defaults.
fn load_runtime_config() -> anyhow::Result<Config> {
    let explicit = std::env::var(CONFIG_PATH_ENV).is_ok_and(|p| !p.is_empty());
    let path = config::config_path_from_env();

    if !explicit && !Path::new(&path).exists() {
        return Ok(Config::default());
    }

    config::load_config(Some(&path)).with_context(|| format!("Failed to load config from {path}"))
}

fn summary_requested() -> bool {
    std::env::var("QUOTE_SUMMARY").is_ok_and(|v| v.eq_ignore_ascii_case("true"))
}
