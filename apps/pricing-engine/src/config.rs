//! Configuration module for the pricing engine.
//!
//! Loads the pricing policy and logging settings from YAML, with
//! `${VAR}` / `${VAR:-default}` environment variable interpolation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pricing_engine::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Build the engine policy
//! let policy = config.pricing.to_pricing_policy()?;
//! ```

use std::sync::OnceLock;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::pricing::constants::{
    APR_BAND_A, APR_BAND_B, APR_BAND_C, BAND_A_MAX_SYSTEM_SIZE_KW, BAND_A_MIN_CONSUMPTION_KWH,
    BAND_B_MIN_CONSUMPTION_KWH, PRICE_PER_KW, TERMS_YEARS,
};
use crate::domain::pricing::{AprTable, PolicyError, PricingPolicy, RiskThresholds};

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Environment variable overriding the configuration file path.
pub const CONFIG_PATH_ENV: &str = "PRICING_CONFIG";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// The pricing section does not form a valid policy.
    #[error("Invalid pricing policy: {0}")]
    InvalidPolicy(#[from] PolicyError),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Pricing policy configuration.
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Pricing policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Installed price per kW.
    #[serde(default = "default_price_per_kw")]
    pub price_per_kw: Decimal,
    /// Minimum monthly consumption (kWh) for band A.
    #[serde(default = "default_band_a_min_consumption")]
    pub band_a_min_consumption_kwh: Decimal,
    /// Maximum system size (kW) for band A.
    #[serde(default = "default_band_a_max_system_size")]
    pub band_a_max_system_size_kw: Decimal,
    /// Minimum monthly consumption (kWh) for band B.
    #[serde(default = "default_band_b_min_consumption")]
    pub band_b_min_consumption_kwh: Decimal,
    /// Base APR per band.
    #[serde(default)]
    pub apr: AprConfig,
    /// Offered terms in years.
    #[serde(default = "default_terms_years")]
    pub terms_years: Vec<u32>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            price_per_kw: default_price_per_kw(),
            band_a_min_consumption_kwh: default_band_a_min_consumption(),
            band_a_max_system_size_kw: default_band_a_max_system_size(),
            band_b_min_consumption_kwh: default_band_b_min_consumption(),
            apr: AprConfig::default(),
            terms_years: default_terms_years(),
        }
    }
}

impl PricingConfig {
    /// Convert to a validated pricing policy.
    ///
    /// # Errors
    ///
    /// Returns error if the values break a policy invariant.
    pub fn to_pricing_policy(&self) -> Result<PricingPolicy, PolicyError> {
        PricingPolicy::new(
            self.price_per_kw,
            RiskThresholds {
                band_a_min_consumption_kwh: self.band_a_min_consumption_kwh,
                band_a_max_system_size_kw: self.band_a_max_system_size_kw,
                band_b_min_consumption_kwh: self.band_b_min_consumption_kwh,
            },
            AprTable {
                a: self.apr.a,
                b: self.apr.b,
                c: self.apr.c,
            },
            self.terms_years.clone(),
        )
    }
}

const fn default_price_per_kw() -> Decimal {
    PRICE_PER_KW
}
const fn default_band_a_min_consumption() -> Decimal {
    BAND_A_MIN_CONSUMPTION_KWH
}
const fn default_band_a_max_system_size() -> Decimal {
    BAND_A_MAX_SYSTEM_SIZE_KW
}
const fn default_band_b_min_consumption() -> Decimal {
    BAND_B_MIN_CONSUMPTION_KWH
}
fn default_terms_years() -> Vec<u32> {
    TERMS_YEARS.to_vec()
}

/// Base APR per risk band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AprConfig {
    /// Band A rate.
    #[serde(default = "default_apr_a")]
    pub a: Decimal,
    /// Band B rate.
    #[serde(default = "default_apr_b")]
    pub b: Decimal,
    /// Band C rate.
    #[serde(default = "default_apr_c")]
    pub c: Decimal,
}

impl Default for AprConfig {
    fn default() -> Self {
        Self {
            a: default_apr_a(),
            b: default_apr_b(),
            c: default_apr_c(),
        }
    }
}

const fn default_apr_a() -> Decimal {
    APR_BAND_A
}
const fn default_apr_b() -> Decimal {
    APR_BAND_B
}
const fn default_apr_c() -> Decimal {
    APR_BAND_C
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ObservabilityConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directive (`RUST_LOG` takes precedence).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format: `full` or `compact`.
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Include the event target (module path).
    #[serde(default = "default_true")]
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            with_target: true,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "full".to_string()
}
const fn default_true() -> bool {
    true
}

/// Configuration file path: `PRICING_CONFIG` if set, else `config.yaml`.
#[must_use]
pub fn config_path_from_env() -> String {
    std::env::var(CONFIG_PATH_ENV)
        .ok()
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

/// Load configuration from a YAML file.
///
/// # Errors
///
/// Returns error if the file cannot be read, parsed or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string.
///
/// An empty document yields the defaults.
///
/// # Errors
///
/// Returns error if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = if interpolated.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml_bw::from_str(&interpolated)?
    };
    validate_config(&config)?;
    Ok(config)
}

/// Replace `${VAR}` and `${VAR:-default}` with environment values.
///
/// Unset or empty variables take the default, or become empty without one.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |caps: &regex::Captures<'_>| {
        let default_value = caps.get(2).map_or("", |m| m.as_str());
        match std::env::var(&caps[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

fn validate_config(config: &Config) -> Result<(), ConfigError> {
    config.pricing.to_pricing_policy()?;

    let logging = &config.observability.logging;
    if logging.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "observability.logging.level must not be empty".to_string(),
        ));
    }

    let valid_formats = ["full", "compact"];
    if !valid_formats.contains(&logging.format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {valid_formats:?}"
        )));
    }

    Ok(())
}
