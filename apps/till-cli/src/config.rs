//! CLI configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, then command-line flags override individual values.
//!
//! | Variable             | Default | Meaning                          |
//! |----------------------|---------|----------------------------------|
//! | `TILL_DISCOUNT_RATE` | `0.2`   | Discount rate, raw text          |
//! | `TILL_CART_FILE`     | unset   | JSON cart file; sample if unset  |
//! | `TILL_OUTPUT_FORMAT` | `text`  | `text` or `json`                 |

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::args::Args;

/// Discount applied when nothing else is configured.
pub const DEFAULT_DISCOUNT_RATE: &str = "0.2";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Total: $X.XX`, a blank line, then the receipt
    #[default]
    Text,

    /// One JSON object per run
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("TILL_OUTPUT_FORMAT".to_string())),
        }
    }
}

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TillConfig {
    /// Discount rate as given. Kept as text so the checkout pipeline is the
    /// one place that decides whether it is valid.
    pub discount_rate: String,

    /// Cart file to load instead of the sample cart
    pub cart_file: Option<PathBuf>,

    /// Output format for results
    pub output_format: OutputFormat,
}

impl Default for TillConfig {
    fn default() -> Self {
        TillConfig {
            discount_rate: DEFAULT_DISCOUNT_RATE.to_string(),
            cart_file: None,
            output_format: OutputFormat::default(),
        }
    }
}

impl TillConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = TillConfig {
            discount_rate: lookup("TILL_DISCOUNT_RATE")
                .unwrap_or_else(|| DEFAULT_DISCOUNT_RATE.to_string()),

            cart_file: lookup("TILL_CART_FILE")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),

            output_format: lookup("TILL_OUTPUT_FORMAT")
                .map(|format| format.parse::<OutputFormat>())
                .transpose()?
                .unwrap_or_default(),
        };

        Ok(config)
    }

    /// Flags given on the command line win over the environment.
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(rate) = &args.rate {
            self.discount_rate = rate.clone();
        }
        if let Some(cart) = &args.cart {
            self.cart_file = Some(cart.clone());
        }
        if let Some(format) = args.format {
            self.output_format = format;
        }
        self
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = TillConfig::load_from(lookup(&[])).unwrap();
        assert_eq!(config, TillConfig::default());
        assert_eq!(config.discount_rate, "0.2");
        assert_eq!(config.cart_file, None);
        assert_eq!(config.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_environment_values() {
        let config = TillConfig::load_from(lookup(&[
            ("TILL_DISCOUNT_RATE", "abc"),
            ("TILL_CART_FILE", "/tmp/cart.json"),
            ("TILL_OUTPUT_FORMAT", "JSON"),
        ]))
        .unwrap();

        // The rate is passed through untouched; checkout validates it
        assert_eq!(config.discount_rate, "abc");
        assert_eq!(config.cart_file, Some(PathBuf::from("/tmp/cart.json")));
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_blank_cart_file_is_ignored() {
        let config = TillConfig::load_from(lookup(&[("TILL_CART_FILE", "  ")])).unwrap();
        assert_eq!(config.cart_file, None);
    }

    #[test]
    fn test_bad_output_format() {
        let err = TillConfig::load_from(lookup(&[("TILL_OUTPUT_FORMAT", "xml")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for TILL_OUTPUT_FORMAT");
    }

    #[test]
    fn test_args_override_environment() {
        let config = TillConfig::load_from(lookup(&[
            ("TILL_DISCOUNT_RATE", "0.5"),
            ("TILL_OUTPUT_FORMAT", "json"),
        ]))
        .unwrap();
        let args = Args {
            cart: Some(PathBuf::from("cart.json")),
            rate: Some("-1".to_string()),
            format: None,
            verbose: false,
        };

        let config = config.with_args(&args);
        assert_eq!(config.discount_rate, "-1");
        assert_eq!(config.cart_file, Some(PathBuf::from("cart.json")));
        assert_eq!(config.output_format, OutputFormat::Json);
    }
}
