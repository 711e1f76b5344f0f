use clap::Parser;
use std::path::PathBuf;

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "till")]
#[command(about = "Totals a shopping cart, applies a discount, and prints a receipt")]
#[command(version)]
pub struct Args {
    /// JSON cart file: [{"name": "...", "price": 0.0}, ...]. Uses the sample cart if omitted
    #[arg(short, long)]
    pub cart: Option<PathBuf>,

    /// Discount rate between 0 and 1 (e.g. 0.2 for 20% off)
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::parse_from([
            "till", "--rate", "-1", "--format", "json", "-c", "cart.json",
        ]);
        assert_eq!(args.rate.as_deref(), Some("-1"));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.cart, Some(PathBuf::from("cart.json")));
        assert!(!args.verbose);
    }

    #[test]
    fn test_no_flags() {
        let args = Args::parse_from(["till"]);
        assert!(args.rate.is_none());
        assert!(args.cart.is_none());
        assert!(args.format.is_none());
    }
}
