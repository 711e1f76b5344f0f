//! # Till CLI Library
//!
//! Presentation layer around `till-core`: loads configuration and the cart,
//! runs the checkout pipeline, and prints the outcome.
//!
//! ## Module Organization
//! ```text
//! till_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── args.rs         ◄─── Command-line flags (clap)
//! ├── config.rs       ◄─── Environment configuration
//! ├── output.rs       ◄─── ConsoleOutput (OutputPort for stdout/stderr)
//! └── error.rs        ◄─── Cart loading errors
//! ```
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Load configuration (env, then flags)                                │
//! │  2. Load cart (sample or JSON file, validated)                          │
//! │  3. Parse the rate text, then run_checkout(items, rate, ConsoleOutput)  │
//! │     ├── Ok  → "Total: $X.XX" + receipt on stdout, exit 0                │
//! │     └── Err → "An error occurred: ..." on stderr, exit 1                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod output;

use anyhow::Context;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use args::Args;
use config::TillConfig;
use error::CliError;
use output::ConsoleOutput;
use till_core::validation::validate_cart;
use till_core::{run_checkout, Cart, DiscountRate, OutputPort};

/// Runs one checkout against the real stdout/stderr.
pub fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let config = TillConfig::load()
        .context("Failed to load configuration")?
        .with_args(args);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut output = ConsoleOutput::new(stdout.lock(), stderr.lock(), config.output_format);

    let succeeded = run_with(&config, &mut output)?;
    output.finish().context("Failed to write output")?;

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Runs one checkout against any output port.
///
/// Returns `Ok(false)` when the rate text is not a valid rate or the pipeline
/// failed; the port has already been told why. Cart loading problems are
/// returned as errors instead.
pub fn run_with<P>(config: &TillConfig, output: &mut P) -> anyhow::Result<bool>
where
    P: OutputPort + ?Sized,
{
    info!("Starting shopping cart calculation...");

    let cart = load_cart(config.cart_file.as_deref())?;
    debug!(items = cart.len(), rate = %config.discount_rate, "Cart loaded");

    let rate = match config.discount_rate.parse::<DiscountRate>() {
        Ok(rate) => rate,
        Err(err) => {
            output.report_error(&err.to_string());
            return Ok(false);
        }
    };

    match run_checkout(cart.items(), rate.value(), output) {
        Ok(checkout) => {
            info!(
                total = checkout.total,
                discounted_total = checkout.discounted_total,
                rate = %checkout.rate,
                "Checkout complete"
            );
            Ok(true)
        }
        Err(_) => Ok(false),
    }
}

/// Loads the cart from `path`, or the sample cart when no path is given.
///
/// File carts must pass [`validate_cart`]: non-empty names, finite and
/// non-negative prices.
pub fn load_cart(path: Option<&Path>) -> Result<Cart, CliError> {
    let Some(path) = path else {
        debug!("No cart file configured, using sample cart");
        return Ok(Cart::sample());
    };

    let contents = std::fs::read_to_string(path).map_err(|source| CliError::CartRead {
        path: path.to_path_buf(),
        source,
    })?;

    let cart: Cart = serde_json::from_str(&contents).map_err(|source| CliError::CartParse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_cart(&cart).map_err(|source| CliError::InvalidCart {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(cart)
}

/// Initializes the tracing subscriber. Logs go to stderr.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `--verbose` - Same as `RUST_LOG=debug` when `RUST_LOG` is unset
/// - Default: `warn,till_cli=info`
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn,till_cli=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Prints a top-level error and its causes to stderr.
pub fn report_fatal(err: &anyhow::Error) {
    let mut stderr = io::stderr().lock();
    // Nothing left to do if stderr itself is gone
    let _ = writeln!(stderr, "Error: {err:#}");
}
