//! # Till Entry Point
//!
//! ## Startup Sequence
//! 1. Parse flags
//! 2. Initialize tracing (logging)
//! 3. Load configuration and cart
//! 4. Run the checkout and print the outcome
//!
//! ## Exit Codes
//! - `0` - receipt printed
//! - `1` - checkout failed (invalid rate or total), or the cart could not be loaded

use clap::Parser;
use std::process::ExitCode;

use till_cli::args::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    till_cli::init_tracing(args.verbose);

    // The actual work is in lib.rs for better testability
    match till_cli::run(&args) {
        Ok(code) => code,
        Err(err) => {
            till_cli::report_fatal(&err);
            ExitCode::FAILURE
        }
    }
}
