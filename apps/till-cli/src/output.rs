//! # Console Output
//!
//! [`OutputPort`] implementation that writes to stdout/stderr.
//!
//! ## Surfaces
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdout (text)                        stdout (json)                     │
//! │  ─────────────                        ─────────────                     │
//! │  Total: $1360.00                      {"total":"$1360.00",              │
//! │                                        "amount":1360.0,                 │
//! │  Items:                                "receipt":"Items:\n..."}         │
//! │  Laptop: $1000                                                          │
//! │  ...                                                                    │
//! │                                                                         │
//! │  stderr: An error occurred: <message>                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde_json::json;
use std::io::{self, Write};
use till_core::{Money, OutputPort};
use tracing::error;

use crate::config::OutputFormat;

/// Writes results to `out` and errors to `err`.
///
/// `OutputPort` methods cannot fail, so the first write error is kept and
/// returned by [`ConsoleOutput::finish`].
pub struct ConsoleOutput<O: Write, E: Write> {
    out: O,
    err: E,
    format: OutputFormat,
    write_error: Option<io::Error>,
}

impl<O: Write, E: Write> ConsoleOutput<O, E> {
    pub fn new(out: O, err: E, format: OutputFormat) -> Self {
        ConsoleOutput {
            out,
            err,
            format,
            write_error: None,
        }
    }

    /// Flushes both streams and surfaces any write failure.
    pub fn finish(mut self) -> io::Result<()> {
        if let Some(e) = self.write_error.take() {
            return Err(e);
        }
        self.out.flush()?;
        self.err.flush()
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            self.write_error.get_or_insert(e);
        }
    }
}

impl<O: Write, E: Write> OutputPort for ConsoleOutput<O, E> {
    fn display(&mut self, total: Money, receipt: &str) {
        let result = match self.format {
            OutputFormat::Text => write!(self.out, "Total: {total}\n\n{receipt}\n"),
            OutputFormat::Json => {
                let body = json!({
                    "total": total.to_string(),
                    "amount": total.amount(),
                    "receipt": receipt,
                });
                writeln!(self.out, "{body}")
            }
        };
        self.record(result);
    }

    fn report_error(&mut self, message: &str) {
        error!(%message, "Checkout failed");
        let result = writeln!(self.err, "An error occurred: {message}");
        self.record(result);
    }
}
