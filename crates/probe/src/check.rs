//! The table check itself, independent of any particular database client.

use std::io::{self, Write};

use pgpeek_core::{CheckError, CheckTarget};
use tracing::{debug, warn};

use crate::catalog::{SampleRow, TableCatalog};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleOutcome {
    Rows(Vec<SampleRow>),
    /// The sample query failed; the message is shown as a warning only.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    TableNotFound,
    Found {
        tables: Vec<String>,
        sample: SampleOutcome,
    },
}

/// Look `target.table` up in the catalog and, if present, sample it.
///
/// A failing catalog lookup is fatal. A failing sample query is not: it is
/// captured in [`SampleOutcome::Failed`].
pub async fn check_table<C>(catalog: &mut C, target: &CheckTarget) -> Result<CheckOutcome, CheckError>
where
    C: TableCatalog + ?Sized,
{
    let tables = catalog
        .find_tables(&target.table)
        .await
        .map_err(|e| CheckError::Database(e.to_string()))?;

    if tables.is_empty() {
        debug!(table = %target.table, "no matching table");
        return Ok(CheckOutcome::TableNotFound);
    }

    let sample = match catalog
        .sample_rows(&target.table, &target.columns, target.sample_limit)
        .await
    {
        Ok(rows) => SampleOutcome::Rows(rows),
        Err(e) => {
            warn!(table = %target.table, error = %e, "sample query failed");
            SampleOutcome::Failed(e.to_string())
        }
    };

    Ok(CheckOutcome::Found { tables, sample })
}

/// Human-readable output: results to `out`, warnings and errors to `err`.
pub struct Console<O, E> {
    out: O,
    err: E,
}

impl Console<io::Stdout, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }

    pub fn report(&mut self, target: &CheckTarget, outcome: &CheckOutcome) -> io::Result<()> {
        match outcome {
            CheckOutcome::TableNotFound => {
                writeln!(self.out, "Table not found: {}", target.table)?;
            }
            CheckOutcome::Found { tables, sample } => {
                writeln!(self.out, "Found tables:")?;
                for t in tables {
                    writeln!(self.out, " - {}", t)?;
                }
                match sample {
                    SampleOutcome::Rows(rows) => {
                        let json = serde_json::to_string_pretty(rows).map_err(io::Error::other)?;
                        writeln!(self.out, "Sample rows: {}", json)?;
                    }
                    SampleOutcome::Failed(msg) => {
                        writeln!(
                            self.err,
                            "Could not query sample rows (maybe permissions or column mismatch): {}",
                            msg
                        )?;
                    }
                }
            }
        }
        self.out.flush()
    }

    /// Print a fatal error with the `Error:` prefix.
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.err, "Error: {}", message)
    }

    /// Print a message to the error stream verbatim.
    pub fn plain_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.err, "{}", message)
    }
}
