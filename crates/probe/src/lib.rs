//! Table existence probe for PostgreSQL.
//!
//! [`check_table`] drives the check against any [`TableCatalog`];
//! [`PgCatalog`] is the sqlx-backed implementation used by the binary.

pub mod catalog;
pub mod check;
pub mod error;
pub mod pg;
pub mod sql;

pub use catalog::{SampleRow, TableCatalog};
pub use check::{check_table, CheckOutcome, Console, SampleOutcome};
pub use error::ProbeError;
pub use pg::PgCatalog;
