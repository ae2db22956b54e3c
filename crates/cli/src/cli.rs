use std::path::PathBuf;

use clap::Parser;
use pgpeek_core::config::{
    CheckTarget, DEFAULT_ENV_FILE, DEFAULT_SAMPLE_LIMIT, DEFAULT_TABLE, DEFAULT_URL_KEY,
};

/// Check whether a table exists in PostgreSQL and show a few of its rows.
///
/// The connection URL is read from an env file (`DATABASE_URL` in `./.env`
/// by default), not from the process environment.
#[derive(Parser, Debug)]
#[command(name = "check-table", version, about)]
pub struct CliArgs {
    /// Env file holding the connection URL
    #[arg(long, env = "PGPEEK_ENV_FILE", default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Key in the env file that holds the connection URL
    #[arg(long, env = "PGPEEK_URL_KEY", default_value = DEFAULT_URL_KEY)]
    pub url_key: String,

    /// Table to look for (matched as given and in lowercase)
    #[arg(long, env = "PGPEEK_TABLE", default_value = DEFAULT_TABLE)]
    pub table: String,

    /// Comma-separated columns to sample
    #[arg(
        long,
        env = "PGPEEK_COLUMNS",
        value_delimiter = ',',
        default_value = "shopDomain,clientId"
    )]
    pub columns: Vec<String>,

    /// Maximum number of sample rows
    #[arg(long, env = "PGPEEK_LIMIT", default_value_t = DEFAULT_SAMPLE_LIMIT)]
    pub limit: u32,
}

impl CliArgs {
    pub fn target(&self) -> CheckTarget {
        CheckTarget {
            env_file: self.env_file.clone(),
            url_key: self.url_key.clone(),
            table: self.table.clone(),
            columns: self.columns.iter().map(|c| c.trim().to_string()).collect(),
            sample_limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_default_target() {
        let args = CliArgs::try_parse_from(["check-table"]).unwrap();
        assert_eq!(args.target(), CheckTarget::default());
    }

    #[test]
    fn test_overrides() {
        let args = CliArgs::try_parse_from([
            "check-table",
            "--env-file",
            "conf/prod.env",
            "--table",
            "orders",
            "--columns",
            "id, total",
            "--limit",
            "2",
        ])
        .unwrap();
        let t = args.target();
        assert_eq!(t.env_file, PathBuf::from("conf/prod.env"));
        assert_eq!(t.table, "orders");
        assert_eq!(t.columns, vec!["id", "total"]);
        assert_eq!(t.sample_limit, 2);
        assert_eq!(t.url_key, "DATABASE_URL");
    }

    #[test]
    fn test_rejects_non_numeric_limit() {
        assert!(CliArgs::try_parse_from(["check-table", "--limit", "many"]).is_err());
    }
}
