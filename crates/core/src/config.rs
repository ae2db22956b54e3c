//! What to check: the target table, which columns to sample, and where the
//! connection string lives.

use std::path::PathBuf;

use crate::error::CheckError;

pub const DEFAULT_ENV_FILE: &str = "./.env";
pub const DEFAULT_URL_KEY: &str = "DATABASE_URL";
pub const DEFAULT_TABLE: &str = "ingramCredential_UK";
pub const DEFAULT_COLUMNS: &[&str] = &["shopDomain", "clientId"];
pub const DEFAULT_SAMPLE_LIMIT: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckTarget {
    pub env_file: PathBuf,
    /// Key in the env file holding the connection URL.
    pub url_key: String,
    pub table: String,
    /// Columns fetched by the sample query, emitted unquoted.
    pub columns: Vec<String>,
    pub sample_limit: u32,
}

impl Default for CheckTarget {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            url_key: DEFAULT_URL_KEY.to_string(),
            table: DEFAULT_TABLE.to_string(),
            columns: DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            sample_limit: DEFAULT_SAMPLE_LIMIT,
        }
    }
}

impl CheckTarget {
    /// Reject targets that cannot be turned into safe SQL.
    ///
    /// The table name only ever reaches the database as a bound parameter or a
    /// quoted identifier, so any non-empty name is fine. Column names are
    /// spliced in unquoted and must be plain identifiers.
    pub fn validate(&self) -> Result<(), CheckError> {
        if self.table.is_empty() {
            return Err(CheckError::InvalidTarget("table name is empty".into()));
        }
        if self.table.contains('\0') {
            return Err(CheckError::InvalidTarget(
                "table name contains a NUL byte".into(),
            ));
        }
        if self.columns.is_empty() {
            return Err(CheckError::InvalidTarget("no sample columns given".into()));
        }
        if let Some(bad) = self.columns.iter().find(|c| !is_plain_identifier(c)) {
            return Err(CheckError::InvalidTarget(format!(
                "column '{}' is not a plain identifier",
                bad
            )));
        }
        Ok(())
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_plain_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_target() {
        let t = CheckTarget::default();
        assert_eq!(t.env_file, PathBuf::from("./.env"));
        assert_eq!(t.url_key, "DATABASE_URL");
        assert_eq!(t.table, "ingramCredential_UK");
        assert_eq!(t.columns, vec!["shopDomain", "clientId"]);
        assert_eq!(t.sample_limit, 5);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_plain_identifier() {
        assert!(is_plain_identifier("shopDomain"));
        assert!(is_plain_identifier("_x1"));
        assert!(!is_plain_identifier("1abc"));
        assert!(!is_plain_identifier(""));
        assert!(!is_plain_identifier("a; drop table x"));
        assert!(!is_plain_identifier("\"quoted\""));
    }

    #[test]
    fn test_validate_rejects_bad_columns() {
        let t = CheckTarget {
            columns: vec!["ok".into(), "no-way".into()],
            ..Default::default()
        };
        let err = t.validate().unwrap_err();
        assert!(err.to_string().contains("no-way"));
    }

    #[test]
    fn test_validate_rejects_empty_table_and_columns() {
        let t = CheckTarget {
            table: String::new(),
            ..Default::default()
        };
        assert!(t.validate().is_err());

        let t = CheckTarget {
            columns: vec![],
            ..Default::default()
        };
        assert!(t.validate().is_err());
    }
}
