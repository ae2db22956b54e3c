//! SQL text issued by the probe.

/// Catalog lookup for a table by exact name or its lowercase fold.
/// `$1` is always bound, never interpolated.
pub const FIND_TABLES: &str =
    "SELECT tablename FROM pg_catalog.pg_tables WHERE tablename = $1 OR tablename = lower($1)";

/// Quote an identifier so mixed-case names survive PostgreSQL case folding.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Build the sample fetch for `table`.
///
/// Columns are emitted as given (unquoted) and must already be validated as
/// plain identifiers; PostgreSQL folds them to lowercase.
pub fn sample_query(table: &str, columns: &[String], limit: u32) -> String {
    format!(
        "SELECT {} FROM {} LIMIT {}",
        columns.join(", "),
        quote_ident(table),
        limit
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sample_query() {
        let columns = vec!["shopDomain".to_string(), "clientId".to_string()];
        assert_eq!(
            sample_query("ingramCredential_UK", &columns, 5),
            r#"SELECT shopDomain, clientId FROM "ingramCredential_UK" LIMIT 5"#
        );
    }

    #[test]
    fn test_quote_ident_escapes_quotes() {
        assert_eq!(quote_ident("plain"), "\"plain\"");
        assert_eq!(quote_ident(r#"we"ird"#), r#""we""ird""#);
        assert_eq!(
            quote_ident(r#"x"; DROP TABLE y; --"#),
            r#""x""; DROP TABLE y; --""#
        );
    }

    #[test]
    fn test_find_tables_uses_bound_parameter() {
        assert!(FIND_TABLES.contains("$1"));
        assert!(FIND_TABLES.contains("lower($1)"));
    }
}
