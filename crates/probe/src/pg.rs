use async_trait::async_trait;
use sqlx::postgres::{PgConnection, PgRow};
use sqlx::{Column, Connection, Row};
use tracing::{debug, info};

use crate::catalog::{SampleRow, TableCatalog};
use crate::error::ProbeError;
use crate::sql;

/// A single PostgreSQL connection used for catalog lookups.
pub struct PgCatalog {
    conn: PgConnection,
}

impl PgCatalog {
    pub async fn connect(url: &str) -> Result<Self, ProbeError> {
        info!(url = %redact_url(url), "connecting to PostgreSQL");
        let conn = PgConnection::connect(url).await?;
        debug!("PostgreSQL connected");
        Ok(Self { conn })
    }
}

#[async_trait]
impl TableCatalog for PgCatalog {
    async fn find_tables(&mut self, name: &str) -> Result<Vec<String>, ProbeError> {
        let rows: Vec<(String,)> = sqlx::query_as(sql::FIND_TABLES)
            .bind(name)
            .fetch_all(&mut self.conn)
            .await?;
        debug!(name, matches = rows.len(), "catalog lookup");
        Ok(rows.into_iter().map(|(t,)| t).collect())
    }

    async fn sample_rows(
        &mut self,
        table: &str,
        columns: &[String],
        limit: u32,
    ) -> Result<Vec<SampleRow>, ProbeError> {
        let query = sql::sample_query(table, columns, limit);
        debug!(%query, "fetching sample rows");
        let rows = sqlx::query(&query).fetch_all(&mut self.conn).await?;
        rows.iter().map(decode_row).collect()
    }

    /// Gracefully terminate the session.
    async fn close(self) -> Result<(), ProbeError> {
        self.conn.close().await?;
        debug!("PostgreSQL connection closed");
        Ok(())
    }
}

fn decode_row(row: &PgRow) -> Result<SampleRow, ProbeError> {
    let mut fields = indexmap::IndexMap::with_capacity(row.len());
    for (i, column) in row.columns().iter().enumerate() {
        let value: Option<String> = row.try_get(i).map_err(|e| ProbeError::Decode {
            column: column.name().to_string(),
            message: e.to_string(),
        })?;
        fields.insert(column.name().to_string(), value);
    }
    Ok(SampleRow(fields))
}

/// Connection URL with the password removed, for logs.
pub fn redact_url(raw: &str) -> String {
    match url::Url::parse(raw) {
        Ok(mut url) => {
            if url.password().is_some() {
                let _ = url.set_password(Some("***"));
            }
            url.to_string()
        }
        Err(_) => "(unparseable url)".to_string(),
    }
}
