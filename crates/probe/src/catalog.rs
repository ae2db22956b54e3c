use async_trait::async_trait;
use indexmap::IndexMap;
use serde::Serialize;

use crate::error::ProbeError;

/// One sampled row: column name to text value, in select-list order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SampleRow(pub IndexMap<String, Option<String>>);

impl SampleRow {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).and_then(|v| v.as_deref())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, Option<V>)> for SampleRow {
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.map(Into::into)))
                .collect(),
        )
    }
}

/// Read access to a database's table catalog.
#[async_trait]
pub trait TableCatalog: Send {
    /// Names of tables matching `name` exactly or in lowercase.
    async fn find_tables(&mut self, name: &str) -> Result<Vec<String>, ProbeError>;

    /// Fetch up to `limit` rows of `columns` from `table`.
    async fn sample_rows(
        &mut self,
        table: &str,
        columns: &[String],
        limit: u32,
    ) -> Result<Vec<SampleRow>, ProbeError>;

    /// Release the underlying session.
    async fn close(self) -> Result<(), ProbeError>
    where
        Self: Sized;
}
