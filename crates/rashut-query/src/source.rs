//! The record source seam and an in-memory implementation

use crate::error::QueryError;
use crate::filters::QueryFilters;
use async_trait::async_trait;
use rashut_model::Record;
use std::sync::Arc;

/// Anything that can answer a named query with flat records
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Run a query
    ///
    /// # Errors
    /// Returns `QueryError` when the backend cannot produce records.
    async fn query(
        &self,
        query_code: &str,
        filters: &QueryFilters,
    ) -> Result<Vec<Record>, QueryError>;
}

#[async_trait]
impl<T: RecordSource + ?Sized> RecordSource for Arc<T> {
    async fn query(
        &self,
        query_code: &str,
        filters: &QueryFilters,
    ) -> Result<Vec<Record>, QueryError> {
        (**self).query(query_code, filters).await
    }
}

/// Fixed in-memory record set (demo data, exported snapshots)
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Arc<Vec<Record>>,
}

impl StaticSource {
    /// Serve the given records for every query
    #[inline]
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    /// Number of records served
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the source is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RecordSource for StaticSource {
    async fn query(
        &self,
        query_code: &str,
        _filters: &QueryFilters,
    ) -> Result<Vec<Record>, QueryError> {
        tracing::debug!(query = query_code, records = self.records.len(), "serving static records");
        Ok(self.records.as_ref().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rashut_model::fields;

    #[tokio::test]
    async fn static_source_returns_all_records() {
        let source = StaticSource::new(vec![
            Record::new().with(fields::STATUS, "8"),
            Record::new().with(fields::STATUS, "1"),
        ]);

        let records = source
            .query("dash_rashut_pm", &QueryFilters::new())
            .await
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get(fields::STATUS), Some("8"));
    }

    #[tokio::test]
    async fn arc_source_delegates() {
        let source: Arc<dyn RecordSource> = Arc::new(StaticSource::new(vec![Record::new()]));
        let records = source.query("q", &QueryFilters::new()).await.unwrap();
        assert_eq!(records.len(), 1);
    }
}
