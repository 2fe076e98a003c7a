//! What one render hands to the chart, and the renderer seam

use crate::error::RenderError;
use rashut_hierarchy::{build_hierarchy, Hierarchy};
use rashut_model::{AggregateStatistics, Record, Year};
use rashut_nav::Destination;
use rashut_query::{QueryError, QueryFilters, RecordSource};
use rashut_stats::{compute_statistics, HeaderBadges};
use serde::Serialize;

/// Everything drawn for one year
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// Year the statistics were computed for
    pub year: Year,
    /// Aggregate counts
    pub statistics: AggregateStatistics,
    /// Positioned tree
    pub hierarchy: Hierarchy,
    /// Header badges
    pub badges: HeaderBadges,
    /// Set when the records could not be fetched and fallback data is shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_error: Option<String>,
}

impl DashboardView {
    /// Run the pipeline over a record set
    #[must_use]
    pub fn compute(records: Option<&[Record]>, year: Year) -> Self {
        let statistics = compute_statistics(records, Some(year));
        let hierarchy = build_hierarchy(&statistics);
        let badges = HeaderBadges::from_statistics(&statistics);
        Self {
            year,
            statistics,
            hierarchy,
            badges,
            fetch_error: None,
        }
    }

    /// Mark the view as shown in place of failed data
    #[must_use]
    pub fn with_fetch_error(mut self, message: impl Into<String>) -> Self {
        self.fetch_error = Some(message.into());
        self
    }

    /// Whether fallback data is shown
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.statistics.is_fallback()
    }
}

/// Query one year from a source and run the pipeline over the result
///
/// # Errors
/// Returns `QueryError` if the source fails.
pub async fn load_view(
    source: &dyn RecordSource,
    query_code: &str,
    year: Year,
) -> Result<DashboardView, QueryError> {
    let records = source.query(query_code, &QueryFilters::for_year(year)).await?;
    tracing::debug!(%year, records = records.len(), "computing view");
    Ok(DashboardView::compute(Some(&records), year))
}

/// Host-side chart drawing
///
/// Clicks on drawn nodes come back to the shell as
/// [`DashboardEvent::NodeClicked`](crate::DashboardEvent::NodeClicked).
pub trait ChartRenderer: Send {
    /// Draw a view, replacing the previous one
    ///
    /// # Errors
    /// Returns `RenderError` when the chart cannot be drawn.
    fn render(&mut self, view: &DashboardView) -> Result<(), RenderError>;

    /// Replace the chart area with an inline error message
    fn show_error(&mut self, message: &str);

    /// Open a drill-through detail view
    fn open_detail(&mut self, destination: &Destination);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rashut_query::StaticSource;
    use rashut_test_utils::{sample_records, RecordBuilder};

    #[test]
    fn missing_records_render_fallback() {
        let view = DashboardView::compute(None, Year(2025));
        assert!(view.is_fallback());
        assert_eq!(view.hierarchy.node("root").unwrap().label, "1,496");
        assert!(view.fetch_error.is_none());
    }

    #[test]
    fn pipeline_is_threaded_by_year() {
        let records = sample_records();
        let view = DashboardView::compute(Some(&records), Year(2024));
        assert_eq!(view.year, Year(2024));
        assert_eq!(view.statistics.total, 3);
        assert_eq!(view.hierarchy.node("root").unwrap().label, "3");
    }

    #[test]
    fn badges_follow_statistics() {
        let records = vec![RecordBuilder::shared()
            .year(2025)
            .category("1")
            .status("8")
            .completion("1")
            .build()];
        let view = DashboardView::compute(Some(&records), Year(2025));
        assert_eq!(view.badges.quarterly.value(), 100);
        assert_eq!(view.badges.converted.map(|p| p.value()), Some(100));
    }

    #[test]
    fn fetch_error_is_serialized() {
        let view = DashboardView::compute(None, Year(2025)).with_fetch_error("offline");
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["fetchError"], "offline");
        assert_eq!(json["year"], 2025);
    }

    #[tokio::test]
    async fn load_view_replays_static_records() {
        let source = StaticSource::new(sample_records());
        let view = load_view(&source, "dash_rashut_pm", Year(2025)).await.unwrap();
        assert_eq!(view.year, Year(2025));
        assert_eq!(view.statistics.total, 11);
        assert!(!view.is_fallback());

        let empty = StaticSource::new(Vec::new());
        let view = load_view(&empty, "dash_rashut_pm", Year(2025)).await.unwrap();
        assert!(view.is_fallback());
    }
}
