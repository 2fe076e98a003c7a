//! Inputs to the dashboard loop

use crate::selection::YearSelection;
use rashut_model::Year;

/// Something the host reports to the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Year filter changed; the only way the selection moves
    YearSelected(YearSelection),
    /// Chart container changed size
    Resized,
    /// Refetch the current year
    Refresh,
    /// A node or header badge was clicked
    NodeClicked(String),
}

impl DashboardEvent {
    /// Year selection event
    #[must_use]
    pub fn year(year: u16) -> Self {
        Self::YearSelected(YearSelection::from(Year(year)))
    }

    /// Click event
    #[must_use]
    pub fn click(node_id: impl Into<String>) -> Self {
        Self::NodeClicked(node_id.into())
    }
}
