//! The single owned cell holding the selected year

use rashut_model::Year;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Payload of a year-filter change, `{ "year": 2025 }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSelection {
    /// Newly selected year
    pub year: Year,
}

impl From<Year> for YearSelection {
    fn from(year: Year) -> Self {
        Self { year }
    }
}

/// Selected year, readable atomically by any in-flight run
#[derive(Debug)]
pub struct SelectionCell {
    tx: watch::Sender<Year>,
}

impl SelectionCell {
    /// Cell starting at `year`
    #[must_use]
    pub fn new(year: Year) -> Self {
        let (tx, _rx) = watch::channel(year);
        Self { tx }
    }

    /// Current year
    #[must_use]
    pub fn get(&self) -> Year {
        *self.tx.borrow()
    }

    /// Store a year; returns whether it changed
    pub fn set(&self, year: Year) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == year {
                false
            } else {
                *current = year;
                true
            }
        })
    }

    /// Watch for changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Year> {
        self.tx.subscribe()
    }
}
