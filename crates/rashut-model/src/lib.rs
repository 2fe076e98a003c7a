//! Rashut Model
//!
//! Types shared by every stage of the dashboard pipeline:
//! - [`Record`]: one flat task/idea row from the query service
//! - [`Year`] and [`Percentage`]: strongly typed scalars
//! - [`AggregateStatistics`]: nested counts per branch and category
//! - [`Metric`]: the vocabulary used to read a count out of a snapshot
//!
//! # Example
//!
//! ```rust
//! use rashut_model::{fields, AggregateStatistics, Metric, Record};
//!
//! let record = Record::new()
//!     .with(fields::COMMON_SHAAM, "true")
//!     .with(fields::START_YEAR, "2025");
//! assert!(record.field_eq(fields::COMMON_SHAAM, "true"));
//!
//! let stats = AggregateStatistics::default();
//! assert_eq!(stats.count(Metric::Total), 0);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod record;
pub mod stats;
pub mod values;

pub use record::{fields, Record};
pub use stats::{
    AggregateStatistics, Branch, Category, DrillStats, Metric, Outcome, Phase, Provenance,
    WithShaamStats, WithoutShaamStats,
};
pub use values::{ParsePercentageError, ParseYearError, Percentage, Year};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
