//! Rashut Stats - statistics aggregator
//!
//! Turns a flat record set plus a selected year into nested aggregate
//! counts and percentages:
//! - [`compute_statistics`]: the fixed predicate pipeline
//! - [`fallback_statistics`]: the documented offline snapshot
//! - [`HeaderBadges`]: completion badges shown above the chart
//! - [`BarChartSummary`]: the flat per-unit bar chart variant
//!
//! # Example
//!
//! ```rust
//! use rashut_model::{fields, Record, Year};
//! use rashut_stats::compute_statistics;
//!
//! let records = vec![Record::new()
//!     .with(fields::COMMON_SHAAM, "true")
//!     .with(fields::START_YEAR, "2025")
//!     .with(fields::CATEGORY, "4")
//!     .with(fields::STATUS, "8")
//!     .with(fields::PERCENT_COMPLETE, "0.5")];
//!
//! let stats = compute_statistics(Some(&records), Some(Year(2025)));
//! assert_eq!(stats.with_shaam.new.converted, 1);
//! assert_eq!(stats.with_shaam.percentage.to_string(), "50%");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod aggregate;
pub mod badges;
pub mod bar;
pub mod fallback;
pub mod predicates;

pub use aggregate::compute_statistics;
pub use badges::{BadgeKind, HeaderBadges};
pub use bar::{demo_units, BarChartSummary, UnitBar, UnitTally};
pub use fallback::fallback_statistics;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
