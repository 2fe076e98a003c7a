//! Rashut Nav - drill-through navigation
//!
//! A click on a node or header badge opens a saved view in the PPM server.
//! The view is looked up by view key plus selected year; unmapped
//! combinations open a blank page.
//!
//! # Example
//!
//! ```rust
//! use rashut_model::Year;
//! use rashut_nav::NavigationResolver;
//!
//! let resolver = NavigationResolver::new("https://ppm.example");
//! assert!(resolver.resolve("Z", Year(2025)).is_blank());
//! assert_eq!(resolver.resolve("A", Year(2025)).as_str(), "https://ppm.example");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod coverage;
pub mod links;
pub mod resolver;

pub use coverage::{coverage_gaps, drill_views, CoverageGap};
pub use links::{COVERED_YEARS, LINKS};
pub use resolver::{server_base_from_page_url, Destination, NavigationResolver, BLANK_URL};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
