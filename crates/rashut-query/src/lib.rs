//! Rashut Query - record query adapter
//!
//! The dashboard reads its records through the [`RecordSource`] seam:
//! - [`XogClient`]: SOAP queries against the project-management server
//! - [`StaticSource`]: a fixed in-memory record set for demos and exports
//!
//! # Example
//!
//! ```rust
//! use rashut_query::{parse_records, QueryFilters, envelope};
//! use rashut_model::Year;
//!
//! let body = envelope("session", "dash_rashut_pm", &QueryFilters::for_year(Year(2025)));
//! assert!(body.contains("<param_year>2025</param_year>"));
//!
//! let records = parse_records("<Records><Record><status>8</status></Record></Records>").unwrap();
//! assert_eq!(records[0].get("status"), Some("8"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod filters;
pub mod source;
pub mod xog;

pub use error::QueryError;
pub use filters::QueryFilters;
pub use source::{RecordSource, StaticSource};
pub use xog::{envelope, parse_records, XogClient};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
