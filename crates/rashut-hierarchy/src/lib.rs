//! Rashut Hierarchy - render tree derivation
//!
//! Maps aggregate statistics onto the fixed drill-down tree:
//! - [`SCHEMA`]: one declarative row per node (parent, metric, style, position)
//! - [`build_hierarchy`]: nodes and edges for one render
//! - [`Hierarchy::validate`]: tree invariant check over the edges
//!
//! # Example
//!
//! ```rust
//! use rashut_hierarchy::build_hierarchy;
//! use rashut_model::AggregateStatistics;
//!
//! let tree = build_hierarchy(&AggregateStatistics::default());
//! assert_eq!(tree.nodes.len(), 17);
//! assert!(tree.validate().is_ok());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod node;
pub mod palette;
pub mod schema;
mod validate;

pub use error::HierarchyError;
pub use node::{build_hierarchy, group_thousands, Hierarchy, HierarchyEdge, HierarchyNode};
pub use palette::{ColorKey, Colors};
pub use schema::{spec, view_key, view_keys, LabelStyle, NodeSpec, Position, ROOT_ID, SCHEMA};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
