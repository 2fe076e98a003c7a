//! Rashut Core - dashboard application shell
//!
//! Wires the pipeline to the host:
//! - [`DashConfig`]: TOML configuration
//! - [`SelectionCell`]: the one place the selected year lives
//! - [`Dashboard`]: event loop with last-request-wins fetches and debounced
//!   re-rendering
//! - [`ChartRenderer`]: the host's drawing seam, fed a [`DashboardView`]

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod dashboard;
pub mod error;
pub mod event;
pub mod selection;
pub mod view;

pub use config::DashConfig;
pub use dashboard::Dashboard;
pub use error::{ConfigError, DashError, RenderError};
pub use event::DashboardEvent;
pub use selection::{SelectionCell, YearSelection};
pub use view::{load_view, ChartRenderer, DashboardView};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
