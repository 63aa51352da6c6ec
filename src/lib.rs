//! Cost analysis over a surgical case log.
//!
//! The case log is filtered to a set of procedures, its cost line items are
//! collapsed into one row per case, low-volume surgeons are dropped, and the
//! resulting working table is summarised to CSV and plotted to PNG.

pub mod analysis;
pub mod config;
pub mod distribution;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod schema;
pub mod summary;
pub mod visualization;

pub use analysis::{plan_plots, run, RunReport};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use summary::{Describe, SummaryTable};
pub use visualization::{PlotError, PlotJob, PlotKind};
