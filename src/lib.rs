//! Sprout - in-memory entry trees with size aggregation, listing and visitors

pub mod entry;
pub mod error;
pub mod output;
pub mod sample;
pub mod stats;
pub mod visitor;

pub use entry::{Directory, Entry, File, format_size, par_size};
pub use error::{Error, Result};
pub use output::{
    LineSink, MAX_JSON_DEPTH, OutputConfig, TreeFormatter, WriteSink, print_json, to_json,
};
pub use stats::{StatsConfig, StatsVisitor, TreeStats, collect_stats, print_stats, print_stats_json};
pub use visitor::{FindVisitor, ListVisitor, Scope, Visitor};
