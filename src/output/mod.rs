//! Tree formatting and display
//!
//! This module provides the output side of entry trees:
//! - Line sinks receiving `print_list` / `ListVisitor` lines
//! - Console tree output with colors
//! - JSON output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `sink` - The `LineSink` trait and its implementations
//! - `tree` - Box-drawing tree formatter
//! - `json` - JSON output

mod config;
mod json;
mod sink;
mod tree;

pub use config::OutputConfig;
pub use json::{MAX_JSON_DEPTH, print_json, to_json};
pub use sink::{LineSink, WriteSink};
pub use tree::TreeFormatter;
