//! Output configuration types

/// Configuration for tree output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Show sizes next to entry names
    pub show_size: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            show_size: false,
        }
    }
}
