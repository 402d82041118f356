//! Configuration management for enrichment map construction

/// Default configuration for enrichment map construction
pub struct EmapConfig {
    /// Minimum number of shared members for two items to be connected
    /// (inclusive: an overlap equal to this value qualifies)
    pub min_overlap: u32,

    /// Rescale item sizes into a visual range before clustering
    pub rescale_sizes: bool,

    /// Lower bound of the rescaled size range
    pub size_min: f64,

    /// Width of the rescaled size range
    pub size_range: f64,
}

impl Default for EmapConfig {
    fn default() -> Self {
        Self {
            min_overlap: 1,
            rescale_sizes: false,
            size_min: 0.0,
            size_range: 100.0,
        }
    }
}

impl EmapConfig {
    /// Create a new configuration with custom values
    pub fn new(min_overlap: u32, rescale_sizes: bool, size_min: f64, size_range: f64) -> Self {
        Self {
            min_overlap,
            rescale_sizes,
            size_min,
            size_range,
        }
    }
}
