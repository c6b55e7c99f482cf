pub const DEFAULT_MIN_CHAIN_LENGTH: usize = 48;
pub const DEFAULT_MAX_RESOLUTION: f64 = 3.5;
pub const DEFAULT_MAX_GAP_DISTANCE: f64 = 4.2;

/// Thresholds applied by the structure and chain filters.
///
/// Fixed at startup; the pipeline never re-reads configuration mid-run.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    /// Minimum number of standard residues a chain must have.
    pub min_chain_length: usize,
    /// Structures with a declared resolution above this ceiling (in
    /// Angstroms) are rejected outright. Structures without resolution
    /// metadata always pass.
    pub max_resolution: f64,
    /// Maximum allowed distance (in Angstroms) between consecutive retained
    /// Cα positions before a chain counts as broken.
    pub max_gap_distance: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_chain_length: DEFAULT_MIN_CHAIN_LENGTH,
            max_resolution: DEFAULT_MAX_RESOLUTION,
            max_gap_distance: DEFAULT_MAX_GAP_DISTANCE,
        }
    }
}

#[derive(Default)]
pub struct FilterConfigBuilder {
    min_chain_length: Option<usize>,
    max_resolution: Option<f64>,
    max_gap_distance: Option<f64>,
}

impl FilterConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_chain_length(mut self, length: usize) -> Self {
        self.min_chain_length = Some(length);
        self
    }

    pub fn max_resolution(mut self, ceiling: f64) -> Self {
        self.max_resolution = Some(ceiling);
        self
    }

    pub fn max_gap_distance(mut self, distance: f64) -> Self {
        self.max_gap_distance = Some(distance);
        self
    }

    pub fn build(self) -> FilterConfig {
        let defaults = FilterConfig::default();
        FilterConfig {
            min_chain_length: self.min_chain_length.unwrap_or(defaults.min_chain_length),
            max_resolution: self.max_resolution.unwrap_or(defaults.max_resolution),
            max_gap_distance: self.max_gap_distance.unwrap_or(defaults.max_gap_distance),
        }
    }
}
