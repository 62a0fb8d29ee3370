// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Common
    pub plot: Option<String>,
    pub output: Option<String>,

    // Selection plot
    pub dists: Option<Vec<String>>,
    pub alphas: Option<Vec<f64>>,
    pub ks_min: Option<f64>,
    pub ks_max: Option<f64>,
    pub offset: Option<f64>,
    pub title: Option<String>,
    pub bins: Option<usize>,
    pub rwidth: Option<f64>,
    pub color: Option<String>,

    // Syntenic dotplot
    pub synteny: Option<String>,
    pub no_forward_fill: Option<bool>,
    pub include_elements: Option<String>,
    pub exclude_elements: Option<String>,
    pub offsets_output: Option<String>,

    // Flags
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# wgdplot.toml - Configuration file for wgdplot
# Command line arguments will override these settings

# =============================================================================
# COMMON
# =============================================================================

# Plot type: selection, dotplot
plot = "selection"

# Output image file (.png or .svg)
output = "selection.png"

# =============================================================================
# SELECTION PLOT
# =============================================================================

# Distribution tables (Ks, Ka, Omega, WeightOutliersIncluded columns)
dists = ["species_a.ks.tsv", "species_b.ks.tsv"]

# One opacity per distribution; omit for an even ramp from 0.2 to 1.0
# alphas = [0.3, 0.8]

# Ks inclusion range (both bounds exclusive)
ks_min = 0.1
ks_max = 5.0

# Axis offset in points
offset = 5.0

# Panel title
title = "Species genus"

# Histogram options
bins = 40
rwidth = 0.8
color = "black"

# =============================================================================
# SYNTENIC DOTPLOT
# =============================================================================

# Synteny table (list_x, list_y, begin_x, end_x, begin_y, end_y columns)
# synteny = "segments.tsv"

# Do not carry list_x forward over rows that omit it
no_forward_fill = false

# Include only genomic elements matching regex pattern
# include_elements = "^chr"

# Exclude genomic elements matching regex pattern
# exclude_elements = "^(chrM|chrC)$"

# Write genomic element offsets (.json or TSV)
# offsets_output = "offsets.tsv"

# =============================================================================
# FLAGS
# =============================================================================

# Validate inputs without rendering (dry run)
dry_run = false
"#
        .to_string()
    }
}
