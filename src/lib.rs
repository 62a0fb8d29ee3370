// lib.rs - wgdplot library root

//! # wgdplot - Diagnostic figures for whole-genome duplication analyses
//!
//! Renders the two standard figures of a Ks-based WGD pipeline from tables
//! produced upstream:
//!
//! - **Selection panel**: 2x2 overlaid, weighted histograms of Ks, Ka,
//!   ln(Ka) and ln(ω) for one or more distributions, binned on shared edges
//! - **Syntenic dotplot**: every aligned block drawn in a combined coordinate
//!   system where genomic elements are laid end to end in sorted name order
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use wgdplot::prelude::*;
//! use std::path::Path;
//!
//! let dist = Distribution::from_file(Path::new("species.ks.tsv"))?;
//! let figure = plot_selection(&[dist], Some(Path::new("selection.png")), &SelectionOptions::default())?;
//! assert_eq!(figure.panels.len(), 4);
//!
//! let table = SyntenyTable::from_file(Path::new("segments.tsv"))?;
//! let dotplot = syntenic_dotplot(&table, None, &DotplotOptions::default())?;
//! println!("{} elements", dotplot.offsets.len());
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod output;
pub mod render;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::core::{GenomicOffsets, KsRange, RateAxis, Segment, SelectionPanel};
    pub use crate::data::{Distribution, DistributionRow, SyntenyBlock, SyntenyRow, SyntenyTable};
    pub use crate::output::write_offsets;
    pub use crate::render::{plot_selection, render_rgb, save_figure, syntenic_dotplot, Figure};
    pub use crate::render::{DotplotFigure, DotplotOptions, HistogramStyle, SelectionFigure, SelectionOptions};
}

// Re-export main types at the root level for convenience
pub use crate::core::{GenomicOffsets, KsRange};
pub use crate::data::{Distribution, SyntenyTable};
pub use crate::render::{plot_selection, syntenic_dotplot};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "wgdplot v{} - Selection panels and syntenic dotplots",
        VERSION
    )
}
