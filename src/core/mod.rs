// mod.rs - Core layout and binning logic (no rendering)

pub mod histogram;
pub mod layout;
pub mod selection;

// Re-export main types for convenience
pub use histogram::{bin_edges, weighted_counts};
pub use layout::{filter_blocks, max_extents, place_block, ElementSpan, GenomicOffsets, Segment};
pub use selection::{
    auto_alphas, build_panels, resolve_alphas, HistogramSeries, KsRange, RateAxis, SelectionPanel,
};
