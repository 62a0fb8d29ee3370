// mod.rs - Input table module

pub mod distribution;
pub mod loaders;
pub mod synteny;

// Re-export main types for convenience
pub use distribution::{Distribution, DistributionRow};
pub use synteny::{SyntenyBlock, SyntenyRow, SyntenyTable};
