// mod.rs - Core alignment and tabulation module

pub mod matrix;
pub mod pairwise;
pub mod tabulate;

// Re-export main types for convenience
pub use matrix::{FeatureMatrix, IndexedCell};
pub use pairwise::{Pairing, SequenceComp};
pub use tabulate::{
    aligned_row, assemble, consensus_supersequence, tabulate, TableOrientation, TabulateOptions,
};
