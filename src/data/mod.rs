// mod.rs - Data structures module

pub mod loaders;
pub mod witness;

// Re-export main types for convenience
pub use witness::{Tabulation, TabulationReport, Witness, WitnessSet};
