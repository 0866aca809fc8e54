// lib.rs - seqtab library root

//! # seqtab - Sequence alignment and tabulation engine
//!
//! This library compares ordered sequences of comparable elements and builds
//! an aligned tabular view ("feature matrix") of multiple sequences against a
//! shared consensus supersequence. It targets variant textual witnesses,
//! version histories, and any other ordered token streams that need to be
//! lined up position by position.
//!
//! ## Features
//!
//! - **Pairwise engine**: LCS, SCS, and full gap-marked alignment between two
//!   sequences from one dynamic-programming table
//! - **Multi-sequence tabulation**: fold N sequences into one consensus and
//!   align every sequence against it, in parallel
//! - **Queryable matrix**: cell access, transposition, indexed value lookup
//! - **Multiple formats**: TSV, CSV, Markdown, JSON, plain delimited output
//! - **Flexible filtering**: witness filtering with regex and id lists
//!
//! ## Basic Usage
//!
//! ```rust
//! use seqtab::prelude::*;
//!
//! let witnesses = vec![
//!     vec!["a".to_string(), "b".to_string(), "c".to_string()],
//!     vec!["a".to_string(), "c".to_string()],
//! ];
//!
//! // Fold the witnesses into one aligned feature matrix
//! let matrix = tabulate(&witnesses, &TabulateOptions::default())?;
//!
//! assert_eq!(matrix.rows(), 2);
//! assert_eq!(matrix.columns()?, 3);
//! assert_eq!(matrix.cell(1, 1)?, &None); // "b" is absent from the second witness
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, Config, ValidationResult};
    pub use crate::core::{
        consensus_supersequence, tabulate, FeatureMatrix, IndexedCell, Pairing, SequenceComp,
        TableOrientation, TabulateOptions,
    };
    pub use crate::data::{Tabulation, TabulationReport, Witness, WitnessSet};
    pub use crate::output::write_matrix;
}

// Re-export main types at the root level for convenience
pub use cli::{Args, ValidationResult};
pub use core::{FeatureMatrix, Pairing, SequenceComp, TableOrientation, TabulateOptions};
pub use data::{Tabulation, Witness, WitnessSet};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "seqtab v{} - Sequence alignment and tabulation engine",
        VERSION
    )
}
