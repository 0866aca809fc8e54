// tabulate.rs - Multi-sequence tabulation against a consensus supersequence

use crate::core::matrix::FeatureMatrix;
use crate::core::pairwise::SequenceComp;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which axis the tabulated sequences occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableOrientation {
    /// One row per sequence, one column per consensus position
    Rows,
    /// One column per sequence, one row per consensus position
    Columns,
}

impl FromStr for TableOrientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rows" | "row" => Ok(TableOrientation::Rows),
            "columns" | "column" | "cols" => Ok(TableOrientation::Columns),
            _ => Err(format!("Invalid orientation: {}. Use: rows, columns", s)),
        }
    }
}

impl TableOrientation {
    pub fn description(&self) -> &str {
        match self {
            TableOrientation::Rows => "one row per sequence",
            TableOrientation::Columns => "one column per sequence",
        }
    }
}

/// Configuration for building a feature matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabulateOptions {
    pub orientation: TableOrientation,
    pub include_consensus: bool,
}

impl Default for TabulateOptions {
    fn default() -> Self {
        Self {
            orientation: TableOrientation::Rows,
            include_consensus: false,
        }
    }
}

/// One supersequence covering every input sequence.
///
/// Left-to-right pairwise SCS reduction in the order given, with each
/// incoming sequence as the left operand and the running consensus as the
/// right operand. Pairwise SCS is neither associative nor commutative, so
/// both the direction and the operand order are part of the contract; every
/// input is a subsequence of the result either way, but the element order
/// differs.
pub fn consensus_supersequence<T: Clone + PartialEq>(sequences: &[Vec<T>]) -> Vec<T> {
    let mut consensus = match sequences.first() {
        Some(first) => first.clone(),
        None => return Vec::new(),
    };

    for sequence in &sequences[1..] {
        consensus = SequenceComp::new(sequence, &consensus).scs();
    }

    consensus
}

/// Project one sequence onto the consensus coordinates.
///
/// One entry per consensus position: the sequence's element where it lands
/// on the consensus, `None` where the consensus element is absent from the
/// sequence. Gaps sit at their true positions, interior ones included.
pub fn aligned_row<T: Clone + PartialEq>(consensus: &[T], sequence: &[T]) -> Vec<Option<T>> {
    // Exactly one pairing carries each consensus element, so the projection
    // is always full-width: no end padding is ever needed.
    SequenceComp::new(consensus, sequence)
        .align()
        .into_iter()
        .filter(|pairing| pairing.left().is_some())
        .map(|pairing| pairing.into_right())
        .collect()
}

/// Stack aligned rows into the final matrix, honoring the options.
///
/// The consensus row, when requested, leads the table with every cell
/// present. Ragged input is rejected here, at matrix construction; this is
/// the sole validation point.
pub fn assemble<T: Clone + PartialEq>(
    consensus: &[T],
    rows: Vec<Vec<Option<T>>>,
    options: &TabulateOptions,
) -> Result<FeatureMatrix<T>, String> {
    let mut table: Vec<Vec<Option<T>>> = Vec::with_capacity(rows.len() + 1);
    if options.include_consensus {
        table.push(consensus.iter().cloned().map(Some).collect());
    }
    table.extend(rows);

    let matrix = FeatureMatrix::from_rows(table)?;
    if matrix.rows() == 0 {
        return Ok(matrix);
    }

    match options.orientation {
        TableOrientation::Rows => Ok(matrix),
        TableOrientation::Columns => matrix.transpose(),
    }
}

/// Fold N sequences into one aligned feature matrix.
///
/// Computes the consensus supersequence, aligns every input against it in
/// parallel, and stacks the projections in input order. The inputs are
/// immutable and each comparison is independent, so the per-sequence
/// alignments fan out across the rayon pool.
pub fn tabulate<T>(
    sequences: &[Vec<T>],
    options: &TabulateOptions,
) -> Result<FeatureMatrix<T>, String>
where
    T: Clone + PartialEq + Send + Sync,
{
    let consensus = consensus_supersequence(sequences);
    let rows: Vec<Vec<Option<T>>> = sequences
        .par_iter()
        .map(|sequence| aligned_row(&consensus, sequence))
        .collect();

    assemble(&consensus, rows, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> Vec<String> {
        s.split(',').filter(|t| !t.is_empty()).map(|t| t.to_string()).collect()
    }

    fn witnesses() -> Vec<Vec<String>> {
        vec![seq("a,b,c,d,f,g"), seq("b,c,d,e"), seq("a,c,e,f,g")]
    }

    fn is_subsequence(needle: &[String], haystack: &[String]) -> bool {
        let mut it = haystack.iter();
        needle.iter().all(|n| it.any(|h| h == n))
    }

    #[test]
    fn test_consensus_covers_every_input() {
        let inputs = witnesses();
        let consensus = consensus_supersequence(&inputs);

        for input in &inputs {
            assert!(
                is_subsequence(input, &consensus),
                "{:?} not a subsequence of {:?}",
                input,
                consensus
            );
        }
    }

    #[test]
    fn test_consensus_of_three_witnesses() {
        // The fold order pins this exact 7-element result.
        let consensus = consensus_supersequence(&witnesses());
        assert_eq!(consensus, seq("a,b,c,d,e,f,g"));
    }

    #[test]
    fn test_consensus_degenerate_inputs() {
        let empty: Vec<Vec<String>> = Vec::new();
        assert!(consensus_supersequence(&empty).is_empty());

        let single = vec![seq("a,b,c")];
        assert_eq!(consensus_supersequence(&single), seq("a,b,c"));
    }

    #[test]
    fn test_matrix_dimensions() {
        let matrix = tabulate(&witnesses(), &TabulateOptions::default()).unwrap();
        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.columns().unwrap(), 7);
    }

    #[test]
    fn test_consensus_row_is_prepended() {
        let options = TabulateOptions {
            include_consensus: true,
            ..TabulateOptions::default()
        };
        let matrix = tabulate(&witnesses(), &options).unwrap();

        assert_eq!(matrix.rows(), 4);
        assert_eq!(matrix.columns().unwrap(), 7);

        // Leading row is the consensus itself, every cell present
        for col in 0..7 {
            assert!(matrix.cell(0, col).unwrap().is_some());
        }
        assert_eq!(matrix.cell(0, 4).unwrap(), &Some("e".to_string()));
    }

    #[test]
    fn test_gaps_sit_at_interior_positions() {
        // Consensus is [a,b,c,d,e,f,g]; gaps must land where the witness
        // lacks the consensus element, not get pushed to the row's end.
        let matrix = tabulate(&witnesses(), &TabulateOptions::default()).unwrap();

        // Row 0 = [a,b,c,d,f,g]: missing only "e" (column 4)
        for col in 0..7 {
            let cell = matrix.cell(0, col).unwrap();
            if col == 4 {
                assert!(cell.is_none(), "expected interior gap at column 4");
            } else {
                assert!(cell.is_some(), "unexpected gap at column {}", col);
            }
        }

        // Row 2 = [a,c,e,f,g]: missing "b" (column 1) and "d" (column 3)
        let gaps: Vec<usize> = (0..7)
            .filter(|&col| matrix.cell(2, col).unwrap().is_none())
            .collect();
        assert_eq!(gaps, vec![1, 3]);
    }

    #[test]
    fn test_rows_reconstruct_inputs() {
        let inputs = witnesses();
        let matrix = tabulate(&inputs, &TabulateOptions::default()).unwrap();

        for (row, input) in inputs.iter().enumerate() {
            let present: Vec<String> = matrix.features()[row]
                .iter()
                .filter_map(|cell| cell.clone())
                .collect();
            assert_eq!(&present, input);
        }
    }

    #[test]
    fn test_column_orientation_transposes() {
        let rows_matrix = tabulate(&witnesses(), &TabulateOptions::default()).unwrap();
        let cols_matrix = tabulate(
            &witnesses(),
            &TabulateOptions {
                orientation: TableOrientation::Columns,
                include_consensus: false,
            },
        )
        .unwrap();

        assert_eq!(cols_matrix.rows(), 7);
        assert_eq!(cols_matrix.columns().unwrap(), 3);
        assert_eq!(cols_matrix, rows_matrix.transpose().unwrap());
    }

    #[test]
    fn test_empty_input_yields_empty_matrix() {
        let empty: Vec<Vec<String>> = Vec::new();

        for orientation in [TableOrientation::Rows, TableOrientation::Columns] {
            let matrix = tabulate(
                &empty,
                &TabulateOptions {
                    orientation,
                    include_consensus: false,
                },
            )
            .unwrap();
            assert_eq!(matrix.rows(), 0);
        }
    }

    #[test]
    fn test_single_sequence() {
        let inputs = vec![seq("x,y,z")];
        let matrix = tabulate(&inputs, &TabulateOptions::default()).unwrap();

        assert_eq!(matrix.rows(), 1);
        assert_eq!(matrix.columns().unwrap(), 3);
        assert!(matrix.cell_index(&None).is_empty());
    }

    #[test]
    fn test_orientation_parsing() {
        assert_eq!(
            "rows".parse::<TableOrientation>().unwrap(),
            TableOrientation::Rows
        );
        assert_eq!(
            "COLUMNS".parse::<TableOrientation>().unwrap(),
            TableOrientation::Columns
        );
        assert!("diagonal".parse::<TableOrientation>().is_err());
    }
}
