// matrix.rs - Rectangular feature matrix of optional values

/// Location of a single cell, paired with a copy of its value.
///
/// Recomputed on demand by [`FeatureMatrix::cell_index`]; it has no lifecycle
/// of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedCell<T> {
    pub value: Option<T>,
    pub row: usize,
    pub col: usize,
}

/// A rectangular table of optional values: one row per tabulated sequence,
/// one column per consensus position, `None` marking a gap.
///
/// The matrix owns its backing table exclusively. Rectangularity is checked
/// once at construction and never silently repaired; every derived view
/// (transpose, indexed cells, rendered tables) is a copy, not an alias.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix<T> {
    features: Vec<Vec<Option<T>>>,
}

impl<T: Clone + PartialEq> FeatureMatrix<T> {
    /// Build a matrix from rows, rejecting ragged input.
    ///
    /// Every row must have the same length as the first; a mismatch is a
    /// structural error, not something to pad over.
    pub fn from_rows(features: Vec<Vec<Option<T>>>) -> Result<Self, String> {
        if let Some(first) = features.first() {
            let width = first.len();
            for (row, cells) in features.iter().enumerate() {
                if cells.len() != width {
                    return Err(format!(
                        "Unbalanced matrix: row {} has {} columns, expected {}",
                        row,
                        cells.len(),
                        width
                    ));
                }
            }
        }
        Ok(Self { features })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.features.len()
    }

    /// Shared width of all rows; undefined for an empty matrix
    pub fn columns(&self) -> Result<usize, String> {
        self.features
            .first()
            .map(|row| row.len())
            .ok_or_else(|| "Matrix has no rows, column count is undefined".to_string())
    }

    /// The value at (row, col), 0-indexed
    pub fn cell(&self, row: usize, col: usize) -> Result<&Option<T>, String> {
        let cells = self
            .features
            .get(row)
            .ok_or_else(|| format!("Row index {} out of range ({} rows)", row, self.rows()))?;
        cells.get(col).ok_or_else(|| {
            format!("Column index {} out of range ({} columns)", col, cells.len())
        })
    }

    /// A new matrix with row and column roles swapped.
    ///
    /// Requires at least one row; the source matrix is left untouched.
    pub fn transpose(&self) -> Result<Self, String> {
        let columns = self.columns().map_err(|_| {
            "Cannot transpose a matrix with no rows".to_string()
        })?;

        let mut transposed = vec![Vec::with_capacity(self.rows()); columns];
        for row in &self.features {
            for (col, cell) in row.iter().enumerate() {
                transposed[col].push(cell.clone());
            }
        }

        Ok(Self {
            features: transposed,
        })
    }

    /// Every location holding the given value.
    ///
    /// Searching for `None` locates all gaps. The scan runs over the whole
    /// table on each call; the matrix is immutable, so callers needing the
    /// index repeatedly can hold on to the result.
    pub fn cell_index(&self, value: &Option<T>) -> Vec<IndexedCell<T>> {
        let mut hits = Vec::new();
        for (row, cells) in self.features.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell == value {
                    hits.push(IndexedCell {
                        value: cell.clone(),
                        row,
                        col,
                    });
                }
            }
        }
        hits
    }

    /// The raw optional-value table
    pub fn features(&self) -> &[Vec<Option<T>>] {
        &self.features
    }
}
