//! # Dense matrix storage
//!
//! The Simplex tableau needs nothing more from its backing store than a two-dimensional buffer
//! with element and row access. Values are kept in row-major order because all tableau mutations
//! (normalizing a pivot row, subtracting a multiple of one row from another) are row operations.
use std::fmt::Debug;

/// A dense matrix with values stored in row-major order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DenseMatrix<N> {
    /// Row-major values, of length `nr_rows * nr_columns`.
    data: Vec<N>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<N: Clone + Debug> DenseMatrix<N> {
    /// Create a matrix of the given shape with every element set to `value`.
    pub fn filled_with(value: N, nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            data: vec![value; nr_rows * nr_columns],
            nr_rows,
            nr_columns,
        }
    }

    /// Create a matrix from complete rows.
    ///
    /// # Arguments
    ///
    /// * `rows`: Rows of equal length. There should be at least one row.
    pub fn from_rows(rows: Vec<Vec<N>>) -> Self {
        debug_assert!(!rows.is_empty());
        debug_assert!(rows.iter().all(|row| row.len() == rows[0].len()));

        let nr_rows = rows.len();
        let nr_columns = rows[0].len();
        Self {
            data: rows.into_iter().flatten().collect(),
            nr_rows,
            nr_columns,
        }
    }

    /// Get a single element.
    pub fn get(&self, row: usize, column: usize) -> &N {
        debug_assert!(row < self.nr_rows);
        debug_assert!(column < self.nr_columns);

        &self.data[row * self.nr_columns + column]
    }

    /// Overwrite a single element.
    pub fn set(&mut self, row: usize, column: usize, value: N) {
        debug_assert!(row < self.nr_rows);
        debug_assert!(column < self.nr_columns);

        self.data[row * self.nr_columns + column] = value;
    }

    /// A complete row as a slice.
    pub fn row(&self, row: usize) -> &[N] {
        debug_assert!(row < self.nr_rows);

        &self.data[(row * self.nr_columns)..((row + 1) * self.nr_columns)]
    }

    /// A complete row as a mutable slice.
    pub fn row_mut(&mut self, row: usize) -> &mut [N] {
        debug_assert!(row < self.nr_rows);

        &mut self.data[(row * self.nr_columns)..((row + 1) * self.nr_columns)]
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}
