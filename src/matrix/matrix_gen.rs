use crate::matrix::matrix::{Element, ReduceError, RowOp};

/// Row-major matrix over an exact field element.
///
/// Represents an augmented system, but nothing here cares where the
/// augmentation boundary is: every column is reduced in sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGen<T> {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<T>,
}

impl<T: Element> MatrixGen<T> {
    /// Builds a matrix from rows. All rows must have the same length.
    pub fn from_list(lines: Vec<Vec<T>>) -> Result<Self, ReduceError> {
        let rows = lines.len();
        let cols = lines.first().map_or(0, |line| line.len());

        for (row, line) in lines.iter().enumerate() {
            if line.len() != cols {
                return Err(ReduceError::Ragged {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
        }

        Ok(MatrixGen {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    pub fn to_list(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col].clone()
    }

    /// Reduces the matrix in place to reduced row-echelon form and
    /// returns the elementary row operations in the order applied.
    ///
    /// The pivot walk starts at (0, 0). A zero pivot is repaired by
    /// swapping in the first row below with a non-zero entry in the
    /// pivot column; if no such row exists the column has no pivot and
    /// only the column index advances. A non-unit pivot is divided down
    /// to 1 before the entries below and above it are eliminated.
    pub fn rref(&mut self) -> Result<Vec<RowOp<T>>, ReduceError> {
        if self.rows == 0 {
            return Err(ReduceError::Empty);
        }

        let mut ops = Vec::new();
        let mut pivot_row = 0;
        let mut pivot_col = 0;

        while pivot_row < self.rows && pivot_col < self.cols {
            if self.at(pivot_row, pivot_col).is_zero() {
                let found = (pivot_row + 1..self.rows).find(|&r| !self.at(r, pivot_col).is_zero());

                match found {
                    Some(r) => {
                        self.swap_rows(pivot_row, r);
                        ops.push(RowOp::Swap { a: pivot_row, b: r });
                    }
                    None => {
                        // Column has no pivot, move right without
                        // consuming the row.
                        pivot_col += 1;
                        continue;
                    }
                }
            }

            let pivot = self.at(pivot_row, pivot_col);
            if !pivot.is_one() {
                self.divide_row(pivot_row, &pivot);
                ops.push(RowOp::Scale {
                    row: pivot_row,
                    divisor: pivot,
                });
            }

            for r in pivot_row + 1..self.rows {
                self.eliminate(r, pivot_row, pivot_col, &mut ops)?;
            }
            for r in (0..pivot_row).rev() {
                self.eliminate(r, pivot_row, pivot_col, &mut ops)?;
            }

            pivot_row += 1;
            pivot_col += 1;
        }

        Ok(ops)
    }

    pub fn is_rref(&self) -> bool {
        let mut last_pivot_col = None;

        for row in 0..self.rows {
            let pivot_col = (0..self.cols).find(|&col| !self.at(row, col).is_zero());

            match pivot_col {
                None => {
                    // Zero rows are only allowed at the bottom.
                    return (row + 1..self.rows)
                        .all(|r| (0..self.cols).all(|c| self.at(r, c).is_zero()));
                }
                Some(col) => {
                    if let Some(last) = last_pivot_col {
                        if col <= last {
                            return false;
                        }
                    }
                    if !self.at(row, col).is_one() {
                        return false;
                    }
                    if (0..self.rows).any(|r| r != row && !self.at(r, col).is_zero()) {
                        return false;
                    }
                    last_pivot_col = Some(col);
                }
            }
        }

        true
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        for k in 0..self.cols {
            self.cells.swap(a * self.cols + k, b * self.cols + k);
        }
    }

    fn divide_row(&mut self, row: usize, divisor: &T) {
        for k in 0..self.cols {
            let idx = row * self.cols + k;
            self.cells[idx] = self.cells[idx].clone() / divisor.clone();
        }
    }

    /// Subtracts `factor` times the pivot row from `row`, where
    /// `factor` is the entry of `row` in the pivot column. A no-op when
    /// that entry is already zero.
    fn eliminate(
        &mut self,
        row: usize,
        pivot_row: usize,
        pivot_col: usize,
        ops: &mut Vec<RowOp<T>>,
    ) -> Result<(), ReduceError> {
        if !self.at(pivot_row, pivot_col).is_one() {
            return Err(ReduceError::PivotNotOne {
                row: pivot_row,
                col: pivot_col,
            });
        }

        let factor = self.at(row, pivot_col);
        if factor.is_zero() {
            return Ok(());
        }

        for k in 0..self.cols {
            let value = self.at(row, k) - factor.clone() * self.at(pivot_row, k);
            self.cells[row * self.cols + k] = value;
        }

        ops.push(RowOp::Eliminate {
            row,
            pivot_row,
            factor,
        });
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
