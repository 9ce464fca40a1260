use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Div, Mul, Sub};

pub trait Element:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + std::fmt::Display
    + std::fmt::Debug
{
}

impl<T> Element for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + std::fmt::Display
        + std::fmt::Debug
{
}

/// One elementary row operation, recorded in the order it was applied.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOp<T> {
    /// Rows `a` and `b` exchanged places.
    Swap { a: usize, b: usize },
    /// Row `row` was divided by `divisor` to bring its pivot to 1.
    Scale { row: usize, divisor: T },
    /// `factor` times the pivot row was subtracted from row `row`.
    Eliminate {
        row: usize,
        pivot_row: usize,
        factor: T,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReduceError {
    /// Row `row` has `found` entries, the first row has `expected`.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The matrix has no rows.
    Empty,
    /// An elimination pass saw a pivot that is not exactly 1.
    /// Well-formed input can never trigger this.
    PivotNotOne { row: usize, col: usize },
}

impl fmt::Display for ReduceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReduceError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} entries, expected {}",
                row, found, expected
            ),
            ReduceError::Empty => write!(f, "Matrix has no rows"),
            ReduceError::PivotNotOne { row, col } => {
                write!(f, "Pivot at ({}, {}) is not 1", row, col)
            }
        }
    }
}

impl std::error::Error for ReduceError {}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
