use crate::matrix::matrix::{Element, RowOp};
use crate::matrix::matrix_gen::MatrixGen;
use itertools::Itertools;
use std::fmt::Display;

/// Classic row-operation notation, rows numbered from 1.
pub fn op_notation<T: Display>(op: &RowOp<T>) -> String {
    match op {
        RowOp::Swap { a, b } => format!("R{} <-> R{}", a + 1, b + 1),
        RowOp::Scale { row, divisor } => {
            format!("R{} = R{}/{}", row + 1, row + 1, divisor)
        }
        RowOp::Eliminate {
            row,
            pivot_row,
            factor,
        } => format!("R{} = R{} - {}R{}", row + 1, row + 1, factor, pivot_row + 1),
    }
}

/// One operation per line, in the order they were applied.
pub fn transcript<T: Display>(ops: &[RowOp<T>]) -> String {
    ops.iter().map(op_notation).join("\n")
}

/// Plain-text table with right-aligned columns.
pub fn matrix_table<T: Element>(m: &MatrixGen<T>) -> String {
    let cells: Vec<Vec<String>> = m
        .to_list()
        .iter()
        .map(|row| row.iter().map(|x| x.to_string()).collect())
        .collect();

    let widths: Vec<usize> = (0..m.cols)
        .map(|col| cells.iter().map(|row| row[col].len()).max().unwrap_or(0))
        .collect();

    cells
        .iter()
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:>1$}", cell, *width))
                .join("  ")
        })
        .join("\n")
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
