use pyo3::prelude::*;

pub mod matrix {
    pub mod matrix;
    pub mod matrix_frac;
    pub mod matrix_gen;
}
pub mod rings {
    pub mod fraction;
}

pub mod render;

/// A Python module implemented in Rust.
#[pymodule]
fn rref_exact(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<matrix::matrix_frac::MatrixFrac>()?;
    Ok(())
}
