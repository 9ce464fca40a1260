use crate::matrix::matrix_gen::MatrixGen;
use crate::render;
use crate::rings::fraction::Fraction;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyType;

/// Python-facing matrix of exact rationals. Entries travel as strings
/// (`"7"`, `"-3/4"`, ...) so no precision is lost at the boundary.
#[derive(Debug, Clone)]
#[pyclass(frozen)]
pub struct MatrixFrac {
    pub inner: MatrixGen<Fraction>,
}

#[pymethods]
impl MatrixFrac {
    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<String>>) -> PyResult<Self> {
        let mut rows = Vec::with_capacity(lines.len());
        for line in &lines {
            let row: Result<Vec<Fraction>, String> =
                line.iter().map(|s| Fraction::from_str(s)).collect();
            rows.push(row.map_err(PyValueError::new_err)?);
        }

        match MatrixGen::from_list(rows) {
            Ok(inner) => Ok(MatrixFrac { inner }),
            Err(error) => Err(PyValueError::new_err(error.to_string())),
        }
    }

    pub fn to_list(&self) -> Vec<Vec<String>> {
        self.inner
            .to_list()
            .iter()
            .map(|row| row.iter().map(|x| x.to_string()).collect())
            .collect()
    }

    /// Returns the reduced matrix and the row operations as
    /// human-readable notation, in the order they were applied.
    pub fn rref(&self) -> PyResult<(MatrixFrac, Vec<String>)> {
        let mut reduced = self.inner.clone();
        match reduced.rref() {
            Ok(ops) => Ok((
                MatrixFrac { inner: reduced },
                ops.iter().map(render::op_notation).collect(),
            )),
            Err(error) => Err(PyValueError::new_err(error.to_string())),
        }
    }

    pub fn is_rref(&self) -> bool {
        self.inner.is_rref()
    }

    pub fn pretty(&self) -> String {
        render::matrix_table(&self.inner)
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols
    }

    pub fn __str__(&self) -> String {
        self.pretty()
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn from_strs(lines: Vec<Vec<&str>>) -> MatrixFrac {
        let rows = lines
            .into_iter()
            .map(|line| {
                line.into_iter()
                    .map(|s| Fraction::from_str(s).unwrap())
                    .collect()
            })
            .collect();
        MatrixFrac {
            inner: MatrixGen::from_list(rows).unwrap(),
        }
    }

    #[test]
    fn test_rref_with_steps() {
        let m = from_strs(vec![vec!["2", "4", "6"], vec!["1", "3", "2"]]);
        let (reduced, steps) = m.rref().unwrap();

        assert_eq!(
            reduced.to_list(),
            vec![vec!["1", "0", "5"], vec!["0", "1", "-1"]]
        );
        assert_eq!(
            steps,
            vec!["R1 = R1/2", "R2 = R2 - 1R1", "R1 = R1 - 2R2"]
        );
        assert!(reduced.is_rref());
        assert!(!m.is_rref());
        // Source matrix untouched.
        assert_eq!(m.to_list()[0], vec!["2", "4", "6"]);
    }

    #[test]
    fn test_fraction_entries() {
        let m = from_strs(vec![vec!["1/2", "1"], vec!["1/3", "1"]]);
        let (reduced, _) = m.rref().unwrap();
        assert_eq!(reduced.to_list(), vec![vec!["1", "0"], vec!["0", "1"]]);
    }

    #[test]
    fn test_empty_is_error() {
        let m = MatrixFrac {
            inner: MatrixGen::from_list(vec![]).unwrap(),
        };
        assert!(m.rref().is_err());
    }

    #[test]
    fn test_pretty() {
        let m = from_strs(vec![vec!["10", "1/2"], vec!["3", "-1"]]);
        assert_eq!(m.pretty(), "10  1/2\n 3   -1");
    }
}
