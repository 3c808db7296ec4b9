use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::{error::SupportError, query, types::SupportTable};

impl From<SupportError> for PyErr {
    fn from(err: SupportError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[pymodule]
fn subset_support(_: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(frequent_subsets, m)?)?;
    m.add_function(wrap_pyfunction!(frequent_subsets_int, m)?)?;
    Ok(())
}

/// Support of every non-empty subset of the string items in `records`, or
/// of `target` alone.
#[pyfunction(target = "None")]
#[pyo3(text_signature = "(records, target=None)")]
fn frequent_subsets(records: Vec<Vec<String>>, target: Option<Vec<String>>) -> PyResult<SupportTable> {
    Ok(query::frequent_subsets(&records, target.as_deref())?)
}

/// Same as `frequent_subsets`, for integer items.
#[pyfunction(target = "None")]
#[pyo3(text_signature = "(records, target=None)")]
fn frequent_subsets_int(records: Vec<Vec<i64>>, target: Option<Vec<i64>>) -> PyResult<SupportTable> {
    Ok(query::frequent_subsets(&records, target.as_deref())?)
}
