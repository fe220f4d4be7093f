use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyFrozenSet};
use pyo3::wrap_pyfunction;

use crate::{apriori::Apriori, error::MiningError, types::Transaction};

macro_rules! pyfrozenset {
    ($py:expr,$x:expr) => {{
        let set: Py<PyFrozenSet> = PyFrozenSet::new($py, $x.items())?.into();
        set
    }};
}

impl From<MiningError> for PyErr {
    fn from(err: MiningError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Mine frequent itemsets.
///
/// Returns the frequent itemsets level by level (the last level is empty) and
/// a dict mapping every counted itemset to its support.
#[pyfunction]
#[pyo3(text_signature = "(transactions, min_support, /)")]
fn frequent_itemsets(
    py: Python,
    transactions: Vec<Vec<String>>,
    min_support: f64,
) -> PyResult<(Vec<Vec<Py<PyFrozenSet>>>, Py<PyDict>)> {
    let transactions: Vec<Transaction<String>> =
        transactions.into_iter().map(Transaction::new).collect();
    let (levels, support) = py
        .allow_threads(|| Apriori::new(min_support)?.mine(&transactions))?
        .into_parts();

    let py_levels = levels
        .iter()
        .map(|level| level.iter().map(|itemset| Ok(pyfrozenset![py, itemset])).collect())
        .collect::<PyResult<Vec<Vec<Py<PyFrozenSet>>>>>()?;

    let py_support = PyDict::new(py);
    for (itemset, fraction) in support.iter() {
        py_support.set_item(pyfrozenset![py, itemset], fraction)?;
    }

    Ok((py_levels, py_support.into()))
}

#[pymodule]
fn apriori(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(frequent_itemsets, m)?)?;
    Ok(())
}
