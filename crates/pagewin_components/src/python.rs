//! Python bindings, enabled with the `python` feature.

// PyResult type annotations are required by PyO3 API
#![allow(clippy::useless_conversion)]

use crate::paginator::Paginator;
use pagewin_core::PaginationConfig;
use pagewin_core::serialization::to_json;
use pyo3::prelude::*;

/// Build a pagination window and return it as JSON:
/// `{"range": [1, "ellipsis", ...], "active": 3, "total": 20}`.
///
/// Window sizes above `MAX_WINDOW` raise `ValueError`.
#[pyfunction]
#[pyo3(signature = (total, active, siblings=1, boundaries=1))]
fn build_pagination(total: i64, active: i64, siblings: u32, boundaries: u32) -> PyResult<String> {
    let paginator = Paginator::try_new(PaginationConfig::new(siblings, boundaries))?;
    let window = paginator.window(total, active)?;
    Ok(to_json(&window)?)
}

pub fn register_components(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(build_pagination, m)?)?;
    Ok(())
}
