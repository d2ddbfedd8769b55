// FFI Facade: exposes the structural matcher to Python as the `_core` module.
use crate::declaration::TypeNode;
use crate::type_system::{satisfies, Typecheck};
use crate::value::Value;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Checks a JSON-encoded value against a JSON-encoded type and returns the
/// result label (`"Match"` or `"Mismatch"`).
#[pyfunction]
fn check_json(value_json: &str, type_json: &str) -> PyResult<String> {
    let value: Value = serde_json::from_str(value_json)
        .map_err(|e| PyValueError::new_err(format!("Invalid value: {}", e)))?;
    let ty: TypeNode = serde_json::from_str(type_json)
        .map_err(|e| PyValueError::new_err(format!("Invalid type: {}", e)))?;
    Ok(satisfies(&value, &ty).to_string())
}

/// The persisted result labels, in declaration order.
#[pyfunction]
fn typecheck_labels() -> Vec<&'static str> {
    Typecheck::ALL.iter().map(|t| t.as_str()).collect()
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(check_json, m)?)?;
    m.add_function(wrap_pyfunction!(typecheck_labels, m)?)?;
    Ok(())
}
