use log::debug;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use thiserror::Error;
use window_sum::{window_size_from_signed, ConfigError, InvalidWindowError, ScanRequest, WindowSumScanner};

/// Error wrapper for Python
#[derive(Error, Debug)]
enum PyWindowError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Window(#[from] InvalidWindowError),
}

impl From<ConfigError> for PyWindowError {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::Window(w) => PyWindowError::Window(w),
            other => PyWindowError::InvalidInput(other.to_string()),
        }
    }
}

impl From<PyWindowError> for PyErr {
    fn from(e: PyWindowError) -> PyErr {
        PyValueError::new_err(e.to_string())
    }
}

/// max_window_sum(sequence: list[float], window_size: int) -> float
#[pyfunction]
fn max_window_sum(sequence: Vec<f64>, window_size: i64) -> PyResult<f64> {
    let k = window_size_from_signed(window_size, sequence.len()).map_err(PyWindowError::from)?;
    let sum = WindowSumScanner::new(k).max_sum(&sequence).map_err(PyWindowError::from)?;
    Ok(sum)
}

/// scan_from_json(json_str: str) -> tuple[int, float]
/// Expects {"sequence": [...], "window_size": <int>}; returns (start, sum) of the best window.
#[pyfunction]
fn scan_from_json(json_str: &str) -> PyResult<(usize, f64)> {
    let req = ScanRequest::from_json_str(json_str).map_err(PyWindowError::from)?;
    let best = req.run().map_err(PyWindowError::from)?;
    debug!("scan_from_json: best window at {} of {}", best.start, req.sequence.len());
    Ok((best.start, best.sum))
}

#[pyclass(name = "WindowSumScanner")]
struct PyWindowSumScanner {
    inner: WindowSumScanner,
}

#[pymethods]
impl PyWindowSumScanner {
    /// WindowSumScanner(window_size: int)
    #[new]
    fn new(window_size: i64) -> PyResult<Self> {
        let inner = WindowSumScanner::try_from_signed(window_size).map_err(PyWindowError::from)?;
        Ok(PyWindowSumScanner { inner })
    }

    #[getter]
    fn window_size(&self) -> usize {
        self.inner.window_size()
    }

    /// scan(sequence: list[float]) -> tuple[int, float]
    fn scan(&self, sequence: Vec<f64>) -> PyResult<(usize, f64)> {
        let best = self.inner.scan(&sequence).map_err(PyWindowError::from)?;
        Ok((best.start, best.sum))
    }

    /// max_sum(sequence: list[float]) -> float
    fn max_sum(&self, sequence: Vec<f64>) -> PyResult<f64> {
        let sum = self.inner.max_sum(&sequence).map_err(PyWindowError::from)?;
        Ok(sum)
    }

    fn __repr__(&self) -> String {
        format!("WindowSumScanner(window_size={})", self.inner.window_size())
    }
}

/// Python module
#[pymodule]
fn window_sum_py(_py: Python, m: &PyModule) -> PyResult<()> {
    let _ = env_logger::try_init();
    m.add_function(wrap_pyfunction!(max_window_sum, m)?)?;
    m.add_function(wrap_pyfunction!(scan_from_json, m)?)?;
    m.add_class::<PyWindowSumScanner>()?;
    Ok(())
}
