//! PyO3 wrapper for RngManager

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::checkpoint::RngCheckpoint;
use crate::rng::{RngConfig, RngManager};

fn to_value_error(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for the Rust generator
///
/// # Example (from Python)
///
/// ```python
/// from replay_rng_core import Rng
///
/// rng = Rng(12345)
/// roll = rng.range_int(1, 6, True)
/// saved = rng.checkpoint_json()
///
/// replayed = Rng.from_checkpoint_json(saved)
/// assert replayed.count == rng.count
/// ```
#[pyclass(name = "Rng")]
pub struct PyRng {
    inner: RngManager,
}

#[pymethods]
impl PyRng {
    #[new]
    fn new(seed: i32) -> Self {
        PyRng {
            inner: RngManager::new(seed),
        }
    }

    /// Rebuild a generator from a checkpoint produced by `checkpoint_json`
    ///
    /// Raises ValueError if the JSON is malformed or the digests disagree.
    #[staticmethod]
    fn from_checkpoint_json(json: &str) -> PyResult<Self> {
        let checkpoint = RngCheckpoint::from_json(json).map_err(to_value_error)?;
        let inner = RngManager::from_checkpoint(&checkpoint, RngConfig::new(checkpoint.seed))
            .map_err(to_value_error)?;

        Ok(PyRng { inner })
    }

    #[getter]
    fn seed(&self) -> i32 {
        self.inner.seed()
    }

    #[getter]
    fn count(&self) -> u32 {
        self.inner.count()
    }

    /// Current 56-slot state as a list of ints
    fn state(&self) -> Vec<i32> {
        self.inner.state().slots().to_vec()
    }

    fn next(&mut self) -> i32 {
        self.inner.next()
    }

    fn peek(&self) -> i32 {
        self.inner.peek()
    }

    #[pyo3(signature = (min, max, max_inclusive = false))]
    fn range_int(&mut self, min: i32, max: i32, max_inclusive: bool) -> PyResult<i32> {
        self.inner
            .range_int(min, max, max_inclusive)
            .map_err(to_value_error)
    }

    #[pyo3(signature = (min, max, max_inclusive = false))]
    fn range_float(&mut self, min: f32, max: f32, max_inclusive: bool) -> PyResult<f32> {
        self.inner
            .range_float(min, max, max_inclusive)
            .map_err(to_value_error)
    }

    fn restore(&mut self, count: u32) {
        self.inner.restore(count);
    }

    fn fork(&mut self) -> Self {
        PyRng {
            inner: self.inner.fork(),
        }
    }

    fn checkpoint_json(&self) -> PyResult<String> {
        self.inner
            .checkpoint()
            .and_then(|checkpoint| checkpoint.to_json())
            .map_err(to_value_error)
    }
}
