use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, InvalidWindowError};
use crate::scanner::{window_size_from_signed, WindowMax, WindowSumScanner};

/// A sequence plus the window size to scan it with.
///
/// JSON form: `{"sequence": [2, 1, 5], "window_size": 2}`. The size is signed
/// so that negative values are reported as an invalid window, not a parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRequest {
    pub sequence: Vec<f64>,
    pub window_size: i64,
}

impl Default for ScanRequest {
    fn default() -> Self {
        ScanRequest {
            sequence: vec![2.0, 1.0, 5.0, 1.0, 3.0, 2.0, 8.0, 8.0, 4.0, 5.0, 6.0, 7.0],
            window_size: 3,
        }
    }
}

impl ScanRequest {
    pub fn new(sequence: Vec<f64>, window_size: i64) -> Self {
        ScanRequest { sequence, window_size }
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let req = Self::from_json_str(&raw)?;
        info!(
            "loaded scan request from {} ({} values, window {})",
            path.display(),
            req.sequence.len(),
            req.window_size
        );
        Ok(req)
    }

    /// Validated scanner for this request's sequence.
    pub fn scanner(&self) -> Result<WindowSumScanner, InvalidWindowError> {
        let k = window_size_from_signed(self.window_size, self.sequence.len())?;
        Ok(WindowSumScanner::new(k))
    }

    pub fn run(&self) -> Result<WindowMax<f64>, InvalidWindowError> {
        self.scanner()?.scan(&self.sequence)
    }
}
