//! Accuracy metrics comparing an approximation against the exact value.

use serde::{Deserialize, Serialize};

/// How far an approximation landed from the exact value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorMetrics {
    /// |exact − approx|
    pub absolute: f64,
    /// absolute / |exact| · 100, or 0 when exact = 0
    pub relative_percent: f64,
}

/// Compute absolute and relative error.
///
/// When the exact value is zero the relative error is defined as 0 rather
/// than dividing by zero; the absolute error still tells the whole story in
/// that case.
pub fn error_metrics(approx: f64, exact: f64) -> ErrorMetrics {
    let absolute = (exact - approx).abs();
    let relative_percent = if exact != 0.0 {
        absolute / exact.abs() * 100.0
    } else {
        0.0
    };
    ErrorMetrics {
        absolute,
        relative_percent,
    }
}
