//! Error types for the Euler integration core.

use std::fmt;

/// Result type for integration operations.
pub type IntegrateResult<T> = Result<T, IntegrateError>;

/// Errors that can occur while setting up an Euler sweep.
///
/// All of these are detected before any stepping happens; a sweep is rejected
/// atomically and never returns partial results. Non-finite values produced
/// *during* a sweep are not errors — they propagate through the solution and
/// are surfaced via [`EulerSolution::overflow`](super::EulerSolution).
#[derive(Debug, Clone, PartialEq)]
pub enum IntegrateError {
    /// Step size h must be strictly positive.
    InvalidStepSize { h: f64, context: String },

    /// Invalid interval provided (x_target <= x0).
    InvalidInterval {
        x0: f64,
        x_target: f64,
        context: String,
    },

    /// The requested sweep would exceed the configured step cap.
    StepCountExceeded {
        steps: usize,
        max_steps: usize,
        context: String,
    },
}

impl fmt::Display for IntegrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStepSize { h, context } => {
                write!(
                    f,
                    "{}: invalid step size h = {:.6}, must be positive",
                    context, h
                )
            }
            Self::InvalidInterval {
                x0,
                x_target,
                context,
            } => {
                write!(
                    f,
                    "{}: invalid interval [{:.6}, {:.6}], target must exceed start",
                    context, x0, x_target
                )
            }
            Self::StepCountExceeded {
                steps,
                max_steps,
                context,
            } => {
                write!(
                    f,
                    "{}: {} steps requested, exceeds maximum {}",
                    context, steps, max_steps
                )
            }
        }
    }
}

impl std::error::Error for IntegrateError {}
