//! Forward-Euler integration of dy/dx = ky.
//!
//! This module provides the complete numerical pipeline for approximating
//! exponential growth/decay with Euler's method and reporting how the
//! approximation compares against the closed-form solution.
//!
//! # Operations
//!
//! - [`solve`] - Run the fixed-step Euler sweep, producing the per-step
//!   records and the (x, y) trajectory
//! - [`analytic_value`] - Evaluate the exact solution y0·e^(k·(x−x0))
//! - [`analytic_curve`] - Sample the exact solution for reference-curve
//!   rendering
//! - [`error_metrics`] - Absolute and relative error between an approximation
//!   and the exact value
//! - [`compare`] - One-call bundle of all of the above, shaped for a
//!   presentation layer
//!
//! # Usage
//!
//! Use [`compare`] when you want everything a display needs in one shot, or
//! [`solve`] directly when only the Euler sweep is of interest.
//!
//! ```
//! use eulerlab::integrate::{solve, EulerOptions, Parameters};
//!
//! let params = Parameters::new(1.0, 0.0, 1.0, 1.0, 0.1);
//! let solution = solve(&params, &EulerOptions::default()).unwrap();
//!
//! // 10 steps of y_{n+1} = y_n + h·k·y_n land on (1 + 0.1)^10
//! assert_eq!(solution.trajectory.len(), 11);
//! assert!((solution.trajectory.y[10] - 1.1f64.powi(10)).abs() < 1e-12);
//! ```

pub mod analytic;
pub mod error;
pub mod euler;
pub mod metrics;
pub mod report;
pub mod types;

pub use analytic::{analytic_curve, analytic_value};
pub use error::{IntegrateError, IntegrateResult};
pub use euler::solve;
pub use metrics::{error_metrics, ErrorMetrics};
pub use report::{compare, Comparison, REFERENCE_SAMPLES};
pub use types::{EulerOptions, EulerSolution, Parameters, StepRecord, Trajectory};
