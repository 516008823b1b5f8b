//! Forward-Euler approximation of exponential growth.
//!
//! This crate is the numerical core behind an interactive Euler's-method
//! explorer for the first-order linear equation dy/dx = ky. It produces the
//! step-by-step Euler sweep, the closed-form reference curve
//! y = y0·e^(k·(x−x0)), and the accuracy metrics comparing the two. A
//! presentation layer (table, chart, summary panel) consumes these outputs;
//! rendering is not part of this crate.
//!
//! # Example
//!
//! ```
//! use eulerlab::integrate::{compare, EulerOptions, Parameters};
//!
//! // dy/dx = y, y(0) = 1, stepped to x = 1 with h = 0.1
//! let report = compare(&Parameters::default(), &EulerOptions::default()).unwrap();
//!
//! assert_eq!(report.solution.steps.len(), 10);
//! assert_eq!(report.reference.len(), eulerlab::REFERENCE_SAMPLES);
//! assert!((report.final_approx - 2.593742).abs() < 1e-6);
//! assert!((report.final_exact - std::f64::consts::E).abs() < 1e-12);
//! ```

pub mod integrate;

pub use integrate::{
    analytic_curve, analytic_value, compare, error_metrics, solve, Comparison, ErrorMetrics,
    EulerOptions, EulerSolution, IntegrateError, IntegrateResult, Parameters, StepRecord,
    Trajectory, REFERENCE_SAMPLES,
};
