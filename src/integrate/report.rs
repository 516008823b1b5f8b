//! One-call comparison bundle for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::integrate::analytic::{analytic_curve, analytic_value};
use crate::integrate::error::IntegrateResult;
use crate::integrate::euler::solve;
use crate::integrate::metrics::{error_metrics, ErrorMetrics};
use crate::integrate::types::{EulerOptions, EulerSolution, Parameters};

/// Number of samples taken for the reference curve.
pub const REFERENCE_SAMPLES: usize = 100;

/// Everything a display needs: the sweep, the reference curve, and how far
/// apart they ended up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// The Euler sweep (step table and approximation polyline).
    pub solution: EulerSolution,
    /// Exact-solution samples over [x0, x_target] for the reference curve.
    pub reference: Vec<(f64, f64)>,
    /// Euler's value at the final trajectory point.
    pub final_approx: f64,
    /// Exact value at the final trajectory x.
    ///
    /// Evaluated where the sweep actually ended, not at x_target — when
    /// truncation stops the sweep short, the two values are still compared
    /// at the same abscissa.
    pub final_exact: f64,
    /// Absolute and relative error between the two final values.
    pub metrics: ErrorMetrics,
}

impl Comparison {
    /// True if the sweep or the exact endpoint produced non-finite values.
    pub fn overflowed(&self) -> bool {
        self.solution.overflow || !self.final_exact.is_finite()
    }
}

/// Run the Euler sweep and assemble the full comparison against the exact
/// solution.
///
/// Fails with the same errors as [`solve`]; on success the bundle always
/// contains a [`REFERENCE_SAMPLES`]-point reference curve spanning
/// [x0, x_target].
///
/// # Example
///
/// ```
/// use eulerlab::integrate::{compare, EulerOptions, Parameters};
///
/// let report = compare(&Parameters::default(), &EulerOptions::default()).unwrap();
///
/// assert!((report.metrics.absolute - 0.124540).abs() < 1e-5);
/// assert!(report.metrics.relative_percent < 5.0);
/// ```
pub fn compare(params: &Parameters, options: &EulerOptions) -> IntegrateResult<Comparison> {
    let solution = solve(params, options)?;

    let (final_x, final_approx) = solution
        .trajectory
        .last()
        .unwrap_or((params.x0, params.y0));
    let final_exact = analytic_value(params.k, params.x0, params.y0, final_x);

    let reference = analytic_curve(
        params.k,
        params.x0,
        params.y0,
        params.x_target,
        REFERENCE_SAMPLES,
    );
    let metrics = error_metrics(final_approx, final_exact);

    Ok(Comparison {
        solution,
        reference,
        final_approx,
        final_exact,
        metrics,
    })
}
