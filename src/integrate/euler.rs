//! Fixed-step forward-Euler sweep for dy/dx = ky.

use crate::integrate::error::{IntegrateError, IntegrateResult};
use crate::integrate::types::{EulerOptions, EulerSolution, Parameters, StepRecord, Trajectory};

/// Run the forward-Euler sweep.
///
/// Advances from (x0, y0) in fixed increments of h using the local slope
/// k·y: x_{i+1} = x_i + h, y_{i+1} = y_i + h·k·y_i. Produces one
/// [`StepRecord`] per iteration and the full (x, y) [`Trajectory`].
///
/// The number of steps is the *truncated* quotient (x_target − x0) / h.
/// When the interval is not an exact multiple of h the sweep therefore stops
/// short of x_target, by up to h; it never overshoots.
///
/// # Errors
///
/// - [`IntegrateError::InvalidStepSize`] if h <= 0
/// - [`IntegrateError::InvalidInterval`] if x_target <= x0
/// - [`IntegrateError::StepCountExceeded`] if the quotient exceeds
///   `options.max_steps`
///
/// Rejection is atomic: on any of these, no partial trajectory is returned.
/// Non-finite y values are not errors; they propagate through the solution
/// with its `overflow` flag set.
///
/// # Example
///
/// ```
/// use eulerlab::integrate::{solve, EulerOptions, Parameters};
///
/// let solution = solve(&Parameters::default(), &EulerOptions::default()).unwrap();
///
/// assert_eq!(solution.steps.len(), 10);
/// assert!((solution.trajectory.y[10] - 2.593742).abs() < 1e-6);
/// ```
pub fn solve(params: &Parameters, options: &EulerOptions) -> IntegrateResult<EulerSolution> {
    let Parameters {
        k,
        x0,
        y0,
        x_target,
        h,
    } = *params;

    if h <= 0.0 {
        return Err(IntegrateError::InvalidStepSize {
            h,
            context: "euler::solve".to_string(),
        });
    }

    if x_target <= x0 {
        return Err(IntegrateError::InvalidInterval {
            x0,
            x_target,
            context: "euler::solve".to_string(),
        });
    }

    let quotient = (x_target - x0) / h;
    if quotient > options.max_steps as f64 {
        return Err(IntegrateError::StepCountExceeded {
            steps: quotient as usize,
            max_steps: options.max_steps,
            context: "euler::solve".to_string(),
        });
    }

    // Truncating cast: may stop short of x_target, never past it.
    let num_steps = quotient as usize;

    let mut steps = Vec::with_capacity(num_steps);
    let mut trajectory = Trajectory {
        x: Vec::with_capacity(num_steps + 1),
        y: Vec::with_capacity(num_steps + 1),
    };
    trajectory.x.push(x0);
    trajectory.y.push(y0);

    let mut overflow = !y0.is_finite();
    let mut x = x0;
    let mut y = y0;

    for index in 0..num_steps {
        let slope = k * y;
        let x_next = x + h;
        let y_next = y + h * slope;

        steps.push(StepRecord {
            index,
            x,
            y,
            slope,
            y_next,
        });
        trajectory.x.push(x_next);
        trajectory.y.push(y_next);

        if !y_next.is_finite() {
            overflow = true;
        }

        x = x_next;
        y = y_next;
    }

    Ok(EulerSolution {
        steps,
        trajectory,
        overflow,
    })
}
