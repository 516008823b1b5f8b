//! Types for the Euler integration core.

use serde::{Deserialize, Serialize};

/// Inputs for a forward-Euler sweep of dy/dx = ky.
///
/// The defaults reproduce the canonical classroom case: dy/dx = y with
/// y(0) = 1, stepped to x = 1 with h = 0.1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Proportionality constant k in dy/dx = ky
    pub k: f64,
    /// Initial x value
    pub x0: f64,
    /// Initial y value
    pub y0: f64,
    /// x value to step towards
    pub x_target: f64,
    /// Step size (must be positive)
    pub h: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            k: 1.0,
            x0: 0.0,
            y0: 1.0,
            x_target: 1.0,
            h: 0.1,
        }
    }
}

impl Parameters {
    /// Create parameters from the five raw inputs.
    pub fn new(k: f64, x0: f64, y0: f64, x_target: f64, h: f64) -> Self {
        Self {
            k,
            x0,
            y0,
            x_target,
            h,
        }
    }

    /// Set the step size.
    pub fn step_size(mut self, h: f64) -> Self {
        self.h = h;
        self
    }

    /// Set the integration interval.
    pub fn interval(mut self, x0: f64, x_target: f64) -> Self {
        self.x0 = x0;
        self.x_target = x_target;
        self
    }
}

/// Options for the Euler sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EulerOptions {
    /// Maximum number of steps (default: 10000)
    pub max_steps: usize,
}

impl Default for EulerOptions {
    fn default() -> Self {
        Self { max_steps: 10_000 }
    }
}

impl EulerOptions {
    /// Set the maximum number of steps.
    pub fn max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }
}

/// One iteration of the Euler sweep.
///
/// Records the state the step started from, the slope k·y used there, and the
/// value it produced. `y_next` equals the trajectory's y at `index + 1`;
/// carrying it here lets a table render each row without lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// 0-based step index
    pub index: usize,
    /// x at the start of the step
    pub x: f64,
    /// y at the start of the step
    pub y: f64,
    /// Slope k·y at the start of the step
    pub slope: f64,
    /// y + h·slope
    pub y_next: f64,
}

/// The approximation polyline: x[i] and y[i] are the i-th Euler point.
///
/// Always starts at (x0, y0) and has one more point than the sweep has steps.
/// Consecutive x values differ by exactly the step size h.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Trajectory {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Trajectory {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the trajectory holds no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over the (x, y) points.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// The final (x, y) point, if any.
    pub fn last(&self) -> Option<(f64, f64)> {
        match (self.x.last(), self.y.last()) {
            (Some(&x), Some(&y)) => Some((x, y)),
            _ => None,
        }
    }

    /// The dog-leg polyline visualizing each Euler step.
    ///
    /// For every step this emits the corner (x_{i+1}, y_i) between the points
    /// (x_i, y_i) and (x_{i+1}, y_{i+1}), so a renderer can draw the
    /// horizontal-then-vertical staircase under the approximation curve.
    /// Returns 2·steps + 1 points. Whether to draw it at all (typically only
    /// for short sweeps) is the renderer's call.
    pub fn staircase(&self) -> Vec<(f64, f64)> {
        if self.x.is_empty() {
            return Vec::new();
        }
        let mut path = Vec::with_capacity(2 * self.x.len() - 1);
        path.push((self.x[0], self.y[0]));
        for i in 1..self.x.len() {
            path.push((self.x[i], self.y[i - 1]));
            path.push((self.x[i], self.y[i]));
        }
        path
    }
}

/// Output of the Euler sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EulerSolution {
    /// One record per iteration, ordered by index.
    pub steps: Vec<StepRecord>,
    /// The (x, y) polyline, steps + 1 points starting at (x0, y0).
    pub trajectory: Trajectory,
    /// True if any y value (including y0) is non-finite.
    ///
    /// Overflow is observable, not fatal: the non-finite values are kept in
    /// the solution so the caller can flag poor conditioning.
    pub overflow: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_defaults() {
        let params = Parameters::default();
        assert_eq!(params.k, 1.0);
        assert_eq!(params.x0, 0.0);
        assert_eq!(params.y0, 1.0);
        assert_eq!(params.x_target, 1.0);
        assert_eq!(params.h, 0.1);

        let params = Parameters::default().interval(0.0, 2.0).step_size(0.5);
        assert_eq!(params.x_target, 2.0);
        assert_eq!(params.h, 0.5);
    }

    #[test]
    fn test_euler_options() {
        let opts = EulerOptions::default();
        assert_eq!(opts.max_steps, 10_000);

        let opts = EulerOptions::default().max_steps(50);
        assert_eq!(opts.max_steps, 50);
    }

    #[test]
    fn test_trajectory_accessors() {
        let traj = Trajectory {
            x: vec![0.0, 0.5, 1.0],
            y: vec![1.0, 1.5, 2.25],
        };
        assert_eq!(traj.len(), 3);
        assert!(!traj.is_empty());
        assert_eq!(traj.last(), Some((1.0, 2.25)));

        let points: Vec<_> = traj.points().collect();
        assert_eq!(points, vec![(0.0, 1.0), (0.5, 1.5), (1.0, 2.25)]);

        assert!(Trajectory::default().is_empty());
        assert_eq!(Trajectory::default().last(), None);
    }

    #[test]
    fn test_staircase_corners() {
        let traj = Trajectory {
            x: vec![0.0, 0.5, 1.0],
            y: vec![1.0, 1.5, 2.25],
        };
        let path = traj.staircase();
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], (0.0, 1.0));
        // horizontal move keeps y, vertical move keeps x
        assert_eq!(path[1], (0.5, 1.0));
        assert_eq!(path[2], (0.5, 1.5));
        assert_eq!(path[3], (1.0, 1.5));
        assert_eq!(path[4], (1.0, 2.25));

        assert!(Trajectory::default().staircase().is_empty());
    }
}
