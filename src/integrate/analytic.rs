//! Closed-form solution of dy/dx = ky.

/// Evaluate the exact solution y0·e^(k·(x−x0)) at a single x.
///
/// Total for finite inputs. Large k·(x−x0) overflows to infinity; that is
/// deliberate — the non-finite value propagates so the caller can see the
/// conditioning, rather than being clamped to something plausible-looking.
pub fn analytic_value(k: f64, x0: f64, y0: f64, x: f64) -> f64 {
    y0 * (k * (x - x0)).exp()
}

/// Sample the exact solution at `points` evenly spaced x values.
///
/// The samples span [x0, x_target] inclusive, so with `points >= 2` the first
/// x is exactly x0 and the last exactly x_target. `points == 1` yields the
/// single sample at x0 and `points == 0` yields nothing.
pub fn analytic_curve(k: f64, x0: f64, y0: f64, x_target: f64, points: usize) -> Vec<(f64, f64)> {
    match points {
        0 => Vec::new(),
        1 => vec![(x0, analytic_value(k, x0, y0, x0))],
        n => {
            let dx = (x_target - x0) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    // Pin the endpoint so accumulated rounding cannot leave
                    // the last sample off x_target.
                    let x = if i == n - 1 {
                        x_target
                    } else {
                        x0 + i as f64 * dx
                    };
                    (x, analytic_value(k, x0, y0, x))
                })
                .collect()
        }
    }
}
