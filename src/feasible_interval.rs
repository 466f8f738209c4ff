extern crate ndarray;

use ndarray::*;

use crate::params::*;

///The range `[lower, upper]` of values a coordinate or projection may take
///while the chain stays feasible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeasibleInterval {
    pub lower : f64,
    pub upper : f64
}

impl FeasibleInterval {
    pub fn new(lower : f64, upper : f64) -> FeasibleInterval {
        FeasibleInterval {
            lower,
            upper
        }
    }

    pub fn unconstrained() -> FeasibleInterval {
        FeasibleInterval::new(-UNCONSTRAINED_BOUND, UNCONSTRAINED_BOUND)
    }

    ///The degenerate interval `[value, value]`, i.e. no move.
    pub fn point(value : f64) -> FeasibleInterval {
        FeasibleInterval::new(value, value)
    }

    pub fn contains(&self, value : f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn scaled(&self, factor : f64) -> FeasibleInterval {
        FeasibleInterval::new(self.lower * factor, self.upper * factor)
    }

    ///Intersects with the ball `||x||^2 <= norm_bound` along a unit axis whose
    ///current value is `value`, given the current squared norm `norm_sq`.
    ///
    ///The new value `s` must satisfy `s^2 <= value^2 - (norm_sq - norm_bound)`. When the
    ///right hand side is negative (drift has carried the state outside the ball), no
    ///move is possible and the interval collapses to the current value.
    pub fn intersect_ball(&self, value : f64, norm_sq : f64, norm_bound : f64) -> FeasibleInterval {
        let discriminant = (value * value - (norm_sq - norm_bound)).sqrt();
        if (discriminant.is_nan()) {
            trace!("Negative ball discriminant at value {}, holding still", value);
            return FeasibleInterval::point(value);
        }
        FeasibleInterval::new(self.lower.max(-discriminant), self.upper.min(discriminant))
    }
}

///Computes the feasible range for a move along an axis.
///
///`value` is the current coordinate or projection `V`, `alphas[i]` the projection
///of constraint row `i` onto the axis, and `residual(i)` the current `A_i x - b_i`.
///Rows with `|alphas[i]| <= threshold` are nearly parallel to the axis and are skipped.
///If roundoff makes the current point look infeasible along the axis, the offending
///bound is moved to `V -/+ BOUND_TOLERANCE * scale`, so the result always contains `V`.
pub fn polytope_interval<F>(value : f64, alphas : ArrayView1<f64>, threshold : f64,
                            residual : F, scale : f64) -> FeasibleInterval
                            where F : Fn(usize) -> f64 {
    let mut lower_bound = -UNCONSTRAINED_BOUND;
    let mut upper_bound = UNCONSTRAINED_BOUND;
    for (irow, &alpha) in alphas.iter().enumerate() {
        if (alpha > threshold) {
            let val = -residual(irow) / alpha + value;
            if (val < upper_bound) {
                upper_bound = val;
            }
        } else if (alpha < -threshold) {
            let val = -residual(irow) / alpha + value;
            if (val > lower_bound) {
                lower_bound = val;
            }
        }
    }

    if (lower_bound > value) {
        trace!("Lower bound {} above current value {}, clamping", lower_bound, value);
        lower_bound = value - BOUND_TOLERANCE * scale;
    }
    if (upper_bound < value) {
        trace!("Upper bound {} below current value {}, clamping", upper_bound, value);
        upper_bound = value + BOUND_TOLERANCE * scale;
    }
    FeasibleInterval::new(lower_bound, upper_bound)
}
