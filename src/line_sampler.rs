use crate::feasible_interval::*;
use crate::normal_utils::*;

///Draws the new value of a coordinate or projection from the target density
///restricted to a feasible interval, given one uniform variate.
pub trait LineSampler {
    ///Scale of the target along any axis, used to size the roundoff clamp on intervals.
    fn scale(&self) -> f64;
    ///Whether the target lives in the ball of radius `||initial||`, so that every
    ///feasible interval must additionally be intersected with that ball.
    fn confined_to_ball(&self) -> bool;
    fn draw(&self, interval : &FeasibleInterval, unif : f64) -> f64;
}

///Line sampler for the white Gaussian `N(0, sigma^2 I)`: the conditional along
///any unit axis is `N(0, sigma^2)` truncated to the interval.
#[derive(Clone, Copy, Debug)]
pub struct TruncatedNormalLineSampler {
    sigma : f64
}

impl TruncatedNormalLineSampler {
    pub fn new(sigma : f64) -> TruncatedNormalLineSampler {
        TruncatedNormalLineSampler {
            sigma
        }
    }
}

impl LineSampler for TruncatedNormalLineSampler {
    fn scale(&self) -> f64 {
        self.sigma
    }
    fn confined_to_ball(&self) -> bool {
        false
    }
    fn draw(&self, interval : &FeasibleInterval, unif : f64) -> f64 {
        let standardized = interval.scaled(1.0 / self.sigma);
        let tnorm = truncated_standard_normal_quantile(standardized.lower, standardized.upper, unif);
        tnorm * self.sigma
    }
}

///Line sampler for the uniform distribution on the ball intersected with the
///polytope: the conditional along any chord is uniform.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformLineSampler;

impl LineSampler for UniformLineSampler {
    fn scale(&self) -> f64 {
        1.0
    }
    fn confined_to_ball(&self) -> bool {
        true
    }
    fn draw(&self, interval : &FeasibleInterval, unif : f64) -> f64 {
        interval.lower + unif * interval.width()
    }
}
